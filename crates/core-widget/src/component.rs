use core_events::Event;
use core_render::Element;

/// Capability surface a host framework drives: render, events, focus, hover.
pub trait Component {
    /// Produce this frame's display fragment. `focused` comes from the host's
    /// focus system.
    fn render(&mut self, focused: bool) -> Element;

    /// Handle one event; `false` lets it propagate to the host.
    fn on_event(&mut self, event: &Event) -> bool;

    fn focusable(&self) -> bool {
        true
    }

    fn set_hovered(&mut self, hovered: bool);
}
