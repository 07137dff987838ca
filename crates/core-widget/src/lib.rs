//! Terminal text input control.
//!
//! `Input` binds an `InputOption` (shared content and placeholder buffers,
//! password mask, multiline flag, insert-mode predicate, length limit,
//! transform and callbacks) to per-control cursor and hover state, and
//! exposes it through the `Component` capability a host drives:
//! `render(focused)`, `on_event`, `focusable`, `set_hovered`.
//!
//! Rendering is the pure `render::render_input`; editing goes through
//! `core_actions`. After the host rasterizes a frame, `control_region` and
//! `cursor_region` report the two hit-test rectangles.

pub mod component;
pub mod input;
pub mod option;
pub mod render;
pub mod text_ref;

pub use component::Component;
pub use input::Input;
pub use option::{InputOption, Transform, TransformState, default_transform};
pub use render::{HitRegions, RenderState, mask_text, render_input};
pub use text_ref::TextRef;
