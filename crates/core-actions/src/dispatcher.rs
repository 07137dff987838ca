//! Event dispatcher: routes one input event to an edit operation.
//!
//! Routing order matters: Return is tested before the printable check so a
//! newline never arrives as a character. Delete and horizontal arrows are
//! not routed; hosts that want them call the session directly.

use crate::edit::EditSession;
use core_events::Event;

/// Result of dispatching a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// The control consumed the event; it must not bubble further.
    pub handled: bool,
    /// Content was mutated and a re-render is needed.
    pub dirty: bool,
}

impl DispatchResult {
    pub fn ignored() -> Self {
        Self {
            handled: false,
            dirty: false,
        }
    }

    fn from_op(handled: bool, dirty: bool) -> Self {
        Self { handled, dirty }
    }
}

/// Which handler an event routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Return,
    Character,
    Backspace,
    ArrowUp,
    ArrowDown,
    Unrouted,
}

pub fn route(event: &Event) -> Route {
    if event.is_return() {
        Route::Return
    } else if event.is_character() {
        Route::Character
    } else if event.is_backspace() {
        Route::Backspace
    } else if event.is_arrow_up() {
        Route::ArrowUp
    } else if event.is_arrow_down() {
        Route::ArrowDown
    } else {
        Route::Unrouted
    }
}

/// Apply `event` to `session`. The session has already clamped the cursor.
pub fn dispatch(event: &Event, session: &mut EditSession<'_>) -> DispatchResult {
    let before = session.mutations();
    let route = route(event);
    let handled = match route {
        Route::Return => session.handle_return(),
        Route::Character => match event.printable() {
            Some(seq) => session.insert_character(&seq),
            None => false,
        },
        Route::Backspace => session.delete_backward(),
        Route::ArrowUp => session.handle_arrow_up(),
        Route::ArrowDown => session.handle_arrow_down(),
        Route::Unrouted => false,
    };
    let dirty = session.mutations() != before;
    tracing::trace!(target: "actions.dispatch", route=?route, handled, dirty, cursor = session.cursor(), "dispatch");
    DispatchResult::from_op(handled, dirty)
}
