//! Edit engine and event dispatcher for the input control.
//!
//! `edit` holds the text mutations over a borrowed buffer and cursor;
//! `dispatcher` maps one `core_events::Event` to at most one of them.

pub mod dispatcher;
pub mod edit;

pub use dispatcher::{DispatchResult, Route, dispatch, route};
pub use edit::{EditObserver, EditPolicy, EditSession, LengthUnit, MaxLength, NoopObserver};
