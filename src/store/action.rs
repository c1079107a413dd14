//! Base trait for dispatched actions.

/// Marker trait for action objects.
///
/// Actions are tagged descriptions of an intended state change:
/// form submissions, button clicks, filter selections. They carry
/// their full payload and are consumed exactly once by a reducer.
///
/// Debug is required so the store handle can trace dispatches.
pub trait Action: std::fmt::Debug + Send + 'static {}
