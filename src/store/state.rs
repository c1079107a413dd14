//! Base trait for store-owned state.

/// Marker trait for state values owned by a [`super::Store`].
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data the presentation layer needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
