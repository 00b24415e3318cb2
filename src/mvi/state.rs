//! Base trait for state slices.

/// Marker trait for one slice of the state tree.
///
/// Slices should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
