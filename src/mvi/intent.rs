//! Base trait for dispatched events.

use std::fmt::Debug;

/// Events that can be dispatched to the store.
///
/// Intents represent settled requests (a payload was received, a resource
/// was deleted, a request failed). They are processed by reducers to
/// produce new states.
pub trait Intent: Clone + Debug + Send + 'static {
    /// Stable action-type name, used for logging.
    fn name(&self) -> &'static str;
}
