//! Event results and outward callbacks.

use std::fmt;
use std::sync::Arc;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// A shareable notification handler.
pub struct Callback<A>(Arc<dyn Fn(A) + Send + Sync>);

impl<A> Callback<A> {
    pub fn new(f: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, arg: A) {
        (self.0)(arg)
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Invoke an optional callback.
pub(crate) fn emit<A>(callback: &Option<Callback<A>>, arg: A) {
    if let Some(callback) = callback {
        callback.call(arg);
    }
}
