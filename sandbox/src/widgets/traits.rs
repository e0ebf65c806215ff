//! The widget trait the host page dispatches through.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::keys::KeyCombo;
use crate::view::Line;

use super::events::EventResult;

/// Generate a unique auto-incremented widget ID
pub(crate) fn generate_auto_id(kind: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("__{}_{}", kind, id)
}

/// Type-erased widget interface.
///
/// The host keeps a list of `Box<dyn Widget>`, routes key events to the
/// focused one, and redraws when any reports itself dirty.
pub trait Widget: Send + Sync {
    /// Unique widget id.
    fn id(&self) -> String;

    /// Check if the widget changed since the last render.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag.
    fn clear_dirty(&self);

    /// Whether the widget can take focus.
    fn is_focusable(&self) -> bool {
        true
    }

    /// Handle a key press while focused.
    fn dispatch_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }

    /// Called when the widget gains focus.
    fn dispatch_focus(&self) {}

    /// Called when the widget loses focus.
    fn dispatch_blur(&self) {}

    /// Describe the widget as text lines.
    fn view(&self, focused: bool) -> Vec<Line>;
}
