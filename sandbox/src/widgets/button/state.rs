//! Button widget state.

use log::debug;

use crate::state::State;
use crate::widgets::events::{Callback, emit};
use crate::widgets::traits::generate_auto_id;

/// Visual variant of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Internal state for a Button widget
#[derive(Debug, Clone)]
pub(crate) struct ButtonInner {
    pub(crate) label: String,
    pub(crate) variant: Variant,
    pub(crate) size: Size,
    pub(crate) disabled: bool,
    pub(crate) loading: bool,
}

/// A button widget.
///
/// Pressing the button (click, Enter or Space) fires `on_click` exactly once
/// per activation. A disabled or loading button never fires; a loading button
/// shows `...Loading` instead of its label.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use sandbox::widgets::Button;
///
/// let clicks = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&clicks);
/// let button = Button::new("Click MEEE").on_click(move |()| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// assert!(button.press());
/// button.set_disabled(true);
/// assert!(!button.press());
/// assert_eq!(clicks.load(Ordering::SeqCst), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    id: String,
    pub(crate) inner: State<ButtonInner>,
    on_click: Option<Callback<()>>,
}

impl Button {
    /// Create a new button with the given label (auto-generated ID)
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(generate_auto_id("button"), label)
    }

    /// Create a new button with a custom ID and label
    pub fn with_id(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: State::new(ButtonInner {
                label: label.into(),
                variant: Variant::default(),
                size: Size::default(),
                disabled: false,
                loading: false,
            }),
            on_click: None,
        }
    }

    pub fn variant(self, variant: Variant) -> Self {
        self.inner.update(|s| s.variant = variant);
        self
    }

    pub fn size(self, size: Size) -> Self {
        self.inner.update(|s| s.size = size);
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn loading(self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Set the click handler.
    pub fn on_click(mut self, f: impl Fn(()) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Get the ID as a string
    pub fn id_string(&self) -> String {
        self.id.clone()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the button label
    pub fn label(&self) -> String {
        self.inner.with(|s| s.label.clone())
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.with(|s| s.disabled)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.with(|s| s.loading)
    }

    /// Whether a press would fire `on_click` right now.
    pub fn is_pressable(&self) -> bool {
        self.inner.with(|s| !s.disabled && !s.loading)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the button label
    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.inner.update(|s| s.label = label);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.inner.try_update(|s| {
            let changed = s.disabled != disabled;
            s.disabled = disabled;
            changed
        });
    }

    pub fn set_loading(&self, loading: bool) {
        self.inner.try_update(|s| {
            let changed = s.loading != loading;
            s.loading = loading;
            changed
        });
    }

    /// Activate the button. Returns whether `on_click` fired.
    pub fn press(&self) -> bool {
        if !self.is_pressable() {
            debug!("Button {} press ignored (disabled or loading)", self.id);
            return false;
        }
        emit(&self.on_click, ());
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the button state has changed
    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.inner.clear_dirty();
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new("")
    }
}
