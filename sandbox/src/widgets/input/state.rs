use crate::keys::KeyCombo;
use crate::state::State;
use crate::value::ValueSource;
use crate::widgets::events::{Callback, emit};
use crate::widgets::traits::generate_auto_id;

/// Internal state for an Input widget
#[derive(Debug, Clone, Default)]
pub(crate) struct InputInner {
    pub(crate) value: ValueSource<String>,
    pub(crate) placeholder: String,
    pub(crate) label: String,
    pub(crate) focused: bool,
}

/// A single-line text field.
///
/// Every edit produces one `on_change` notification carrying the field's
/// full text. Whether the edit also changes the displayed text depends on the
/// [`ValueSource`] picked at construction: an owned input updates itself, a
/// mirrored input waits for its owner to call [`Input::sync`].
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use sandbox::widgets::Input;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let input = Input::new().on_change(move |text| sink.lock().unwrap().push(text));
///
/// input.type_char('h');
/// input.type_char('i');
/// assert_eq!(input.value(), "hi");
/// assert_eq!(*seen.lock().unwrap(), ["h", "hi"]);
/// ```
#[derive(Debug, Clone)]
pub struct Input {
    id: String,
    pub(crate) inner: State<InputInner>,
    on_change: Option<Callback<String>>,
    on_focus: Option<Callback<()>>,
    on_blur: Option<Callback<()>>,
    on_key: Option<Callback<KeyCombo>>,
}

impl Input {
    /// Create a new empty input that owns its value
    pub fn new() -> Self {
        Self::from_source(ValueSource::Owned(String::new()))
    }

    /// Create an input that owns its value, starting from `value`
    pub fn with_value(value: impl Into<String>) -> Self {
        Self::from_source(ValueSource::Owned(value.into()))
    }

    /// Create an input that displays a value owned by the caller
    pub fn mirrored(value: impl Into<String>) -> Self {
        Self::from_source(ValueSource::Mirrored(value.into()))
    }

    fn from_source(value: ValueSource<String>) -> Self {
        Self {
            id: generate_auto_id("input"),
            inner: State::new(InputInner {
                value,
                ..Default::default()
            }),
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_key: None,
        }
    }

    /// Use a custom id (e.g. to pair with a label)
    pub fn named(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.inner.update(|s| s.placeholder = placeholder);
        self
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.inner.update(|s| s.label = label);
        self
    }

    pub fn on_change(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Callback::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl Fn(()) + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Callback::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl Fn(()) + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Callback::new(f));
        self
    }

    pub fn on_key(mut self, f: impl Fn(KeyCombo) + Send + Sync + 'static) -> Self {
        self.on_key = Some(Callback::new(f));
        self
    }

    /// Get the ID as a string
    pub fn id_string(&self) -> String {
        self.id.clone()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner.with(|s| s.value.current().clone())
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.inner.with(|s| s.value.current().is_empty())
    }

    pub fn is_mirrored(&self) -> bool {
        self.inner.with(|s| s.value.is_mirrored())
    }

    pub fn is_focused(&self) -> bool {
        self.inner.with(|s| s.focused)
    }

    // -------------------------------------------------------------------------
    // Edits (called on user input)
    // -------------------------------------------------------------------------

    /// Replace the whole text as a user edit.
    pub fn change(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.try_update(|s| s.value.propose(text.clone()));
        emit(&self.on_change, text);
    }

    /// Append a character at the end of the text.
    pub fn type_char(&self, c: char) {
        let mut text = self.value();
        text.push(c);
        self.change(text);
    }

    /// Delete the last character. Does nothing on an empty field.
    pub fn backspace(&self) {
        let mut text = self.value();
        if text.pop().is_some() {
            self.change(text);
        }
    }

    /// Push the owner's value into a mirrored input.
    pub fn sync(&self, value: impl Into<String>) {
        let value = value.into();
        self.inner.try_update(|s| s.value.sync(value));
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focus(&self) {
        if self.inner.try_update(|s| !std::mem::replace(&mut s.focused, true)) {
            emit(&self.on_focus, ());
        }
    }

    pub fn blur(&self) {
        if self.inner.try_update(|s| std::mem::replace(&mut s.focused, false)) {
            emit(&self.on_blur, ());
        }
    }

    pub(crate) fn notify_key(&self, key: KeyCombo) {
        emit(&self.on_key, key);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input state has changed
    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.inner.clear_dirty();
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
