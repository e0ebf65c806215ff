//! Autocomplete widget handle.

use log::debug;

use crate::keys::NavKey;
use crate::state::State;
use crate::widgets::events::{Callback, emit};
use crate::widgets::traits::generate_auto_id;

use super::machine::{
    AutocompleteEvent, AutocompleteOption, AutocompleteState, Highlight, HoverMode, Transition,
};

/// A text input with a dropdown of candidates.
///
/// The widget owns the text, the open/closed state and the highlight cursor.
/// Candidates come from the caller ([`set_candidates`](Self::set_candidates))
/// or from a search (see [`SearchAutocomplete`](super::SearchAutocomplete)).
/// Each pick, by mouse or by Enter, fires `on_select` exactly once.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use sandbox::keys::NavKey;
/// use sandbox::widgets::Autocomplete;
///
/// let picked = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&picked);
/// let ac = Autocomplete::new(["apple", "banana"])
///     .on_select(move |item| sink.lock().unwrap().push(item));
///
/// ac.focus();
/// ac.press(NavKey::ArrowDown);
/// ac.press(NavKey::Enter);
///
/// assert_eq!(ac.value(), "apple");
/// assert!(!ac.is_open());
/// assert_eq!(*picked.lock().unwrap(), ["apple"]);
/// ```
#[derive(Debug, Clone)]
pub struct Autocomplete {
    id: String,
    pub(crate) state: State<AutocompleteState>,
    label: Option<String>,
    placeholder: Option<String>,
    on_select: Option<Callback<String>>,
    on_change: Option<Callback<String>>,
}

impl Autocomplete {
    /// Create an autocomplete over a static candidate list.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_hover_mode(candidates, HoverMode::default())
    }

    /// Create an autocomplete with an explicit hover behaviour.
    pub fn with_hover_mode<I, S>(candidates: I, hover_mode: HoverMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = candidates.into_iter().map(Into::into).collect();
        Self {
            id: generate_auto_id("autocomplete"),
            state: State::new(AutocompleteState::new(candidates, hover_mode)),
            label: None,
            placeholder: None,
            on_select: None,
            on_change: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the handler fired with the picked candidate.
    pub fn on_select(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Callback::new(f));
        self
    }

    /// Set the handler fired with the full text after each keystroke.
    pub fn on_change(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Callback::new(f));
        self
    }

    /// Get the ID as a string
    pub fn id_string(&self) -> String {
        self.id.clone()
    }

    pub(crate) fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current text of the field.
    pub fn value(&self) -> String {
        self.state.with(|s| s.input_value().to_string())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn highlighted(&self) -> Highlight {
        self.state.with(|s| s.highlighted())
    }

    pub fn candidates(&self) -> Vec<String> {
        self.state.with(|s| s.candidates().to_vec())
    }

    /// Rows of the dropdown; empty while it is hidden.
    pub fn options(&self) -> Vec<AutocompleteOption> {
        self.state.with(|s| s.options())
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.state.with(|s| s.is_dropdown_visible())
    }

    /// Snapshot of the whole state.
    pub fn snapshot(&self) -> AutocompleteState {
        self.state.get()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Feed one event through the state machine.
    ///
    /// Returns whether anything changed. A selection fires `on_select` after
    /// the state lock is released.
    pub fn apply(&self, event: AutocompleteEvent) -> bool {
        let text = match &event {
            AutocompleteEvent::TextChanged(text) => Some(text.clone()),
            _ => None,
        };
        let mut transition = Transition::default();
        self.state.try_update(|s| {
            transition = s.apply(event);
            transition.changed
        });

        if let Some(text) = text {
            emit(&self.on_change, text);
        }
        if let Some(item) = transition.selected {
            debug!("Autocomplete {} selected {:?}", self.id, item);
            emit(&self.on_select, item);
        }
        transition.changed
    }

    pub fn focus(&self) -> bool {
        self.apply(AutocompleteEvent::FocusGained)
    }

    pub fn blur(&self) -> bool {
        self.apply(AutocompleteEvent::FocusLost)
    }

    /// The text field reported its full text.
    pub fn change_text(&self, text: impl Into<String>) -> bool {
        self.apply(AutocompleteEvent::TextChanged(text.into()))
    }

    pub fn press(&self, key: NavKey) -> bool {
        self.apply(AutocompleteEvent::Key(key))
    }

    pub fn mouse_down(&self, index: usize) -> bool {
        self.apply(AutocompleteEvent::MouseDown(index))
    }

    pub fn hover(&self, index: usize) -> bool {
        self.apply(AutocompleteEvent::Hover(index))
    }

    /// Replace the candidate list.
    pub fn set_candidates<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = candidates.into_iter().map(Into::into).collect();
        self.apply(AutocompleteEvent::CandidatesReplaced(candidates))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the autocomplete state has changed.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.state.clear_dirty();
    }
}
