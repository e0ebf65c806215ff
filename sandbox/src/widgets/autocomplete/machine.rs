//! Autocomplete interaction state machine.
//!
//! Pure state plus a transition function. The [`Autocomplete`](super::Autocomplete)
//! widget wraps this in shared state and turns selections into callbacks.

use serde::{Deserialize, Serialize};

use crate::keys::NavKey;

/// Position of the highlight cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    At(usize),
}

impl Highlight {
    pub fn index(self) -> Option<usize> {
        match self {
            Highlight::None => None,
            Highlight::At(index) => Some(index),
        }
    }

    /// Signed form, with `-1` meaning no highlight.
    pub fn as_signed(self) -> isize {
        match self {
            Highlight::None => -1,
            Highlight::At(index) => isize::try_from(index).unwrap_or(isize::MAX),
        }
    }
}

/// What hovering a row does to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    /// Hover moves the highlight and mirrors the row into the text.
    #[default]
    Interactive,
    /// Hover moves the highlight only.
    HighlightOnly,
}

/// Inputs of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEvent {
    FocusGained,
    FocusLost,
    /// The text field reported its full text after a keystroke.
    TextChanged(String),
    Key(NavKey),
    /// Mouse button pressed on the row at this index.
    MouseDown(usize),
    /// Pointer moved over the row at this index.
    Hover(usize),
    /// The candidate list was replaced (static update or search results).
    CandidatesReplaced(Vec<String>),
}

/// Outcome of one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Whether any field changed.
    pub changed: bool,
    /// Candidate picked by this transition, if any.
    pub selected: Option<String>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            selected: None,
        }
    }

    fn selected(item: String) -> Self {
        Self {
            changed: true,
            selected: Some(item),
        }
    }
}

/// A row of the rendered dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOption {
    pub index: usize,
    pub label: String,
    pub highlighted: bool,
}

/// State of one autocomplete control.
///
/// Invariants kept by [`apply`](Self::apply):
/// - a highlight always points inside `candidates`;
/// - while something is highlighted through keyboard navigation, the text
///   equals the highlighted candidate;
/// - the dropdown is only visible while open and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteState {
    input_value: String,
    is_open: bool,
    highlighted: Highlight,
    pre_highlight_value: String,
    candidates: Vec<String>,
    hover_mode: HoverMode,
}

impl AutocompleteState {
    pub fn new(candidates: Vec<String>, hover_mode: HoverMode) -> Self {
        Self {
            candidates,
            hover_mode,
            ..Default::default()
        }
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> Highlight {
        self.highlighted
    }

    /// Text restored when keyboard navigation is cancelled.
    pub fn pre_highlight_value(&self) -> &str {
        &self.pre_highlight_value
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn hover_mode(&self) -> HoverMode {
        self.hover_mode
    }

    /// Whether the candidate list should be on screen.
    pub fn is_dropdown_visible(&self) -> bool {
        self.is_open && !self.candidates.is_empty()
    }

    /// Rows of the dropdown; empty while it is not visible.
    pub fn options(&self) -> Vec<AutocompleteOption> {
        if !self.is_dropdown_visible() {
            return Vec::new();
        }
        let highlighted = self.highlighted.index();
        self.candidates
            .iter()
            .enumerate()
            .map(|(index, label)| AutocompleteOption {
                index,
                label: label.clone(),
                highlighted: highlighted == Some(index),
            })
            .collect()
    }

    /// Apply one event.
    pub fn apply(&mut self, event: AutocompleteEvent) -> Transition {
        match event {
            AutocompleteEvent::FocusGained => self.set_open(true),
            AutocompleteEvent::FocusLost => self.set_open(false),
            AutocompleteEvent::TextChanged(text) => {
                self.input_value = text.clone();
                self.pre_highlight_value = text;
                self.highlighted = Highlight::None;
                self.is_open = true;
                Transition::changed()
            }
            AutocompleteEvent::Key(key) => self.on_key(key),
            AutocompleteEvent::MouseDown(index) => self.select(index),
            AutocompleteEvent::Hover(index) => self.hover(index),
            AutocompleteEvent::CandidatesReplaced(candidates) => {
                self.replace_candidates(candidates)
            }
        }
    }

    fn on_key(&mut self, key: NavKey) -> Transition {
        match key {
            NavKey::ArrowDown => self.move_down(),
            NavKey::ArrowUp => self.move_up(),
            NavKey::ArrowLeft | NavKey::ArrowRight => self.cancel_navigation(),
            NavKey::Enter => match self.highlighted {
                Highlight::At(index) => self.select(index),
                Highlight::None => Transition::unchanged(),
            },
            NavKey::Escape => self.set_open(false),
            NavKey::Other => Transition::unchanged(),
        }
    }

    fn move_down(&mut self) -> Transition {
        let len = self.candidates.len();
        if len == 0 {
            return Transition::unchanged();
        }
        match self.highlighted {
            Highlight::None => self.highlight_and_mirror(0),
            Highlight::At(index) if index + 1 < len => self.highlight_and_mirror(index + 1),
            Highlight::At(_) => {
                // Wrapping past the end behaves like cancelling navigation.
                self.highlighted = Highlight::None;
                self.input_value = self.pre_highlight_value.clone();
                Transition::changed()
            }
        }
    }

    fn move_up(&mut self) -> Transition {
        let len = self.candidates.len();
        if len == 0 {
            return Transition::unchanged();
        }
        match self.highlighted {
            Highlight::None => self.highlight_and_mirror(len - 1),
            Highlight::At(0) => {
                // Text stays at the last highlighted candidate.
                self.highlighted = Highlight::None;
                Transition::changed()
            }
            Highlight::At(index) => self.highlight_and_mirror(index - 1),
        }
    }

    fn cancel_navigation(&mut self) -> Transition {
        match self.highlighted {
            Highlight::At(_) => {
                self.input_value = self.pre_highlight_value.clone();
                self.highlighted = Highlight::None;
                Transition::changed()
            }
            Highlight::None => Transition::unchanged(),
        }
    }

    fn select(&mut self, index: usize) -> Transition {
        let Some(item) = self.candidates.get(index).cloned() else {
            return Transition::unchanged();
        };
        self.input_value = item.clone();
        self.pre_highlight_value = item.clone();
        self.highlighted = Highlight::None;
        self.is_open = false;
        Transition::selected(item)
    }

    fn hover(&mut self, index: usize) -> Transition {
        if index >= self.candidates.len() || self.highlighted == Highlight::At(index) {
            return Transition::unchanged();
        }
        match self.hover_mode {
            HoverMode::Interactive => self.highlight_and_mirror(index),
            HoverMode::HighlightOnly => {
                self.highlighted = Highlight::At(index);
                Transition::changed()
            }
        }
    }

    fn replace_candidates(&mut self, candidates: Vec<String>) -> Transition {
        if candidates == self.candidates {
            return Transition::unchanged();
        }
        // A highlight survives only if the same text sits at the same index.
        if let Highlight::At(index) = self.highlighted
            && candidates.get(index) != self.candidates.get(index)
        {
            self.highlighted = Highlight::None;
        }
        self.candidates = candidates;
        Transition::changed()
    }

    fn set_open(&mut self, open: bool) -> Transition {
        if self.is_open == open {
            return Transition::unchanged();
        }
        self.is_open = open;
        Transition::changed()
    }

    fn highlight_and_mirror(&mut self, index: usize) -> Transition {
        self.highlighted = Highlight::At(index);
        self.input_value = self.candidates[index].clone();
        Transition::changed()
    }
}
