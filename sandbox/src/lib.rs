//! Sandbox - a small terminal component kit.
//!
//! Headless widgets (button, text input, counter, slider, search box and an
//! autocomplete with keyboard navigation), a debounced value settler, and a
//! registry of documented widget configurations.
//!
//! Widgets are shared handles: clone one and every clone sees the same state.
//! They describe themselves as [`view::Line`]s; drawing is up to the host.

pub mod debounce;
pub mod error;
pub mod frame;
pub mod keys;
pub mod search;
pub mod state;
pub mod stories;
pub mod value;
pub mod view;
pub mod widgets;

pub use debounce::Debouncer;
pub use error::SearchError;
pub use frame::ComponentFrame;
pub use search::{SearchItem, search_string};
pub use state::State;
pub use value::ValueSource;

/// Prelude for common imports
pub mod prelude {
    pub use crate::debounce::{DEFAULT_DELAY, Debouncer, Settled};
    pub use crate::error::SearchError;
    pub use crate::frame::ComponentFrame;
    pub use crate::keys::{Key, KeyCombo, Modifiers, NavKey};
    pub use crate::search::{SearchItem, search_string};
    pub use crate::state::State;
    pub use crate::stories::Story;
    pub use crate::value::ValueSource;
    pub use crate::view::{Line, Role, Tone};
    pub use crate::widgets::autocomplete::{
        AutocompleteEvent, AutocompleteState, Highlight, HoverMode,
    };
    pub use crate::widgets::{
        Autocomplete, Button, Callback, Counter, EventResult, Input, SearchAutocomplete,
        SearchInput, SearchMode, Size, Slider, Variant, Widget,
    };
}
