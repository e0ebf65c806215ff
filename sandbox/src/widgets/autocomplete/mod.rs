//! Autocomplete widget - text input with a navigable dropdown of candidates.

mod events;
mod machine;
mod render;
mod search;
mod state;

pub use machine::{
    AutocompleteEvent, AutocompleteOption, AutocompleteState, Highlight, HoverMode, Transition,
};
pub use search::SearchAutocomplete;
pub use state::Autocomplete;
