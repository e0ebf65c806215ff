//! Built-in widgets.
//!
//! Every widget is a cheap-to-clone handle around shared state, so the host
//! page and any callback can hold the same instance. Widgets never draw; they
//! implement [`Widget`] and describe themselves as [`Line`](crate::view::Line)s.
//!
//! Outward notifications (`on_click`, `on_change`, `on_select`, ...) are
//! [`Callback`]s. They always run after the widget released its own state,
//! so a callback may freely read the widget back.

pub mod autocomplete;
pub mod button;
pub mod counter;
pub mod events;
pub mod input;
pub mod search_input;
pub mod slider;
pub mod traits;

pub use autocomplete::{Autocomplete, SearchAutocomplete};
pub use button::{Button, Size, Variant};
pub use counter::Counter;
pub use events::{Callback, EventResult};
pub use input::Input;
pub use search_input::{SearchInput, SearchMode};
pub use slider::Slider;
pub use traits::Widget;
