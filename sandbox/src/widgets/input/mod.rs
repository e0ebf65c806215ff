//! Input widget - the text field.

mod events;
pub(crate) mod render;
mod state;

pub use state::Input;
