//! Button widget - the pressable control.

mod events;
pub(crate) mod render;
mod state;

pub use state::{Button, Size, Variant};
