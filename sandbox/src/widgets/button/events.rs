//! Event handling for the Button widget.

use crate::keys::{Key, KeyCombo};
use crate::view::Line;
use crate::widgets::events::EventResult;
use crate::widgets::traits::Widget;

use super::Button;

impl Widget for Button {
    fn id(&self) -> String {
        self.id_string()
    }

    fn is_dirty(&self) -> bool {
        Button::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Button::clear_dirty(self)
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        // Only handle keys without modifiers
        if key.modifiers.ctrl || key.modifiers.alt || key.modifiers.shift {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Enter | Key::Char(' ') => {
                self.press();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        vec![super::render::render_button(&self.inner.get(), focused)]
    }
}
