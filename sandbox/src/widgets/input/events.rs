//! Event handling for the Input widget.

use crate::keys::{Key, KeyCombo};
use crate::view::Line;
use crate::widgets::events::EventResult;
use crate::widgets::traits::Widget;

use super::Input;

impl Widget for Input {
    fn id(&self) -> String {
        self.id_string()
    }

    fn is_dirty(&self) -> bool {
        Input::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Input::clear_dirty(self)
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        self.notify_key(*key);

        if key.modifiers.is_command() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Char(c) => {
                self.type_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                self.backspace();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn dispatch_focus(&self) {
        self.focus();
    }

    fn dispatch_blur(&self) {
        self.blur();
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        self.inner.with(|s| super::render::render_input(s, focused))
    }
}
