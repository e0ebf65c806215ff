//! Event handling for the Autocomplete widget.

use crate::keys::{Key, KeyCombo, NavKey};
use crate::view::Line;
use crate::widgets::events::EventResult;
use crate::widgets::traits::Widget;

use super::Autocomplete;

impl Autocomplete {
    /// Translate a terminal key into text edits or dropdown navigation.
    pub(crate) fn handle_key(&self, key: &KeyCombo, on_text: impl FnOnce(String)) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if key.modifiers.is_command() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Char(c) => {
                let mut text = self.value();
                text.push(c);
                self.change_text(text.clone());
                on_text(text);
                EventResult::Consumed
            }
            Key::Backspace => {
                let mut text = self.value();
                if text.pop().is_some() {
                    self.change_text(text.clone());
                    on_text(text);
                }
                EventResult::Consumed
            }
            Key::Up | Key::Down => {
                self.press(NavKey::from(key.key));
                EventResult::Consumed
            }
            Key::Left | Key::Right | Key::Enter | Key::Escape => {
                self.press(NavKey::from(key.key)).into()
            }
            _ => EventResult::Ignored,
        }
    }
}

impl Widget for Autocomplete {
    fn id(&self) -> String {
        self.id_string()
    }

    fn is_dirty(&self) -> bool {
        Autocomplete::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Autocomplete::clear_dirty(self)
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        self.handle_key(key, |_| {})
    }

    fn dispatch_focus(&self) {
        self.focus();
    }

    fn dispatch_blur(&self) {
        // Close dropdown when focus leaves
        self.blur();
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        super::render::render_autocomplete(self, focused)
    }
}
