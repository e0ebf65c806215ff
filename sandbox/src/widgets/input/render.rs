use crate::view::{Line, Role, Tone};

use super::state::InputInner;

/// Render a text field line: the text (or placeholder) followed by a cursor
/// block when focused.
pub(crate) fn render_field(value: &str, placeholder: &str, focused: bool) -> Line {
    let cursor = if focused { "▏" } else { "" };
    if value.is_empty() {
        Line::new(format!("> {}{}", cursor, placeholder))
            .tone(Tone::Muted)
            .role(Role::Textbox)
    } else {
        let tone = if focused { Tone::Accent } else { Tone::Normal };
        Line::new(format!("> {}{}", value, cursor))
            .tone(tone)
            .role(Role::Textbox)
    }
}

pub(crate) fn render_input(state: &InputInner, focused: bool) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2);
    if !state.label.is_empty() {
        lines.push(Line::new(state.label.clone()).tone(Tone::Muted));
    }
    lines.push(render_field(
        state.value.current(),
        &state.placeholder,
        focused,
    ));
    lines
}
