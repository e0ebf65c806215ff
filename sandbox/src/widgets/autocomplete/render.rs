//! Rendering for the Autocomplete widget.

use crate::view::{Line, Role, Tone};
use crate::widgets::input::render::render_field;

use super::Autocomplete;

/// Marker in front of the highlighted row.
const HIGHLIGHT_MARKER: &str = "› ";
const ROW_INDENT: &str = "  ";

pub(crate) fn render_autocomplete(ac: &Autocomplete, focused: bool) -> Vec<Line> {
    let snapshot = ac.snapshot();
    let mut lines = Vec::new();

    if let Some(label) = ac.label_text() {
        lines.push(Line::new(label).tone(Tone::Muted));
    }

    let mut field = render_field(
        snapshot.input_value(),
        ac.placeholder_text().unwrap_or_default(),
        focused,
    );
    field.role = Some(Role::Combobox);
    lines.push(field);

    let options = snapshot.options();
    if options.is_empty() {
        return lines;
    }

    lines.push(Line::new("─".repeat(24)).tone(Tone::Muted).role(Role::Listbox));
    for option in options {
        let (marker, tone) = if option.highlighted {
            (HIGHLIGHT_MARKER, Tone::Highlighted)
        } else {
            (ROW_INDENT, Tone::Normal)
        };
        lines.push(
            Line::new(format!("{}{}", marker, option.label))
                .tone(tone)
                .role(Role::Option {
                    selected: option.highlighted,
                }),
        );
    }
    lines
}
