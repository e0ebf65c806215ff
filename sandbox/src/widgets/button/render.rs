//! Rendering for the Button widget.

use crate::view::{Line, Role, Tone};

use super::state::{ButtonInner, Size};

/// Text of a button face, e.g. `[ Search ]`.
pub(crate) fn button_face(label: &str, size: Size) -> String {
    match size {
        Size::Sm => format!("[{}]", label),
        Size::Md => format!("[ {} ]", label),
        Size::Lg => format!("[  {}  ]", label),
    }
}

/// Render an inline button segment that is not backed by a `Button`.
pub(crate) fn render_segment(label: &str, disabled: bool, focused: bool) -> (String, Tone) {
    let tone = if disabled {
        Tone::Disabled
    } else if focused {
        Tone::Highlighted
    } else {
        Tone::Accent
    };
    (button_face(label, Size::Md), tone)
}

pub(crate) fn render_button(state: &ButtonInner, focused: bool) -> Line {
    let label = if state.loading {
        "...Loading"
    } else {
        state.label.as_str()
    };
    let disabled = state.disabled || state.loading;
    let tone = if disabled {
        Tone::Disabled
    } else if focused {
        Tone::Highlighted
    } else {
        match state.variant {
            super::Variant::Primary => Tone::Accent,
            super::Variant::Secondary => Tone::Normal,
            super::Variant::Danger => Tone::Danger,
        }
    };

    Line::new(button_face(label, state.size))
        .tone(tone)
        .role(Role::Button { disabled })
}
