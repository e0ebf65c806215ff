//! Text lines produced by widgets.
//!
//! Widgets do not draw. They describe themselves as a list of [`Line`]s with a
//! tone and an optional role, and whoever owns the terminal decides how a tone
//! looks.

use unicode_width::UnicodeWidthStr;

/// Visual weight of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Accent,
    Highlighted,
    Disabled,
    Danger,
    Heading,
}

/// What a line represents, for hosts and tests that query by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Combobox,
    Textbox,
    Listbox,
    Option { selected: bool },
    Button { disabled: bool },
    Status,
    Slider,
    Heading,
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
    pub role: Option<Role>,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Normal,
            role: None,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// Lines with the given role, in order.
pub fn with_role(lines: &[Line], matches: impl Fn(Role) -> bool) -> Vec<&Line> {
    lines
        .iter()
        .filter(|line| line.role.is_some_and(&matches))
        .collect()
}
