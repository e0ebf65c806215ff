//! Titled box around a widget's lines.

use unicode_width::UnicodeWidthStr;

use crate::view::{Line, Role, Tone};

/// Wraps lines in a border, with an optional heading above.
#[derive(Debug, Clone, Default)]
pub struct ComponentFrame {
    title: Option<String>,
}

impl ComponentFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Frame `body`. Each body line keeps its tone and role; padding is
    /// measured in terminal cells.
    pub fn wrap(&self, body: Vec<Line>) -> Vec<Line> {
        let inner = body.iter().map(Line::width).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(body.len() + 3);

        if let Some(title) = &self.title {
            lines.push(Line::new(title.clone()).tone(Tone::Heading).role(Role::Heading));
        }
        lines.push(Line::new(format!("┌{}┐", "─".repeat(inner + 2))).tone(Tone::Muted));
        for line in body {
            let pad = inner - line.text.width();
            lines.push(Line {
                text: format!("│ {}{} │", line.text, " ".repeat(pad)),
                ..line
            });
        }
        lines.push(Line::new(format!("└{}┘", "─".repeat(inner + 2))).tone(Tone::Muted));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_wide_characters_by_cell_width() {
        let frame = ComponentFrame::titled("COUNTER");
        let lines = frame.wrap(vec![Line::new("日本"), Line::new("abcd")]);

        assert_eq!(lines[0].text, "COUNTER");
        assert_eq!(lines[0].role, Some(Role::Heading));
        let widths: Vec<usize> = lines[1..].iter().map(Line::width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(lines[2].text, "│ 日本 │");
    }

    #[test]
    fn untitled_frame_has_no_heading() {
        let lines = ComponentFrame::new().wrap(vec![Line::new("x")]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "┌───┐");
    }
}
