//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use sandbox::view::{Line, Tone};

/// A wrapper around the terminal that ensures proper cleanup on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for drawing.
    pub fn new() -> io::Result<Self> {
        // Set up panic hook to restore terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        Ok(Self { stdout })
    }

    /// Replace the screen contents with `lines`.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.stdout, MoveTo(0, row), SetForegroundColor(tone_color(line.tone)))?;
            if line.tone == Tone::Heading {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::Reset,
        Tone::Muted | Tone::Disabled => Color::DarkGrey,
        Tone::Accent => Color::Cyan,
        Tone::Highlighted => Color::Yellow,
        Tone::Danger => Color::Red,
        Tone::Heading => Color::Magenta,
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}
