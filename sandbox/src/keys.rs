//! Key representation shared by all widgets.

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Delete
    Delete,
    /// Tab
    Tab,
    /// Shift+Tab
    BackTab,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Anything else the terminal can report
    Other,
}

/// Modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// True when ctrl or alt is held (shift alone still types text).
    pub fn is_command(&self) -> bool {
        self.ctrl || self.alt
    }
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

/// The closed set of keys the autocomplete dropdown reacts to.
///
/// Everything that is not dropdown navigation collapses into `Other`, which
/// the transition table treats as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Other,
}

impl From<Key> for NavKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Down => NavKey::ArrowDown,
            Key::Up => NavKey::ArrowUp,
            Key::Left => NavKey::ArrowLeft,
            Key::Right => NavKey::ArrowRight,
            Key::Enter => NavKey::Enter,
            Key::Escape => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyCombo {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self::new(event.code.into(), event.modifiers.into())
    }
}
