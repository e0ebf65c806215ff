//! Counter widget: a status line and increment/decrement/reset controls.

use log::debug;

use crate::keys::{Key, KeyCombo};
use crate::state::State;
use crate::view::{Line, Role, Tone};
use crate::widgets::button::render::render_segment;
use crate::widgets::events::EventResult;
use crate::widgets::traits::{Widget, generate_auto_id};

#[derive(Debug, Clone)]
struct CounterInner {
    count: i64,
    initial: i64,
    upper: Option<i64>,
    lower: Option<i64>,
}

/// An integer counter with optional bounds.
///
/// Increment is disabled once the count reached the upper limit, decrement
/// once it reached the lower limit, and reset while the count still equals
/// the initial value.
#[derive(Debug, Clone)]
pub struct Counter {
    id: String,
    inner: State<CounterInner>,
}

impl Counter {
    pub fn new(initial: i64) -> Self {
        Self {
            id: generate_auto_id("counter"),
            inner: State::new(CounterInner {
                count: initial,
                initial,
                upper: None,
                lower: None,
            }),
        }
    }

    pub fn upper_limit(self, limit: i64) -> Self {
        self.inner.update(|s| s.upper = Some(limit));
        self
    }

    pub fn lower_limit(self, limit: i64) -> Self {
        self.inner.update(|s| s.lower = Some(limit));
        self
    }

    pub fn count(&self) -> i64 {
        self.inner.with(|s| s.count)
    }

    pub fn initial(&self) -> i64 {
        self.inner.with(|s| s.initial)
    }

    pub fn can_increment(&self) -> bool {
        self.inner.with(|s| s.upper.is_none_or(|upper| s.count < upper))
    }

    pub fn can_decrement(&self) -> bool {
        self.inner.with(|s| s.lower.is_none_or(|lower| s.count > lower))
    }

    pub fn can_reset(&self) -> bool {
        self.inner.with(|s| s.count != s.initial)
    }

    /// Add one. Returns false when the upper limit blocks it.
    pub fn increment(&self) -> bool {
        self.step(1)
    }

    /// Subtract one. Returns false when the lower limit blocks it.
    pub fn decrement(&self) -> bool {
        self.step(-1)
    }

    /// Return to the initial value.
    pub fn reset(&self) -> bool {
        self.inner.try_update(|s| {
            let changed = s.count != s.initial;
            s.count = s.initial;
            changed
        })
    }

    fn step(&self, delta: i64) -> bool {
        let moved = self.inner.try_update(|s| {
            let next = s.count.saturating_add(delta);
            let blocked = match delta.signum() {
                1 => s.upper.is_some_and(|upper| s.count >= upper),
                -1 => s.lower.is_some_and(|lower| s.count <= lower),
                _ => true,
            };
            if blocked {
                return false;
            }
            s.count = next;
            true
        });
        if !moved {
            debug!("Counter {} step {} blocked by limit", self.id, delta);
        }
        moved
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.inner.clear_dirty();
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Widget for Counter {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn is_dirty(&self) -> bool {
        Counter::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Counter::clear_dirty(self)
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.is_command() {
            return EventResult::Ignored;
        }
        match key.key {
            Key::Char('+') | Key::Up => {
                self.increment();
                EventResult::Consumed
            }
            Key::Char('-') | Key::Down => {
                self.decrement();
                EventResult::Consumed
            }
            Key::Char('r') => {
                self.reset();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        let (plus, _) = render_segment("+", !self.can_increment(), false);
        let (minus, _) = render_segment("-", !self.can_decrement(), false);
        let (reset, _) = render_segment("Reset", !self.can_reset(), false);

        let status_tone = if focused { Tone::Highlighted } else { Tone::Normal };
        vec![
            Line::new(format!("counter: {}", self.count()))
                .tone(status_tone)
                .role(Role::Status),
            Line::new(format!("{} {}  {}", plus, minus, reset)).tone(Tone::Muted),
        ]
    }
}
