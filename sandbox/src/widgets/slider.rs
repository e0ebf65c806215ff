//! Range slider widget.

use crate::keys::{Key, KeyCombo};
use crate::state::State;
use crate::value::ValueSource;
use crate::view::{Line, Role, Tone};
use crate::widgets::events::{Callback, EventResult, emit};
use crate::widgets::traits::{Widget, generate_auto_id};

/// Cells used by the rendered track.
const TRACK_WIDTH: usize = 20;

#[derive(Debug, Clone)]
struct SliderInner {
    value: ValueSource<i64>,
    min: i64,
    max: i64,
    step: i64,
}

impl SliderInner {
    fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// A value picked from `[min, max]`.
///
/// Defaults to `0..=100` with step 1. Every proposed value is clamped into
/// range before `on_change` sees it. Left/Right move by `step`, Home/End jump
/// to the bounds.
#[derive(Debug, Clone)]
pub struct Slider {
    id: String,
    inner: State<SliderInner>,
    on_change: Option<Callback<i64>>,
}

impl Slider {
    /// A slider that owns its value.
    pub fn new(value: i64) -> Self {
        Self::build(ValueSource::Owned(value))
    }

    /// A slider that shows `value` and waits for [`sync`](Self::sync).
    pub fn mirrored(value: i64) -> Self {
        Self::build(ValueSource::Mirrored(value))
    }

    fn build(value: ValueSource<i64>) -> Self {
        let slider = Self {
            id: generate_auto_id("slider"),
            inner: State::new(SliderInner {
                value,
                min: 0,
                max: 100,
                step: 1,
            }),
            on_change: None,
        };
        slider.normalize();
        slider
    }

    /// Set the bounds. Swapped bounds are put back in order.
    pub fn range(self, min: i64, max: i64) -> Self {
        self.inner.update(|s| {
            s.min = min.min(max);
            s.max = max.max(min);
        });
        self.normalize();
        self
    }

    /// Set the keyboard step; values below 1 become 1.
    pub fn step(self, step: i64) -> Self {
        self.inner.update(|s| s.step = step.max(1));
        self
    }

    pub fn on_change(mut self, f: impl Fn(i64) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Callback::new(f));
        self
    }

    pub fn value(&self) -> i64 {
        self.inner.with(|s| *s.value.current())
    }

    pub fn min(&self) -> i64 {
        self.inner.with(|s| s.min)
    }

    pub fn max(&self) -> i64 {
        self.inner.with(|s| s.max)
    }

    pub fn step_size(&self) -> i64 {
        self.inner.with(|s| s.step)
    }

    pub fn is_mirrored(&self) -> bool {
        self.inner.with(|s| s.value.is_mirrored())
    }

    /// Position of the value in the range, from 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        self.inner.with(|s| {
            if s.max == s.min {
                0.0
            } else {
                // Widened so a full `i64` range cannot overflow.
                let offset = i128::from(*s.value.current()) - i128::from(s.min);
                let span = i128::from(s.max) - i128::from(s.min);
                offset as f64 / span as f64
            }
        })
    }

    /// Propose a value as a user edit.
    ///
    /// The value is clamped, then reported to `on_change`. Returns the
    /// clamped value.
    pub fn set_value(&self, value: i64) -> i64 {
        let mut clamped = value;
        self.inner.try_update(|s| {
            clamped = s.clamp(value);
            s.value.propose(clamped)
        });
        emit(&self.on_change, clamped);
        clamped
    }

    /// Push the owner's value into a mirrored slider (clamped).
    pub fn sync(&self, value: i64) {
        self.inner.try_update(|s| {
            let clamped = s.clamp(value);
            s.value.current() != &clamped && s.value.sync(clamped)
        });
    }

    fn nudge(&self, steps: i64) -> i64 {
        let (current, step) = self.inner.with(|s| (*s.value.current(), s.step));
        self.set_value(current.saturating_add(step.saturating_mul(steps)))
    }

    fn normalize(&self) {
        self.inner.update(|s| {
            let clamped = s.clamp(*s.value.current());
            match &mut s.value {
                ValueSource::Owned(v) | ValueSource::Mirrored(v) => *v = clamped,
            }
        });
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.inner.clear_dirty();
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Widget for Slider {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn is_dirty(&self) -> bool {
        Slider::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Slider::clear_dirty(self)
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.is_command() {
            return EventResult::Ignored;
        }
        match key.key {
            Key::Left => self.nudge(-1),
            Key::Right => self.nudge(1),
            Key::Home => self.set_value(self.min()),
            Key::End => self.set_value(self.max()),
            _ => return EventResult::Ignored,
        };
        EventResult::Consumed
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        let filled = (self.fraction() * TRACK_WIDTH as f64).round() as usize;
        let filled = filled.min(TRACK_WIDTH);
        let track = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(TRACK_WIDTH - filled)
        );
        let tone = if focused { Tone::Highlighted } else { Tone::Accent };
        vec![
            Line::new(format!("{} {}", track, self.value()))
                .tone(tone)
                .role(Role::Slider),
        ]
    }
}
