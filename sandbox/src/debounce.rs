//! Debounced value settling.
//!
//! A [`Debouncer`] takes a rapidly changing value and publishes it only after
//! it stayed unchanged for a full delay window. Timers run as tokio tasks, so
//! `settle` must be called from within a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use log::trace;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::state::State;

/// Delay used when the caller does not pick one.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Owns the single pending timer of a debouncer.
///
/// Arming a new timer aborts the previous one, and so does dropping the
/// guard.
#[derive(Debug, Default)]
pub struct TimerGuard {
    handle: Option<AbortHandle>,
}

impl TimerGuard {
    /// Replace the pending timer, aborting the old one.
    pub fn arm(&mut self, handle: AbortHandle) {
        self.cancel();
        self.handle = Some(handle);
    }

    /// Abort the pending timer. Returns true if one was still running.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    /// True while a timer is armed and has not fired yet.
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug)]
struct Slot<T> {
    /// Ticket of the only timer allowed to publish.
    ticket: u64,
    value: Option<T>,
}

/// Read-only view of a debouncer's settled output.
///
/// Stays valid after the debouncer is dropped, which makes it possible to
/// check that nothing was published after teardown.
#[derive(Debug)]
pub struct Settled<T> {
    slot: State<Slot<T>>,
}

impl<T: Clone> Settled<T> {
    /// The last settled value, `None` before the first settle.
    pub fn value(&self) -> Option<T> {
        self.slot.with(|slot| slot.value.clone())
    }

    /// Number of values published so far.
    pub fn publishes(&self) -> u64 {
        self.slot.generation()
    }
}

impl<T> Clone for Settled<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

/// Publishes a value once it has been stable for a delay.
///
/// Each call to [`settle`](Self::settle) schedules a publish and cancels the
/// one scheduled before it, so at most one timer is pending at any time.
/// Equal values are not short-circuited: settling the same value twice
/// restarts the window and still publishes.
///
/// # Example
///
/// ```
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// use std::time::Duration;
/// use sandbox::debounce::Debouncer;
///
/// let mut debouncer = Debouncer::new();
/// debouncer.settle("fir", Duration::from_millis(100));
/// debouncer.settle("first", Duration::from_millis(100));
///
/// let mut rx = debouncer.subscribe();
/// rx.changed().await.unwrap();
/// assert_eq!(*rx.borrow(), Some("first"));
/// # }
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    raw: Option<T>,
    delay: Duration,
    slot: State<Slot<T>>,
    notify: Arc<watch::Sender<Option<T>>>,
    timer: TimerGuard,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    /// Create a debouncer with the default 500 ms delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    /// Create a debouncer whose [`push`](Self::push) uses `delay`.
    pub fn with_delay(delay: Duration) -> Self {
        let (notify, _) = watch::channel(None);
        Self {
            raw: None,
            delay,
            slot: State::new(Slot {
                ticket: 0,
                value: None,
            }),
            notify: Arc::new(notify),
            timer: TimerGuard::default(),
        }
    }

    /// Record `value` and publish it after `delay` unless superseded first.
    ///
    /// A zero delay still defers the publish to the next scheduler turn.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, since the timer is a
    /// spawned task.
    pub fn settle(&mut self, value: T, delay: Duration) {
        self.delay = delay;
        self.raw = Some(value.clone());
        let ticket = self.next_ticket();

        let slot = self.slot.clone();
        let notify = Arc::clone(&self.notify);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Sent under the slot lock so the channel never lags a newer publish.
            let published = slot.try_update(|slot| {
                if slot.ticket != ticket {
                    return false;
                }
                slot.value = Some(value.clone());
                notify.send_replace(Some(value));
                true
            });
            if published {
                trace!("debounce ticket {} settled", ticket);
            }
        });
        self.timer.arm(task.abort_handle());
    }

    /// Settle with the default 500 ms delay.
    pub fn settle_default(&mut self, value: T) {
        self.settle(value, DEFAULT_DELAY);
    }

    /// Settle with the delay this debouncer was configured with.
    pub fn push(&mut self, value: T) {
        self.settle(value, self.delay);
    }

    /// Cancel the pending publish, if any. Nothing is published afterwards
    /// until the next `settle`.
    pub fn dispose(&mut self) {
        self.next_ticket();
        if self.timer.cancel() {
            trace!("debounce timer cancelled");
        }
    }

    /// The most recent value passed to `settle`.
    pub fn raw(&self) -> Option<&T> {
        self.raw.as_ref()
    }

    /// The last published value.
    pub fn settled(&self) -> Option<T> {
        self.slot.with(|slot| slot.value.clone())
    }

    /// Handle on the settled output that outlives the debouncer.
    pub fn settled_handle(&self) -> Settled<T> {
        Settled {
            slot: self.slot.clone(),
        }
    }

    /// Number of values published so far.
    pub fn publishes(&self) -> u64 {
        self.slot.generation()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True while a publish is scheduled.
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Receiver notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.notify.subscribe()
    }

    fn next_ticket(&mut self) -> u64 {
        let mut ticket = 0;
        self.slot.try_update(|slot| {
            slot.ticket += 1;
            ticket = slot.ticket;
            false
        });
        ticket
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.slot.try_update(|slot| {
            slot.ticket += 1;
            false
        });
        self.timer.cancel();
    }
}
