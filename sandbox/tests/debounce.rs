//! Timing tests for the debouncer. Time is paused, so sleeps advance the
//! clock instantly and deterministically.

use std::time::Duration;

use sandbox::debounce::{DEFAULT_DELAY, Debouncer, TimerGuard};

/// Let `ms` of virtual time pass, then give spawned timers a chance to run.
async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[tokio::test(start_paused = true)]
async fn test_value_settles_after_quiet_window() {
    let mut debouncer = Debouncer::new();
    debouncer.settle("apple", ms(100));

    advance(50).await;
    assert_eq!(debouncer.settled(), None);
    assert!(debouncer.is_pending());

    advance(60).await;
    assert_eq!(debouncer.settled(), Some("apple"));
    assert_eq!(debouncer.publishes(), 1);
    assert!(!debouncer.is_pending());

    // Exactly once: nothing more is published later.
    advance(1_000).await;
    assert_eq!(debouncer.publishes(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_changes_settle_only_the_last_value() {
    let mut debouncer = Debouncer::new();
    for value in ["a", "ap", "app", "appl"] {
        debouncer.settle(value.to_string(), ms(100));
        advance(40).await;
    }
    debouncer.settle("apple".to_string(), ms(100));

    advance(99).await;
    assert_eq!(debouncer.settled(), None);
    assert_eq!(debouncer.publishes(), 0);

    advance(2).await;
    assert_eq!(debouncer.settled().as_deref(), Some("apple"));
    assert_eq!(debouncer.publishes(), 1);
    assert_eq!(debouncer.raw().map(String::as_str), Some("apple"));
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_publish() {
    let mut debouncer = Debouncer::new();
    debouncer.settle(7u32, ms(100));
    let settled = debouncer.settled_handle();
    let mut rx = debouncer.subscribe();

    drop(debouncer);
    advance(500).await;

    assert_eq!(settled.value(), None);
    assert_eq!(settled.publishes(), 0);
    assert!(!rx.has_changed().unwrap_or(false));
}

#[tokio::test(start_paused = true)]
async fn test_dispose_cancels_until_next_settle() {
    let mut debouncer = Debouncer::new();
    debouncer.settle(1, ms(100));
    debouncer.dispose();
    assert!(!debouncer.is_pending());

    advance(200).await;
    assert_eq!(debouncer.settled(), None);

    debouncer.settle(2, ms(100));
    advance(150).await;
    assert_eq!(debouncer.settled(), Some(2));
    assert_eq!(debouncer.publishes(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_publishes_on_next_turn() {
    let mut debouncer = Debouncer::new();
    debouncer.settle("now", Duration::ZERO);
    assert_eq!(debouncer.settled(), None);

    advance(0).await;
    assert_eq!(debouncer.settled(), Some("now"));
}

#[tokio::test(start_paused = true)]
async fn test_same_value_restarts_the_window() {
    let mut debouncer = Debouncer::new();
    debouncer.settle("same", ms(100));
    advance(60).await;
    debouncer.settle("same", ms(100));
    advance(60).await;
    assert_eq!(debouncer.settled(), None);

    advance(50).await;
    assert_eq!(debouncer.settled(), Some("same"));
    assert_eq!(debouncer.publishes(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_push_uses_configured_delay() {
    let mut debouncer = Debouncer::with_delay(ms(300));
    debouncer.push(String::from("query"));

    advance(250).await;
    assert_eq!(debouncer.settled(), None);
    advance(60).await;
    assert_eq!(debouncer.settled().as_deref(), Some("query"));
    assert_eq!(debouncer.delay(), ms(300));
}

#[tokio::test(start_paused = true)]
async fn test_default_delay_is_500ms() {
    assert_eq!(DEFAULT_DELAY, ms(500));

    let mut debouncer = Debouncer::new();
    debouncer.settle_default(3.5f64);
    advance(499).await;
    assert_eq!(debouncer.settled(), None);
    advance(2).await;
    assert_eq!(debouncer.settled(), Some(3.5));
}

#[derive(Debug, Clone, PartialEq)]
struct Range {
    low: i32,
    high: i32,
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_settled_values() {
    let mut debouncer = Debouncer::new();
    let mut rx = debouncer.subscribe();

    debouncer.settle(Range { low: 0, high: 10 }, ms(100));
    debouncer.settle(Range { low: 5, high: 10 }, ms(100));

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), Some(Range { low: 5, high: 10 }));
    assert_eq!(debouncer.publishes(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_channel_agrees_with_settled_slot_across_threads() {
    let mut debouncer = Debouncer::new();
    let rx = debouncer.subscribe();

    for n in 0..200 {
        debouncer.settle(n, Duration::ZERO);
        if n % 7 == 0 {
            tokio::task::yield_now().await;
        }
    }
    tokio::time::sleep(ms(50)).await;

    assert_eq!(debouncer.settled(), Some(199));
    assert_eq!(*rx.borrow(), debouncer.settled());
}

#[tokio::test(start_paused = true)]
async fn test_timer_guard_aborts_on_rearm_and_drop() {
    let first = tokio::spawn(tokio::time::sleep(ms(1_000)));
    let second = tokio::spawn(tokio::time::sleep(ms(1_000)));

    let mut guard = TimerGuard::default();
    guard.arm(first.abort_handle());
    guard.arm(second.abort_handle());
    assert!(guard.is_armed());

    let first = first.await;
    assert!(first.is_err_and(|e| e.is_cancelled()));

    drop(guard);
    let second = second.await;
    assert!(second.is_err_and(|e| e.is_cancelled()));
}
