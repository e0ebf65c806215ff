use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sandbox::keys::{Key, KeyCombo};
use sandbox::view::{Role, Tone, with_role};
use sandbox::widgets::{
    Button, Counter, EventResult, Input, SearchInput, SearchMode, Size, Slider, Variant, Widget,
};

fn key(k: Key) -> KeyCombo {
    KeyCombo::key(k)
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

fn counting_button() -> (Button, Arc<AtomicUsize>) {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let button = Button::new("Click MEEE").on_click(move |()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (button, clicks)
}

#[test]
fn test_button_fires_once_per_press() {
    let (button, clicks) = counting_button();
    assert!(button.press());
    assert_eq!(button.dispatch_key(&key(Key::Enter)), EventResult::Consumed);
    assert_eq!(button.dispatch_key(&key(Key::Char(' '))), EventResult::Consumed);
    assert_eq!(clicks.load(Ordering::SeqCst), 3);
}

#[test]
fn test_disabled_button_never_fires() {
    let (button, clicks) = counting_button();
    let button = button.disabled(true);

    assert!(!button.press());
    button.dispatch_key(&key(Key::Enter));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert!(!button.is_focusable());

    let lines = button.view(false);
    assert_eq!(lines[0].role, Some(Role::Button { disabled: true }));
    assert_eq!(lines[0].tone, Tone::Disabled);
}

#[test]
fn test_loading_button_shows_loading_and_ignores_presses() {
    let (button, clicks) = counting_button();
    button.set_loading(true);

    assert!(!button.press());
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert!(button.view(false)[0].text.contains("...Loading"));

    button.set_loading(false);
    assert!(button.press());
    assert!(button.view(false)[0].text.contains("Click MEEE"));
}

#[test]
fn test_button_variants_and_sizes() {
    let danger = Button::new("Delete").variant(Variant::Danger);
    assert_eq!(danger.view(false)[0].tone, Tone::Danger);

    let small = Button::new("ok").size(Size::Sm).view(false);
    let large = Button::new("ok").size(Size::Lg).view(false);
    assert!(small[0].width() < large[0].width());
}

#[test]
fn test_button_dirty_tracking() {
    let button = Button::new("x");
    button.clear_dirty();
    button.set_disabled(false);
    assert!(!button.is_dirty());
    button.set_disabled(true);
    assert!(button.is_dirty());
}

#[test]
fn test_widget_ids_are_unique() {
    let a = Button::new("a");
    let b = Button::new("b");
    assert_ne!(Widget::id(&a), Widget::id(&b));
    assert!(a.id_string().starts_with("__button_"));
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn text_recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |text| sink.lock().unwrap().push(text))
}

#[test]
fn test_owned_input_updates_itself() {
    let (seen, on_change) = text_recorder();
    let input = Input::new().on_change(on_change);

    for c in "hey".chars() {
        input.dispatch_key(&key(Key::Char(c)));
    }
    input.dispatch_key(&key(Key::Backspace));

    assert_eq!(input.value(), "he");
    assert_eq!(*seen.lock().unwrap(), ["h", "he", "hey", "he"]);
}

#[test]
fn test_mirrored_input_waits_for_owner() {
    let (seen, on_change) = text_recorder();
    let input = Input::mirrored("").on_change(on_change);

    input.type_char('a');
    assert_eq!(input.value(), "");
    assert_eq!(*seen.lock().unwrap(), ["a"]);

    input.sync("a");
    assert_eq!(input.value(), "a");
    assert!(input.is_mirrored());
}

#[test]
fn test_sync_is_ignored_on_owned_input() {
    let input = Input::with_value("mine");
    input.sync("theirs");
    assert_eq!(input.value(), "mine");
}

#[test]
fn test_input_focus_callbacks_fire_on_change_only() {
    let focus = Arc::new(AtomicUsize::new(0));
    let blur = Arc::new(AtomicUsize::new(0));
    let (f, b) = (Arc::clone(&focus), Arc::clone(&blur));
    let input = Input::new()
        .on_focus(move |()| {
            f.fetch_add(1, Ordering::SeqCst);
        })
        .on_blur(move |()| {
            b.fetch_add(1, Ordering::SeqCst);
        });

    input.focus();
    input.focus();
    input.blur();
    input.blur();

    assert_eq!(focus.load(Ordering::SeqCst), 1);
    assert_eq!(blur.load(Ordering::SeqCst), 1);
}

#[test]
fn test_input_reports_every_key() {
    let keys = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&keys);
    let input = Input::new().on_key(move |k| sink.lock().unwrap().push(k));

    input.dispatch_key(&key(Key::Char('x')));
    assert_eq!(input.dispatch_key(&key(Key::Up)), EventResult::Ignored);
    assert_eq!(
        *keys.lock().unwrap(),
        [key(Key::Char('x')), key(Key::Up)]
    );
}

#[test]
fn test_input_renders_placeholder_and_label() {
    let input = Input::new().label("Test input").placeholder("Enter text...");
    let lines = input.view(false);
    assert_eq!(lines[0].text, "Test input");
    assert!(lines[1].text.contains("Enter text..."));
    assert_eq!(lines[1].role, Some(Role::Textbox));
}

// ---------------------------------------------------------------------------
// Counter
// ---------------------------------------------------------------------------

#[test]
fn test_counter_counts() {
    let counter = Counter::default();
    counter.increment();
    counter.increment();
    counter.decrement();
    assert_eq!(counter.count(), 1);

    let status = counter.view(false);
    let status = with_role(&status, |r| r == Role::Status);
    assert_eq!(status[0].text, "counter: 1");
}

#[test]
fn test_counter_stops_at_limits() {
    let counter = Counter::new(9).upper_limit(10).lower_limit(8);
    assert!(counter.increment());
    assert!(!counter.can_increment());
    assert!(!counter.increment());
    assert_eq!(counter.count(), 10);

    assert!(counter.decrement());
    assert!(counter.decrement());
    assert!(!counter.decrement());
    assert_eq!(counter.count(), 8);
    assert!(!counter.can_decrement());
}

#[test]
fn test_counter_reset() {
    let counter = Counter::new(5);
    assert!(!counter.can_reset());
    assert!(!counter.reset());

    counter.dispatch_key(&key(Key::Char('+')));
    counter.dispatch_key(&key(Key::Up));
    assert_eq!(counter.count(), 7);
    assert!(counter.can_reset());

    assert_eq!(counter.dispatch_key(&key(Key::Char('r'))), EventResult::Consumed);
    assert_eq!(counter.count(), 5);
    assert_eq!(counter.initial(), 5);
}

// ---------------------------------------------------------------------------
// Slider
// ---------------------------------------------------------------------------

#[test]
fn test_slider_clamps_and_notifies() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let slider = Slider::new(50).on_change(move |v| sink.lock().unwrap().push(v));

    assert_eq!(slider.set_value(150), 100);
    assert_eq!(slider.set_value(-3), 0);
    assert_eq!(slider.set_value(42), 42);
    assert_eq!(slider.value(), 42);
    assert_eq!(*seen.lock().unwrap(), [100, 0, 42]);
}

#[test]
fn test_slider_keyboard_steps() {
    let slider = Slider::new(0).range(0, 100).step(5);
    slider.dispatch_key(&key(Key::Right));
    slider.dispatch_key(&key(Key::Right));
    assert_eq!(slider.value(), 10);
    slider.dispatch_key(&key(Key::Left));
    assert_eq!(slider.value(), 5);

    slider.dispatch_key(&key(Key::End));
    assert_eq!(slider.value(), 100);
    slider.dispatch_key(&key(Key::Right));
    assert_eq!(slider.value(), 100);
    slider.dispatch_key(&key(Key::Home));
    assert_eq!(slider.value(), 0);
    assert_eq!(slider.dispatch_key(&key(Key::Char('x'))), EventResult::Ignored);
}

#[test]
fn test_slider_fraction() {
    let slider = Slider::new(25).range(0, 100);
    assert!((slider.fraction() - 0.25).abs() < f64::EPSILON);

    let flat = Slider::new(3).range(3, 3);
    assert_eq!(flat.fraction(), 0.0);

    let lines = slider.view(false);
    assert_eq!(lines[0].role, Some(Role::Slider));
    assert!(lines[0].text.ends_with(" 25"));
}

#[test]
fn test_slider_full_i64_range() {
    let slider = Slider::new(0).range(i64::MIN, i64::MAX);
    assert!((slider.fraction() - 0.5).abs() < 1e-9);

    slider.dispatch_key(&key(Key::End));
    assert_eq!(slider.value(), i64::MAX);
    assert_eq!(slider.fraction(), 1.0);
    slider.dispatch_key(&key(Key::Right));
    assert_eq!(slider.value(), i64::MAX);

    slider.dispatch_key(&key(Key::Home));
    assert_eq!(slider.fraction(), 0.0);
    assert!(slider.view(false)[0].text.starts_with('░'));
}

#[test]
fn test_mirrored_slider_reports_without_moving() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let slider = Slider::mirrored(10).on_change(move |v| sink.lock().unwrap().push(v));

    slider.dispatch_key(&key(Key::Right));
    assert_eq!(slider.value(), 10);
    assert_eq!(*seen.lock().unwrap(), [11]);

    slider.sync(11);
    assert_eq!(slider.value(), 11);
    slider.sync(500);
    assert_eq!(slider.value(), 100);
}

#[test]
fn test_slider_initial_value_is_clamped_into_range() {
    let slider = Slider::new(500).range(0, 10);
    assert_eq!(slider.value(), 10);
    let swapped = Slider::new(5).range(10, 0);
    assert_eq!((swapped.min(), swapped.max()), (0, 10));
}

// ---------------------------------------------------------------------------
// SearchInput
// ---------------------------------------------------------------------------

const FRUIT: [&str; 5] = ["apple", "banana", "grape", "orange", "pineapple"];

#[test]
fn test_manual_search_button_tracks_text() {
    let search = SearchInput::new(FRUIT.to_vec(), SearchMode::Manual);
    let button = search.button().cloned().unwrap();
    assert!(button.is_disabled());
    assert_eq!(search.submit().unwrap(), None);

    search.set_text("ap");
    assert!(!button.is_disabled());
    search.set_text("");
    assert!(button.is_disabled());
}

#[test]
fn test_manual_search_runs_on_enter() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let search = SearchInput::new(FRUIT.to_vec(), SearchMode::Manual)
        .on_search(move |results| sink.lock().unwrap().push(results));

    for c in "ap".chars() {
        search.dispatch_key(&key(Key::Char(c)));
    }
    assert_eq!(search.dispatch_key(&key(Key::Enter)), EventResult::Consumed);

    assert_eq!(search.results(), ["apple", "grape", "pineapple"]);
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert!(search.view(false).iter().any(|l| l.text.contains("pineapple")));
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_runs_once_text_settles() {
    let search = SearchInput::new(FRUIT.to_vec(), SearchMode::Debounced(Duration::from_millis(100)));
    assert!(search.button().is_none());
    assert_eq!(search.mode(), SearchMode::Debounced(Duration::from_millis(100)));

    search.set_text("o");
    search.set_text("or");
    assert_eq!(search.poll().unwrap(), None);

    tokio::time::sleep(Duration::from_millis(150)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert_eq!(search.poll().unwrap(), Some(vec!["orange".to_string()]));
    assert_eq!(search.poll().unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_skips_empty_text() {
    let search = SearchInput::new(FRUIT.to_vec(), SearchMode::Debounced(Duration::from_millis(50)));
    search.set_text("");

    tokio::time::sleep(Duration::from_millis(100)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert_eq!(search.poll().unwrap(), None);
    assert!(search.results().is_empty());
}

#[test]
#[should_panic(expected = "no reactor running")]
fn test_debounced_edit_needs_a_runtime() {
    let search = SearchInput::new(FRUIT.to_vec(), SearchMode::default());
    search.dispatch_key(&key(Key::Char('a')));
}
