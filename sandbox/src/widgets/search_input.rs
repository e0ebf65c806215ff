//! Search box widget, either button-driven or debounced.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::watch;

use crate::debounce::{DEFAULT_DELAY, Debouncer};
use crate::error::SearchError;
use crate::keys::{Key, KeyCombo};
use crate::search::{SearchItem, search_string};
use crate::state::State;
use crate::view::{Line, Tone};
use crate::widgets::button::Button;
use crate::widgets::button::render::render_segment;
use crate::widgets::events::{Callback, EventResult, emit};
use crate::widgets::input::Input;
use crate::widgets::input::render::render_field;
use crate::widgets::traits::{Widget, generate_auto_id};

/// How a [`SearchInput`] decides when to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// A Search button runs the query; it is disabled while the field is empty.
    Manual,
    /// The query runs once the text has settled for the given delay.
    Debounced(Duration),
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Debounced(DEFAULT_DELAY)
    }
}

/// Debounced query text plus the publish count already consumed.
#[derive(Debug)]
pub(crate) struct SettledQuery {
    debouncer: Debouncer<String>,
    seen: u64,
}

impl SettledQuery {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::with_delay(delay),
            seen: 0,
        }
    }

    pub(crate) fn push(&mut self, text: String) {
        self.debouncer.push(text);
    }

    /// The settled query, if one was published since the last call.
    pub(crate) fn take_new(&mut self) -> Option<String> {
        let publishes = self.debouncer.publishes();
        if publishes == self.seen {
            return None;
        }
        self.seen = publishes;
        self.debouncer.settled()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.debouncer.subscribe()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub(crate) fn dispose(&mut self) {
        self.debouncer.dispose();
    }
}

pub(crate) fn lock_query(query: &Mutex<SettledQuery>) -> MutexGuard<'_, SettledQuery> {
    query.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone)]
enum Trigger {
    Manual(Button),
    Debounced(Arc<Mutex<SettledQuery>>),
}

/// A text field that matches its text against a candidate pool.
///
/// In [`SearchMode::Manual`] the search runs on [`submit`](Self::submit)
/// (Enter, or the Search button). In [`SearchMode::Debounced`] it runs from
/// [`poll`](Self::poll) once the typed text has settled; empty settled text is
/// skipped. Results go to `on_search` and stay readable via
/// [`results`](Self::results).
///
/// A debounced search box starts a tokio timer per edit, so edits must come
/// from within a tokio runtime. Manual mode has no such requirement.
#[derive(Debug, Clone)]
pub struct SearchInput<P> {
    id: String,
    input: Input,
    pool: Arc<[P]>,
    trigger: Trigger,
    results: State<Vec<String>>,
    last_error: State<Option<SearchError>>,
    on_search: Option<Callback<Vec<String>>>,
}

impl<P: SearchItem + Send + Sync + 'static> SearchInput<P> {
    pub fn new(pool: impl Into<Arc<[P]>>, mode: SearchMode) -> Self {
        let trigger = match mode {
            SearchMode::Manual => Trigger::Manual(Button::new("Search").disabled(true)),
            SearchMode::Debounced(delay) => {
                Trigger::Debounced(Arc::new(Mutex::new(SettledQuery::new(delay))))
            }
        };
        Self {
            id: generate_auto_id("search"),
            input: Input::new().placeholder("search"),
            pool: pool.into(),
            trigger,
            results: State::new(Vec::new()),
            last_error: State::new(None),
            on_search: None,
        }
    }

    /// Set the handler fired with every result list.
    pub fn on_search(mut self, f: impl Fn(Vec<String>) + Send + Sync + 'static) -> Self {
        self.on_search = Some(Callback::new(f));
        self
    }

    pub fn mode(&self) -> SearchMode {
        match &self.trigger {
            Trigger::Manual(_) => SearchMode::Manual,
            Trigger::Debounced(query) => {
                SearchMode::Debounced(lock_query(query).debouncer.delay())
            }
        }
    }

    pub fn text(&self) -> String {
        self.input.value()
    }

    /// Latest successful results.
    pub fn results(&self) -> Vec<String> {
        self.results.get()
    }

    pub fn last_error(&self) -> Option<SearchError> {
        self.last_error.get()
    }

    /// The Search button, in manual mode.
    pub fn button(&self) -> Option<&Button> {
        match &self.trigger {
            Trigger::Manual(button) => Some(button),
            Trigger::Debounced(_) => None,
        }
    }

    /// Replace the text as a user edit.
    ///
    /// # Panics
    ///
    /// In debounced mode, panics outside a tokio runtime. Text keys sent
    /// through [`Widget::dispatch_key`] behave the same.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.input.change(text.clone());
        match &self.trigger {
            Trigger::Manual(button) => button.set_disabled(text.is_empty()),
            Trigger::Debounced(query) => lock_query(query).push(text),
        }
    }

    /// Run the search now. Manual mode only; returns `Ok(None)` when the
    /// button is disabled or the search box is debounced.
    pub fn submit(&self) -> Result<Option<Vec<String>>, SearchError> {
        match &self.trigger {
            Trigger::Manual(button) if button.press() => self.run(&self.text()).map(Some),
            _ => Ok(None),
        }
    }

    /// Run the search if a new query settled. Debounced mode only.
    pub fn poll(&self) -> Result<Option<Vec<String>>, SearchError> {
        let Trigger::Debounced(query) = &self.trigger else {
            return Ok(None);
        };
        let settled = lock_query(query).take_new();
        match settled {
            Some(query) if !query.is_empty() => self.run(&query).map(Some),
            _ => Ok(None),
        }
    }

    /// Receiver woken on every settled query, for event loops.
    pub fn subscribe(&self) -> Option<watch::Receiver<Option<String>>> {
        match &self.trigger {
            Trigger::Debounced(query) => Some(lock_query(query).subscribe()),
            Trigger::Manual(_) => None,
        }
    }

    /// True while a debounced query is waiting to settle.
    pub fn is_pending(&self) -> bool {
        match &self.trigger {
            Trigger::Debounced(query) => lock_query(query).is_pending(),
            Trigger::Manual(_) => false,
        }
    }

    /// Cancel any pending debounced query.
    pub fn dispose(&self) {
        if let Trigger::Debounced(query) = &self.trigger {
            lock_query(query).dispose();
        }
    }

    fn run(&self, query: &str) -> Result<Vec<String>, SearchError> {
        match search_string(&self.pool, query) {
            Ok(results) => {
                debug!("Search {} {:?}: {} results", self.id, query, results.len());
                self.last_error.try_update(|e| e.take().is_some());
                self.results.set(results.clone());
                emit(&self.on_search, results.clone());
                Ok(results)
            }
            Err(err) => {
                warn!("Search {} failed: {}", self.id, err);
                self.last_error.set(Some(err.clone()));
                Err(err)
            }
        }
    }
}

impl<P: SearchItem + Send + Sync + 'static> Widget for SearchInput<P> {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn is_dirty(&self) -> bool {
        self.input.is_dirty()
            || self.results.is_dirty()
            || self.last_error.is_dirty()
            || self.button().is_some_and(Button::is_dirty)
    }

    fn clear_dirty(&self) {
        self.input.clear_dirty();
        self.results.clear_dirty();
        self.last_error.clear_dirty();
        if let Some(button) = self.button() {
            button.clear_dirty();
        }
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.is_command() {
            return EventResult::Ignored;
        }
        match key.key {
            Key::Char(c) => {
                let mut text = self.text();
                text.push(c);
                self.set_text(text);
                EventResult::Consumed
            }
            Key::Backspace => {
                let mut text = self.text();
                if text.pop().is_some() {
                    self.set_text(text);
                }
                EventResult::Consumed
            }
            Key::Enter => {
                // Failures are kept in `last_error` and shown by `view`.
                let _ = self.submit();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn dispatch_focus(&self) {
        self.input.focus();
    }

    fn dispatch_blur(&self) {
        self.input.blur();
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        let mut field = render_field(&self.text(), "search", focused);
        if let Some(button) = self.button() {
            let (face, _) = render_segment("Search", !button.is_pressable(), false);
            field.text = format!("{}  {}", field.text, face);
        }

        let mut lines = vec![field];
        if let Some(err) = self.last_error() {
            lines.push(Line::new(err.to_string()).tone(Tone::Danger));
        }
        lines.extend(
            self.results()
                .into_iter()
                .map(|item| Line::new(format!("  {}", item))),
        );
        lines
    }
}
