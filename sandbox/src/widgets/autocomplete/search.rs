//! Autocomplete fed by a debounced search over a candidate pool.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::watch;

use crate::debounce::DEFAULT_DELAY;
use crate::error::SearchError;
use crate::keys::KeyCombo;
use crate::search::{SearchItem, search_string};
use crate::state::State;
use crate::view::{Line, Tone};
use crate::widgets::events::{Callback, EventResult, emit};
use crate::widgets::search_input::{SettledQuery, lock_query};
use crate::widgets::traits::Widget;

use super::Autocomplete;

/// An [`Autocomplete`] whose candidates are search results.
///
/// Every keystroke restarts the debounce window. Once the text has settled,
/// [`poll_settled`](Self::poll_settled) runs the query against the pool and
/// replaces the candidates with the matches. If the pool holds a non-text
/// entry the search fails, the previous candidates stay in place and the
/// error is kept for display.
///
/// Typed text starts a tokio timer, so keystrokes must be delivered from
/// within a tokio runtime.
#[derive(Debug, Clone)]
pub struct SearchAutocomplete<P> {
    autocomplete: Autocomplete,
    pool: Arc<[P]>,
    query: Arc<Mutex<SettledQuery>>,
    last_error: State<Option<SearchError>>,
    on_search: Option<Callback<String>>,
}

impl<P: SearchItem + Send + Sync + 'static> SearchAutocomplete<P> {
    /// Search `pool` with the default 500 ms debounce.
    pub fn new(autocomplete: Autocomplete, pool: impl Into<Arc<[P]>>) -> Self {
        Self::with_delay(autocomplete, pool, DEFAULT_DELAY)
    }

    pub fn with_delay(autocomplete: Autocomplete, pool: impl Into<Arc<[P]>>, delay: Duration) -> Self {
        Self {
            autocomplete,
            pool: pool.into(),
            query: Arc::new(Mutex::new(SettledQuery::new(delay))),
            last_error: State::new(None),
            on_search: None,
        }
    }

    /// Set the handler fired with every settled query before it runs.
    pub fn on_search(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_search = Some(Callback::new(f));
        self
    }

    /// The wrapped control.
    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    pub fn pool(&self) -> &[P] {
        &self.pool
    }

    pub fn last_error(&self) -> Option<SearchError> {
        self.last_error.get()
    }

    /// Replace the text as a user edit and restart the debounce window.
    ///
    /// # Panics
    ///
    /// Panics outside a tokio runtime. The same applies to text keys sent
    /// through [`Widget::dispatch_key`].
    pub fn type_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.autocomplete.change_text(text.clone());
        lock_query(&self.query).push(text);
    }

    /// Run the search for a newly settled query, if there is one.
    ///
    /// Returns whether the candidates changed.
    pub fn poll_settled(&self) -> Result<bool, SearchError> {
        let Some(query) = lock_query(&self.query).take_new() else {
            return Ok(false);
        };
        emit(&self.on_search, query.clone());

        match search_string(&self.pool, &query) {
            Ok(matches) => {
                debug!(
                    "Autocomplete {} query {:?}: {} matches",
                    self.autocomplete.id_string(),
                    query,
                    matches.len()
                );
                self.last_error.try_update(|e| e.take().is_some());
                Ok(self.autocomplete.set_candidates(matches))
            }
            Err(err) => {
                warn!(
                    "Autocomplete {} search failed: {}",
                    self.autocomplete.id_string(),
                    err
                );
                self.last_error.set(Some(err.clone()));
                Err(err)
            }
        }
    }

    /// Receiver woken on every settled query, for event loops.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        lock_query(&self.query).subscribe()
    }

    /// True while typed text is waiting to settle.
    pub fn is_pending(&self) -> bool {
        lock_query(&self.query).is_pending()
    }

    /// Cancel the pending search. Call when the control goes away.
    pub fn dispose(&self) {
        lock_query(&self.query).dispose();
    }
}

impl<P: SearchItem + Send + Sync + 'static> Widget for SearchAutocomplete<P> {
    fn id(&self) -> String {
        self.autocomplete.id_string()
    }

    fn is_dirty(&self) -> bool {
        self.autocomplete.is_dirty() || self.last_error.is_dirty()
    }

    fn clear_dirty(&self) {
        self.autocomplete.clear_dirty();
        self.last_error.clear_dirty();
    }

    fn dispatch_key(&self, key: &KeyCombo) -> EventResult {
        self.autocomplete
            .handle_key(key, |text| lock_query(&self.query).push(text))
    }

    fn dispatch_focus(&self) {
        self.autocomplete.focus();
    }

    fn dispatch_blur(&self) {
        self.autocomplete.blur();
    }

    fn view(&self, focused: bool) -> Vec<Line> {
        let mut lines = self.autocomplete.view(focused);
        if let Some(err) = self.last_error() {
            lines.push(Line::new(err.to_string()).tone(Tone::Danger));
        }
        lines
    }
}
