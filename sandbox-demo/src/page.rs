//! The demo page: one frame per widget and a focus ring across them.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, info};
use sandbox::prelude::*;
use serde_json::Value;
use tokio::sync::watch;

use crate::config::DemoConfig;

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Continue,
    Quit,
}

pub struct DemoPage {
    cyclists: SearchAutocomplete<Value>,
    input: Input,
    /// Owner-side copy of the mirrored input's text.
    input_text: State<String>,
    counter: Counter,
    button: Button,
    clicks: Arc<AtomicU32>,
    slider: Slider,
    focus: usize,
}

impl DemoPage {
    pub fn new(config: &DemoConfig) -> Self {
        let autocomplete = Autocomplete::with_hover_mode(Vec::<String>::new(), config.hover_mode)
            .label("Choose your cyclist")
            .placeholder("type to search")
            .on_select(|name| info!("Selected cyclist {}", name));
        let cyclists =
            SearchAutocomplete::with_delay(autocomplete, config.candidates.clone(), config.debounce())
                .on_search(|query| debug!("Searching cyclists for {:?}", query));

        let input_text = State::new(String::new());
        let sink = input_text.clone();
        let input = Input::mirrored("")
            .named("my-input")
            .label("Test input")
            .on_change(move |text| sink.set(text));

        let clicks = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&clicks);
        let button = Button::new("Click MEEE").on_click(move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let slider = Slider::new(config.slider.min)
            .range(config.slider.min, config.slider.max)
            .step(config.slider.step);

        let page = Self {
            cyclists,
            input,
            input_text,
            counter: Counter::default(),
            button,
            clicks,
            slider,
            focus: 0,
        };
        page.widget(0).dispatch_focus();
        page
    }

    fn widgets(&self) -> [&dyn Widget; 5] {
        [
            &self.cyclists,
            &self.input,
            &self.counter,
            &self.button,
            &self.slider,
        ]
    }

    fn widget(&self, index: usize) -> &dyn Widget {
        self.widgets()[index]
    }

    pub fn focused(&self) -> usize {
        self.focus
    }

    /// Move focus forward (`1`) or back (`-1`), skipping unfocusable widgets.
    pub fn cycle_focus(&mut self, direction: isize) {
        let count = self.widgets().len();
        let mut next = self.focus;
        for _ in 0..count {
            next = (next as isize + direction).rem_euclid(count as isize) as usize;
            if self.widget(next).is_focusable() {
                break;
            }
        }
        if next != self.focus {
            self.widget(self.focus).dispatch_blur();
            self.focus = next;
            self.widget(next).dispatch_focus();
        }
    }

    pub fn handle_key(&mut self, key: KeyCombo) -> PageAction {
        if key.modifiers.ctrl && matches!(key.key, Key::Char('c') | Key::Char('q')) {
            return PageAction::Quit;
        }
        match key.key {
            Key::Tab => self.cycle_focus(1),
            Key::BackTab => self.cycle_focus(-1),
            _ => {
                let result = self.widget(self.focus).dispatch_key(&key);
                if !result.is_handled() {
                    debug!("Unhandled key {:?}", key);
                }
                // The page owns the mirrored input's value.
                let text = self.input_text.get();
                if self.input.value() != text {
                    self.input.sync(text);
                }
            }
        }
        PageAction::Continue
    }

    /// Run the cyclist search if the typed text has settled.
    pub fn poll_search(&self) -> Result<bool, SearchError> {
        self.cyclists.poll_settled()
    }

    pub fn settled_queries(&self) -> watch::Receiver<Option<String>> {
        self.cyclists.subscribe()
    }

    pub fn is_dirty(&self) -> bool {
        self.widgets().iter().any(|w| w.is_dirty())
    }

    pub fn clear_dirty(&self) {
        for widget in self.widgets() {
            widget.clear_dirty();
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks.load(Ordering::SeqCst)
    }

    /// Cancel pending work before the page goes away.
    pub fn dispose(&self) {
        self.cyclists.dispose();
    }

    pub fn view(&self) -> Vec<Line> {
        let frame = |title: Option<&str>, index: usize| {
            let frame = title.map(ComponentFrame::titled).unwrap_or_default();
            frame.wrap(self.widget(index).view(index == self.focus))
        };

        let mut lines = frame(None, 0);
        lines.extend(frame(Some("INPUTS"), 1));
        lines.extend(frame(Some("COUNTER"), 2));

        let mut button = self.button.view(self.focus == 3);
        button.push(Line::new(format!("clicked {} times", self.clicks())).tone(Tone::Muted));
        lines.extend(ComponentFrame::titled("BUTTON").wrap(button));

        lines.extend(frame(Some("SLIDERS"), 4));
        lines.push(
            Line::new("Tab/Shift+Tab: focus  Ctrl+Q: quit").tone(Tone::Muted),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(page: &mut DemoPage, key: Key) -> PageAction {
        page.handle_key(KeyCombo::key(key))
    }

    #[test]
    fn test_tab_cycles_focus_both_ways() {
        let mut page = DemoPage::new(&DemoConfig::default());
        assert_eq!(page.focused(), 0);
        press(&mut page, Key::Tab);
        assert_eq!(page.focused(), 1);
        press(&mut page, Key::BackTab);
        press(&mut page, Key::BackTab);
        assert_eq!(page.focused(), 4);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut page = DemoPage::new(&DemoConfig::default());
        assert_eq!(
            page.handle_key(KeyCombo::key(Key::Char('q')).ctrl()),
            PageAction::Quit
        );
    }

    #[test]
    fn test_mirrored_input_follows_page_state() {
        let mut page = DemoPage::new(&DemoConfig::default());
        press(&mut page, Key::Tab);
        press(&mut page, Key::Char('h'));
        press(&mut page, Key::Char('i'));
        assert_eq!(page.input.value(), "hi");
    }

    #[test]
    fn test_button_and_counter_keys() {
        let mut page = DemoPage::new(&DemoConfig::default());
        press(&mut page, Key::Tab);
        press(&mut page, Key::Tab);
        press(&mut page, Key::Char('+'));
        press(&mut page, Key::Tab);
        press(&mut page, Key::Enter);

        assert_eq!(page.counter.count(), 1);
        assert_eq!(page.clicks(), 1);
        let text: Vec<String> = page.view().into_iter().map(|l| l.text).collect();
        assert!(text.iter().any(|t| t.contains("counter: 1")));
        assert!(text.iter().any(|t| t.contains("clicked 1 times")));
        assert!(text.iter().any(|t| t == "SLIDERS"));
    }
}
