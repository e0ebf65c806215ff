//! Component documentation: named, described widget configurations.
//!
//! Each [`Story`] builds a widget in one configuration and renders it. The
//! registry is collected at link time with `inventory`, so the demo binary
//! and the tests see the same catalog.

use crate::frame::ComponentFrame;
use crate::keys::NavKey;
use crate::view::Line;
use crate::widgets::{
    Autocomplete, Button, Counter, Input, SearchInput, SearchMode, Slider, Variant, Widget,
};

/// One documented widget configuration.
pub struct Story {
    /// Component name, e.g. `"Button"`.
    pub component: &'static str,
    /// Story name within the component.
    pub name: &'static str,
    pub description: &'static str,
    /// Build the widget and describe it.
    pub render: fn() -> Vec<Line>,
}

impl Story {
    pub const fn new(
        component: &'static str,
        name: &'static str,
        description: &'static str,
        render: fn() -> Vec<Line>,
    ) -> Self {
        Self {
            component,
            name,
            description,
            render,
        }
    }

    /// `Component/Name`
    pub fn path(&self) -> String {
        format!("{}/{}", self.component, self.name)
    }

    /// The rendered widget inside a frame titled with the story path.
    pub fn framed(&self) -> Vec<Line> {
        ComponentFrame::titled(self.path()).wrap((self.render)())
    }
}

impl std::fmt::Debug for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Story")
            .field("component", &self.component)
            .field("name", &self.name)
            .finish()
    }
}

inventory::collect!(Story);

/// Every registered story, sorted by component then name.
pub fn stories() -> Vec<&'static Story> {
    let mut all: Vec<&'static Story> = inventory::iter::<Story>().collect();
    all.sort_by_key(|story| (story.component, story.name));
    all
}

/// Look a story up by component and name.
pub fn find(component: &str, name: &str) -> Option<&'static Story> {
    inventory::iter::<Story>().find(|story| story.component == component && story.name == name)
}

const FRUIT: [&str; 5] = ["apple", "banana", "grape", "orange", "pineapple"];
const TROPICAL: [&str; 3] = ["mango", "melon", "mandarin"];

fn button_primary() -> Vec<Line> {
    Button::new("Click me").variant(Variant::Primary).view(false)
}

fn button_disabled() -> Vec<Line> {
    Button::new("Click me").disabled(true).view(false)
}

fn button_loading() -> Vec<Line> {
    Button::new("Click me").loading(true).view(false)
}

fn input_empty() -> Vec<Line> {
    Input::new().placeholder("Enter text...").view(false)
}

fn input_prefilled() -> Vec<Line> {
    Input::with_value("Hello World").view(false)
}

fn counter_default() -> Vec<Line> {
    Counter::new(0).view(false)
}

fn counter_limited() -> Vec<Line> {
    Counter::new(5).lower_limit(0).upper_limit(10).view(false)
}

fn slider_default() -> Vec<Line> {
    Slider::new(50).view(false)
}

fn slider_stepped() -> Vec<Line> {
    Slider::new(25).step(5).view(false)
}

fn search_manual() -> Vec<Line> {
    SearchInput::new(FRUIT.to_vec(), SearchMode::Manual).view(false)
}

fn search_debounced() -> Vec<Line> {
    SearchInput::new(FRUIT.to_vec(), SearchMode::default()).view(false)
}

fn autocomplete_basic() -> Vec<Line> {
    let ac = Autocomplete::new(FRUIT).label("Fruit");
    ac.focus();
    ac.view(true)
}

fn autocomplete_prefiltered() -> Vec<Line> {
    let ac = Autocomplete::new(TROPICAL).label("Tropical");
    ac.focus();
    ac.view(true)
}

fn autocomplete_highlighted() -> Vec<Line> {
    let ac = Autocomplete::new(FRUIT);
    ac.focus();
    ac.press(NavKey::ArrowDown);
    ac.view(true)
}

inventory::submit! {
    Story::new("Button", "Primary", "Default primary button.", button_primary)
}

inventory::submit! {
    Story::new("Button", "Disabled", "A disabled button never fires on_click.", button_disabled)
}

inventory::submit! {
    Story::new(
        "Button",
        "Loading",
        "A loading button shows ...Loading and ignores presses.",
        button_loading,
    )
}

inventory::submit! {
    Story::new("Input", "Empty", "Empty field showing its placeholder.", input_empty)
}

inventory::submit! {
    Story::new("Input", "Prefilled", "Field created with a value.", input_prefilled)
}

inventory::submit! {
    Story::new("Counter", "Default", "Counter starting at 0 without limits.", counter_default)
}

inventory::submit! {
    Story::new("Counter", "Limited", "Counter starting at 5, bounded to 0..=10.", counter_limited)
}

inventory::submit! {
    Story::new("Slider", "Default", "Slider over 0..=100 with step 1.", slider_default)
}

inventory::submit! {
    Story::new("Slider", "Stepped", "Slider over 0..=100 moving in steps of 5.", slider_stepped)
}

inventory::submit! {
    Story::new(
        "SearchInput",
        "Manual",
        "Manual search mode: press the button to search.",
        search_manual,
    )
}

inventory::submit! {
    Story::new(
        "SearchInput",
        "Debounced",
        "Debounced mode: search fires once typing stops.",
        search_debounced,
    )
}

inventory::submit! {
    Story::new("Autocomplete", "Basic", "Open autocomplete over a fruit list.", autocomplete_basic)
}

inventory::submit! {
    Story::new(
        "Autocomplete",
        "PreFiltered",
        "Autocomplete over a pre-filtered list.",
        autocomplete_prefiltered,
    )
}

inventory::submit! {
    Story::new(
        "Autocomplete",
        "Highlighted",
        "First candidate highlighted with ArrowDown; the text mirrors it.",
        autocomplete_highlighted,
    )
}
