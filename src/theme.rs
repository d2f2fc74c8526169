//! Light/dark theme state, the store that owns it, and style resolution.
//!
//! There is exactly one [`ThemeStore`] per running application. It is owned by
//! the UI loop and passed by reference to whatever needs to read or flip it;
//! interested parties register callbacks with [`ThemeStore::subscribe`].

use crate::data::HexColor;
use crate::ui::glyphs::Glyph;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// The single global light/dark flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }

    pub fn name(self) -> &'static str {
        if self.is_dark { "dark" } else { "light" }
    }
}

/// Class token applied to the root surface for a given state.
pub fn root_class_token(state: ThemeState) -> &'static str {
    if state.is_dark { "dark" } else { "" }
}

/// Receives the coarse root class whenever the theme changes.
#[cfg_attr(test, mockall::automock)]
pub trait RootClassSink {
    fn apply_class(&mut self, token: &str);
}

/// Shared handle to the class currently applied to the whole terminal surface.
#[derive(Debug, Clone, Default)]
pub struct RootClass(Rc<RefCell<String>>);

impl RootClass {
    pub fn token(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn is_dark(&self) -> bool {
        self.0.borrow().as_str() == "dark"
    }
}

impl RootClassSink for RootClass {
    fn apply_class(&mut self, token: &str) {
        let mut class = self.0.borrow_mut();
        class.clear();
        class.push_str(token);
    }
}

/// Identifies one subscription so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemeState)>;

/// Owns the theme flag and fans out changes to subscribers.
pub struct ThemeStore {
    state: ThemeState,
    root: Box<dyn RootClassSink>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ThemeStore {
    /// Creates a light-themed store and applies the initial root class.
    pub fn new(mut root: Box<dyn RootClassSink>) -> Self {
        let state = ThemeState::default();
        root.apply_class(root_class_token(state));
        Self {
            state,
            root,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current_state(&self) -> ThemeState {
        self.state
    }

    /// Flips the flag. The root class is applied and every subscriber has run
    /// by the time this returns.
    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
        debug!("theme toggled, dark = {}", self.state.is_dark);
        self.root.apply_class(root_class_token(self.state));
        let state = self.state;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(state);
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Colour tokens for one theme branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub page_bg: HexColor,
    pub page_fg: HexColor,
    pub title_fg: HexColor,
    pub card_bg: HexColor,
    pub card_fg: HexColor,
    pub card_heading_fg: HexColor,
    pub value_fg: HexColor,
    pub muted_fg: HexColor,
    pub positive_fg: HexColor,
    pub axis_tick_fg: HexColor,
    pub tooltip_bg: HexColor,
    pub tooltip_fg: HexColor,
    pub bar_fill: HexColor,
    pub toggle_bg: HexColor,
    pub toggle_fg: HexColor,
    pub toggle_glyph: Glyph,
}

const DARK_TOKENS: StyleTokens = StyleTokens {
    page_bg: HexColor("#111827"),
    page_fg: HexColor("#F3F4F6"),
    title_fg: HexColor("#F3F4F6"),
    card_bg: HexColor("#1F2937"),
    card_fg: HexColor("#E5E7EB"),
    card_heading_fg: HexColor("#E5E7EB"),
    value_fg: HexColor("#F3F4F6"),
    muted_fg: HexColor("#9CA3AF"),
    positive_fg: HexColor("#16A34A"),
    axis_tick_fg: HexColor("#9CA3AF"),
    tooltip_bg: HexColor("#374151"),
    tooltip_fg: HexColor("#FFFFFF"),
    bar_fill: HexColor("#8884D8"),
    toggle_bg: HexColor("#374151"),
    toggle_fg: HexColor("#FACC15"),
    toggle_glyph: Glyph::Sun,
};

const LIGHT_TOKENS: StyleTokens = StyleTokens {
    page_bg: HexColor("#F9FAFB"),
    page_fg: HexColor("#111827"),
    title_fg: HexColor("#1F2937"),
    card_bg: HexColor("#FFFFFF"),
    card_fg: HexColor("#1F2937"),
    card_heading_fg: HexColor("#374151"),
    value_fg: HexColor("#111827"),
    muted_fg: HexColor("#6B7280"),
    positive_fg: HexColor("#16A34A"),
    axis_tick_fg: HexColor("#4B5563"),
    tooltip_bg: HexColor("#FFFFFF"),
    tooltip_fg: HexColor("#000000"),
    bar_fill: HexColor("#8884D8"),
    toggle_bg: HexColor("#FFFFFF"),
    toggle_fg: HexColor("#1F2937"),
    toggle_glyph: Glyph::Moon,
};

/// Resolve every colour a component may need for the given branch.
pub fn resolve_style(state: ThemeState) -> StyleTokens {
    if state.is_dark {
        DARK_TOKENS
    } else {
        LIGHT_TOKENS
    }
}
