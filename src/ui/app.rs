//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::data::DashboardData;
use crate::theme::{RootClass, ThemeState, ThemeStore};
use crate::ui::dashboard::{AssetResolver, DashboardLayout, DashboardState, render_dashboard};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};
use ratatui::layout::Position;
use ratatui::{Frame, Terminal, backend::Backend};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub assets_dir: PathBuf,
    pub tick_rate: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, assets_dir: PathBuf, tick_rate: Duration) -> Self {
        Self {
            with_background_color,
            assets_dir,
            tick_rate,
        }
    }
}

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The one theme store for this run.
    store: ThemeStore,

    /// Datasets and host-resolved state for the dashboard.
    dashboard: DashboardState<'static>,

    /// Where the last frame put each widget.
    layout: DashboardLayout,

    /// Set when the next loop iteration must redraw.
    dirty: Rc<Cell<bool>>,

    /// How long to wait for input between redraw checks.
    tick_rate: Duration,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(data: DashboardData<'static>, ui_config: UIConfig) -> Self {
        let root = RootClass::default();
        let mut store = ThemeStore::new(Box::new(root.clone()));

        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let redraw = store.subscribe(move |_| flag.set(true));
        debug!(
            "redraw subscription {:?}, {} subscribers",
            redraw,
            store.subscriber_count()
        );

        let dashboard = DashboardState::new(
            data,
            &AssetResolver::new(ui_config.assets_dir),
            root,
            ui_config.with_background_color,
        );

        Self {
            store,
            dashboard,
            layout: DashboardLayout::default(),
            dirty,
            tick_rate: ui_config.tick_rate,
        }
    }

    pub fn theme(&self) -> ThemeState {
        self.store.current_state()
    }

    /// Returns whether a redraw is pending and clears the flag.
    fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn toggle_theme(&mut self) {
        self.store.toggle();
        info!("switched to {} theme", self.theme().name());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.toggle_theme();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.layout.toggle.contains(pos) => {
                self.toggle_theme();
            }
            MouseEventKind::Moved => {
                let previous = self.dashboard.hover.replace(pos);
                // Only chart tooltips depend on the pointer.
                let over_chart = |p: Position| {
                    self.layout.distribution_chart.contains(p)
                        || self.layout.breakdown_chart.contains(p)
                };
                if previous != Some(pos) && (over_chart(pos) || previous.is_some_and(over_chart)) {
                    self.dirty.set(true);
                }
            }
            _ => {}
        }
    }

    /// Draws one frame and records its layout.
    pub fn draw(&mut self, f: &mut Frame) {
        self.layout = render_dashboard(f, &self.dashboard, self.theme());
        debug!(
            "drew {} metric cards and {} follower cards",
            self.layout.metric_cards.len(),
            self.layout.follower_cards.len()
        );
    }
}

/// Runs the application UI in a loop, redrawing whenever something changed.
///
/// Returns the theme that was active when the user quit.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<ThemeState> {
    loop {
        if app.take_dirty() {
            terminal.draw(|f| app.draw(f))?;
        }

        if !event::poll(app.tick_rate)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == Flow::Quit {
                    debug!("quit requested");
                    return Ok(app.theme());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(_, _) => app.dirty.set(true),
            _ => {}
        }
    }
}
