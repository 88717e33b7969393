//! Root router: maps the application's single path to its view.

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use super::views::selector::CharacterSelectorView;

/// Routes the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: the character selector.
    Selector,
}

impl Route {
    pub const ALL: [Route; 1] = [Route::Selector];

    pub fn path(self) -> &'static str {
        match self {
            Route::Selector => "/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Selector => "Select",
        }
    }

    /// Exact path match. Anything unknown is left to the caller.
    pub fn resolve(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Holds the mounted view for the active route and forwards to it.
pub struct Router {
    route: Route,
    selector: CharacterSelectorView,
}

impl Router {
    /// Mount the selector at `/`.
    pub fn new(selector: CharacterSelectorView) -> Self {
        Self::mount(Route::Selector, selector)
    }

    /// Open the view for `path`, or `None` when nothing is mounted there.
    pub fn open(path: &str, selector: CharacterSelectorView) -> Option<Self> {
        Route::resolve(path).map(|route| Self::mount(route, selector))
    }

    fn mount(route: Route, selector: CharacterSelectorView) -> Self {
        log::debug!("Mounted {:?} at {}", route, route.path());
        Self { route, selector }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn selector(&self) -> &CharacterSelectorView {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut CharacterSelectorView {
        &mut self.selector
    }

    pub fn handle_input(&mut self, event: &Event, area: Rect) -> bool {
        match self.route {
            Route::Selector => self.selector.handle_input(event, area),
        }
    }

    pub fn on_tick(&mut self, dt: f64) {
        match self.route {
            Route::Selector => self.selector.on_tick(dt),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self.route {
            Route::Selector => self.selector.render(frame, area),
        }
    }
}
