use crate::core::selector::Transition;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick; advances the ring animation.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A resolved action to execute.
    Action(Action),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drive the persona selector.
    Selector(Transition),

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

impl From<Transition> for Action {
    fn from(transition: Transition) -> Self {
        Action::Selector(transition)
    }
}
