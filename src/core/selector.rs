//! Selection state machine for the persona carousel.
//!
//! Two pieces of state (`index`, `modal_open`) and four transitions. The
//! machine knows nothing about rendering or animation; views feed it
//! transitions and read the resulting state.

use thiserror::Error;

/// Focused persona and modal visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectionState {
    /// Focused persona, always in `[0, count)`.
    pub index: usize,
    /// Whether the detail overlay is visible.
    pub modal_open: bool,
}

/// User-driven transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Focus the next persona, wrapping last to first.
    Advance,
    /// Focus the previous persona, wrapping first to last.
    Retreat,
    /// Focus persona `i` and open its detail overlay in one step.
    Select(usize),
    /// Close the overlay. Focus is unchanged.
    Dismiss,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("cannot move focus in an empty roster")]
    EmptyRoster,

    #[error("persona index {index} out of range (count {count})")]
    OutOfRange { index: usize, count: usize },
}

impl SelectionState {
    /// Apply a transition over a roster of `count` personas.
    ///
    /// Returns the next state without touching `self`; on error the caller
    /// keeps the previous state.
    pub fn apply(self, transition: Transition, count: usize) -> Result<Self, SelectError> {
        match transition {
            Transition::Dismiss => Ok(Self {
                modal_open: false,
                ..self
            }),
            _ if count == 0 => Err(SelectError::EmptyRoster),
            Transition::Advance => Ok(Self {
                index: (self.index + 1) % count,
                ..self
            }),
            Transition::Retreat => Ok(Self {
                index: (self.index + count - 1) % count,
                ..self
            }),
            Transition::Select(index) if index >= count => {
                Err(SelectError::OutOfRange { index, count })
            }
            Transition::Select(index) => Ok(Self {
                index,
                modal_open: true,
            }),
        }
    }
}

/// Selection state bound to a fixed roster size.
#[derive(Debug, Clone)]
pub struct Selector {
    state: SelectionState,
    count: usize,
}

impl Selector {
    pub fn new(count: usize) -> Self {
        Self {
            state: SelectionState::default(),
            count,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn modal_open(&self) -> bool {
        self.state.modal_open
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Apply a transition, keeping the current state on error.
    pub fn dispatch(&mut self, transition: Transition) -> Result<SelectionState, SelectError> {
        let next = self.state.apply(transition, self.count)?;
        log::trace!("{transition:?}: {:?} -> {next:?}", self.state);
        self.state = next;
        Ok(next)
    }

    pub fn advance(&mut self) -> Result<SelectionState, SelectError> {
        self.dispatch(Transition::Advance)
    }

    pub fn retreat(&mut self) -> Result<SelectionState, SelectError> {
        self.dispatch(Transition::Retreat)
    }

    pub fn select(&mut self, index: usize) -> Result<SelectionState, SelectError> {
        let next = self.dispatch(Transition::Select(index))?;
        log::debug!("Opened persona detail at index {index}");
        Ok(next)
    }

    /// Close the overlay. Total for every roster size.
    pub fn dismiss(&mut self) -> SelectionState {
        self.state.modal_open = false;
        log::trace!("Dismiss: {:?}", self.state);
        self.state
    }
}
