//! Monkey states. Each moving state owns its own [`Leg`], so the interpolated
//! position and the "leg finished" point live with the state that uses them.

use crate::mechanics::{Leg, ScreenPos};
use crate::sorting::ShuffleTask;

/// Payload-free tag, handed to the presentation layer for sprite selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    Idle,
    Wandering,
    Chatting,
    Dancing,
    MovingToSource,
    Carrying,
    Returning,
}

impl StateKind {
    /// Idle and the three cosmetic states can take a new task.
    pub fn is_available(self) -> bool {
        matches!(
            self,
            StateKind::Idle | StateKind::Wandering | StateKind::Chatting | StateKind::Dancing
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MonkeyState {
    Idle { at: ScreenPos },
    Wandering { leg: Leg },
    Chatting { at: ScreenPos, elapsed: f64 },
    Dancing { at: ScreenPos, elapsed: f64 },
    /// Walking to `task.from` to pick the fruit up.
    MovingToSource { task: ShuffleTask, leg: Leg },
    /// Carrying the picked fruit to `task.to`.
    Carrying { task: ShuffleTask, leg: Leg },
    /// Carrying the displaced fruit back to `task.from`.
    Returning { task: ShuffleTask, leg: Leg },
}

impl MonkeyState {
    pub fn kind(&self) -> StateKind {
        match self {
            MonkeyState::Idle { .. } => StateKind::Idle,
            MonkeyState::Wandering { .. } => StateKind::Wandering,
            MonkeyState::Chatting { .. } => StateKind::Chatting,
            MonkeyState::Dancing { .. } => StateKind::Dancing,
            MonkeyState::MovingToSource { .. } => StateKind::MovingToSource,
            MonkeyState::Carrying { .. } => StateKind::Carrying,
            MonkeyState::Returning { .. } => StateKind::Returning,
        }
    }

    pub fn is_available(&self) -> bool {
        self.kind().is_available()
    }

    /// Current draw position.
    pub fn position(&self) -> ScreenPos {
        match self {
            MonkeyState::Idle { at }
            | MonkeyState::Chatting { at, .. }
            | MonkeyState::Dancing { at, .. } => *at,
            MonkeyState::Wandering { leg }
            | MonkeyState::MovingToSource { leg, .. }
            | MonkeyState::Carrying { leg, .. }
            | MonkeyState::Returning { leg, .. } => leg.position(),
        }
    }

    /// The in-flight task, if any.
    pub fn task(&self) -> Option<ShuffleTask> {
        match self {
            MonkeyState::MovingToSource { task, .. }
            | MonkeyState::Carrying { task, .. }
            | MonkeyState::Returning { task, .. } => Some(*task),
            _ => None,
        }
    }

    pub fn leg(&self) -> Option<&Leg> {
        match self {
            MonkeyState::Wandering { leg }
            | MonkeyState::MovingToSource { leg, .. }
            | MonkeyState::Carrying { leg, .. }
            | MonkeyState::Returning { leg, .. } => Some(leg),
            _ => None,
        }
    }

    pub(crate) fn leg_mut(&mut self) -> Option<&mut Leg> {
        match self {
            MonkeyState::Wandering { leg }
            | MonkeyState::MovingToSource { leg, .. }
            | MonkeyState::Carrying { leg, .. }
            | MonkeyState::Returning { leg, .. } => Some(leg),
            _ => None,
        }
    }
}
