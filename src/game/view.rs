//! View-model consumed by the presentation layer.

use super::state::{GameState, Phase};

/// What the presentation layer should show, one variant per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Round {
        input: String,
        attempts: u32,
        remaining_seconds: u32,
        paused: bool,
    },
    Won {
        target: u8,
        attempts: u32,
    },
    TimedOut {
        target: u8,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub phase: Phase,
    pub screen: Screen,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Self {
        let target = state.target.unwrap_or_default();
        let screen = match state.phase {
            Phase::Idle => Screen::Welcome,
            Phase::Playing | Phase::Paused => Screen::Round {
                input: state.input.clone(),
                attempts: state.attempts,
                remaining_seconds: state.remaining_seconds,
                paused: state.phase == Phase::Paused,
            },
            Phase::Won => Screen::Won {
                target,
                attempts: state.attempts,
            },
            Phase::TimedOut => Screen::TimedOut { target },
        };
        Self {
            phase: state.phase,
            screen,
        }
    }
}
