//! Reducer for the game state machine.

use crate::ui::mvi::Reducer;

use super::intent::GameIntent;
use super::state::{GameState, Phase, MAX_INPUT_LEN, ROUND_SECONDS};

/// Pure transition function for the game.
///
/// Randomness and the countdown timer stay outside: the target arrives
/// inside `GameIntent::Start` and ticks arrive as `GameIntent::Tick`.
pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Start { target } => match state.phase {
                Phase::Idle | Phase::Won | Phase::TimedOut => GameState {
                    phase: Phase::Playing,
                    target: Some(target),
                    attempts: 0,
                    remaining_seconds: ROUND_SECONDS,
                    input: String::new(),
                },
                Phase::Playing | Phase::Paused => state,
            },

            GameIntent::Guess(guess) => match state.phase {
                Phase::Playing if state.target == Some(guess.value()) => GameState {
                    phase: Phase::Won,
                    ..state
                },
                Phase::Playing => GameState {
                    attempts: state.attempts.saturating_add(1),
                    ..state
                },
                _ => state,
            },

            GameIntent::Pause => match state.phase {
                Phase::Playing => GameState {
                    phase: Phase::Paused,
                    ..state
                },
                _ => state,
            },

            GameIntent::Resume => match state.phase {
                Phase::Paused => GameState {
                    phase: Phase::Playing,
                    ..state
                },
                _ => state,
            },

            GameIntent::Tick => match state.phase {
                Phase::Playing => {
                    let remaining_seconds = state.remaining_seconds.saturating_sub(1);
                    let phase = if remaining_seconds == 0 {
                        Phase::TimedOut
                    } else {
                        Phase::Playing
                    };
                    GameState {
                        phase,
                        remaining_seconds,
                        ..state
                    }
                }
                _ => state,
            },

            GameIntent::Reset => GameState::default(),

            GameIntent::PushDigit(ch) => match state.phase {
                Phase::Playing if ch.is_ascii_digit() && state.input.len() < MAX_INPUT_LEN => {
                    let mut input = state.input;
                    input.push(ch);
                    GameState { input, ..state }
                }
                _ => state,
            },

            GameIntent::PopDigit => match state.phase {
                Phase::Playing => {
                    let mut input = state.input;
                    input.pop();
                    GameState { input, ..state }
                }
                _ => state,
            },

            GameIntent::ClearInput => match state.phase {
                Phase::Playing => GameState {
                    input: String::new(),
                    ..state
                },
                _ => state,
            },
        }
    }
}
