//! Intents for the game state machine.

use crate::ui::mvi::Intent;

use super::state::Guess;

/// Events that can be dispatched to the game reducer.
///
/// Every intent is defined in every phase; the ones that do not apply
/// leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIntent {
    /// Begin a round with an already drawn target.
    /// Only effective from `Idle`, `Won` or `TimedOut`.
    Start { target: u8 },

    /// A validated guess was submitted.
    Guess(Guess),

    Pause,
    Resume,

    /// One second of the countdown elapsed.
    Tick,

    /// Hard reset back to the welcome screen.
    Reset,

    /// Append a character to the guess field. Non-digits are dropped.
    PushDigit(char),

    /// Delete the last character of the guess field.
    PopDigit,

    ClearInput,
}

impl Intent for GameIntent {}
