//! Game state for a single guessing round.

use std::fmt;
use std::str::FromStr;

use crate::ui::mvi::UiState;

/// Seconds on the clock when a round starts.
pub const ROUND_SECONDS: u32 = 30;

/// Lowest value the target can take.
pub const TARGET_MIN: u8 = 1;

/// Highest value the target can take.
pub const TARGET_MAX: u8 = 10;

/// Maximum number of digits the guess field accepts.
pub const MAX_INPUT_LEN: usize = 2;

/// The single discrete state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Welcome screen, no round in progress.
    #[default]
    Idle,
    /// Round running, countdown active.
    Playing,
    /// Round suspended, countdown frozen.
    Paused,
    /// Target guessed. Terminal until reset.
    Won,
    /// Clock ran out. Terminal until reset.
    TimedOut,
}

impl Phase {
    /// True for `Won` and `TimedOut`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::TimedOut)
    }

    /// True while a round is in progress (`Playing` or `Paused`).
    pub fn in_round(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Idle => "Idle",
            Phase::Playing => "Playing",
            Phase::Paused => "Paused",
            Phase::Won => "Won",
            Phase::TimedOut => "Time Up",
        };
        f.write_str(label)
    }
}

/// A guess known to be inside `[TARGET_MIN, TARGET_MAX]`.
///
/// Text that does not parse into range never becomes a `Guess`, so it
/// can never reach the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess(u8);

impl Guess {
    pub fn new(value: u8) -> Option<Self> {
        (TARGET_MIN..=TARGET_MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Parse user text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Guess {
    type Err = InvalidGuess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(InvalidGuess)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned by `Guess::from_str` for text outside `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("guess must be a whole number between 1 and 10")]
pub struct InvalidGuess;

/// Everything the game knows at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    /// Set on entering `Playing` from `Idle` or a terminal phase. Fixed for the round.
    pub target: Option<u8>,
    /// Incorrect guesses this round.
    pub attempts: u32,
    pub remaining_seconds: u32,
    /// Raw digits typed into the guess field.
    pub input: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            target: None,
            attempts: 0,
            remaining_seconds: ROUND_SECONDS,
            input: String::new(),
        }
    }
}

impl UiState for GameState {}

impl GameState {
    /// The typed input as a guess, if it is one.
    pub fn current_input(&self) -> Option<Guess> {
        Guess::parse(&self.input)
    }
}
