//! Number-guessing game core.
//!
//! # Architecture
//!
//! ```text
//! GameController ──→ GameIntent ──→ GameReducer ──→ GameState ──→ GameView
//!        ↑                                                          │
//!        └────────────── user actions / countdown ticks ────────────┘
//! ```
//!
//! - `state.rs` - Phase enum, game state, validated `Guess`
//! - `intent.rs` - Operations as data
//! - `reducer.rs` - Pure transitions, no timers, no randomness
//! - `rng.rs` - Injectable target source
//! - `controller.rs` - Operation surface, reports phase changes
//! - `view.rs` - One `Screen` per rendered screen

mod controller;
mod intent;
mod reducer;
mod rng;
mod state;
mod view;

pub use controller::{GameController, PhaseChange};
pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use rng::{RandomTarget, ScriptedTargets, TargetSource};
pub use state::{
    GameState, Guess, InvalidGuess, Phase, MAX_INPUT_LEN, ROUND_SECONDS, TARGET_MAX, TARGET_MIN,
};
pub use view::{GameView, Screen};
