//! Number-guessing game for the terminal.
//!
//! Guess the number between 1 and 10 before 30 seconds run out. The
//! [`game`] module holds the state machine; [`ui`] renders it.

pub mod cli;
pub mod config;
pub mod game;
pub mod logging;
pub mod shutdown;
pub mod timer;
pub mod ui;
