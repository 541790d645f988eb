//! Terminal front end.
//!
//! The UI loop owns the [`app::App`]; the input thread and the countdown
//! task only talk to it through [`events::AppEvent`].

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
