//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use guessr::game::{GameController, ScriptedTargets};
use guessr::ui::app::App;
use guessr::ui::events::{AppEvent, EventHandler};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Controller whose rounds use `targets` in order.
pub fn scripted(targets: &[u8]) -> GameController<ScriptedTargets> {
    GameController::new(ScriptedTargets::new(targets.iter().copied()))
}

/// App wired to a detached event channel and its own runtime.
///
/// The runtime and handler must outlive the app, so they are returned
/// alongside it.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub runtime: Runtime,
}

pub fn make_app(targets: &[u8]) -> Harness {
    make_app_with_period(targets, Duration::from_secs(3600))
}

pub fn make_app_with_period(targets: &[u8], period: Duration) -> Harness {
    let runtime = Runtime::new().expect("Failed to build runtime");
    let events = EventHandler::detached();
    let app = App::new(
        Box::new(ScriptedTargets::new(targets.iter().copied())),
        runtime.handle().clone(),
        events.sender(),
    )
    .with_tick_period(period);
    Harness {
        app,
        events,
        runtime,
    }
}

impl Harness {
    /// Feed the next countdown event into the app. Returns its generation.
    pub fn pump_tick(&mut self, timeout: Duration) -> Option<u64> {
        match self.events.next(timeout) {
            Ok(AppEvent::Tick { generation }) => {
                self.app.on_tick(generation);
                Some(generation)
            }
            _ => None,
        }
    }
}
