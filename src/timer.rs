//! One-second countdown driving the game clock.
//!
//! A [`Countdown`] exists only while a round is `Playing`. Dropping it
//! aborts the underlying task, so no tick from an old round can fire
//! into a new one. Every tick also carries the generation it was started
//! with; the receiver compares it against the live countdown and drops
//! anything queued before the release.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::events::AppEvent;

/// Period of the game clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running countdown task.
pub struct Countdown {
    generation: u64,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Spawn a countdown on `runtime`.
    ///
    /// The first tick arrives one full `period` after the call.
    pub fn start(
        runtime: &Handle,
        period: Duration,
        events: Sender<AppEvent>,
        generation: u64,
    ) -> Self {
        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(AppEvent::Tick { generation }).is_err() {
                    tracing::debug!(generation, "Countdown receiver gone");
                    break;
                }
            }
        });
        tracing::debug!(generation, "Countdown started");
        Self { generation, task }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if a tick with `generation` belongs to this countdown.
    pub fn owns(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!(generation = self.generation, "Countdown released");
    }
}
