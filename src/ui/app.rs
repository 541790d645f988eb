use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::game::{GameController, GameView, Guess, PhaseChange, TargetSource};
use crate::timer::{Countdown, TICK_PERIOD};
use crate::ui::events::AppEvent;

pub type DynTargets = Box<dyn TargetSource>;

pub struct App {
    should_quit: bool,
    game: GameController<DynTargets>,
    /// Live countdown. `Some` exactly while the phase is `Playing`.
    countdown: Option<Countdown>,
    /// Last generation handed to a countdown.
    generation: u64,
    runtime: Handle,
    events: Sender<AppEvent>,
    tick_period: Duration,
}

impl App {
    pub fn new(targets: DynTargets, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            game: GameController::new(targets),
            countdown: None,
            generation: 0,
            runtime,
            events,
            tick_period: TICK_PERIOD,
        }
    }

    /// Override the countdown period. Used by tests to run rounds fast.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.countdown = None;
    }

    pub fn game(&self) -> &GameController<DynTargets> {
        &self.game
    }

    pub fn view(&self) -> GameView {
        self.game.view()
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn countdown_generation(&self) -> Option<u64> {
        self.countdown.as_ref().map(Countdown::generation)
    }

    pub fn start(&mut self) {
        let change = self.game.start();
        self.apply(change);
    }

    pub fn submit(&mut self) {
        let change = self.game.submit_input();
        self.apply(change);
    }

    pub fn guess(&mut self, guess: Guess) {
        let change = self.game.submit_guess(guess);
        self.apply(change);
    }

    pub fn pause(&mut self) {
        let change = self.game.pause();
        self.apply(change);
    }

    pub fn resume(&mut self) {
        let change = self.game.resume();
        self.apply(change);
    }

    /// "Try Again": back to the welcome screen.
    pub fn try_again(&mut self) {
        let change = self.game.reset();
        self.apply(change);
    }

    /// Reset and immediately start another round.
    pub fn new_round(&mut self) {
        self.try_again();
        self.start();
    }

    pub fn push_digit(&mut self, ch: char) {
        let change = self.game.push_digit(ch);
        self.apply(change);
    }

    pub fn pop_digit(&mut self) {
        let change = self.game.pop_digit();
        self.apply(change);
    }

    pub fn clear_input(&mut self) {
        let change = self.game.clear_input();
        self.apply(change);
    }

    /// Countdown tick. Ticks from a released countdown are dropped.
    pub fn on_tick(&mut self, generation: u64) {
        let live = self
            .countdown
            .as_ref()
            .is_some_and(|countdown| countdown.owns(generation));
        if !live {
            tracing::trace!(generation, "Stale tick ignored");
            return;
        }
        let change = self.game.tick();
        self.apply(change);
    }

    /// Acquire or release the countdown to match the new phase.
    fn apply(&mut self, change: PhaseChange) {
        if change.left_playing() {
            self.countdown = None;
        }
        if change.entered_playing() {
            self.generation += 1;
            self.countdown = Some(Countdown::start(
                &self.runtime,
                self.tick_period,
                self.events.clone(),
                self.generation,
            ));
        }
    }
}
