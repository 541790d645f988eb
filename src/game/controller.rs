//! The game controller: the public surface of the state machine.

use crate::ui::mvi::Reducer;

use super::intent::GameIntent;
use super::reducer::GameReducer;
use super::rng::TargetSource;
use super::state::{GameState, Guess, Phase};
use super::view::GameView;

/// Phase before and after one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

impl PhaseChange {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// The countdown must be acquired.
    pub fn entered_playing(&self) -> bool {
        self.from != Phase::Playing && self.to == Phase::Playing
    }

    /// The countdown must be released.
    pub fn left_playing(&self) -> bool {
        self.from == Phase::Playing && self.to != Phase::Playing
    }
}

/// Owns the game state and applies every operation through [`GameReducer`].
///
/// Operations that do not apply to the current phase are ignored.
pub struct GameController<T: TargetSource> {
    state: GameState,
    targets: T,
    rounds: u64,
}

impl<T: TargetSource> GameController<T> {
    pub fn new(targets: T) -> Self {
        Self {
            state: GameState::default(),
            targets,
            rounds: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Number of rounds started so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    pub fn start(&mut self) -> PhaseChange {
        if self.state.phase.in_round() {
            return self.ignored("start");
        }
        let target = self.targets.next_target();
        let change = self.dispatch(GameIntent::Start { target });
        if change.entered_playing() {
            self.rounds += 1;
            tracing::info!(round = self.rounds, "Round started");
        }
        change
    }

    pub fn submit_guess(&mut self, guess: Guess) -> PhaseChange {
        if self.state.phase != Phase::Playing {
            return self.ignored("guess");
        }
        let change = self.dispatch(GameIntent::Guess(guess));
        if self.state.phase == Phase::Won {
            tracing::info!(
                round = self.rounds,
                attempts = self.state.attempts,
                remaining_seconds = self.state.remaining_seconds,
                "Round won"
            );
        } else {
            tracing::debug!(guess = guess.value(), attempts = self.state.attempts, "Wrong guess");
        }
        change
    }

    /// Submit whatever is in the guess field.
    ///
    /// Empty or out-of-range text counts as no guess: nothing is
    /// recorded and no attempt is used.
    pub fn submit_input(&mut self) -> PhaseChange {
        match self.state.current_input() {
            Some(guess) => self.submit_guess(guess),
            None => self.ignored("submit without a valid guess"),
        }
    }

    pub fn pause(&mut self) -> PhaseChange {
        self.dispatch(GameIntent::Pause)
    }

    pub fn resume(&mut self) -> PhaseChange {
        self.dispatch(GameIntent::Resume)
    }

    pub fn tick(&mut self) -> PhaseChange {
        let change = self.dispatch(GameIntent::Tick);
        if change.to == Phase::TimedOut && change.changed() {
            tracing::info!(round = self.rounds, attempts = self.state.attempts, "Round timed out");
        }
        change
    }

    pub fn reset(&mut self) -> PhaseChange {
        self.dispatch(GameIntent::Reset)
    }

    pub fn push_digit(&mut self, ch: char) -> PhaseChange {
        self.dispatch(GameIntent::PushDigit(ch))
    }

    pub fn pop_digit(&mut self) -> PhaseChange {
        self.dispatch(GameIntent::PopDigit)
    }

    pub fn clear_input(&mut self) -> PhaseChange {
        self.dispatch(GameIntent::ClearInput)
    }

    fn dispatch(&mut self, intent: GameIntent) -> PhaseChange {
        let from = self.state.phase;
        let label = format!("{intent:?}");
        self.state = GameReducer::reduce(std::mem::take(&mut self.state), intent);
        let change = PhaseChange {
            from,
            to: self.state.phase,
        };
        if change.changed() {
            tracing::debug!(from = %change.from, to = %change.to, intent = %label, "Phase transition");
        }
        change
    }

    fn ignored(&self, operation: &str) -> PhaseChange {
        tracing::trace!(operation, phase = %self.state.phase, "Operation ignored");
        PhaseChange {
            from: self.state.phase,
            to: self.state.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::ScriptedTargets;
    use crate::game::state::ROUND_SECONDS;

    fn controller(targets: &[u8]) -> GameController<ScriptedTargets> {
        GameController::new(ScriptedTargets::new(targets.iter().copied()))
    }

    #[test]
    fn start_reports_entering_playing() {
        let mut game = controller(&[5]);
        let change = game.start();
        assert!(change.entered_playing());
        assert_eq!(game.state().target, Some(5));
        assert_eq!(game.rounds(), 1);
    }

    #[test]
    fn start_mid_round_does_not_draw() {
        let mut game = controller(&[5, 9]);
        game.start();
        let change = game.start();
        assert!(!change.changed());
        assert_eq!(game.state().target, Some(5));
        assert_eq!(game.rounds(), 1);

        game.reset();
        game.start();
        assert_eq!(game.state().target, Some(9));
    }

    #[test]
    fn pause_reports_leaving_playing() {
        let mut game = controller(&[5]);
        game.start();
        let change = game.pause();
        assert!(change.left_playing());
        let change = game.resume();
        assert!(change.entered_playing());
    }

    #[test]
    fn timeout_reports_leaving_playing_once() {
        let mut game = controller(&[5]);
        game.start();
        let mut left = 0;
        for _ in 0..ROUND_SECONDS + 3 {
            if game.tick().left_playing() {
                left += 1;
            }
        }
        assert_eq!(left, 1);
        assert_eq!(game.phase(), Phase::TimedOut);
    }

    #[test]
    fn submit_input_without_digits_keeps_attempts() {
        let mut game = controller(&[5]);
        game.start();
        game.submit_input();
        assert_eq!(game.state().attempts, 0);

        game.push_digit('0');
        game.submit_input();
        assert_eq!(game.state().attempts, 0);
    }

    #[test]
    fn submit_input_uses_typed_digits() {
        let mut game = controller(&[10]);
        game.start();
        game.push_digit('1');
        assert!(!game.submit_input().changed());
        assert_eq!(game.state().attempts, 1);

        game.push_digit('0');
        let change = game.submit_input();
        assert!(change.left_playing());
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.state().attempts, 1);
    }

    #[test]
    fn guess_before_start_is_ignored() {
        let mut game = controller(&[5]);
        let change = game.submit_guess(Guess::new(5).expect("in range"));
        assert!(!change.changed());
        assert_eq!(game.phase(), Phase::Idle);
    }
}
