//! Property tests over arbitrary operation sequences.

mod common;

use common::scripted;
use guessr::game::{Guess, Phase, ROUND_SECONDS, TARGET_MAX, TARGET_MIN};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Start,
    Guess(u8),
    Submit,
    Digit(char),
    Pause,
    Resume,
    Tick,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        3 => (TARGET_MIN..=TARGET_MAX).prop_map(Op::Guess),
        1 => Just(Op::Submit),
        1 => proptest::char::range('0', ':').prop_map(Op::Digit),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
        6 => Just(Op::Tick),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn state_machine_invariants(
        targets in proptest::collection::vec(TARGET_MIN..=TARGET_MAX, 1..8),
        ops in proptest::collection::vec(op(), 0..200),
    ) {
        let mut game = scripted(&targets);
        let mut timeouts_this_round = 0;

        for op in ops {
            let before = game.state().clone();
            let new_round = matches!(op, Op::Start | Op::Reset);
            let change = match op {
                Op::Start => game.start(),
                Op::Guess(v) => game.submit_guess(Guess::new(v).expect("strategy stays in range")),
                Op::Submit => game.submit_input(),
                Op::Digit(ch) => game.push_digit(ch),
                Op::Pause => game.pause(),
                Op::Resume => game.resume(),
                Op::Tick => game.tick(),
                Op::Reset => game.reset(),
            };
            let after = game.state();

            prop_assert_eq!(change.from, before.phase);
            prop_assert_eq!(change.to, after.phase);

            // Target is in range and only changes when a round starts or resets.
            if let Some(target) = after.target {
                prop_assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
            }
            if !new_round {
                prop_assert_eq!(after.target, before.target);
            }

            // Clock only runs while playing and never goes up within a round.
            if before.phase != Phase::Playing && !new_round {
                prop_assert_eq!(after.remaining_seconds, before.remaining_seconds);
            }
            if before.phase.in_round() && after.phase != Phase::Idle {
                prop_assert!(after.remaining_seconds <= before.remaining_seconds);
            }
            prop_assert!(after.remaining_seconds <= ROUND_SECONDS);

            // Attempts only grow while playing, by at most one.
            if !new_round {
                prop_assert!(after.attempts >= before.attempts);
                prop_assert!(after.attempts - before.attempts <= 1);
                if after.attempts > before.attempts {
                    prop_assert_eq!(before.phase, Phase::Playing);
                    prop_assert_eq!(after.phase, Phase::Playing);
                }
            }

            // Reaching zero forces TimedOut exactly once per round.
            if after.phase == Phase::TimedOut {
                prop_assert_eq!(after.remaining_seconds, 0);
            }
            if before.phase != Phase::TimedOut && after.phase == Phase::TimedOut {
                timeouts_this_round += 1;
                prop_assert_eq!(timeouts_this_round, 1);
            }
            if change.entered_playing() && before.phase != Phase::Paused {
                timeouts_this_round = 0;
            }
            if after.phase.in_round() {
                prop_assert!(after.remaining_seconds > 0);
            }
        }
    }

    #[test]
    fn pause_resume_is_identity(
        target in TARGET_MIN..=TARGET_MAX,
        ticks in 0u32..ROUND_SECONDS - 1,
        wrong in 0u8..5,
    ) {
        let mut game = scripted(&[target]);
        game.start();
        for _ in 0..ticks {
            game.tick();
        }
        for _ in 0..wrong {
            let miss = if target == TARGET_MAX { TARGET_MIN } else { target + 1 };
            game.submit_guess(Guess::new(miss).expect("in range"));
        }
        let before = game.state().clone();
        game.pause();
        for _ in 0..10 {
            game.tick();
        }
        game.resume();
        prop_assert_eq!(game.state(), &before);
    }

    #[test]
    fn guess_parse_accepts_exactly_range(text in "\\PC{0,4}") {
        let expected = text
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| (i64::from(TARGET_MIN)..=i64::from(TARGET_MAX)).contains(v));
        let parsed = Guess::parse(&text).map(|g| i64::from(g.value()));
        // "+7" parses as u8 too; both sides agree on that.
        prop_assert_eq!(parsed, expected);
    }
}
