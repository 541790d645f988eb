//! Target sources: where a round's secret number comes from.
//!
//! The controller only sees the [`TargetSource`] trait, so tests can
//! script exact targets while the binary draws them from a ChaCha8 RNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::state::{TARGET_MAX, TARGET_MIN};

/// Uniform generator over `[TARGET_MIN, TARGET_MAX]`.
pub trait TargetSource: Send {
    fn next_target(&mut self) -> u8;
}

impl<T: TargetSource + ?Sized> TargetSource for Box<T> {
    fn next_target(&mut self) -> u8 {
        (**self).next_target()
    }
}

/// ChaCha8-backed target source.
#[derive(Clone, Debug)]
pub struct RandomTarget {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl RandomTarget {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Same seed, same sequence of targets.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl TargetSource for RandomTarget {
    fn next_target(&mut self) -> u8 {
        self.inner.gen_range(TARGET_MIN..=TARGET_MAX)
    }
}

/// Replays a fixed list of targets, then repeats the last one.
///
/// Values are clamped into range so a script can never produce an
/// impossible round.
#[derive(Clone, Debug)]
pub struct ScriptedTargets {
    targets: Vec<u8>,
    cursor: usize,
}

impl ScriptedTargets {
    pub fn new(targets: impl IntoIterator<Item = u8>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl TargetSource for ScriptedTargets {
    fn next_target(&mut self) -> u8 {
        let value = match self.targets.get(self.cursor) {
            Some(value) => {
                self.cursor += 1;
                *value
            }
            None => self.targets.last().copied().unwrap_or(TARGET_MIN),
        };
        value.clamp(TARGET_MIN, TARGET_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_targets_stay_in_range() {
        let mut source = RandomTarget::seeded(42);
        for _ in 0..1_000 {
            let target = source.next_target();
            assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
        }
    }

    #[test]
    fn random_targets_cover_range() {
        let mut source = RandomTarget::seeded(7);
        let mut seen = [false; TARGET_MAX as usize + 1];
        for _ in 0..1_000 {
            seen[source.next_target() as usize] = true;
        }
        assert!(seen[TARGET_MIN as usize..].iter().all(|hit| *hit));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomTarget::seeded(99);
        let mut b = RandomTarget::seeded(99);
        let left: Vec<u8> = (0..20).map(|_| a.next_target()).collect();
        let right: Vec<u8> = (0..20).map(|_| b.next_target()).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), Some(99));
    }

    #[test]
    fn scripted_repeats_last_and_clamps() {
        let mut source = ScriptedTargets::new([3, 42]);
        assert_eq!(source.next_target(), 3);
        assert_eq!(source.next_target(), TARGET_MAX);
        assert_eq!(source.next_target(), TARGET_MAX);
    }

    #[test]
    fn empty_script_yields_minimum() {
        let mut source = ScriptedTargets::new([]);
        assert_eq!(source.next_target(), TARGET_MIN);
    }
}
