//! Random source for the computer opponent.

use std::collections::VecDeque;

/// Uniform draws consumed by the opponent policy.
///
/// Every [`rand::Rng`] is a `Dice`. [`ScriptedDice`] replays fixed draws.
pub trait Dice {
    /// A uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> Dice for R {
    fn roll(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Dice that replay queued values, for deterministic play.
///
/// Once a queue runs dry, rolls return `0.0` (the random-move branch) and
/// picks return `0`. Picks are clamped into range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    /// Creates dice with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues roll values.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queues pick values.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scripted_dice_replays_then_defaults() {
        let mut dice = ScriptedDice::new().with_rolls([0.9]).with_picks([3, 42]);
        assert_eq!(dice.roll(), 0.9);
        assert_eq!(dice.roll(), 0.0);
        assert_eq!(dice.pick(5), 3);
        assert_eq!(dice.pick(5), 4);
        assert_eq!(dice.pick(5), 0);
    }

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=9 {
            let roll = rng.roll();
            assert!((0.0..1.0).contains(&roll));
            assert!(rng.pick(len) < len);
        }
    }
}
