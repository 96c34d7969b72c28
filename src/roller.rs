//! ## Dice Roller
//! This module contains the dice simulation: rolling sums of dice, tallying many rolls into a
//! [MultiSet] and plotting the resulting distribution as a [Histogram]. Randomness comes from a
//! [UniformSource] owned by each [Roller], so seeded runs are reproducible.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, ensure_positive};
use crate::histogram::Histogram;
use crate::multi_set::MultiSet;

/// A source of uniformly distributed integers.
pub trait UniformSource {
    /// Produce a uniformly distributed value in `[0, bound)`. `bound` is at least one.
    fn next_uniform(&mut self, bound: u32) -> u32;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_uniform(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

/// Rolls dice using the random source `R`.
#[derive(Debug, Clone)]
pub struct Roller<R: UniformSource = StdRng> {
    source: R,
}

impl Roller<StdRng> {
    /// Create a roller whose rolls are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(StdRng::seed_from_u64(seed))
    }

    /// Create a roller seeded by the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_source(StdRng::from_os_rng())
    }
}

impl<R: UniformSource> Roller<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Roll `num_dice` dice with `num_sides` sides each and return the sum of all dice.
    pub fn roll(&mut self, num_dice: u32, num_sides: u32) -> Result<u64> {
        ensure_positive("num_dice", num_dice)?;
        ensure_positive("num_sides", num_sides)?;
        Ok(self.roll_unchecked(num_dice, num_sides))
    }

    fn roll_unchecked(&mut self, num_dice: u32, num_sides: u32) -> u64 {
        (0..num_dice)
            .map(|_| u64::from(self.source.next_uniform(num_sides)) + 1)
            .sum()
    }

    /// Perform `num_trials` rolls of `num_dice` dice with `num_sides` sides and tally how often
    /// each total came up.
    pub fn multi_roll(
        &mut self,
        num_trials: u32,
        num_dice: u32,
        num_sides: u32,
    ) -> Result<MultiSet<u64>> {
        ensure_positive("num_trials", num_trials)?;
        ensure_positive("num_dice", num_dice)?;
        ensure_positive("num_sides", num_sides)?;
        debug!("Rolling {num_dice}d{num_sides} {num_trials} times");

        let mut tally = MultiSet::new();
        for _ in 0..num_trials {
            tally.add(self.roll_unchecked(num_dice, num_sides));
        }
        debug!("Tallied {} distinct totals", tally.distinct().count());
        Ok(tally)
    }

    /// Run [Self::multi_roll] and summarize the result as a histogram where each mark stands for
    /// `scale` occurrences.
    pub fn histogram(
        &mut self,
        num_trials: u32,
        num_dice: u32,
        num_sides: u32,
        scale: u32,
    ) -> Result<Histogram> {
        ensure_positive("scale", scale)?;
        let tally = self.multi_roll(num_trials, num_dice, num_sides)?;
        Histogram::from_tally(&tally, num_trials, num_dice, num_sides, scale)
    }

    /// Like [Self::histogram] but additionally prints the rendered histogram to stdout as a
    /// single block. Nothing is printed if the arguments are rejected.
    pub fn plot_rolls(
        &mut self,
        num_trials: u32,
        num_dice: u32,
        num_sides: u32,
        scale: u32,
    ) -> Result<Histogram> {
        let histogram = self.histogram(num_trials, num_dice, num_sides, scale)?;
        let report = histogram.to_string();
        print!("{report}");
        Ok(histogram)
    }
}

#[cfg(test)]
mod test {
    use crate::error::RollError;

    use super::{Roller, UniformSource};

    // Replays a fixed list of draws, wrapping around at the end.
    struct Scripted {
        draws: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        fn new(draws: Vec<u32>) -> Self {
            Self { draws, pos: 0 }
        }
    }

    impl UniformSource for Scripted {
        fn next_uniform(&mut self, bound: u32) -> u32 {
            let draw = self.draws[self.pos % self.draws.len()];
            self.pos += 1;
            assert!(draw < bound);
            draw
        }
    }

    #[test]
    fn single_die_in_range() {
        let mut roller = Roller::seeded(42);
        for _ in 0..1000 {
            let total = roller.roll(1, 6).unwrap();
            assert!((1..=6).contains(&total));
        }
    }

    #[test]
    fn two_dice_in_range() {
        let mut roller = Roller::from_os_rng();
        for _ in 0..1000 {
            let total = roller.roll(2, 6).unwrap();
            assert!((2..=12).contains(&total));
        }
    }

    #[test]
    fn one_sided_dice() {
        let mut roller = Roller::seeded(1);
        assert_eq!(roller.roll(5, 1), Ok(5));
    }

    #[test]
    fn roll_sums_draws() {
        let mut roller = Roller::with_source(Scripted::new(vec![0, 5, 2]));
        assert_eq!(roller.roll(3, 6), Ok(1 + 6 + 3));
    }

    #[test]
    fn invalid_dice_are_rejected() {
        let mut roller = Roller::seeded(7);
        assert_eq!(
            roller.roll(0, 6),
            Err(RollError::InvalidArgument {
                name: "num_dice",
                value: 0
            })
        );
        assert_eq!(
            roller.roll(2, 0),
            Err(RollError::InvalidArgument {
                name: "num_sides",
                value: 0
            })
        );
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut r1 = Roller::seeded(1234);
        let mut r2 = Roller::seeded(1234);
        for (dice, sides) in [(1, 6), (3, 8), (10, 20), (2, 100)] {
            for _ in 0..50 {
                assert_eq!(r1.roll(dice, sides), r2.roll(dice, sides));
            }
        }
        assert_eq!(r1.multi_roll(200, 2, 6), r2.multi_roll(200, 2, 6));
    }

    #[test]
    fn multi_roll_tallies_every_trial() {
        let mut roller = Roller::seeded(99);
        let tally = roller.multi_roll(1000, 1, 6).unwrap();
        assert_eq!(tally.len(), 1000);
        assert!(tally.iter().all(|total| (1..=6).contains(total)));
        let counted: usize = (1..=6).map(|total| tally.count(&total)).sum();
        assert_eq!(counted, 1000);
    }

    #[test]
    fn multi_roll_rejects_invalid_arguments() {
        let mut roller = Roller::seeded(5);
        assert_eq!(
            roller.multi_roll(0, 1, 6),
            Err(RollError::InvalidArgument {
                name: "num_trials",
                value: 0
            })
        );
        assert!(roller.multi_roll(10, 0, 6).is_err());
        assert!(roller.multi_roll(10, 1, 0).is_err());
    }

    #[test]
    fn histogram_matches_tally() {
        let mut roller = Roller::seeded(2024);
        let histogram = roller.histogram(100, 1, 6, 10).unwrap();
        assert_eq!(histogram.rows().len(), 6);
        for row in histogram.rows() {
            assert_eq!(row.percentage, row.count as f64);
            assert_eq!(row.marks, row.count / 10);
            let label = format!("{} ({:.2}%)", row.total, row.count as f64);
            assert!(histogram.to_string().contains(&label));
        }
        let counted: usize = histogram.rows().iter().map(|row| row.count).sum();
        assert_eq!(counted, 100);
    }

    #[test]
    fn scripted_histogram() {
        // Totals 1, 1, 3, 6, 1.
        let mut roller = Roller::with_source(Scripted::new(vec![0, 0, 2, 5, 0]));
        let histogram = roller.histogram(5, 1, 6, 1).unwrap();
        let expected = "Rolling 1d6 5 Times\n\
                        1 (60.00%)  :###\n\
                        2 (0.00%)   :\n\
                        3 (20.00%)  :#\n\
                        4 (0.00%)   :\n\
                        5 (0.00%)   :\n\
                        6 (20.00%)  :#\n";
        assert_eq!(histogram.to_string(), expected);
    }

    #[test]
    fn plot_rolls() {
        let mut roller = Roller::seeded(3);
        assert!(roller.plot_rolls(10, 1, 6, 1).is_ok());
        assert_eq!(
            roller.plot_rolls(10, 1, 6, 0),
            Err(RollError::InvalidArgument {
                name: "scale",
                value: 0
            })
        );
    }

    #[test]
    fn rejected_histogram_consumes_no_draws() {
        let mut roller = Roller::with_source(Scripted::new(vec![4]));
        assert!(roller.histogram(10, 1, 6, 0).is_err());
        assert!(roller.histogram(10, 0, 6, 1).is_err());
        assert_eq!(roller.source.pos, 0);
    }
}
