//! ## Histograms
//! This module turns a tally of dice totals into the text histogram printed by
//! [crate::roller::Roller::plot_rolls]. Rendering only depends on the tally, so it can be tested
//! without any randomness involved. The key exported data structure is [Histogram].

use std::fmt;

use crate::error::{Result, ensure_positive};
use crate::multi_set::MultiSet;

/// Width of the `total (percentage%)` column, the colon follows right after it.
const LABEL_WIDTH: usize = 12;
const MARK: char = '#';

/// One line of the histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub total: u64,
    pub count: usize,
    /// Share of all trials that produced `total`, in percent.
    pub percentage: f64,
    /// Number of hash marks, `count / scale` rounded down.
    pub marks: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    num_trials: u32,
    num_dice: u32,
    num_sides: u32,
    rows: Vec<Row>,
}

impl Histogram {
    /// Build the histogram for `num_trials` rolls of `num_dice` dice with `num_sides` sides each,
    /// where `tally` contains the observed totals. There is one row for every possible total from
    /// `num_dice` to `num_dice * num_sides`, in ascending order.
    pub fn from_tally(
        tally: &MultiSet<u64>,
        num_trials: u32,
        num_dice: u32,
        num_sides: u32,
        scale: u32,
    ) -> Result<Self> {
        ensure_positive("num_trials", num_trials)?;
        ensure_positive("num_dice", num_dice)?;
        ensure_positive("num_sides", num_sides)?;
        ensure_positive("scale", scale)?;

        let min_total = u64::from(num_dice);
        let max_total = u64::from(num_dice) * u64::from(num_sides);
        let rows = (min_total..=max_total)
            .map(|total| {
                let count = tally.count(&total);
                Row {
                    total,
                    count,
                    percentage: count as f64 * 100.0 / f64::from(num_trials),
                    marks: count / scale as usize,
                }
            })
            .collect();

        Ok(Self {
            num_trials,
            num_dice,
            num_sides,
            rows,
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rolling {}d{} {} Times",
            self.num_dice, self.num_sides, self.num_trials
        )?;
        for row in &self.rows {
            // Ties round up, `{:.2}` alone would round them to even.
            let percentage = (row.percentage * 100.0).round() / 100.0;
            let label = format!("{} ({percentage:.2}%)", row.total);
            let marks: String = std::iter::repeat_n(MARK, row.marks).collect();
            writeln!(f, "{label:<LABEL_WIDTH$}:{marks}")?;
        }
        Ok(())
    }
}
