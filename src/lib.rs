//! # Dice Tally
//! This library simulates repeated dice rolls and reports the distribution of the rolled totals.
//! The totals are tallied into a [multi_set::MultiSet], a small insertion-ordered multiset, and
//! [roller::Roller] renders the tally as a text histogram via [histogram::Histogram].

pub mod error;
pub mod histogram;
pub mod multi_set;
pub mod roller;
