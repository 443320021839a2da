//! Returns-cycle scheduling and line generation for Waterline.
//!
//! Water-abstraction returns are reported against yearly cycles (winter
//! cycles run 1 April - 31 March, summer cycles 1 November - 31 October)
//! and broken down into daily, weekly, monthly or annual lines. This crate
//! generates those cycles and lines, and classifies dates and seasons
//! against recurring abstraction periods.

pub mod abstraction;
pub mod cycles;
pub mod error;
pub mod lines;

pub use abstraction::{ChargeSeason, date_in_period, period_within, season};
pub use cycles::{ReturnCycle, next_cycle, period_end, period_start, return_cycles};
pub use error::ReturnsError;
pub use lines::{Frequency, NALD_WEEK_START, ReturnLine, required_lines};
