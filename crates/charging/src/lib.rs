//! Billable-days engine and charge-period arithmetic for Waterline.
//!
//! This crate holds the calendar logic behind abstraction charging:
//!
//! - `billable_days` - how many days of a billing period fall inside one or
//!   more recurring abstraction windows
//! - `splitter` - partitioning a charge period into contiguous sub-periods
//!   aligned to overlapping records such as agreements
//! - `merge_history` - folding adjacent equivalent history records into one
//!
//! Everything here is pure and synchronous; inputs are plain dates and the
//! results are deterministic.

pub mod billable_days;
pub mod error;
pub mod merge_history;
pub mod splitter;

#[cfg(test)]
mod props;

pub use billable_days::{abstraction_date_ranges, billable_days, total_days};
pub use error::ChargingError;
pub use merge_history::{RangedMut, merge_history};
pub use splitter::{SplitRange, split_by_overlap};
