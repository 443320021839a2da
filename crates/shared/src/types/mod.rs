//! Common value types shared by the charging and returns crates.

pub mod abstraction_period;
pub mod date_range;
pub mod ranged;

#[cfg(test)]
mod props;

pub use abstraction_period::AbstractionPeriod;
pub use date_range::{DateRange, OpenRange, merge_ranges};
pub use ranged::Ranged;
