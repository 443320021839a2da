//! Shared calendar types and errors for Waterline.
//!
//! This crate provides the building blocks used by the charging and returns
//! crates:
//! - Financial-year resolution and whole-day arithmetic
//! - Inclusive date ranges and their algebra (intersection, merging)
//! - The recurring abstraction-period descriptor
//! - Calendar error types

pub mod calendar;
pub mod error;
pub mod types;

pub use error::{DateError, DateResult};
pub use types::{AbstractionPeriod, DateRange, OpenRange, Ranged};
