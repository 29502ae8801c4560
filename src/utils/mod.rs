//! Utility modules shared by the classifiers and formatters.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Calendar arithmetic, parsing and date formatting
//! - [`interval`] - Rendering of elapsed seconds ("2 hrs 5 mins", "1d", "1:02:03")
//! - [`option`] - Conditional assignment and comparison of optional values
//! - [`seq`] - Non-panicking index access and uniqueness-preserving vector edits
//!
//! All utilities are pure functions apart from the in-place vector helpers,
//! and none of them panic on out-of-range input.

pub mod datetime;
pub mod interval;
pub mod option;
pub mod seq;
