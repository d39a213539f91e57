//! Descriptive statistics engine
//!
//! Summary statistics and histogram binning over numeric sequences. The
//! engine is deliberately never fatal: empty input yields `None`, and the
//! degenerate corners of the higher moments (tiny samples, zero spread,
//! zero mean) collapse to a defined zero instead of an error. Deciding
//! whether a degenerate answer is acceptable belongs to the caller.
//!
//! # Example
//!
//! ```
//! use randlab::stats::basic_statistics;
//!
//! let report = basic_statistics(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(report.mean, 2.5);
//! assert_eq!(report.range, 3.0);
//! assert!(basic_statistics(&[]).is_none());
//! ```

pub mod descriptive;
pub mod histogram;

pub use descriptive::{basic_statistics, full_statistics, median, BasicStatistics, FullStatistics};
pub use histogram::{histogram, Histogram};
