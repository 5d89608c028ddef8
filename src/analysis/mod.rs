//! Analysis modules.
//!
//! The two pure aggregators that turn the shared dataset plus the current
//! selection into display-ready chart series.

pub mod aggregator;

pub use aggregator::*;
