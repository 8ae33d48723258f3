//! Aggregation of sample records into per-size counter sums.
//!
//! This module provides:
//! - Fixed-length counter vectors with element-wise addition
//! - The dump view of a sample (target vector plus pirate vectors)
//! - A keyed aggregator that sums dumps sharing a size

pub mod counters;
pub mod samples;

// Re-export main types
pub use counters::{CounterVector, Dump};
pub use samples::SampleAggregator;
