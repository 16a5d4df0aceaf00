//! Aggregation of the cleaned trip set.
//!
//! This module groups cleaned trips under two granularities, day and
//! day+hour, using explicit running-sum accumulators keyed through an
//! ordered map, and finalizes arithmetic means at emission time.

pub mod daily;
pub mod hourly;
pub mod types;
pub mod utility;
