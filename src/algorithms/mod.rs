//! Pure occupancy computations.
//!
//! Everything in this module is synchronous, allocation-light, and free of
//! I/O; it is safe to call concurrently for different agents or ranges.

pub mod occupancy;

pub use occupancy::*;
