//! Consumers built on top of the record stream
//!
//! Aggregation only reads records; it never alters decoding.

mod counter;

pub use counter::{count_by_field, count_violations, VEHICLE_MAKE};
