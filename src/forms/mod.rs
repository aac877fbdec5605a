//! Request-shaped form structs and their validated payload conversions.

pub mod centers;
