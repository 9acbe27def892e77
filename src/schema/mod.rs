//! # Trajectory Schema Definition
//!
//! This module defines the Apache Arrow schema used for trajectory tables.
//!
//! A trajectory table stores one sample of a simulated phase-space path per row,
//! in time order:
//!
//! | Column | Type | Description | Quantity |
//! |--------|------|-------------|----------|
//! | t | Float64 | Sample time | time |
//! | x | Float64 | Horizontal position | position |
//! | y | Float64 | Vertical position | position |
//! | px | Float64 | Horizontal momentum | momentum |
//! | py | Float64 | Vertical momentum | momentum |
//!
//! Readers only look columns up by name, so files with extra columns, a different
//! column order, or other numeric widths are accepted as long as the columns that
//! get extracted exist.

mod builders;
/// Trajectory column name constants.
pub mod columns;
mod constants;

#[cfg(test)]
mod tests;

pub use builders::{create_trajectory_schema, create_trajectory_schema_arc};
pub use columns::*;
pub use constants::*;
