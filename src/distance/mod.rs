//! Distance matrices.
//!
//! Builds a symmetric all-pairs distance matrix from sparse edges with
//! transitive closure, unrolls it back to flat rows, and pivots car toll
//! tables into the same square layout.

mod builder;
mod car_matrix;
mod matrix;
mod unroll;

pub use builder::{calculate_distance_matrix, ClosureMode, DistanceMatrixBuilder};
pub use car_matrix::{generate_car_matrix, multiply_matrix};
pub use matrix::{CarMatrix, DistanceMatrix};
pub use unroll::unroll_distance_matrix;
