//! Matrix unrolling back to flat rows.

use tracing::{debug, instrument, Level};

use super::DistanceMatrix;
use crate::models::DistanceRow;

/// Flattens a matrix into one `(id_start, id_end, distance)` row per ordered
/// pair of distinct ids, rows first then columns, in the matrix's id order.
///
/// A matrix of size `n` always yields `n * (n - 1)` rows. Unknown cells
/// unroll with distance `0.0`.
///
/// # Examples
///
/// ```
/// use u_tolling::distance::{calculate_distance_matrix, unroll_distance_matrix};
/// use u_tolling::models::DistanceRow;
///
/// let dm = calculate_distance_matrix(&[DistanceRow::new(1, 2, 5.0)]).unwrap();
/// let rows = unroll_distance_matrix(&dm);
/// assert_eq!(rows, vec![DistanceRow::new(1, 2, 5.0), DistanceRow::new(2, 1, 5.0)]);
/// ```
#[instrument(skip_all, level = Level::DEBUG)]
pub fn unroll_distance_matrix(matrix: &DistanceMatrix) -> Vec<DistanceRow> {
    let ids = matrix.ids();
    let n = ids.len();
    let mut rows = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, &id_start) in ids.iter().enumerate() {
        for (j, &id_end) in ids.iter().enumerate() {
            if i != j {
                rows.push(DistanceRow::new(id_start, id_end, matrix.get(i, j)));
            }
        }
    }
    debug!(size = n, rows = rows.len(), "matrix unrolled");
    rows
}
