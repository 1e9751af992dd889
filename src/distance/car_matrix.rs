//! Car toll matrix pivot and rescaling.

use std::collections::HashSet;

use tracing::{debug, instrument, Level};

use super::CarMatrix;
use crate::error::{MalformedInput, Result};
use crate::models::CarRow;

/// Values above this are discounted by [`multiply_matrix`], others are raised.
const MULTIPLY_THRESHOLD: f64 = 20.0;
const ABOVE_FACTOR: f64 = 0.75;
const BELOW_FACTOR: f64 = 1.25;

/// Pivots `(id_1, id_2, car)` rows into a square matrix with `id_1` as rows
/// and `id_2` as columns.
///
/// The matrix spans the sorted union of both id columns. Pairs absent from
/// the input stay unknown and the diagonal is zero. A pair that appears twice
/// is rejected.
///
/// # Examples
///
/// ```
/// use u_tolling::distance::generate_car_matrix;
/// use u_tolling::models::CarRow;
///
/// let m = generate_car_matrix(&[CarRow::new(1, 2, 7.5), CarRow::new(2, 1, 8.0)]).unwrap();
/// assert_eq!(m.distance(1, 2), Some(7.5));
/// assert_eq!(m.distance(2, 1), Some(8.0));
/// assert_eq!(m.distance(1, 1), Some(0.0));
/// ```
#[instrument(skip_all, level = Level::DEBUG, fields(rows = rows.len()))]
pub fn generate_car_matrix(rows: &[CarRow]) -> Result<CarMatrix> {
    let mut seen = HashSet::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        if !row.car.is_finite() {
            return Err(MalformedInput::InvalidValue {
                column: "car".into(),
                row: idx,
                value: row.car.to_string(),
            }
            .into());
        }
        if !seen.insert((row.id_1, row.id_2)) {
            return Err(MalformedInput::DuplicatePair(row.id_1, row.id_2).into());
        }
    }

    let ids = rows.iter().flat_map(|r| [r.id_1, r.id_2]).collect();
    let mut matrix = CarMatrix::new(ids);
    for row in rows {
        if row.id_1 == row.id_2 {
            continue;
        }
        if let (Some(i), Some(j)) = (matrix.index_of(row.id_1), matrix.index_of(row.id_2)) {
            matrix.set(i, j, row.car);
        }
    }
    debug!(size = matrix.size(), "car matrix generated");
    Ok(matrix)
}

/// Rescales every known cell: values above 20 are multiplied by 0.75, the
/// rest by 1.25, then rounded to one decimal.
///
/// The threshold is checked against the original value, so no cell is scaled
/// twice. Unknown cells and the diagonal are left as they are.
pub fn multiply_matrix(matrix: &CarMatrix) -> CarMatrix {
    let mut out = matrix.clone();
    out.map_known(|v| {
        let factor = if v > MULTIPLY_THRESHOLD {
            ABOVE_FACTOR
        } else {
            BELOW_FACTOR
        };
        round_one_decimal(v * factor)
    });
    out
}

/// Rounds half to even, like tabular tooling does.
fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}
