//! Per-class toll rates from distance.

use crate::models::{DistanceRow, RatedRow};

/// Rates every row with the fixed vehicle-class coefficients.
///
/// Row order, ids and distance are kept as they are.
///
/// # Examples
///
/// ```
/// use u_tolling::models::DistanceRow;
/// use u_tolling::toll::calculate_toll_rate;
///
/// let rated = calculate_toll_rate(&[DistanceRow::new(1, 3, 25.0)]);
/// assert_eq!(rated[0].rates.moto, 20.0);
/// assert_eq!(rated[0].rates.truck, 90.0);
/// assert_eq!(rated[0].distance, 25.0);
/// ```
pub fn calculate_toll_rate(rows: &[DistanceRow]) -> Vec<RatedRow> {
    rows.iter().map(RatedRow::from_distance_row).collect()
}
