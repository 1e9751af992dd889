//! Proximity filtering around a reference location.

use std::collections::BTreeSet;

use tracing::{debug, instrument, warn, Level};

use crate::error::{Error, MalformedInput, Result};
use crate::models::{DistanceRow, LocationId};

/// Relative tolerance used by [`find_ids_within_ten_percentage_threshold`].
pub const TEN_PERCENT: f64 = 0.1;

/// Selects ids whose distances fall near a reference id's mean distance.
///
/// The band is `[(1 - tolerance) * mean, (1 + tolerance) * mean]`, inclusive
/// on both ends, where `mean` is the average distance of the rows starting at
/// the reference. Every row of the input is tested against the band, and the
/// distinct `id_start` values of matching rows are returned in ascending
/// order.
///
/// # Examples
///
/// ```
/// use u_tolling::models::DistanceRow;
/// use u_tolling::proximity::ProximityFilter;
///
/// let rows = vec![
///     DistanceRow::new(1, 2, 10.0),
///     DistanceRow::new(2, 1, 10.5),
///     DistanceRow::new(3, 1, 30.0),
/// ];
/// let ids = ProximityFilter::new().filter(&rows, 1).unwrap();
/// assert_eq!(ids, vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFilter {
    tolerance: f64,
}

impl Default for ProximityFilter {
    fn default() -> Self {
        Self {
            tolerance: TEN_PERCENT,
        }
    }
}

impl ProximityFilter {
    /// Creates a filter with a 10% tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative tolerance (0.1 = ±10%).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Relative tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Runs the filter.
    ///
    /// Fails with [`Error::InvalidReference`] if no row starts at
    /// `reference`, and with malformed input if the tolerance is negative or
    /// non-finite.
    #[instrument(skip_all, level = Level::DEBUG, fields(rows = rows.len(), reference = reference))]
    pub fn filter(&self, rows: &[DistanceRow], reference: LocationId) -> Result<Vec<LocationId>> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MalformedInput::InvalidTolerance(self.tolerance).into());
        }

        let (sum, count) = rows
            .iter()
            .filter(|r| r.id_start == reference)
            .fold((0.0, 0usize), |(s, c), r| (s + r.distance, c + 1));
        if count == 0 {
            return Err(Error::InvalidReference(reference));
        }
        let mean = sum / count as f64;
        if mean == 0.0 {
            warn!(reference, "reference mean distance is zero, band matches only zero rows");
        }
        let lower = mean * (1.0 - self.tolerance);
        let upper = mean * (1.0 + self.tolerance);

        let ids: BTreeSet<LocationId> = rows
            .iter()
            .filter(|r| r.distance >= lower && r.distance <= upper)
            .map(|r| r.id_start)
            .collect();
        debug!(mean, lower, upper, matched = ids.len(), "proximity band applied");
        Ok(ids.into_iter().collect())
    }
}

/// Ids within an arbitrary relative tolerance of the reference's mean distance.
pub fn find_ids_within_threshold(
    rows: &[DistanceRow],
    reference: LocationId,
    tolerance: f64,
) -> Result<Vec<LocationId>> {
    ProximityFilter::new()
        .with_tolerance(tolerance)
        .filter(rows, reference)
}

/// Ids within ±10% of the reference's mean distance.
pub fn find_ids_within_ten_percentage_threshold(
    rows: &[DistanceRow],
    reference: LocationId,
) -> Result<Vec<LocationId>> {
    ProximityFilter::new().filter(rows, reference)
}
