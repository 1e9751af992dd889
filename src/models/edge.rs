//! Flat edge rows.

use serde::{Deserialize, Serialize};

use crate::error::MalformedInput;

/// Opaque location identifier (toll booth / node id in source data).
pub type LocationId = u64;

/// A `(id_start, id_end, distance)` row.
///
/// Used both for raw input edges (undirected) and for unrolled matrix rows
/// (directed).
///
/// # Examples
///
/// ```
/// use u_tolling::models::DistanceRow;
///
/// let row = DistanceRow::new(1001400, 1001402, 9.7);
/// assert!(row.validate().is_ok());
/// assert!(DistanceRow::new(1, 2, -1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
}

impl DistanceRow {
    /// Creates a new row.
    pub fn new(id_start: LocationId, id_end: LocationId, distance: f64) -> Self {
        Self {
            id_start,
            id_end,
            distance,
        }
    }

    /// Checks that the distance is finite and non-negative.
    pub fn validate(&self) -> Result<(), MalformedInput> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(MalformedInput::InvalidDistance {
                from: self.id_start,
                to: self.id_end,
                distance: self.distance,
            });
        }
        Ok(())
    }
}

/// A `(id_1, id_2, car)` row, input of the car matrix pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarRow {
    pub id_1: LocationId,
    pub id_2: LocationId,
    pub car: f64,
}

impl CarRow {
    /// Creates a new row.
    pub fn new(id_1: LocationId, id_2: LocationId, car: f64) -> Self {
        Self { id_1, id_2, car }
    }
}
