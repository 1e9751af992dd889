//! Timestamped observation records.

use jiff::civil::{Time, Weekday};
use serde::{Deserialize, Serialize};

use super::day::serde_weekday;
use super::LocationId;

/// One observation of an `(id, id_2)` pair over a day/time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRecord {
    pub id: LocationId,
    pub id_2: LocationId,
    #[serde(with = "serde_weekday")]
    pub start_day: Weekday,
    pub start_time: Time,
    #[serde(with = "serde_weekday")]
    pub end_day: Weekday,
    pub end_time: Time,
}

impl TimestampRecord {
    /// The `(id, id_2)` key this record belongs to.
    pub fn pair(&self) -> (LocationId, LocationId) {
        (self.id, self.id_2)
    }
}
