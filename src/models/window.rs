//! Travel windows and time-windowed rows.

use jiff::civil::{Time, Weekday};
use serde::{Deserialize, Serialize};

use super::day::{day_index, day_name, serde_weekday};
use super::{LocationId, RatedRow, VehicleRates};
use crate::error::MalformedInput;

/// A day/time window during which a trip takes place.
///
/// The end day is never earlier in the week than the start day, and the end
/// time is strictly later than the start time.
///
/// # Examples
///
/// ```
/// use jiff::civil::{time, Weekday};
/// use u_tolling::models::TravelWindow;
///
/// let tw = TravelWindow::new(
///     Weekday::Monday,
///     Weekday::Friday,
///     time(10, 0, 0, 0),
///     time(18, 0, 0, 0),
/// )
/// .unwrap();
/// assert_eq!(tw.start_day(), Weekday::Monday);
///
/// // end time before start time
/// assert!(TravelWindow::new(
///     Weekday::Monday,
///     Weekday::Monday,
///     time(18, 0, 0, 0),
///     time(10, 0, 0, 0),
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTravelWindow")]
pub struct TravelWindow {
    #[serde(with = "serde_weekday")]
    start_day: Weekday,
    #[serde(with = "serde_weekday")]
    end_day: Weekday,
    start_time: Time,
    end_time: Time,
}

impl TravelWindow {
    /// Creates a new window.
    pub fn new(
        start_day: Weekday,
        end_day: Weekday,
        start_time: Time,
        end_time: Time,
    ) -> Result<Self, MalformedInput> {
        if day_index(end_day) < day_index(start_day) {
            return Err(MalformedInput::InvalidWindow(format!(
                "end day {} is before start day {}",
                day_name(end_day),
                day_name(start_day)
            )));
        }
        if end_time <= start_time {
            return Err(MalformedInput::InvalidWindow(format!(
                "end time {end_time} is not after start time {start_time}"
            )));
        }
        Ok(Self {
            start_day,
            end_day,
            start_time,
            end_time,
        })
    }

    /// Builds a window the caller already knows to be valid.
    pub(crate) fn from_parts(
        start_day: Weekday,
        end_day: Weekday,
        start_time: Time,
        end_time: Time,
    ) -> Self {
        debug_assert!(day_index(end_day) >= day_index(start_day));
        debug_assert!(end_time > start_time);
        Self {
            start_day,
            end_day,
            start_time,
            end_time,
        }
    }

    pub fn start_day(&self) -> Weekday {
        self.start_day
    }

    pub fn end_day(&self) -> Weekday {
        self.end_day
    }

    pub fn start_time(&self) -> Time {
        self.start_time
    }

    pub fn end_time(&self) -> Time {
        self.end_time
    }
}

/// Unchecked wire form of a [`TravelWindow`].
#[derive(Deserialize)]
struct RawTravelWindow {
    #[serde(with = "serde_weekday")]
    start_day: Weekday,
    #[serde(with = "serde_weekday")]
    end_day: Weekday,
    start_time: Time,
    end_time: Time,
}

impl TryFrom<RawTravelWindow> for TravelWindow {
    type Error = MalformedInput;

    fn try_from(raw: RawTravelWindow) -> Result<Self, Self::Error> {
        TravelWindow::new(raw.start_day, raw.end_day, raw.start_time, raw.end_time)
    }
}

/// A rated row placed in a travel window, rates already discounted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindowedRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
    #[serde(flatten)]
    pub window: TravelWindow,
    #[serde(flatten)]
    pub rates: VehicleRates,
}

impl TimeWindowedRow {
    /// Places `row` in `window`, scaling its rates by `factor`.
    pub fn new(row: &RatedRow, window: TravelWindow, factor: f64) -> Self {
        Self {
            id_start: row.id_start,
            id_end: row.id_end,
            distance: row.distance,
            window,
            rates: row.rates.scaled(factor),
        }
    }
}
