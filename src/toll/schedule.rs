//! Time-of-day and weekend discount schedule.

use jiff::civil::{time, Time};
use tracing::{debug, instrument, Level};

use super::policy::{CyclicWindows, WindowPolicy};
use crate::models::day::is_weekend;
use crate::models::{RatedRow, TimeWindowedRow, TravelWindow};

/// A time-of-day band with its rate multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBand {
    start: Time,
    end: Time,
    factor: f64,
}

impl TimeBand {
    const fn new(start: Time, end: Time, factor: f64) -> Self {
        Self { start, end, factor }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns `true` if the window's times lie inside this band (inclusive).
    pub fn contains(&self, window: &TravelWindow) -> bool {
        window.start_time() >= self.start && window.end_time() <= self.end
    }
}

/// Daily bands, in order.
pub const TIME_BANDS: [TimeBand; 3] = [
    TimeBand::new(time(0, 0, 0, 0), time(10, 0, 0, 0), 0.8),
    TimeBand::new(time(10, 0, 0, 0), time(18, 0, 0, 0), 1.2),
    TimeBand::new(time(18, 0, 0, 0), time(23, 59, 59, 0), 0.8),
];

/// Extra multiplier for windows starting on Saturday or Sunday.
pub const WEEKEND_FACTOR: f64 = 0.7;

/// Combined multiplier for a window.
///
/// The band factor applies when the window fits inside a single band; a
/// window spanning several bands keeps `1.0`. The weekend factor compounds on
/// top.
///
/// # Examples
///
/// ```
/// use jiff::civil::{time, Weekday};
/// use u_tolling::models::TravelWindow;
/// use u_tolling::toll::discount_factor;
///
/// let tw = TravelWindow::new(
///     Weekday::Saturday,
///     Weekday::Saturday,
///     time(10, 0, 0, 0),
///     time(18, 0, 0, 0),
/// )
/// .unwrap();
/// assert!((discount_factor(&tw) - 0.84).abs() < 1e-10);
/// ```
pub fn discount_factor(window: &TravelWindow) -> f64 {
    let band = TIME_BANDS
        .iter()
        .find(|b| b.contains(window))
        .map_or(1.0, TimeBand::factor);
    if is_weekend(window.start_day()) {
        band * WEEKEND_FACTOR
    } else {
        band
    }
}

/// Places rated rows in travel windows and applies the discount schedule.
///
/// Window assignment is delegated to a [`WindowPolicy`], so the rate
/// adjustment itself is deterministic given the windows.
#[derive(Debug, Clone, Default)]
pub struct TimeWindowRateAdjuster<P = CyclicWindows> {
    policy: P,
}

impl<P: WindowPolicy> TimeWindowRateAdjuster<P> {
    /// Creates an adjuster with the given policy.
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Adjusts every row, in order.
    #[instrument(skip_all, level = Level::DEBUG, fields(rows = rows.len()))]
    pub fn adjust(&mut self, rows: &[RatedRow]) -> Vec<TimeWindowedRow> {
        let out: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let window = self.policy.assign(i, row);
                TimeWindowedRow::new(row, window, discount_factor(&window))
            })
            .collect();
        let weekend = out
            .iter()
            .filter(|r| is_weekend(r.window.start_day()))
            .count();
        debug!(rows = out.len(), weekend, "time-based rates applied");
        out
    }
}

/// Applies the discount schedule using [`CyclicWindows`].
pub fn calculate_time_based_toll_rates(rows: &[RatedRow]) -> Vec<TimeWindowedRow> {
    TimeWindowRateAdjuster::new(CyclicWindows).adjust(rows)
}

/// Applies the discount schedule with a caller-supplied window policy.
pub fn calculate_time_based_toll_rates_with<P: WindowPolicy>(
    rows: &[RatedRow],
    policy: P,
) -> Vec<TimeWindowedRow> {
    TimeWindowRateAdjuster::new(policy).adjust(rows)
}
