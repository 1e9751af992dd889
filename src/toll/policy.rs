//! Travel window assignment policies.
//!
//! - [`CyclicWindows`]: deterministic sweep over days and time bands
//! - [`FixedWindow`]: the same window for every row
//! - [`SeededWindows`]: seeded random sampling, reproducible per seed

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::schedule::TIME_BANDS;
use crate::models::day::WEEK;
use crate::models::{RatedRow, TravelWindow};

/// Assigns a travel window to each rated row.
///
/// Windows returned by a policy must satisfy the [`TravelWindow`] invariants.
pub trait WindowPolicy {
    /// Window for the row at position `index`.
    fn assign(&mut self, index: usize, row: &RatedRow) -> TravelWindow;
}

impl<P: WindowPolicy + ?Sized> WindowPolicy for &mut P {
    fn assign(&mut self, index: usize, row: &RatedRow) -> TravelWindow {
        (**self).assign(index, row)
    }
}

/// Same-day windows cycling through the time bands, then the days.
///
/// Row `i` gets band `i % 3` on day `(i / 3) % 7`, so 21 consecutive rows
/// cover the whole weekly schedule.
///
/// # Examples
///
/// ```
/// use jiff::civil::{time, Weekday};
/// use u_tolling::models::{DistanceRow, RatedRow};
/// use u_tolling::toll::{CyclicWindows, WindowPolicy};
///
/// let row = RatedRow::from_distance_row(&DistanceRow::new(1, 2, 5.0));
/// let mut policy = CyclicWindows;
/// let w = policy.assign(4, &row);
/// assert_eq!(w.start_day(), Weekday::Tuesday);
/// assert_eq!(w.start_time(), time(10, 0, 0, 0));
/// assert_eq!(w.end_time(), time(18, 0, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicWindows;

impl WindowPolicy for CyclicWindows {
    fn assign(&mut self, index: usize, _row: &RatedRow) -> TravelWindow {
        let band = &TIME_BANDS[index % TIME_BANDS.len()];
        let day = WEEK[(index / TIME_BANDS.len()) % WEEK.len()];
        TravelWindow::from_parts(day, day, band.start(), band.end())
    }
}

/// Assigns one window to every row.
#[derive(Debug, Clone, Copy)]
pub struct FixedWindow(pub TravelWindow);

impl WindowPolicy for FixedWindow {
    fn assign(&mut self, _index: usize, _row: &RatedRow) -> TravelWindow {
        self.0
    }
}

/// Random windows drawn from a seeded generator.
///
/// The start day is uniform over the week and the end day uniform over the
/// days from the start day on. The start time is a band start, and the end
/// time a band end strictly after it.
#[derive(Debug, Clone)]
pub struct SeededWindows {
    rng: StdRng,
}

impl SeededWindows {
    /// Creates a policy from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WindowPolicy for SeededWindows {
    fn assign(&mut self, _index: usize, _row: &RatedRow) -> TravelWindow {
        let start_day = self.rng.random_range(0..WEEK.len());
        let end_day = self.rng.random_range(start_day..WEEK.len());
        let start_band = self.rng.random_range(0..TIME_BANDS.len());
        // every band end at or after the start band is later than its start
        let end_band = self.rng.random_range(start_band..TIME_BANDS.len());
        TravelWindow::from_parts(
            WEEK[start_day],
            WEEK[end_day],
            TIME_BANDS[start_band].start(),
            TIME_BANDS[end_band].end(),
        )
    }
}
