//! Toll rates per vehicle class and time-window discounts.
//!
//! - [`calculate_toll_rate`]: fixed linear rate per class from distance
//! - [`calculate_time_based_toll_rates`]: day/time discount schedule over
//!   rated rows, with windows assigned by a [`WindowPolicy`]

mod policy;
mod rates;
mod schedule;

pub use policy::{CyclicWindows, FixedWindow, SeededWindows, WindowPolicy};
pub use rates::calculate_toll_rate;
pub use schedule::{
    calculate_time_based_toll_rates, calculate_time_based_toll_rates_with, discount_factor,
    TimeBand, TimeWindowRateAdjuster, TIME_BANDS, WEEKEND_FACTOR,
};
