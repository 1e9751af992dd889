//! Row and value types shared across the toll pipeline.
//!
//! Provides flat distance rows, vehicle classes with their toll coefficients,
//! rated rows, travel windows, and timestamped observation records.

pub mod day;
mod edge;
mod rates;
mod record;
mod window;

pub use edge::{CarRow, DistanceRow, LocationId};
pub use rates::{RatedRow, VehicleClass, VehicleRates};
pub use record::TimestampRecord;
pub use window::{TimeWindowedRow, TravelWindow};
