//! # u-tolling
//!
//! Toll network table transforms: all-pairs distance matrices from sparse
//! edges, unrolling back to rows, proximity filtering, vehicle-class toll
//! rates, and day/time discount schedules.
//!
//! ## Modules
//!
//! - [`models`] — Row types (DistanceRow, RatedRow, TimeWindowedRow, TravelWindow)
//! - [`distance`] — Distance matrix construction, closure, unrolling, car matrix
//! - [`proximity`] — Ids within a tolerance band of a reference id
//! - [`toll`] — Toll rates per vehicle class and time-window discounts
//! - [`coverage`] — Weekly completeness check over timestamped records
//! - [`table`] — Typed row extraction from headed comma-separated data
//!
//! ## Pipeline
//!
//! ```
//! use u_tolling::distance::{calculate_distance_matrix, unroll_distance_matrix};
//! use u_tolling::models::DistanceRow;
//! use u_tolling::toll::{calculate_time_based_toll_rates, calculate_toll_rate};
//!
//! let edges = vec![DistanceRow::new(1, 2, 10.0), DistanceRow::new(2, 3, 15.0)];
//! let matrix = calculate_distance_matrix(&edges).unwrap();
//! let rows = unroll_distance_matrix(&matrix);
//! let rated = calculate_toll_rate(&rows);
//! let windowed = calculate_time_based_toll_rates(&rated);
//! assert_eq!(windowed.len(), 6);
//! ```

pub mod coverage;
pub mod distance;
pub mod error;
#[cfg(feature = "json")]
pub mod export;
pub mod models;
pub mod proximity;
pub mod table;
pub mod toll;

pub use error::{Error, MalformedInput, Result};
