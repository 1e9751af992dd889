//! Vehicle classes and rated rows.

use serde::{Deserialize, Serialize};

use super::{DistanceRow, LocationId};

/// Vehicle class with its fixed per-distance toll coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Moto,
    Car,
    Rv,
    Bus,
    Truck,
}

impl VehicleClass {
    /// All classes in column order.
    pub const ALL: [VehicleClass; 5] = [
        VehicleClass::Moto,
        VehicleClass::Car,
        VehicleClass::Rv,
        VehicleClass::Bus,
        VehicleClass::Truck,
    ];

    /// Toll per unit distance.
    pub fn coefficient(self) -> f64 {
        match self {
            VehicleClass::Moto => 0.8,
            VehicleClass::Car => 1.2,
            VehicleClass::Rv => 1.5,
            VehicleClass::Bus => 2.2,
            VehicleClass::Truck => 3.6,
        }
    }

    /// Column name in output tables.
    pub fn column(self) -> &'static str {
        match self {
            VehicleClass::Moto => "moto",
            VehicleClass::Car => "car",
            VehicleClass::Rv => "rv",
            VehicleClass::Bus => "bus",
            VehicleClass::Truck => "truck",
        }
    }
}

/// One toll value per vehicle class.
///
/// # Examples
///
/// ```
/// use u_tolling::models::{VehicleClass, VehicleRates};
///
/// let rates = VehicleRates::from_distance(25.0);
/// assert_eq!(rates.get(VehicleClass::Car), 30.0);
/// let discounted = rates.scaled(0.5);
/// assert_eq!(discounted.truck, 45.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleRates {
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl VehicleRates {
    /// Base rates for a distance.
    pub fn from_distance(distance: f64) -> Self {
        Self {
            moto: VehicleClass::Moto.coefficient() * distance,
            car: VehicleClass::Car.coefficient() * distance,
            rv: VehicleClass::Rv.coefficient() * distance,
            bus: VehicleClass::Bus.coefficient() * distance,
            truck: VehicleClass::Truck.coefficient() * distance,
        }
    }

    /// Rate for a single class.
    pub fn get(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }

    /// Every class multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            moto: self.moto * factor,
            car: self.car * factor,
            rv: self.rv * factor,
            bus: self.bus * factor,
            truck: self.truck * factor,
        }
    }
}

/// A distance row with its per-class toll rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatedRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
    #[serde(flatten)]
    pub rates: VehicleRates,
}

impl RatedRow {
    /// Rates a distance row with the fixed class coefficients.
    pub fn from_distance_row(row: &DistanceRow) -> Self {
        Self {
            id_start: row.id_start,
            id_end: row.id_end,
            distance: row.distance,
            rates: VehicleRates::from_distance(row.distance),
        }
    }
}
