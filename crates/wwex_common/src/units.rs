// --- File: crates/wwex_common/src/units.rs ---
//! Physical measurements and unit normalization.
//!
//! Carriers mandate the unit system of every value they receive; SpeedShip
//! wants pounds and inches. [`ensure_unit_of_measure`] converts a measurement
//! only when its unit differs from the target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit of measure: '{0}'")]
    UnknownUnit(String),
    #[error("Cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },
}

/// What a unit measures. Conversion is only defined within one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Weight,
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
}

impl Unit {
    pub fn kind(self) -> UnitKind {
        match self {
            Unit::Pound | Unit::Ounce | Unit::Kilogram | Unit::Gram => UnitKind::Weight,
            Unit::Inch | Unit::Foot | Unit::Millimeter | Unit::Centimeter | Unit::Meter => {
                UnitKind::Length
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
        }
    }

    // Weights are expressed in kilograms, lengths in centimeters.
    fn base_factor(self) -> f64 {
        match self {
            Unit::Pound => 0.453_592_37,
            Unit::Ounce => 0.028_349_523_125,
            Unit::Kilogram => 1.0,
            Unit::Gram => 0.001,
            Unit::Inch => 2.54,
            Unit::Foot => 30.48,
            Unit::Millimeter => 0.1,
            Unit::Centimeter => 1.0,
            Unit::Meter => 100.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lb" => Ok(Unit::Pound),
            "oz" => Ok(Unit::Ounce),
            "kg" => Ok(Unit::Kilogram),
            "g" => Ok(Unit::Gram),
            "in" => Ok(Unit::Inch),
            "ft" => Ok(Unit::Foot),
            "mm" => Ok(Unit::Millimeter),
            "cm" => Ok(Unit::Centimeter),
            "m" => Ok(Unit::Meter),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// A value paired with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub number: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(number: f64, unit: Unit) -> Self {
        Self { number, unit }
    }

    /// Converts to `unit`. Fails when the two units measure different things.
    pub fn convert(&self, unit: Unit) -> Result<Measurement, UnitError> {
        if self.unit == unit {
            return Ok(*self);
        }
        if self.unit.kind() != unit.kind() {
            return Err(UnitError::IncompatibleUnits {
                from: self.unit,
                to: unit,
            });
        }
        let number = self.number * self.unit.base_factor() / unit.base_factor();
        Ok(Measurement::new(number, unit))
    }

    pub fn divide(&self, divisor: f64) -> Measurement {
        Measurement::new(self.number / divisor, self.unit)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.unit)
    }
}

/// Ensures a measurement's unit matches `unit`, converting when it does not.
pub fn ensure_unit_of_measure(measurement: Measurement, unit: Unit) -> Result<Measurement, UnitError> {
    if measurement.unit != unit {
        return measurement.convert(unit);
    }
    Ok(measurement)
}
