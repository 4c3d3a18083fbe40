//! Physical quantities with units for configuration values, parsed from strings
//! such as `"-65 mV"` or `"0.1 mS/cm2"` and converted to the units used
//! internally by the neuron models.
//!
//! | Dimension | Internal unit |
//! |-----------|---------------|
//! | voltage | mV |
//! | time | ms |
//! | capacitance density | uF/cm2 |
//! | conductance density | mS/cm2 |
//! | current density | uA/cm2 |
//!
//! With these units `dV/dt` (mV/ms) is current density over capacitance density
//! without any additional scaling.

use std::{fmt::{Display, Formatter}, str::FromStr};
use serde::Deserialize;
use crate::error::ConfigurationError;


/// Physical dimension of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Voltage,
    Time,
    CapacitanceDensity,
    ConductanceDensity,
    CurrentDensity,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let name = match self {
            Dimension::Voltage => "voltage",
            Dimension::Time => "time",
            Dimension::CapacitanceDensity => "capacitance density",
            Dimension::ConductanceDensity => "conductance density",
            Dimension::CurrentDensity => "current density",
        };

        write!(f, "{}", name)
    }
}

// unit, dimension, scale to internal unit
const UNITS: &[(&str, Dimension, f32)] = &[
    ("V", Dimension::Voltage, 1e3),
    ("mV", Dimension::Voltage, 1.),
    ("uV", Dimension::Voltage, 1e-3),
    ("s", Dimension::Time, 1e3),
    ("ms", Dimension::Time, 1.),
    ("us", Dimension::Time, 1e-3),
    ("mF/cm2", Dimension::CapacitanceDensity, 1e3),
    ("uF/cm2", Dimension::CapacitanceDensity, 1.),
    ("nF/cm2", Dimension::CapacitanceDensity, 1e-3),
    ("S/cm2", Dimension::ConductanceDensity, 1e3),
    ("mS/cm2", Dimension::ConductanceDensity, 1.),
    ("uS/cm2", Dimension::ConductanceDensity, 1e-3),
    ("A/cm2", Dimension::CurrentDensity, 1e6),
    ("mA/cm2", Dimension::CurrentDensity, 1e3),
    ("uA/cm2", Dimension::CurrentDensity, 1.),
    ("nA/cm2", Dimension::CurrentDensity, 1e-3),
];

fn normalize_unit(unit: &str) -> String {
    unit.replace(['µ', 'μ'], "u")
        .replace("cm^2", "cm2")
        .replace("cm²", "cm2")
}

/// A value converted to its internal unit along with its dimension
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Quantity {
    /// Value in the internal unit of the dimension
    pub value: f32,
    /// Physical dimension
    pub dimension: Dimension,
}

impl Quantity {
    pub fn new(value: f32, dimension: Dimension) -> Self {
        Quantity { value, dimension }
    }

    /// Returns the value in internal units if the quantity has the expected dimension,
    /// `name` is used to report which quantity mismatched
    pub fn to(&self, name: &str, expected: Dimension) -> Result<f32, ConfigurationError> {
        if self.dimension != expected {
            return Err(
                ConfigurationError::UnitMismatch {
                    name: name.to_string(),
                    expected,
                    found: self.dimension,
                }
            );
        }

        Ok(self.value)
    }
}

impl FromStr for Quantity {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = s.trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| ConfigurationError::MalformedQuantity(s.to_string()))?;

        let value: f32 = value.parse()
            .map_err(|_| ConfigurationError::MalformedQuantity(s.to_string()))?;
        if !value.is_finite() {
            return Err(ConfigurationError::MalformedQuantity(s.to_string()));
        }

        let unit = normalize_unit(unit.trim());
        let (_, dimension, scale) = UNITS.iter()
            .find(|(name, _, _)| *name == unit)
            .ok_or(ConfigurationError::UnknownUnit(unit.clone()))?;

        Ok(Quantity::new(value * scale, *dimension))
    }
}

impl TryFrom<String> for Quantity {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
