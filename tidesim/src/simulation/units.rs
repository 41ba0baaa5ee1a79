//! Unit systems for the demonstrations
//!
//! Every scene picks a (time, length, mass) basis so that the numbers it works
//! with stay close to 1: months and Earth radii for the Earth–Moon orbit, days
//! and Earth radii for the tidal field views, and so on. [`UnitSystem`] turns a
//! basis into the scaled gravitational constant `G` and into the handful of
//! reference quantities (Earth mass, lunar distance, ...) the presets need.
//!
//! Unit names are parsed with [`FromStr`] (CLI overrides) or serde (YAML);
//! anything unrecognized is rejected with [`SimError::InvalidUnit`].

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{SimError, SimResult};

/// Newton's gravitational constant in SI units (m^3 kg^-1 s^-2)
pub const NEWTON_G_SI: f64 = 6.674_30e-11;

pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Sidereal month
pub const SECONDS_PER_MONTH: f64 = 27.321_661 * SECONDS_PER_DAY;
/// Julian year
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

pub const EARTH_RADIUS_M: f64 = 6.371e6;
pub const LUNAR_DISTANCE_M: f64 = 3.844e8;
pub const ASTRONOMICAL_UNIT_M: f64 = 1.495_978_707e11;
pub const LUNAR_RADIUS_M: f64 = 1.737_4e6;

pub const EARTH_MASS_KG: f64 = 5.972_2e24;
pub const LUNAR_MASS_KG: f64 = 7.342e22;
pub const SOLAR_MASS_KG: f64 = 1.988_92e30;

/// Sidereal day
pub const EARTH_ROTATION_PERIOD_S: f64 = 86_164.090_5;

/// Time unit of a simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitTime {
    Second,
    Hour,
    Day,
    Month,
    Year,
}

/// Length unit of a simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitLength {
    Meter,
    #[serde(alias = "body_radius")]
    EarthRadius,
    #[serde(alias = "secondary_distance")]
    LunarDistance,
    #[serde(alias = "au")]
    AstronomicalUnit,
}

/// Mass unit of a simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitMass {
    Kilogram,
    #[serde(alias = "primary_mass")]
    EarthMass,
    #[serde(alias = "secondary_mass")]
    LunarMass,
    #[serde(alias = "stellar_mass")]
    SolarMass,
}

impl UnitTime {
    /// Length of one unit in seconds
    pub fn seconds(self) -> f64 {
        match self {
            UnitTime::Second => 1.0,
            UnitTime::Hour => SECONDS_PER_HOUR,
            UnitTime::Day => SECONDS_PER_DAY,
            UnitTime::Month => SECONDS_PER_MONTH,
            UnitTime::Year => SECONDS_PER_YEAR,
        }
    }
}

impl UnitLength {
    /// Length of one unit in meters
    pub fn meters(self) -> f64 {
        match self {
            UnitLength::Meter => 1.0,
            UnitLength::EarthRadius => EARTH_RADIUS_M,
            UnitLength::LunarDistance => LUNAR_DISTANCE_M,
            UnitLength::AstronomicalUnit => ASTRONOMICAL_UNIT_M,
        }
    }
}

impl UnitMass {
    /// Mass of one unit in kilograms
    pub fn kilograms(self) -> f64 {
        match self {
            UnitMass::Kilogram => 1.0,
            UnitMass::EarthMass => EARTH_MASS_KG,
            UnitMass::LunarMass => LUNAR_MASS_KG,
            UnitMass::SolarMass => SOLAR_MASS_KG,
        }
    }
}

impl FromStr for UnitTime {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "second" | "s" => Ok(UnitTime::Second),
            "hour" | "h" => Ok(UnitTime::Hour),
            "day" | "d" => Ok(UnitTime::Day),
            "month" => Ok(UnitTime::Month),
            "year" | "yr" => Ok(UnitTime::Year),
            other => Err(SimError::InvalidUnit(format!("unknown time unit '{other}'"))),
        }
    }
}

impl FromStr for UnitLength {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meter" | "m" => Ok(UnitLength::Meter),
            "earth_radius" | "body_radius" => Ok(UnitLength::EarthRadius),
            "lunar_distance" | "secondary_distance" => Ok(UnitLength::LunarDistance),
            "astronomical_unit" | "au" => Ok(UnitLength::AstronomicalUnit),
            other => Err(SimError::InvalidUnit(format!("unknown length unit '{other}'"))),
        }
    }
}

impl FromStr for UnitMass {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kilogram" | "kg" => Ok(UnitMass::Kilogram),
            "earth_mass" | "primary_mass" => Ok(UnitMass::EarthMass),
            "lunar_mass" | "secondary_mass" => Ok(UnitMass::LunarMass),
            "solar_mass" | "stellar_mass" => Ok(UnitMass::SolarMass),
            other => Err(SimError::InvalidUnit(format!("unknown mass unit '{other}'"))),
        }
    }
}

/// `G` expressed in the given basis
///
/// G has dimensions L^3 M^-1 T^-2, so the SI value is scaled by
/// `kg_per_unit * s_per_unit^2 / m_per_unit^3`.
pub fn compute_g(time: UnitTime, length: UnitLength, mass: UnitMass) -> f64 {
    let t = time.seconds();
    let l = length.meters();
    NEWTON_G_SI * mass.kilograms() * t * t / (l * l * l)
}

/// A (time, length, mass) basis
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSystem {
    pub time: UnitTime,
    pub length: UnitLength,
    pub mass: UnitMass,
}

impl UnitSystem {
    pub fn new(time: UnitTime, length: UnitLength, mass: UnitMass) -> Self {
        Self { time, length, mass }
    }

    /// Parse a basis from unit names, e.g. `("month", "earth_radius", "earth_mass")`
    pub fn parse(time: &str, length: &str, mass: &str) -> SimResult<Self> {
        Ok(Self::new(time.parse()?, length.parse()?, mass.parse()?))
    }

    pub fn newton_g(&self) -> f64 {
        compute_g(self.time, self.length, self.mass)
    }

    pub fn earth_mass(&self) -> f64 {
        EARTH_MASS_KG / self.mass.kilograms()
    }

    pub fn lunar_mass(&self) -> f64 {
        LUNAR_MASS_KG / self.mass.kilograms()
    }

    pub fn earth_radius(&self) -> f64 {
        EARTH_RADIUS_M / self.length.meters()
    }

    pub fn lunar_radius(&self) -> f64 {
        LUNAR_RADIUS_M / self.length.meters()
    }

    pub fn lunar_distance(&self) -> f64 {
        LUNAR_DISTANCE_M / self.length.meters()
    }

    pub fn earth_rotation_period(&self) -> f64 {
        EARTH_ROTATION_PERIOD_S / self.time.seconds()
    }
}

impl Default for UnitSystem {
    /// Months, Earth radii and Earth masses, the Earth–Moon orbit basis
    fn default() -> Self {
        Self::new(UnitTime::Month, UnitLength::EarthRadius, UnitMass::EarthMass)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}/{:?}", self.time, self.length, self.mass)
    }
}
