//! Core state types for the two-body demonstrations.
//!
//! Defines the body record and its read-only views:
//! - `CelestialBody` - kinematic and physical state of one body
//! - `BodyInit`      - configured initial values for a body
//! - `BodyId` / `BodyState` - snapshot handed to the presentation layer

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub position: NVec3, // center, world space
    pub mass: f64, // simulation mass unit, > 0
    pub radius: f64, // simulation length unit, >= 0
    pub rotation_period: f64, // time for one self-rotation
    pub rotation: f64, // accumulated spin about -y, degrees in [0, 360)
}

impl CelestialBody {
    /// Advance the self-rotation by `dt`, independent of any orbital motion
    pub fn spin(&mut self, dt: f64) {
        let delta = dt * 360.0 / self.rotation_period;
        self.rotation = (self.rotation + delta).rem_euclid(360.0);
    }
}

/// Configured initial values for a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInit {
    pub position: NVec3,
    pub mass: f64,
    pub radius: f64,
    /// `None` locks the body's spin to the orbital period
    pub rotation_period: Option<f64>,
    pub rotation: f64, // initial spin angle, degrees
    pub spinning: bool,
}

impl BodyInit {
    pub fn new(position: NVec3, mass: f64, radius: f64) -> Self {
        Self {
            position,
            mass,
            radius,
            rotation_period: None,
            rotation: 0.0,
            spinning: false,
        }
    }

    pub fn with_rotation_period(mut self, period: f64) -> Self {
        self.rotation_period = Some(period);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn spinning(mut self, spinning: bool) -> Self {
        self.spinning = spinning;
        self
    }

    /// Check the configured values; `name` only labels the error
    pub fn validate(&self, name: &str) -> SimResult<()> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(SimError::InvalidConfiguration(format!("{name}: position must be finite")));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidConfiguration(format!("{name}: mass must be positive, got {}", self.mass)));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SimError::InvalidConfiguration(format!("{name}: radius must be positive, got {}", self.radius)));
        }
        if let Some(period) = self.rotation_period {
            if !(period.is_finite() && period > 0.0) {
                return Err(SimError::InvalidConfiguration(format!(
                    "{name}: rotation period must be positive, got {period}"
                )));
            }
        }
        if !self.rotation.is_finite() {
            return Err(SimError::InvalidConfiguration(format!("{name}: rotation must be finite")));
        }
        Ok(())
    }

    /// Build the runtime body, falling back to `locked_period` when no
    /// rotation period was configured
    pub fn to_body(&self, locked_period: f64) -> CelestialBody {
        CelestialBody {
            position: self.position,
            mass: self.mass,
            radius: self.radius,
            rotation_period: self.rotation_period.unwrap_or(locked_period),
            rotation: self.rotation.rem_euclid(360.0),
        }
    }
}

/// Which body a snapshot refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Primary,
    Secondary,
    /// Deformable layer on the primary (ocean)
    Shell,
}

/// Read-only snapshot of a body between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: NVec3,
    pub rotation: f64, // degrees
}
