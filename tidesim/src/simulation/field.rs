//! Stylized gravity and tidal vector fields
//!
//! The field magnitude follows a logarithmic law rather than inverse-square
//! so that arrows drawn at a fixed screen scale stay legible whether the
//! secondary sits two or two hundred length units away.
//!
//! A [`FieldEvaluator`] borrows the body state immutably and validates the
//! geometry once; every query after that is a pure function of the point.

use serde::Deserialize;

use super::states::{CelestialBody, NVec3};
use crate::error::{SimError, SimResult};

/// Presentation settings for the field vectors
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FieldSettings {
    pub scale_factor: f64, // multiplies every field magnitude
    pub force_point_at_secondary: bool, // redirect gravity vectors at the secondary
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            force_point_at_secondary: false,
        }
    }
}

impl FieldSettings {
    pub fn validate(&self) -> SimResult<()> {
        if !self.scale_factor.is_finite() {
            return Err(SimError::InvalidConfiguration(format!(
                "field scale factor must be finite, got {}", self.scale_factor
            )));
        }
        Ok(())
    }
}

/// Separation at or below which the logarithmic law has no value
pub const MIN_FIELD_DISTANCE: f64 = 1.0;

/// Fail with `DegenerateGeometry` unless `distance` lies in the domain of the
/// logarithmic law
pub fn check_field_distance(distance: f64) -> SimResult<()> {
    if !distance.is_finite() || distance <= MIN_FIELD_DISTANCE {
        return Err(SimError::DegenerateGeometry(format!(
            "logarithmic field law needs a distance above {MIN_FIELD_DISTANCE}, got {distance}"
        )));
    }
    Ok(())
}

/// Field magnitude at `distance` from a body of mass `mass`:
/// `scale * G * mass / log10(distance)`
///
/// The law is undefined for `distance <= 1`, where the logarithm is zero or
/// negative.
pub fn log_field_magnitude(scale: f64, newton_g: f64, mass: f64, distance: f64) -> SimResult<f64> {
    check_field_distance(distance)?;
    Ok(scale * newton_g * mass / distance.log10())
}

pub struct FieldEvaluator<'a> {
    primary: &'a CelestialBody,
    secondary: &'a CelestialBody,
    settings: FieldSettings,
    gravity_at_cm: NVec3,
    magnitude_at_cm: f64,
}

impl<'a> FieldEvaluator<'a> {
    pub fn new(
        primary: &'a CelestialBody,
        secondary: &'a CelestialBody,
        newton_g: f64,
        settings: FieldSettings,
    ) -> SimResult<Self> {
        settings.validate()?;

        // r_cm: line of centers, primary -> secondary
        let r_cm = secondary.position - primary.position;
        let distance = r_cm.norm();
        if distance == 0.0 {
            return Err(SimError::DegenerateGeometry("primary and secondary coincide".into()));
        }
        if !(primary.radius.is_finite() && primary.radius > 0.0) {
            return Err(SimError::DegenerateGeometry(format!(
                "primary radius must be positive, got {}", primary.radius
            )));
        }

        let magnitude_at_cm = log_field_magnitude(settings.scale_factor, newton_g, secondary.mass, distance)?;
        let gravity_at_cm = magnitude_at_cm * (r_cm / distance);

        Ok(Self {
            primary,
            secondary,
            settings,
            gravity_at_cm,
            magnitude_at_cm,
        })
    }

    /// Gravity vector at the primary's center
    pub fn gravity_at_cm(&self) -> NVec3 {
        self.gravity_at_cm
    }

    /// Signed magnitude of the CM gravity vector, the reference for the tidal field
    pub fn magnitude_at_cm(&self) -> f64 {
        self.magnitude_at_cm
    }

    /// Gravity at `point`: the CM field plus the tidal correction at that point
    pub fn gravity(&self, point: NVec3) -> NVec3 {
        let g = self.gravity_at_cm + self.tidal(point);
        if !self.settings.force_point_at_secondary {
            return g;
        }

        // Keep the length, aim straight at the secondary. At the secondary's
        // own center there is no direction to aim along.
        match (self.secondary.position - point).try_normalize(f64::EPSILON) {
            Some(direction) => g.norm() * direction,
            None => g,
        }
    }

    /// Differential field at `point` relative to the primary's center
    ///
    /// Closed form of the tidal pattern in the xy plane: stretched along the
    /// line of centers (`2 cos theta`), squeezed across it (`-sin theta`).
    pub fn tidal(&self, point: NVec3) -> NVec3 {
        let big_r = point - self.primary.position;
        let theta = big_r.y.atan2(big_r.x);
        let magnitude = 0.25 * (big_r.norm() / self.primary.radius) * self.magnitude_at_cm;
        magnitude * NVec3::new(2.0 * theta.cos(), -theta.sin(), 0.0)
    }

    /// Evaluate gravity at every point; `out` must be as long as `points`
    pub fn gravity_into(&self, points: &[NVec3], out: &mut [NVec3]) {
        debug_assert_eq!(points.len(), out.len(), "output slice does not match the points");
        for (g, p) in out.iter_mut().zip(points.iter()) {
            *g = self.gravity(*p);
        }
    }

    /// Evaluate the tidal field at every point, as [`Self::gravity_into`]
    pub fn tidal_into(&self, points: &[NVec3], out: &mut [NVec3]) {
        debug_assert_eq!(points.len(), out.len(), "output slice does not match the points");
        for (t, p) in out.iter_mut().zip(points.iter()) {
            *t = self.tidal(*p);
        }
    }
}
