//! Deformable shell and tidal bulge
//!
//! The shell is a surface layer (ocean) carried by the primary: it shares the
//! primary's center and spin and only has its own radius. When deformation is
//! on, both the primary and the shell are sheared into an ellipsoid whose long
//! axis follows the line of centers.

use serde::Deserialize;

use super::states::CelestialBody;
use crate::error::{SimError, SimResult};

/// Shear amplitude of the solid primary
pub const DEFAULT_BODY_AMPLITUDE: f64 = 0.15;
/// The ocean bulges further than the rock beneath it
pub const DEFAULT_SHELL_AMPLITUDE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
    pub radius: f64,
}

impl Shell {
    pub fn new(radius: f64) -> SimResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "shell radius must be positive, got {radius}"
            )));
        }
        Ok(Self { radius })
    }
}

/// Amplitudes of the tidal deformation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Deformation {
    pub body_amplitude: f64,
    pub shell_amplitude: f64,
}

impl Default for Deformation {
    fn default() -> Self {
        Self {
            body_amplitude: DEFAULT_BODY_AMPLITUDE,
            shell_amplitude: DEFAULT_SHELL_AMPLITUDE,
        }
    }
}

impl Deformation {
    pub fn validate(&self) -> SimResult<()> {
        for (name, amplitude) in [("body", self.body_amplitude), ("shell", self.shell_amplitude)] {
            if !(amplitude.is_finite() && amplitude >= 0.0) {
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} bulge amplitude must be non-negative, got {amplitude}"
                )));
            }
        }
        Ok(())
    }
}

/// Shear to apply in the primary's local xz plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidalBulge {
    pub amplitude: f64,
    pub angle: f64, // radians
}

/// Shear angle in the primary's frame: twice the bearing of the secondary,
/// offset by the primary's spin (about -y)
pub fn bulge_angle(primary: &CelestialBody, secondary: &CelestialBody) -> f64 {
    let d = secondary.position - primary.position;
    let spin = -primary.rotation.to_radians();
    2.0 * (d.z.atan2(d.x) + spin)
}
