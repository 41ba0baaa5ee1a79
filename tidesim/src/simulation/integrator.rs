//! Fixed-radius kinematic orbit integrator
//!
//! Advances the secondary around the primary by rotating it in the primary's
//! equatorial (xz) plane. Only the angle is integrated; the radius is carried
//! forward from the current separation, and the secondary is snapped back to
//! its initial position once per orbital period to bound the drift.

use std::f64::consts::PI;

use log::debug;

use super::field::check_field_distance;
use super::params::{Parameters, ResetPolicy};
use super::states::{CelestialBody, NVec3};
use crate::error::{SimError, SimResult};

/// Relative slack when deciding that a full period has elapsed, so that
/// `k` ticks of `period / k` count as one period despite rounding
const PERIOD_TOLERANCE: f64 = 1e-9;

/// Orbital period of a circular orbit of radius `r` around mass `m`
pub fn circular_period(newton_g: f64, m: f64, r: f64) -> f64 {
    2.0 * PI * (r.powi(3) / (newton_g * m)).sqrt()
}

#[derive(Debug, Clone)]
pub struct OrbitalIntegrator {
    substeps: usize,
    reset_policy: ResetPolicy,
    initial_secondary_position: NVec3,
    orbital_radius: f64,
    angular_momentum: f64,
    period: f64,
    elapsed_since_reset: f64,
}

impl OrbitalIntegrator {
    /// Capture the orbit from the current body positions
    ///
    /// Fails with `InvalidConfiguration` for a non-positive primary mass or
    /// `G`, and with `DegenerateGeometry` when the separation is outside the
    /// domain of the field law (`|r| <= 1`).
    pub fn new(primary: &CelestialBody, secondary: &CelestialBody, newton_g: f64, params: &Parameters) -> SimResult<Self> {
        if params.substeps == 0 {
            return Err(SimError::InvalidConfiguration("substep count must be positive".into()));
        }
        if !(primary.mass.is_finite() && primary.mass > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "primary mass must be positive, got {}", primary.mass
            )));
        }
        if !(newton_g.is_finite() && newton_g > 0.0) {
            return Err(SimError::InvalidConfiguration(format!("G must be positive, got {newton_g}")));
        }

        let orbital_radius = (secondary.position - primary.position).norm();
        check_field_distance(orbital_radius)?;

        // Circular orbit: v = sqrt(G M / r), so L = r v = sqrt(G M r)
        let angular_momentum = (newton_g * primary.mass * orbital_radius).sqrt();
        let period = circular_period(newton_g, primary.mass, orbital_radius);

        debug!(
            "orbit captured: radius = {orbital_radius}, L = {angular_momentum}, period = {period}, substeps = {}",
            params.substeps
        );

        Ok(Self {
            substeps: params.substeps,
            reset_policy: params.reset_policy,
            initial_secondary_position: secondary.position,
            orbital_radius,
            angular_momentum,
            period,
            elapsed_since_reset: 0.0,
        })
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn orbital_radius(&self) -> f64 {
        self.orbital_radius
    }

    pub fn angular_momentum(&self) -> f64 {
        self.angular_momentum
    }

    pub fn elapsed_since_reset(&self) -> f64 {
        self.elapsed_since_reset
    }

    pub fn initial_secondary_position(&self) -> NVec3 {
        self.initial_secondary_position
    }

    /// Advance the secondary by `dt` in `substeps` equal steps
    ///
    /// All substeps run on a scratch position; the secondary and the reset
    /// clock are only written once the whole tick succeeded.
    pub fn step(&mut self, primary: &CelestialBody, secondary: &mut CelestialBody, dt: f64) -> SimResult<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let delta = dt / self.substeps as f64; // substep duration
        let mut position = secondary.position; // scratch copy

        for _ in 0..self.substeps {
            position = self.substep(primary.position, position, delta)?;
        }

        // Drift correction: the radius is never re-derived, so once per
        // period the secondary goes back to exactly where it started
        let mut elapsed = self.elapsed_since_reset + dt;
        if self.reset_policy == ResetPolicy::EveryPeriod && elapsed >= self.period * (1.0 - PERIOD_TOLERANCE) {
            debug!("one period elapsed ({elapsed}), resynchronizing secondary");
            position = self.initial_secondary_position;
            elapsed = 0.0;
        }

        // The committed geometry must still support field queries
        check_field_distance((position - primary.position).norm())?;

        // Commit
        secondary.position = position;
        self.elapsed_since_reset = elapsed;
        Ok(())
    }

    /// One polar step: rotate the separation by `omega * delta`
    fn substep(&self, center: NVec3, position: NVec3, delta: f64) -> SimResult<NVec3> {
        // r: separation from the primary, theta: its angle in the xz plane
        let r = position - center;
        let r2 = r.norm_squared();
        if !(r2.is_finite() && r2 > 0.0) {
            return Err(SimError::DegenerateGeometry(format!("separation |r|^2 = {r2} during substep")));
        }
        let theta = r.z.atan2(r.x);

        // omega = L / |r|^2 for the assumed circular orbit
        let omega = self.angular_momentum / r2;
        let theta_next = theta + omega * delta;

        // Carry the current radius forward
        let radius = r2.sqrt();
        Ok(center + radius * NVec3::new(theta_next.cos(), 0.0, theta_next.sin()))
    }

    /// Clear the drift-correction clock; the caller restores the bodies
    pub fn reset(&mut self) {
        self.elapsed_since_reset = 0.0;
    }
}
