//! A running two-body demonstration
//!
//! `Session` owns the bodies, caches `G` for its whole lifetime and is the
//! only writer of body state. The caller drives it with [`Session::tick`];
//! between ticks the presentation layer reads snapshots and queries the
//! field evaluator as often as it likes.

use log::{debug, warn};

use super::field::{FieldEvaluator, FieldSettings};
use super::integrator::OrbitalIntegrator;
use super::params::{Parameters, ResetPolicy};
use super::sampling::{ring_points, ring_points_with_interior};
use super::shell::{bulge_angle, Deformation, Shell, TidalBulge};
use super::states::{BodyId, BodyInit, BodyState, CelestialBody, NVec3};
use super::units::UnitSystem;
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone)]
pub struct Session {
    units: UnitSystem,
    newton_g: f64, // computed once at configure
    params: Parameters,
    field: FieldSettings,
    primary_init: BodyInit,
    secondary_init: BodyInit,
    primary: CelestialBody,
    secondary: CelestialBody,
    shell: Option<Shell>,
    deformation: Option<Deformation>,
    integrator: OrbitalIntegrator,
    paused: bool,
}

impl Session {
    /// Validate the configuration and set the bodies at their initial state
    pub fn configure(
        primary_init: BodyInit,
        secondary_init: BodyInit,
        units: UnitSystem,
        substeps: i64,
        reset_policy: ResetPolicy,
    ) -> SimResult<Self> {
        let params = Parameters::new(substeps, reset_policy)?;
        Self::with_parameters(primary_init, secondary_init, units, params)
    }

    /// As [`Session::configure`], from already validated parameters
    pub fn with_parameters(
        primary_init: BodyInit,
        secondary_init: BodyInit,
        units: UnitSystem,
        params: Parameters,
    ) -> SimResult<Self> {
        primary_init.validate("primary")?;
        secondary_init.validate("secondary")?;

        let newton_g = units.newton_g();

        // The orbit only depends on positions and the primary's mass; the
        // locked rotation periods depend on the orbit
        let integrator = OrbitalIntegrator::new(
            &primary_init.to_body(1.0),
            &secondary_init.to_body(1.0),
            newton_g,
            &params,
        )?;
        let period = integrator.period();
        let primary = primary_init.to_body(period);
        let secondary = secondary_init.to_body(period);

        debug!(
            "session configured: units = {units}, G = {newton_g}, period = {period}, radius = {}",
            integrator.orbital_radius()
        );

        Ok(Self {
            units,
            newton_g,
            params,
            field: FieldSettings::default(),
            primary_init,
            secondary_init,
            primary,
            secondary,
            shell: None,
            deformation: None,
            integrator,
            paused: false,
        })
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> SimResult<Self> {
        self.params = self.params.with_time_scale(time_scale)?;
        Ok(self)
    }

    pub fn with_field_settings(mut self, settings: FieldSettings) -> SimResult<Self> {
        settings.validate()?;
        self.field = settings;
        Ok(self)
    }

    /// Attach a deformable shell of `radius` to the primary
    pub fn with_shell(mut self, radius: f64) -> SimResult<Self> {
        self.shell = Some(Shell::new(radius)?);
        Ok(self)
    }

    /// Enable the tidal bulge on the primary (and the shell, if any)
    pub fn with_deformation(mut self, deformation: Deformation) -> SimResult<Self> {
        deformation.validate()?;
        self.deformation = Some(deformation);
        Ok(self)
    }

    /// Advance the session by `dt` (before time scaling)
    ///
    /// A rejected tick leaves every body exactly as the previous tick left it.
    pub fn tick(&mut self, dt: f64) -> SimResult<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            warn!("tick rejected: time step {dt}");
            return Err(SimError::InvalidTimeStep(dt));
        }
        if self.paused {
            return Ok(());
        }

        let dt = dt * self.params.time_scale;
        if let Err(err) = self.integrator.step(&self.primary, &mut self.secondary, dt) {
            warn!("tick rejected: {err}");
            return Err(err);
        }

        // Self-rotation, decoupled from the orbit
        if self.primary_init.spinning {
            self.primary.spin(dt);
        }
        if self.secondary_init.spinning {
            self.secondary.spin(dt);
        }
        Ok(())
    }

    /// Put every body back at its configured initial state and clear the
    /// drift-correction clock
    pub fn reset_session(&mut self) {
        let period = self.integrator.period();
        self.primary = self.primary_init.to_body(period);
        self.secondary = self.secondary_init.to_body(period);
        self.integrator.reset();
        debug!("session reset");
    }

    pub fn body_state(&self, id: BodyId) -> SimResult<BodyState> {
        match id {
            BodyId::Primary => Ok(snapshot(&self.primary)),
            BodyId::Secondary => Ok(snapshot(&self.secondary)),
            BodyId::Shell => match self.shell {
                // the shell rides on the primary
                Some(_) => Ok(snapshot(&self.primary)),
                None => Err(SimError::InvalidConfiguration("no shell configured".into())),
            },
        }
    }

    /// Evaluator over the current body state
    pub fn field_evaluator(&self) -> SimResult<FieldEvaluator<'_>> {
        FieldEvaluator::new(&self.primary, &self.secondary, self.newton_g, self.field)
    }

    pub fn evaluate_gravity_field(&self, point: NVec3) -> SimResult<NVec3> {
        Ok(self.field_evaluator()?.gravity(point))
    }

    pub fn evaluate_tidal_field(&self, point: NVec3) -> SimResult<NVec3> {
        Ok(self.field_evaluator()?.tidal(point))
    }

    /// Tails of the field arrows: a ring of `count` points on the primary's
    /// surface, optionally paired with interior points at half radius
    pub fn sample_points(&self, count: usize, with_interior: bool) -> Vec<NVec3> {
        if with_interior {
            ring_points_with_interior(self.primary.position, self.primary.radius, count)
        } else {
            ring_points(self.primary.position, self.primary.radius, count)
        }
    }

    /// Current tidal bulge of the primary or shell, when deformation is on
    pub fn bulge(&self, id: BodyId) -> Option<TidalBulge> {
        let deformation = self.deformation?;
        let amplitude = match id {
            BodyId::Primary => deformation.body_amplitude,
            BodyId::Shell => {
                self.shell?;
                deformation.shell_amplitude
            }
            BodyId::Secondary => return None,
        };
        Some(TidalBulge {
            amplitude,
            angle: bulge_angle(&self.primary, &self.secondary),
        })
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn newton_g(&self) -> f64 {
        self.newton_g
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn field_settings(&self) -> FieldSettings {
        self.field
    }

    pub fn period(&self) -> f64 {
        self.integrator.period()
    }

    pub fn orbital_radius(&self) -> f64 {
        self.integrator.orbital_radius()
    }

    pub fn angular_momentum(&self) -> f64 {
        self.integrator.angular_momentum()
    }

    pub fn elapsed_since_reset(&self) -> f64 {
        self.integrator.elapsed_since_reset()
    }

    pub fn initial_secondary_position(&self) -> NVec3 {
        self.integrator.initial_secondary_position()
    }

    pub fn primary(&self) -> &CelestialBody {
        &self.primary
    }

    pub fn secondary(&self) -> &CelestialBody {
        &self.secondary
    }

    pub fn shell(&self) -> Option<&Shell> {
        self.shell.as_ref()
    }
}

fn snapshot(body: &CelestialBody) -> BodyState {
    BodyState {
        position: body.position,
        rotation: body.rotation,
    }
}
