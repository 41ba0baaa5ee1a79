//! Build fully-initialized demonstration scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - the configured session (`Session`) with bodies at their initial state
//! - the sample ring settings used for field arrows
//! - the tick loop settings (`RunConfig`)
//!
//! All validation happens here, before the first tick is accepted.

use crate::configuration::config::{BodiesConfig, BodyConfig, FieldConfig, RunConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::field::FieldSettings;
use crate::simulation::params::Parameters;
use crate::simulation::session::Session;
use crate::simulation::states::{BodyInit, NVec3};
use crate::simulation::units::UnitSystem;

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub session: Session,
    pub samples: usize,
    pub interior_samples: bool,
    pub run: RunConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let units = cfg.units;

        // Bodies: preset or explicit `BodyConfig` -> runtime `BodyInit`
        let (primary, secondary) = match &cfg.bodies {
            BodiesConfig::EarthMoon {
                earth_position,
                earth_radius,
                earth_is_rotating,
                moon_is_rotating,
            } => {
                let position = match earth_position {
                    Some(x) => vec3(x, "earth_position")?,
                    None => NVec3::zeros(),
                };
                let (earth, moon) = earth_moon_bodies(&units, position, *earth_radius);
                (earth.spinning(*earth_is_rotating), moon.spinning(*moon_is_rotating))
            }
            BodiesConfig::Explicit { primary, secondary } => {
                (body_init(primary, "primary")?, body_init(secondary, "secondary")?)
            }
        };

        // Parameters (runtime) from IntegratorConfig
        let i_cfg = &cfg.integrator;
        let parameters = Parameters::new(i_cfg.substeps, i_cfg.reset_policy)?.with_time_scale(i_cfg.time_scale)?;

        let mut session = Session::with_parameters(primary, secondary, units, parameters)?
            .with_field_settings(field_settings(&cfg.field))?;
        if let Some(shell) = &cfg.shell {
            session = session.with_shell(shell.radius)?;
        }
        if let Some(deformation) = cfg.deformation {
            session = session.with_deformation(deformation)?;
        }

        if !(cfg.run.dt.is_finite() && cfg.run.dt >= 0.0) {
            return Err(SimError::InvalidConfiguration(format!("run dt must be non-negative, got {}", cfg.run.dt)));
        }

        Ok(Self {
            session,
            samples: cfg.field.samples,
            interior_samples: cfg.field.interior_samples,
            run: cfg.run,
        })
    }
}

/// Earth at `earth_position` and the Moon one lunar distance along +x
///
/// Masses, radii and the lunar distance are the real values in `units`;
/// `earth_radius` scales both radii for display. The Earth spins once per
/// sidereal day, the Moon is tidally locked. Neither body spins until
/// enabled with [`BodyInit::spinning`].
pub fn earth_moon_bodies(units: &UnitSystem, earth_position: NVec3, earth_radius: f64) -> (BodyInit, BodyInit) {
    let earth = BodyInit::new(earth_position, units.earth_mass(), earth_radius * units.earth_radius())
        .with_rotation_period(units.earth_rotation_period())
        .with_rotation(104.0);

    let moon_position = earth_position + units.lunar_distance() * NVec3::x();
    let moon = BodyInit::new(moon_position, units.lunar_mass(), earth_radius * units.lunar_radius())
        .with_rotation(193.0);

    (earth, moon)
}

fn body_init(bc: &BodyConfig, name: &str) -> SimResult<BodyInit> {
    let mut init = BodyInit::new(vec3(&bc.x, name)?, bc.m, bc.radius)
        .with_rotation(bc.rotation)
        .spinning(bc.spinning);
    init.rotation_period = bc.rotation_period;
    Ok(init)
}

fn field_settings(cfg: &FieldConfig) -> FieldSettings {
    FieldSettings {
        scale_factor: cfg.scale_factor,
        force_point_at_secondary: cfg.force_point_at_secondary,
    }
}

fn vec3(values: &[f64], name: &str) -> SimResult<NVec3> {
    match values {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::InvalidConfiguration(format!(
            "{name}: expected 3 coordinates, got {}", values.len()
        ))),
    }
}
