//! Configuration types for loading demonstration scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`UnitSystem`]       – time/length/mass basis, fixes `G` for the session
//! - [`IntegratorConfig`] – substeps, drift-correction policy, time scale
//! - [`BodiesConfig`]     – the Earth–Moon preset or two explicit bodies
//! - [`FieldConfig`]      – field vector scaling and sample ring
//! - [`ShellConfig`] / [`Deformation`] – optional ocean shell and tidal bulge
//! - [`RunConfig`]        – how many ticks the CLI runs, and how long each is
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An Earth–Moon orbit matching these types:
//!
//! ```yaml
//! units:
//!   time: month
//!   length: earth_radius
//!   mass: earth_mass
//!
//! integrator:
//!   substeps: 100              # substeps per tick
//!   reset_policy: every_period # or "never"
//!   time_scale: 1.0
//!
//! bodies:
//!   kind: earth_moon
//!   earth_radius: 1.0          # visual scale of both bodies
//!   earth_is_rotating: true
//!   moon_is_rotating: true
//!
//! field:
//!   scale_factor: 1.0
//!   force_point_at_secondary: false
//!   samples: 8
//!   interior_samples: false
//!
//! run:
//!   ticks: 500
//!   dt: 0.02
//! ```
//!
//! Explicit bodies use `kind: explicit` with `primary` and `secondary`
//! entries, each with `x: [x, y, z]`, `m`, `radius` and optionally
//! `rotation_period`, `rotation` and `spinning`.
//!
//! The scenario builder then maps this configuration into a validated
//! runtime [`Session`](crate::Session).

use serde::Deserialize;

use crate::simulation::params::{ResetPolicy, DEFAULT_SUBSTEPS};
use crate::simulation::shell::Deformation;
use crate::simulation::units::UnitSystem;

/// Integration settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct IntegratorConfig {
    pub substeps: i64, // substeps per tick, must be positive
    pub reset_policy: ResetPolicy, // snap back once per period or never
    pub time_scale: f64, // simulated time per unit of tick time
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            substeps: DEFAULT_SUBSTEPS as i64,
            reset_policy: ResetPolicy::EveryPeriod,
            time_scale: 1.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position `[x, y, z]` in simulation length units
    pub m: f64,      // Mass in simulation mass units
    pub radius: f64, // Radius in simulation length units
    #[serde(default)]
    pub rotation_period: Option<f64>, // Self-rotation period, omitted = tidally locked
    #[serde(default)]
    pub rotation: f64, // Initial spin angle in degrees
    #[serde(default)]
    pub spinning: bool, // Whether the body spins while ticking
}

/// Which bodies take part in the scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodiesConfig {
    /// Earth and Moon at their real masses, radii and distance in the chosen units
    EarthMoon {
        #[serde(default)]
        earth_position: Option<Vec<f64>>, // defaults to the origin
        #[serde(default = "default_earth_radius")]
        earth_radius: f64, // visual scale applied to both radii
        #[serde(default)]
        earth_is_rotating: bool,
        #[serde(default = "default_true")]
        moon_is_rotating: bool,
    },
    /// Two bodies given explicitly
    Explicit {
        primary: BodyConfig,
        secondary: BodyConfig,
    },
}

/// Field vector presentation
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub scale_factor: f64, // multiplies every field magnitude
    pub force_point_at_secondary: bool, // aim gravity vectors at the secondary
    pub samples: usize, // arrows on the ring around the primary
    pub interior_samples: bool, // add a half-radius arrow under each surface arrow
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            force_point_at_secondary: false,
            samples: 8,
            interior_samples: false,
        }
    }
}

/// Optional ocean shell on the primary
#[derive(Deserialize, Debug, Clone)]
pub struct ShellConfig {
    pub radius: f64, // shell radius in simulation length units
}

/// Tick loop driven by the CLI
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: usize, // number of ticks to run
    pub dt: f64, // tick duration in simulation time units
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 100,
            dt: 0.01,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub units: UnitSystem, // unit basis, months / Earth radii / Earth masses by default
    #[serde(default)]
    pub integrator: IntegratorConfig, // integration settings
    pub bodies: BodiesConfig, // the two bodies
    #[serde(default)]
    pub field: FieldConfig, // field vector settings
    #[serde(default)]
    pub shell: Option<ShellConfig>, // ocean shell, absent = none
    #[serde(default)]
    pub deformation: Option<Deformation>, // tidal bulge, absent = rigid
    #[serde(default)]
    pub run: RunConfig, // CLI tick loop
}

fn default_earth_radius() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}
