pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{CelestialBody, BodyInit, BodyId, BodyState, NVec3};
pub use simulation::units::{UnitSystem, UnitTime, UnitLength, UnitMass, compute_g};
pub use simulation::params::{Parameters, ResetPolicy};
pub use simulation::integrator::{OrbitalIntegrator, circular_period};
pub use simulation::field::{FieldEvaluator, FieldSettings, log_field_magnitude, check_field_distance};
pub use simulation::sampling::{ring_points, ring_points_with_interior};
pub use simulation::shell::{Shell, Deformation, TidalBulge};
pub use simulation::session::Session;
pub use simulation::scenario::{Scenario, earth_moon_bodies};

pub use configuration::config::{ScenarioConfig, IntegratorConfig, BodiesConfig, BodyConfig, FieldConfig, ShellConfig, RunConfig};

pub use benchmark::benchmark::{bench_tick, bench_field};
