pub mod units;
pub mod states;
pub mod params;
pub mod integrator;
pub mod field;
pub mod sampling;
pub mod shell;
pub mod session;
pub mod scenario;
