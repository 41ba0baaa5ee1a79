use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::params::ResetPolicy;
use crate::simulation::scenario::earth_moon_bodies;
use crate::simulation::session::Session;
use crate::simulation::states::NVec3;
use crate::simulation::units::UnitSystem;

/// Helper to build an Earth–Moon session with `substeps` per tick
fn make_session(substeps: i64) -> SimResult<Session> {
    let units = UnitSystem::default();
    let (earth, moon) = earth_moon_bodies(&units, NVec3::zeros(), 1.0);
    Session::configure(earth, moon, units, substeps, ResetPolicy::EveryPeriod)
}

/// Time one tick for a range of substep counts
pub fn bench_tick() -> SimResult<()> {
    let substeps = [10, 100, 1_000, 10_000, 100_000];
    let ticks = 50; // ticks per measurement

    for n in substeps {
        let mut session = make_session(n)?;
        let dt = session.period() / 500.0;

        // Warm up
        session.tick(dt)?;

        let t0 = Instant::now();
        for _ in 0..ticks {
            session.tick(dt)?;
        }
        let per_tick = t0.elapsed().as_secs_f64() / ticks as f64;

        println!("substeps = {n:6}, tick = {:10.3} us", per_tick * 1e6);
    }
    Ok(())
}

/// Time gravity + tidal evaluation over rings of increasing size
/// Paste output directly into a spreadsheet to graph
pub fn bench_field() -> SimResult<()> {
    let session = make_session(100)?;
    let rounds = 200; // evaluations per ring size

    println!("points,gravity_us,tidal_us");

    for count in [4, 8, 16, 32, 256, 4096] {
        let points = session.sample_points(count, false);
        let mut out = vec![NVec3::zeros(); points.len()];
        let field = session.field_evaluator()?;

        let t0 = Instant::now();
        for _ in 0..rounds {
            field.gravity_into(&points, &mut out);
        }
        let gravity_us = t0.elapsed().as_secs_f64() * 1e6 / rounds as f64;

        let t1 = Instant::now();
        for _ in 0..rounds {
            field.tidal_into(&points, &mut out);
        }
        let tidal_us = t1.elapsed().as_secs_f64() * 1e6 / rounds as f64;

        println!("{},{:.3},{:.3}", count, gravity_us, tidal_us);
    }
    Ok(())
}
