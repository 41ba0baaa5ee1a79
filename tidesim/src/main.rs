use tidesim::{Scenario, ScenarioConfig, BodyId, UnitTime, UnitLength, UnitMass};
use tidesim::{bench_tick, bench_field};

use clap::Parser;
use anyhow::{Context, Result};
use log::{debug, info, warn};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "earth_moon.yaml")]
    file_name: String,

    /// Override the number of ticks to run
    #[arg(long)]
    ticks: Option<usize>,

    /// Override the tick duration
    #[arg(long)]
    dt: Option<f64>,

    /// Override the time unit (second, hour, day, month, year)
    #[arg(long)]
    time_unit: Option<UnitTime>,

    /// Override the length unit (meter, earth_radius, lunar_distance, au)
    #[arg(long)]
    length_unit: Option<UnitLength>,

    /// Override the mass unit (kilogram, earth_mass, lunar_mass, solar_mass)
    #[arg(long)]
    mass_unit: Option<UnitMass>,

    /// Run the tick and field benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn run(scenario: &mut Scenario) -> Result<()> {
    let session = &mut scenario.session;
    let dt = scenario.run.dt;

    info!(
        "G = {:.6e}, orbital radius = {:.4}, period = {:.6}",
        session.newton_g(),
        session.orbital_radius(),
        session.period()
    );

    let mut rejected = 0;
    for tick in 0..scenario.run.ticks {
        // A rejected tick keeps the last valid state; keep driving
        if session.tick(dt).is_err() {
            rejected += 1;
            continue;
        }
        let moon = session.body_state(BodyId::Secondary)?;
        debug!(
            "[tick {tick}] secondary = ({:.6}, {:.6}, {:.6}), rotation = {:.3}, clock = {:.6}",
            moon.position.x, moon.position.y, moon.position.z, moon.rotation, session.elapsed_since_reset()
        );
    }

    for id in [BodyId::Primary, BodyId::Secondary] {
        let state = session.body_state(id)?;
        info!(
            "{id:?}: position = ({:.6}, {:.6}, {:.6}), rotation = {:.3} deg",
            state.position.x, state.position.y, state.position.z, state.rotation
        );
    }
    info!("clock since last resynchronization = {:.6}, rejected ticks = {rejected}", session.elapsed_since_reset());

    for id in [BodyId::Primary, BodyId::Shell] {
        if let Some(bulge) = session.bulge(id) {
            info!("{id:?} bulge: amplitude = {:.3}, angle = {:.4} rad", bulge.amplitude, bulge.angle);
        }
    }

    let points = session.sample_points(scenario.samples, scenario.interior_samples);
    match session.field_evaluator() {
        Ok(field) => {
            let g_cm = field.gravity_at_cm();
            info!("gravity at CM = ({:.6}, {:.6}, {:.6})", g_cm.x, g_cm.y, g_cm.z);
            for p in &points {
                let g = field.gravity(*p);
                let t = field.tidal(*p);
                info!(
                    "at ({:8.4}, {:8.4}): gravity = ({:9.5}, {:9.5}, {:9.5}), tidal = ({:9.5}, {:9.5}, {:9.5})",
                    p.x, p.y, g.x, g.y, g.z, t.x, t.y, t.z
                );
            }
        }
        Err(err) => warn!("field undefined for this configuration: {err}"),
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_tick()?;
        bench_field()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(time) = args.time_unit {
        scenario_cfg.units.time = time;
    }
    if let Some(length) = args.length_unit {
        scenario_cfg.units.length = length;
    }
    if let Some(mass) = args.mass_unit {
        scenario_cfg.units.mass = mass;
    }
    if let Some(ticks) = args.ticks {
        scenario_cfg.run.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        scenario_cfg.run.dt = dt;
    }

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    run(&mut scenario)
}
