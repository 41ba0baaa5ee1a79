use tidesim::simulation::units::{NEWTON_G_SI, SECONDS_PER_HOUR};
use tidesim::{
    check_field_distance, compute_g, earth_moon_bodies, log_field_magnitude, ring_points, ring_points_with_interior,
    BodyId, BodyInit, Deformation, FieldEvaluator, FieldSettings, NVec3, OrbitalIntegrator, Parameters, ResetPolicy,
    Scenario, ScenarioConfig, Session, Shell, SimError, UnitLength, UnitMass, UnitSystem, UnitTime,
};

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::PathBuf;

/// Months, Earth radii, Earth masses
pub fn earth_moon_units() -> UnitSystem {
    UnitSystem::new(UnitTime::Month, UnitLength::EarthRadius, UnitMass::EarthMass)
}

/// Unit-mass primary at the origin, light secondary `dist` away along +x
pub fn two_body_inits(dist: f64) -> (BodyInit, BodyInit) {
    let primary = BodyInit::new(NVec3::zeros(), 1.0, 1.0).with_rotation_period(1.0);
    let secondary = BodyInit::new(NVec3::new(dist, 0.0, 0.0), 0.0123, 0.27);
    (primary, secondary)
}

/// Build a configured two-body session
pub fn two_body_session(dist: f64, substeps: i64, reset: ResetPolicy) -> Session {
    let (primary, secondary) = two_body_inits(dist);
    Session::configure(primary, secondary, earth_moon_units(), substeps, reset).expect("valid configuration")
}

fn secondary_position(session: &Session) -> NVec3 {
    session.body_state(BodyId::Secondary).unwrap().position
}

fn assert_vec_close(a: NVec3, b: NVec3, tol: f64) {
    assert!((a - b).norm() <= tol, "{:?} and {:?} differ by {}", a, b, (a - b).norm());
}

// ==================================================================================
// Unit system tests
// ==================================================================================

#[test]
fn g_in_si_basis_is_the_si_constant() {
    let g = compute_g(UnitTime::Second, UnitLength::Meter, UnitMass::Kilogram);
    assert_eq!(g, NEWTON_G_SI);
}

#[test]
fn g_scales_with_time_squared() {
    let g = compute_g(UnitTime::Hour, UnitLength::Meter, UnitMass::Kilogram);
    let expected = NEWTON_G_SI * SECONDS_PER_HOUR * SECONDS_PER_HOUR;
    assert!((g - expected).abs() / expected < 1e-12);
}

#[test]
fn g_for_earth_moon_units() {
    let g = earth_moon_units().newton_g();
    assert!(g > 8.5e6 && g < 8.7e6, "G = {g}");
}

#[test]
fn reference_quantities_in_earth_moon_units() {
    let units = earth_moon_units();
    assert_eq!(units.earth_mass(), 1.0);
    assert_eq!(units.earth_radius(), 1.0);
    assert!((units.lunar_distance() - 60.3).abs() < 0.1);
    assert!((units.lunar_mass() - 0.0123).abs() < 1e-4);
    assert!(units.earth_rotation_period() > 0.03 && units.earth_rotation_period() < 0.04);
}

#[test]
fn unit_names_parse() {
    let units = UnitSystem::parse("month", "body_radius", "primary_mass").unwrap();
    assert_eq!(units, earth_moon_units());
    assert_eq!("AU".parse::<UnitLength>().unwrap(), UnitLength::AstronomicalUnit);
    assert_eq!("stellar_mass".parse::<UnitMass>().unwrap(), UnitMass::SolarMass);
}

#[test]
fn unknown_unit_names_are_rejected() {
    assert!(matches!("fortnight".parse::<UnitTime>(), Err(SimError::InvalidUnit(_))));
    assert!(matches!("furlong".parse::<UnitLength>(), Err(SimError::InvalidUnit(_))));
    assert!(matches!(UnitSystem::parse("day", "meter", "stone"), Err(SimError::InvalidUnit(_))));
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn zero_or_negative_substeps_are_rejected() {
    let (p, s) = two_body_inits(60.0);
    for n in [0, -5] {
        let result = Session::configure(p.clone(), s.clone(), earth_moon_units(), n, ResetPolicy::EveryPeriod);
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }
}

#[test]
fn zero_primary_mass_is_rejected() {
    let (mut p, s) = two_body_inits(60.0);
    p.mass = 0.0;
    let result = Session::configure(p, s, earth_moon_units(), 100, ResetPolicy::EveryPeriod);
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
}

#[test]
fn non_positive_radius_is_rejected() {
    let (p, mut s) = two_body_inits(60.0);
    s.radius = -1.0;
    let result = Session::configure(p, s, earth_moon_units(), 100, ResetPolicy::EveryPeriod);
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
}

#[test]
fn coincident_bodies_are_degenerate() {
    let result = Session::configure(
        BodyInit::new(NVec3::zeros(), 1.0, 1.0),
        BodyInit::new(NVec3::zeros(), 0.0123, 0.27),
        earth_moon_units(),
        100,
        ResetPolicy::EveryPeriod,
    );
    assert!(matches!(result, Err(SimError::DegenerateGeometry(_))));
}

#[test]
fn invalid_time_scale_is_rejected() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert!(matches!(session.with_time_scale(0.0), Err(SimError::InvalidConfiguration(_))));
}

#[test]
fn newton_g_is_cached_from_units() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert_eq!(session.newton_g(), earth_moon_units().newton_g());
    let expected_l = (session.newton_g() * 60.0).sqrt();
    assert!((session.angular_momentum() - expected_l).abs() / expected_l < 1e-12);
    assert_eq!(session.orbital_radius(), 60.0);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn one_period_returns_exactly_to_start() {
    // mass 1, distance 60, month / Earth radius / Earth mass, 100 substeps
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let start = secondary_position(&session);
    let dt = session.period() / 100.0;

    for _ in 0..100 {
        session.tick(dt).unwrap();
    }

    let end = secondary_position(&session);
    assert_eq!(end, start);
    assert_eq!(end.z.atan2(end.x), 0.0);
    assert_eq!(session.elapsed_since_reset(), 0.0);
}

#[test]
fn no_resync_before_the_period_is_complete() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let dt = session.period() / 100.0;
    for _ in 0..99 {
        session.tick(dt).unwrap();
    }
    assert!(session.elapsed_since_reset() > 0.0);
    assert_ne!(secondary_position(&session), session.initial_secondary_position());
}

#[test]
fn quarter_period_moves_a_quarter_turn() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let dt = session.period() / 100.0;
    for _ in 0..25 {
        session.tick(dt).unwrap();
    }

    // theta grows from +x toward +z
    let pos = secondary_position(&session);
    assert_vec_close(pos, NVec3::new(0.0, 0.0, 60.0), 1e-6);
}

#[test]
fn radius_stays_close_within_a_period() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let dt = session.period() / 37.0;
    for _ in 0..30 {
        session.tick(dt).unwrap();
        let r = secondary_position(&session).norm();
        assert!((r - 60.0).abs() < 1e-9, "radius drifted to {r}");
    }
}

#[test]
fn splitting_a_tick_gives_the_same_orbit() {
    let mut whole = two_body_session(60.0, 100, ResetPolicy::Never);
    let mut halves = two_body_session(60.0, 50, ResetPolicy::Never);
    let dt = 0.3 * whole.period();

    whole.tick(dt).unwrap();
    halves.tick(dt / 2.0).unwrap();
    halves.tick(dt / 2.0).unwrap();

    assert_vec_close(secondary_position(&whole), secondary_position(&halves), 1e-9);
}

#[test]
fn without_reset_the_orbit_only_comes_close() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::Never);
    let dt = session.period() / 100.0;
    for _ in 0..100 {
        session.tick(dt).unwrap();
    }
    assert_vec_close(secondary_position(&session), session.initial_secondary_position(), 1e-6);
    assert!(session.elapsed_since_reset() > 0.0);
}

#[test]
fn time_scale_multiplies_the_tick() {
    let mut scaled = two_body_session(60.0, 100, ResetPolicy::Never).with_time_scale(2.0).unwrap();
    let mut plain = two_body_session(60.0, 100, ResetPolicy::Never);
    let dt = 0.05 * plain.period();

    scaled.tick(dt).unwrap();
    plain.tick(2.0 * dt).unwrap();

    assert_vec_close(secondary_position(&scaled), secondary_position(&plain), 1e-9);
}

#[test]
fn invalid_time_step_leaves_state_untouched() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    session.tick(0.01).unwrap();
    let before = secondary_position(&session);
    let clock = session.elapsed_since_reset();

    for dt in [f64::NAN, f64::INFINITY, -0.1] {
        assert!(matches!(session.tick(dt), Err(SimError::InvalidTimeStep(_))));
    }

    assert_eq!(secondary_position(&session), before);
    assert_eq!(session.elapsed_since_reset(), clock);
}

#[test]
fn paused_session_ignores_ticks() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let start = secondary_position(&session);
    session.pause();
    session.tick(0.1).unwrap();
    assert_eq!(secondary_position(&session), start);

    session.toggle_pause();
    assert!(!session.is_paused());
    session.tick(0.1).unwrap();
    assert_ne!(secondary_position(&session), start);
}

#[test]
fn reset_session_restores_initial_state() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let start = secondary_position(&session);
    for _ in 0..10 {
        session.tick(0.013).unwrap();
    }
    session.reset_session();

    assert_eq!(secondary_position(&session), start);
    assert_eq!(session.elapsed_since_reset(), 0.0);
    assert_eq!(session.body_state(BodyId::Primary).unwrap().rotation, 0.0);
}

// ==================================================================================
// Self-rotation tests
// ==================================================================================

#[test]
fn spinning_body_turns_at_its_rotation_period() {
    let (p, s) = two_body_inits(60.0);
    let mut session =
        Session::configure(p.spinning(true), s, earth_moon_units(), 10, ResetPolicy::EveryPeriod).unwrap();

    session.tick(0.25).unwrap();
    let primary = session.body_state(BodyId::Primary).unwrap();
    assert!((primary.rotation - 90.0).abs() < 1e-9);

    // the secondary was not asked to spin
    assert_eq!(session.body_state(BodyId::Secondary).unwrap().rotation, 0.0);
}

#[test]
fn secondary_without_period_is_tidally_locked() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert_eq!(session.secondary().rotation_period, session.period());
    assert_eq!(session.primary().rotation_period, 1.0);
}

#[test]
fn rotation_wraps_to_a_full_turn() {
    let (p, s) = two_body_inits(60.0);
    let mut session =
        Session::configure(p.spinning(true), s, earth_moon_units(), 10, ResetPolicy::Never).unwrap();
    session.tick(1.5).unwrap();
    let rotation = session.body_state(BodyId::Primary).unwrap().rotation;
    assert!((rotation - 180.0).abs() < 1e-9);
}

// ==================================================================================
// Field tests
// ==================================================================================

#[test]
fn gravity_at_cm_follows_the_log_law() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let field = session.field_evaluator().unwrap();

    let expected = session.newton_g() * 0.0123 / 60f64.log10();
    let g = field.gravity_at_cm();
    assert!((g.norm() - expected).abs() / expected < 1e-12);
    assert!(g.x > 0.0 && g.y == 0.0 && g.z == 0.0);
}

#[test]
fn field_queries_are_pure() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let p = NVec3::new(0.3, -0.8, 0.1);

    let g1 = session.evaluate_gravity_field(p).unwrap();
    let t1 = session.evaluate_tidal_field(p).unwrap();
    let g2 = session.evaluate_gravity_field(p).unwrap();
    let t2 = session.evaluate_tidal_field(p).unwrap();

    assert_eq!(g1, g2);
    assert_eq!(t1, t2);
}

#[test]
fn tidal_field_stretches_along_the_line_of_centers() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);

    // near side, theta = 0
    let near = session.evaluate_tidal_field(NVec3::new(1.0, 0.0, 0.0)).unwrap();
    assert!(near.x > 0.0);
    assert_eq!(near.y, 0.0);

    // far side, theta = pi
    let far = session.evaluate_tidal_field(NVec3::new(-1.0, 0.0, 0.0)).unwrap();
    assert!(far.x < 0.0);
    assert!(far.y.abs() < 1e-12 * far.x.abs());
}

#[test]
fn tidal_field_compresses_across_the_line_of_centers() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);

    // theta = pi/2: points back down toward the line of centers
    let top = session.evaluate_tidal_field(NVec3::new(0.0, 1.0, 0.0)).unwrap();
    assert!(top.y < 0.0);
    assert!(top.x.abs() < 1e-12 * top.y.abs());

    let bottom = session.evaluate_tidal_field(NVec3::new(0.0, -1.0, 0.0)).unwrap();
    assert!(bottom.y > 0.0);
}

#[test]
fn tidal_field_components_match_closed_form() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let field = session.field_evaluator().unwrap();
    let theta = PI / 6.0;
    let p = 0.5 * NVec3::new(theta.cos(), theta.sin(), 0.0);

    let t = field.tidal(p);
    let k = 0.25 * 0.5 * field.magnitude_at_cm();
    assert!((t.x - 2.0 * k * theta.cos()).abs() < 1e-12 * k);
    assert!((t.y + k * theta.sin()).abs() < 1e-12 * k);
    assert_eq!(t.z, 0.0);

    // no differential field at the center itself
    assert_eq!(field.tidal(NVec3::zeros()), NVec3::zeros());
}

#[test]
fn gravity_is_cm_field_plus_tidal() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let field = session.field_evaluator().unwrap();
    let p = NVec3::new(FRAC_PI_2.cos(), FRAC_PI_2.sin(), 0.0);
    assert_vec_close(field.gravity(p), field.gravity_at_cm() + field.tidal(p), 1e-12);
}

#[test]
fn forced_gravity_points_at_the_secondary() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod)
        .with_field_settings(FieldSettings {
            scale_factor: 1.0,
            force_point_at_secondary: true,
        })
        .unwrap();
    let secondary = session.secondary().position;

    // surface point facing the secondary
    let facing = NVec3::new(1.0, 0.0, 0.0);
    let g = session.evaluate_gravity_field(facing).unwrap();
    assert_vec_close(g.normalize(), (secondary - facing).normalize(), 1e-12);

    // off-axis: direction overridden, length kept
    let side = NVec3::new(0.0, 1.0, 0.0);
    let forced = session.evaluate_gravity_field(side).unwrap();
    let plain = two_body_session(60.0, 100, ResetPolicy::EveryPeriod)
        .evaluate_gravity_field(side)
        .unwrap();
    assert_vec_close(forced.normalize(), (secondary - side).normalize(), 1e-12);
    assert!((forced.norm() - plain.norm()).abs() < 1e-9 * plain.norm());
}

#[test]
fn forced_gravity_at_the_secondary_keeps_its_direction() {
    let (p, s) = two_body_inits(60.0);
    let primary = p.to_body(1.0);
    let secondary = s.to_body(1.0);
    let settings = FieldSettings {
        scale_factor: 1.0,
        force_point_at_secondary: true,
    };
    let field = FieldEvaluator::new(&primary, &secondary, 1.0, settings).unwrap();
    let g = field.gravity(secondary.position);
    assert!(g.iter().all(|c| c.is_finite()));
}

#[test]
fn field_is_undefined_within_unit_distance() {
    for dist in [0.5, 1.0] {
        let (p, s) = two_body_inits(dist);
        let result = Session::configure(p, s, earth_moon_units(), 100, ResetPolicy::EveryPeriod);
        assert!(matches!(result, Err(SimError::DegenerateGeometry(_))), "distance {dist}");
    }

    assert!(matches!(log_field_magnitude(1.0, 1.0, 1.0, 1.0), Err(SimError::DegenerateGeometry(_))));
    assert!(matches!(log_field_magnitude(1.0, 1.0, 1.0, 0.0), Err(SimError::DegenerateGeometry(_))));
    assert!(check_field_distance(1.0 + 1e-9).is_ok());
}

#[test]
fn tick_into_field_degeneracy_is_rejected() {
    let (p, s) = two_body_inits(60.0);
    let primary = p.to_body(1.0);
    let mut secondary = s.to_body(1.0);
    let params = Parameters::new(100, ResetPolicy::EveryPeriod).unwrap();
    let mut integrator = OrbitalIntegrator::new(&primary, &secondary, 1.0, &params).unwrap();

    // primary moved to within half a unit of the secondary
    let mut moved = primary.clone();
    moved.position = NVec3::new(59.5, 0.0, 0.0);
    let before = secondary.position;
    let result = integrator.step(&moved, &mut secondary, integrator.period() / 10.0);

    assert!(matches!(result, Err(SimError::DegenerateGeometry(_))));
    assert_eq!(secondary.position, before);
    assert_eq!(integrator.elapsed_since_reset(), 0.0);
}

#[test]
fn batch_evaluation_matches_single_queries() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    let field = session.field_evaluator().unwrap();
    let points = session.sample_points(16, true);

    let mut gravity = vec![NVec3::zeros(); points.len()];
    let mut tidal = vec![NVec3::zeros(); points.len()];
    field.gravity_into(&points, &mut gravity);
    field.tidal_into(&points, &mut tidal);

    for (i, p) in points.iter().enumerate() {
        assert_eq!(gravity[i], field.gravity(*p));
        assert_eq!(tidal[i], field.tidal(*p));
    }
}

#[test]
fn field_follows_the_orbit() {
    let mut session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    session.tick(session.period() / 4.0).unwrap();

    // secondary now on +z: CM gravity points that way
    let g = session.field_evaluator().unwrap().gravity_at_cm();
    assert!(g.z > 0.0);
    assert!(g.x.abs() < 1e-6 * g.z);
}

// ==================================================================================
// Sampling tests
// ==================================================================================

#[test]
fn ring_points_are_evenly_spaced() {
    let points = ring_points(NVec3::new(1.0, 1.0, 0.0), 2.0, 4);
    let expected = [
        NVec3::new(3.0, 1.0, 0.0),
        NVec3::new(1.0, 3.0, 0.0),
        NVec3::new(-1.0, 1.0, 0.0),
        NVec3::new(1.0, -1.0, 0.0),
    ];
    assert_eq!(points.len(), 4);
    for (p, e) in points.iter().zip(expected.iter()) {
        assert_vec_close(*p, *e, 1e-12);
    }
}

#[test]
fn interior_points_sit_at_half_radius() {
    let points = ring_points_with_interior(NVec3::zeros(), 2.0, 8);
    assert_eq!(points.len(), 16);
    for pair in points.chunks(2) {
        assert!((pair[0].norm() - 2.0).abs() < 1e-12);
        assert_vec_close(pair[1], 0.5 * pair[0], 1e-12);
    }
    assert!(ring_points(NVec3::zeros(), 1.0, 0).is_empty());
}

// ==================================================================================
// Shell and bulge tests
// ==================================================================================

#[test]
fn shell_state_requires_a_shell() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert!(matches!(session.body_state(BodyId::Shell), Err(SimError::InvalidConfiguration(_))));

    let session = session.with_shell(1.02).unwrap();
    assert_eq!(
        session.body_state(BodyId::Shell).unwrap(),
        session.body_state(BodyId::Primary).unwrap()
    );
}

#[test]
fn bulge_follows_the_secondary() {
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert!(session.bulge(BodyId::Primary).is_none());

    let mut session = session.with_deformation(Deformation::default()).unwrap();
    let bulge = session.bulge(BodyId::Primary).unwrap();
    assert_eq!(bulge.amplitude, 0.15);
    assert_eq!(bulge.angle, 0.0);
    assert!(session.bulge(BodyId::Shell).is_none());
    assert!(session.bulge(BodyId::Secondary).is_none());

    // a quarter turn of the orbit is half a turn of the shear angle
    session.tick(session.period() / 4.0).unwrap();
    let bulge = session.bulge(BodyId::Primary).unwrap();
    assert!((bulge.angle - PI).abs() < 1e-6);

    let session = session.with_shell(1.02).unwrap();
    assert_eq!(session.bulge(BodyId::Shell).unwrap().amplitude, 0.3);
}

#[test]
fn bulge_is_measured_in_the_spinning_frame() {
    let (p, s) = two_body_inits(60.0);
    let mut session = Session::configure(p.spinning(true), s, earth_moon_units(), 10, ResetPolicy::Never)
        .unwrap()
        .with_deformation(Deformation::default())
        .unwrap();
    session.tick(0.25).unwrap();

    let primary = session.body_state(BodyId::Primary).unwrap();
    let secondary = session.body_state(BodyId::Secondary).unwrap();
    assert!((primary.rotation - 90.0).abs() < 1e-9);

    // spin about -y pulls the shear angle back by twice the rotation
    let d = secondary.position - primary.position;
    let expected = 2.0 * (d.z.atan2(d.x) - primary.rotation.to_radians());
    let bulge = session.bulge(BodyId::Primary).unwrap();
    assert!((bulge.angle - expected).abs() < 1e-12);

    let still = two_body_session(60.0, 10, ResetPolicy::Never);
    let mut still = still.with_deformation(Deformation::default()).unwrap();
    still.tick(0.25).unwrap();
    let unspun = still.bulge(BodyId::Primary).unwrap().angle;
    assert!((unspun - bulge.angle - PI).abs() < 1e-9);
}

#[test]
fn shell_radius_must_be_positive() {
    for radius in [0.0, -1.0, f64::NAN] {
        assert!(matches!(Shell::new(radius), Err(SimError::InvalidConfiguration(_))));
    }
    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert!(matches!(session.with_shell(0.0), Err(SimError::InvalidConfiguration(_))));
}

#[test]
fn negative_bulge_amplitude_is_rejected() {
    let body = Deformation { body_amplitude: -0.1, ..Deformation::default() };
    let shell = Deformation { shell_amplitude: -0.3, ..Deformation::default() };
    assert!(matches!(body.validate(), Err(SimError::InvalidConfiguration(_))));
    assert!(matches!(shell.validate(), Err(SimError::InvalidConfiguration(_))));
    assert!(Deformation::default().validate().is_ok());

    let session = two_body_session(60.0, 100, ResetPolicy::EveryPeriod);
    assert!(matches!(session.with_deformation(body), Err(SimError::InvalidConfiguration(_))));
}

// ==================================================================================
// Scenario tests
// ==================================================================================

const EARTH_MOON_YAML: &str = r#"
units:
  time: month
  length: earth_radius
  mass: earth_mass
integrator:
  substeps: 100
bodies:
  kind: earth_moon
  earth_is_rotating: true
run:
  ticks: 10
  dt: 0.01
"#;

#[test]
fn earth_moon_preset_has_a_one_month_orbit() {
    let cfg: ScenarioConfig = serde_yaml::from_str(EARTH_MOON_YAML).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();
    let session = &scenario.session;

    assert!((session.period() - 1.0).abs() < 0.05, "period = {}", session.period());
    assert!((session.orbital_radius() - 60.3).abs() < 0.1);
    assert_eq!(scenario.run.ticks, 10);
    assert_eq!(scenario.samples, 8);
}

#[test]
fn earth_moon_bodies_use_real_values() {
    let units = UnitSystem::new(UnitTime::Day, UnitLength::Meter, UnitMass::Kilogram);
    let (earth, moon) = earth_moon_bodies(&units, NVec3::zeros(), 1.0);
    assert_eq!(earth.mass, 5.9722e24);
    assert_eq!(moon.position.x, 3.844e8);
    assert!(moon.rotation_period.is_none());
    assert!(!earth.spinning && !moon.spinning);
}

#[test]
fn explicit_body_needs_three_coordinates() {
    let yaml = r#"
bodies:
  kind: explicit
  primary: { x: [0.0, 0.0], m: 1.0, radius: 1.0 }
  secondary: { x: [60.0, 0.0, 0.0], m: 0.0123, radius: 0.27 }
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::InvalidConfiguration(_))));
}

#[test]
fn scenario_with_zero_substeps_is_rejected() {
    let yaml = r#"
integrator: { substeps: 0 }
bodies: { kind: earth_moon }
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::InvalidConfiguration(_))));
}

#[test]
fn unknown_unit_in_yaml_fails_to_load() {
    let yaml = r#"
units: { time: fortnight, length: earth_radius, mass: earth_mass }
bodies: { kind: earth_moon }
"#;
    assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
}

#[test]
fn bundled_scenarios_build() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["earth_moon.yaml", "earth_moon_ocean.yaml", "tidal_forces.yaml"] {
        let text = std::fs::read_to_string(dir.join(name)).unwrap();
        let cfg: ScenarioConfig = serde_yaml::from_str(&text).unwrap();
        let scenario = Scenario::build_scenario(cfg).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(scenario.session.field_evaluator().is_ok(), "{name}: field undefined");
    }
}
