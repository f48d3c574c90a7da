#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use walker::simulation::physics::{Constraint, PointMass, Vec2};

#[test]
fn test_new_point_is_at_rest() {
    let point = PointMass::new(Vec2::new(3.0, -4.0), 1.0);

    assert_eq!(point.position, Vec2::new(3.0, -4.0));
    assert_eq!(point.old_position, point.position);
    assert_eq!(point.acceleration, Vec2::ZERO);
    assert_eq!(point.velocity(), Vec2::ZERO);
}

#[test]
fn test_forces_accumulate_within_a_tick() {
    let mut point = PointMass::new(Vec2::ZERO, 2.0);

    point.apply_force(Vec2::new(2.0, 0.0));
    point.apply_force(Vec2::new(0.0, 4.0));
    point.apply_force(Vec2::new(2.0, 0.0));

    assert_eq!(point.acceleration, Vec2::new(2.0, 2.0));
}

#[test]
fn test_integrate_uses_unscaled_velocity_and_squared_dt() {
    let mut point = PointMass::new(Vec2::new(0.0, 0.0), 1.0);
    point.old_position = Vec2::new(-1.0, 0.0);
    point.apply_force(Vec2::new(0.0, 10.0));

    point.integrate(0.5);

    // velocity (1, 0) is added as-is, acceleration (0, 10) is scaled by 0.25
    assert_eq!(point.position, Vec2::new(1.0, 2.5));
    assert_eq!(point.old_position, Vec2::new(0.0, 0.0));
    assert_eq!(point.acceleration, Vec2::ZERO);
}

#[test]
fn test_integrate_keeps_momentum_without_forces() {
    let mut point = PointMass::new(Vec2::new(10.0, 10.0), 1.0);
    point.old_position = Vec2::new(9.0, 8.0);

    point.integrate(1.0 / 60.0);
    point.integrate(1.0 / 60.0);

    assert_eq!(point.position, Vec2::new(12.0, 14.0));
}

#[test]
fn test_static_point_ignores_forces_and_integration() {
    let mut anchor = PointMass::new(Vec2::new(5.0, 5.0), 0.0);
    anchor.old_position = Vec2::new(4.0, 5.0);

    anchor.apply_force(Vec2::new(100.0, 100.0));
    anchor.integrate(1.0);

    assert!(anchor.is_static());
    assert_eq!(anchor.acceleration, Vec2::ZERO);
    assert_eq!(anchor.position, Vec2::new(5.0, 5.0));
    assert_eq!(anchor.old_position, Vec2::new(4.0, 5.0));
}

#[test]
fn test_teleport_clears_motion() {
    let mut point = PointMass::new(Vec2::ZERO, 1.0);
    point.old_position = Vec2::new(-3.0, 2.0);
    point.apply_force(Vec2::new(1.0, 1.0));

    point.teleport(Vec2::new(7.0, 8.0));

    assert_eq!(point.position, Vec2::new(7.0, 8.0));
    assert_eq!(point.velocity(), Vec2::ZERO);
    assert_eq!(point.acceleration, Vec2::ZERO);
}

#[test]
fn test_relax_moves_both_endpoints_halfway() {
    let mut points = vec![
        PointMass::new(Vec2::new(0.0, 0.0), 1.0),
        PointMass::new(Vec2::new(10.0, 0.0), 1.0),
    ];
    let constraint = Constraint::new(0, 1, 5.0);

    constraint.relax(&mut points);

    assert_eq!(points[0].position, Vec2::new(2.5, 0.0));
    assert_eq!(points[1].position, Vec2::new(7.5, 0.0));
    assert_eq!(constraint.current_length(&points), 5.0);
}

#[test]
fn test_relax_reduces_length_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let mut points = vec![
            PointMass::new(
                Vec2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)),
                1.0,
            ),
            PointMass::new(
                Vec2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)),
                rng.random_range(0.5..3.0),
            ),
        ];
        let constraint = Constraint::new(0, 1, rng.random_range(1.0..60.0));

        let before = (constraint.current_length(&points) - constraint.target_length).abs();
        if before < 1e-2 {
            continue;
        }
        constraint.relax(&mut points);
        let after = (constraint.current_length(&points) - constraint.target_length).abs();

        assert!(
            after < before,
            "error grew from {} to {} for target {}",
            before,
            after,
            constraint.target_length
        );
    }
}

#[test]
fn test_relax_is_noop_at_target_length() {
    let mut points = vec![
        PointMass::new(Vec2::new(0.0, 0.0), 1.0),
        PointMass::new(Vec2::new(3.0, 4.0), 1.0),
    ];
    let constraint = Constraint::new(0, 1, 5.0);

    constraint.relax(&mut points);

    assert_eq!(points[0].position, Vec2::new(0.0, 0.0));
    assert_eq!(points[1].position, Vec2::new(3.0, 4.0));
}

#[test]
fn test_relax_never_moves_static_endpoint() {
    let mut points = vec![
        PointMass::new(Vec2::new(0.0, 0.0), 0.0),
        PointMass::new(Vec2::new(10.0, 0.0), 1.0),
    ];

    for target in [5.0, 20.0] {
        Constraint::new(0, 1, target).relax(&mut points);
        assert_eq!(points[0].position, Vec2::ZERO);
    }

    // the movable endpoint only receives its own half of the correction
    let mut points = vec![
        PointMass::new(Vec2::new(10.0, 0.0), 1.0),
        PointMass::new(Vec2::new(0.0, 0.0), 0.0),
    ];
    Constraint::new(0, 1, 5.0).relax(&mut points);
    assert_eq!(points[0].position, Vec2::new(7.5, 0.0));
    assert_eq!(points[1].position, Vec2::ZERO);
}

#[test]
fn test_relax_with_two_static_endpoints_changes_nothing() {
    let mut points = vec![
        PointMass::new(Vec2::new(0.0, 0.0), 0.0),
        PointMass::new(Vec2::new(1.0, 0.0), 0.0),
    ];

    Constraint::new(0, 1, 30.0).relax(&mut points);

    assert_eq!(points[0].position, Vec2::new(0.0, 0.0));
    assert_eq!(points[1].position, Vec2::new(1.0, 0.0));
}

#[test]
fn test_relax_coincident_points_stays_finite() {
    let mut points = vec![
        PointMass::new(Vec2::new(2.0, 2.0), 1.0),
        PointMass::new(Vec2::new(2.0, 2.0), 1.0),
    ];

    Constraint::new(0, 1, 30.0).relax(&mut points);

    assert!(points[0].position.x.is_finite() && points[0].position.y.is_finite());
    assert!(points[1].position.x.is_finite() && points[1].position.y.is_finite());
}
