use approx::assert_relative_eq;
use coverage::{
    los::has_obstacle_between,
    rfgrid::{ascii, Environment, Point},
    PathLoss, Simulation,
};

fn sim() -> Simulation {
    Simulation::new(
        PathLoss::builder()
            .exponent(4.0)
            .obstacle_attenuation(25.0)
            .build()
            .unwrap(),
    )
}

/// An area with a wall, a pillar, and two transmitters.
fn office() -> Environment {
    let mut env = Environment::new(24, 16).unwrap();
    env.add_obstacle_rect(8, 0, 9, 10);
    env.add_obstacle_rect(15, 9, 18, 12);
    env.add_transmitter(2, 3, 20.0);
    env.add_transmitter(20, 14, 14.0);
    env
}

#[test]
fn test_known_scenario() {
    let mut env = Environment::new(10, 10).unwrap();
    env.add_transmitter(0, 0, 100.0);
    sim().simulate(&mut env);
    let value = env.signal_at(Point::new(3, 0)).unwrap();
    assert_relative_eq!(value, 100.0 - 40.0 * 3.0_f64.log10(), epsilon = 1e-9);
    assert_relative_eq!(value, 80.92, epsilon = 0.01);
}

#[test]
fn test_obstacle_penalty_scenario() {
    let mut env = Environment::new(10, 10).unwrap();
    env.add_obstacle(1, 0);
    env.add_obstacle(2, 0);
    env.add_transmitter(0, 0, 100.0);
    sim().simulate(&mut env);
    let value = env.signal_at(Point::new(3, 0)).unwrap();
    assert_relative_eq!(value, 100.0 - 40.0 * 3.0_f64.log10() - 25.0, epsilon = 1e-9);
    assert_relative_eq!(value, 55.92, epsilon = 0.01);
    assert!(env.signal_at(Point::new(1, 0)).unwrap().is_nan());
    assert!(env.signal_at(Point::new(2, 0)).unwrap().is_nan());
}

#[test]
fn test_simulate_is_deterministic() {
    let mut env = office();
    let sim = sim();
    sim.simulate(&mut env);
    let first = env.signal().clone();
    sim.simulate(&mut env);
    for (a, b) in first.as_slice().iter().zip(env.signal().as_slice()) {
        assert!(a.to_bits() == b.to_bits(), "{a} != {b}");
    }
}

#[test]
fn test_transmitter_order_does_not_matter() {
    let mut forward = office();
    let mut reversed = Environment::new(24, 16).unwrap();
    reversed.add_obstacle_rect(8, 0, 9, 10);
    reversed.add_obstacle_rect(15, 9, 18, 12);
    for tx in forward.transmitters().to_vec().into_iter().rev() {
        reversed.add_transmitter(tx.location.x, tx.location.y, tx.power_dbm);
    }
    assert_eq!(reversed.transmitters().len(), 2);
    assert_eq!(reversed.transmitters()[0].location, Point::new(20, 14));

    let sim = sim();
    sim.simulate(&mut forward);
    sim.simulate(&mut reversed);
    for (a, b) in forward.signal().as_slice().iter().zip(reversed.signal().as_slice()) {
        if a.is_nan() {
            assert!(b.is_nan());
        } else {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_obstacles_always_hold_sentinel() {
    let mut env = office();
    sim().simulate(&mut env);
    for y in 0..16 {
        for x in 0..24 {
            let point = Point::new(x, y);
            let value = env.signal_at(point).unwrap();
            assert_eq!(env.is_obstacle(point), value.is_nan(), "{point:?}");
        }
    }
}

#[test]
fn test_colocated_receiver() {
    let mut env = Environment::new(7, 7).unwrap();
    env.add_transmitter(3, 4, 17.5);
    sim().simulate(&mut env);
    assert_relative_eq!(
        env.signal_at(Point::new(3, 4)).unwrap(),
        17.5,
        epsilon = 1e-9
    );
}

#[test]
fn test_second_transmitter_never_decreases_signal() {
    let mut one = office();
    let mut two = one.clone();
    two.add_transmitter(12, 12, -5.0);
    let sim = sim();
    sim.simulate(&mut one);
    sim.simulate(&mut two);
    for (a, b) in one.signal().as_slice().iter().zip(two.signal().as_slice()) {
        if a.is_nan() {
            assert!(b.is_nan());
        } else {
            assert!(b >= a, "{b} < {a}");
        }
    }
}

#[test]
fn test_wall_shadows_receivers() {
    let env = office();
    let tx = env.transmitters()[0].location;
    assert!(has_obstacle_between(env.obstacles(), tx, Point::new(12, 3)));
    assert!(!has_obstacle_between(env.obstacles(), tx, Point::new(6, 8)));
}

#[test]
fn test_export_round_trip() {
    let mut env = office();
    sim().simulate(&mut env);
    let mut out = Vec::new();
    ascii::write_signal(&env, &mut out).unwrap();
    let grid = ascii::read_signal(&out[..], env.width(), env.height()).unwrap();
    for (expected, actual) in env.signal().as_slice().iter().zip(grid.as_slice()) {
        if expected.is_nan() {
            assert!(actual.is_nan());
        } else {
            assert_relative_eq!(expected, actual, max_relative = 1e-12);
        }
    }
}
