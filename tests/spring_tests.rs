// Host-side tests for the spring integrator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/motion/constants.rs");
    }
    pub mod spring {
        include!("../src/motion/spring.rs");
    }
}

use motion::constants::*;
use motion::spring::*;

const FRAME: f32 = 1.0 / 60.0;

fn dot() -> SpringConfig {
    SpringConfig::new(CURSOR_DOT_STIFFNESS, CURSOR_DOT_DAMPING)
}

fn ring() -> SpringConfig {
    SpringConfig::new(CURSOR_RING_STIFFNESS, CURSOR_RING_DAMPING)
}

fn tilt() -> SpringConfig {
    SpringConfig::new(TILT_STIFFNESS, TILT_DAMPING)
}

/// Step from rest at 0 towards `target`, returning every sampled value.
fn step_response(config: SpringConfig, target: f32, frames: usize) -> (Spring, Vec<f32>) {
    let mut s = Spring::new(config, 0.0);
    s.set_target(target);
    let mut samples = Vec::with_capacity(frames);
    for _ in 0..frames {
        s.step(FRAME);
        samples.push(s.value());
    }
    (s, samples)
}

#[test]
fn new_spring_is_at_rest_on_its_initial_value() {
    let s = Spring::new(dot(), 12.0);
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 12.0);
    assert_eq!(s.target(), 12.0);
}

#[test]
fn set_target_does_not_move_current_value() {
    let mut s = Spring::new(dot(), 0.0);
    s.set_target(500.0);
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.velocity(), 0.0);
    assert!(!s.is_at_rest());

    // One frame moves it part of the way, never all of it.
    s.step(FRAME);
    assert!(s.value() > 0.0);
    assert!(s.value() < 500.0);
}

#[test]
fn reset_is_the_only_jump() {
    let mut s = Spring::new(tilt(), 0.0);
    s.set_target(100.0);
    s.step(FRAME);
    s.reset(-20.0);
    assert_eq!(s.value(), -20.0);
    assert_eq!(s.velocity(), 0.0);
    assert!(s.is_at_rest());
}

#[test]
fn step_response_settles_exactly_on_target() {
    for config in [dot(), ring(), tilt()] {
        let (s, _) = step_response(config, 200.0, 240);
        assert!(s.is_at_rest(), "spring {:?} did not settle", config);
        assert_eq!(s.value(), 200.0);
        assert_eq!(s.velocity(), 0.0);
    }
}

#[test]
fn step_reports_motion_until_settled() {
    let mut s = Spring::new(dot(), 0.0);
    s.set_target(50.0);
    assert!(s.step(FRAME));
    let mut frames = 1;
    while s.step(FRAME) {
        frames += 1;
        assert!(frames < 600, "never settled");
    }
    assert!(!s.step(FRAME));
}

#[test]
fn overshoot_never_exceeds_analytic_bound() {
    let target = 300.0;
    for config in [dot(), ring(), tilt()] {
        let bound = config.overshoot_bound();
        let (_, samples) = step_response(config, target, 240);
        let peak = samples.iter().cloned().fold(f32::MIN, f32::max);
        let overshoot = (peak - target).max(0.0) / target;
        assert!(
            overshoot <= bound + 1e-4,
            "config {:?}: overshoot {} exceeds bound {}",
            config,
            overshoot,
            bound
        );
        assert!(samples.iter().all(|v| *v >= -1e-3), "undershot the start");
    }
}

#[test]
fn overdamped_ring_approaches_monotonically() {
    let (_, samples) = step_response(ring(), 100.0, 240);
    for pair in samples.windows(2) {
        assert!(pair[1] >= pair[0], "ring moved backwards: {:?}", pair);
    }
    assert_eq!(ring().overshoot_bound(), 0.0);
}

#[test]
fn error_shrinks_over_time() {
    let (_, samples) = step_response(dot(), 100.0, 60);
    let err = |i: usize| (100.0 - samples[i]).abs();
    assert!(err(30) < err(5));
    assert!(err(59) < err(30));
}

#[test]
fn damping_ratios_match_tuning() {
    assert!(dot().damping_ratio() < 1.0);
    assert!(tilt().damping_ratio() < 1.0);
    assert!(ring().damping_ratio() > 1.0);
    // Bounds stay small enough to read as smoothing, not bounce.
    assert!(dot().overshoot_bound() < 0.05);
    assert!(tilt().overshoot_bound() < 0.05);
}

#[test]
fn long_frames_are_clamped() {
    let mut a = Spring::new(tilt(), 0.0);
    let mut b = Spring::new(tilt(), 0.0);
    a.set_target(100.0);
    b.set_target(100.0);
    a.step(5.0);
    b.step(FRAME_DT_MAX_SEC);
    assert_eq!(a.value(), b.value());
    assert!(a.value().is_finite());
}

#[test]
fn retargeting_mid_flight_keeps_velocity() {
    let mut s = Spring::new(dot(), 0.0);
    s.set_target(100.0);
    for _ in 0..5 {
        s.step(FRAME);
    }
    let before = s.state();
    s.set_target(0.0);
    assert_eq!(s.state(), before);
    assert!(s.velocity() > 0.0);
}

#[test]
fn map_range_hits_endpoints_and_clamps() {
    assert_eq!(map_range(-200.0, [-200.0, 200.0], [-5.0, 5.0]), -5.0);
    assert_eq!(map_range(200.0, [-200.0, 200.0], [-5.0, 5.0]), 5.0);
    assert_eq!(map_range(0.0, [-200.0, 200.0], [-5.0, 5.0]), 0.0);
    assert_eq!(map_range(900.0, [-200.0, 200.0], [-5.0, 5.0]), 5.0);
    assert_eq!(map_range(-900.0, [-200.0, 200.0], [5.0, -5.0]), 5.0);
    assert_eq!(map_range(3.0, [1.0, 1.0], [7.0, 9.0]), 7.0);
}
