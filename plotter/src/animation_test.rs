#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn orbit_of(len: usize) -> Vec<Point> {
    (0..len).map(|i| Point::new(i as f64, 0.0)).collect()
}

// =============================================================
// AnimationState
// =============================================================

#[test]
fn advance_steps_time_and_frame() {
    let mut state = AnimationState::new(1.0, 0.5);
    state.advance();
    state.advance();
    assert_eq!(state.frame, 2);
    assert!(approx_eq(state.t, 2.0));
}

#[test]
fn frame_rate_clock() {
    let mut state = AnimationState::at_frame_rate(30);
    for _ in 0..30 {
        state.advance();
    }
    assert!((state.t - 1.0).abs() < 1e-9);
}

#[test]
fn zero_frame_rate_does_not_divide_by_zero() {
    let state = AnimationState::at_frame_rate(0);
    assert!(state.dt.is_finite());
}

#[test]
fn sweep_lands_on_both_ends() {
    let state = AnimationState::sweep(-0.42, -0.40, 1800);
    assert_eq!(state.t, -0.42);
    assert!(approx_eq(state.time_at(-0.42, 1799), -0.40));
}

#[test]
fn sweep_single_frame_stays_at_start() {
    let mut state = AnimationState::sweep(0.0, 1.0, 1);
    assert_eq!(state.t, 0.0);
    state.advance();
    assert!(state.t.is_finite());
}

// =============================================================
// DynamicalSystem
// =============================================================

#[test]
fn orbit_starts_after_seed() {
    let system = DynamicalSystem::new(|x, _, _| x + 1.0, |_, y, t| y * t);
    let orbit = system.orbit(2.0, 3);
    assert_eq!(orbit, vec![Point::new(3.0, 4.0), Point::new(4.0, 8.0), Point::new(5.0, 16.0)]);
}

#[test]
fn orbit_zero_iterations_is_empty() {
    let system = DynamicalSystem::new(|x, _, _| x, |_, y, _| y);
    assert!(system.orbit(0.3, 0).is_empty());
}

#[test]
fn orbit_stops_before_divergence() {
    // Squaring from 10 overflows after a handful of steps.
    let system = DynamicalSystem::new(|x, _, _| x * x, |_, y, _| y);
    let orbit = system.orbit(10.0, 100);
    assert!(orbit.len() < 100);
    assert!(!orbit.is_empty());
    assert!(orbit.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn orbit_stops_on_nan() {
    let system = DynamicalSystem::new(|x, _, _| (x - 1.0).sqrt(), |_, y, _| y);
    // sqrt(0.5 - 1) is NaN on the first step.
    assert!(system.orbit(0.5, 10).is_empty());
}

#[test]
fn step_passes_time_through() {
    let system = DynamicalSystem::new(|x, y, t| x + y + t, |x, y, t| x * y * t);
    assert_eq!(system.step(Point::new(1.0, 2.0), 3.0), Point::new(6.0, 6.0));
}

// =============================================================
// Trail
// =============================================================

#[test]
fn trail_is_newest_first() {
    let mut trail = Trail::new(3);
    trail.push(orbit_of(1));
    trail.push(orbit_of(2));
    let lens: Vec<usize> = trail.iter().map(<[Point]>::len).collect();
    assert_eq!(lens, vec![2, 1]);
}

#[test]
fn trail_drops_oldest_when_full() {
    let mut trail = Trail::new(2);
    trail.push(orbit_of(1));
    trail.push(orbit_of(2));
    trail.push(orbit_of(3));
    assert_eq!(trail.len(), 2);
    let lens: Vec<usize> = trail.iter().map(<[Point]>::len).collect();
    assert_eq!(lens, vec![3, 2]);
}

#[test]
fn trail_capacity_at_least_one() {
    let mut trail = Trail::new(0);
    assert_eq!(trail.capacity(), 1);
    trail.push(orbit_of(1));
    trail.push(orbit_of(1));
    assert_eq!(trail.len(), 1);
}

#[test]
fn fade_decreases_with_age() {
    let trail = Trail::new(10);
    assert_eq!(trail.fade(0), 1.0);
    assert!(approx_eq(trail.fade(5), 0.5));
    assert!(approx_eq(trail.fade(9), 0.1));
}
