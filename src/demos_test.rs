#![allow(clippy::float_cmp)]

use super::*;
use plotter::animation::DynamicalSystem;
use plotter::config::EngineConfig;
use plotter::input::InputSnapshot;
use plotter::render::{RecordingBackend, RenderCommand};
use plotter::viewport::PixelPoint;

fn screen_for(demo: &impl Demo) -> Screen<RecordingBackend> {
    let config = demo.screen_config(ScreenConfig { size: (100, 100), ..ScreenConfig::default() });
    match Screen::new(config, EngineConfig::default(), RecordingBackend::new()) {
        Ok(s) => s,
        Err(e) => panic!("screen rejected: {e}"),
    }
}

fn frame(screen: &mut Screen<RecordingBackend>) -> Vec<RenderCommand> {
    if let Err(e) = screen.update(&InputSnapshot::default()) {
        panic!("update failed: {e}");
    }
    screen.backend_mut().take_frames().into_iter().flatten().collect()
}

/// A constant map: every orbit point sits at `(x, y)`.
fn fixed_preset(x: f64, y: f64, n_iters: usize, trail_length: usize) -> Preset {
    Preset {
        t0: 0.0,
        t1: 1.0,
        x_limits: Limits::new(-1.0, 1.0),
        y_limits: Limits::new(-1.0, 1.0),
        system: DynamicalSystem::new(move |_, _, _| x, move |_, _, _| y),
        n_iters,
        trail_length,
    }
}

fn attractor(preset: Preset, frames: u64) -> Attractor {
    match Attractor::new(preset, frames) {
        Ok(a) => a,
        Err(e) => panic!("attractor rejected: {e}"),
    }
}

// =============================================================
// linspace
// =============================================================

#[test]
fn linspace_includes_both_ends() {
    let xs = linspace(-3.0, 3.0, 101);
    assert_eq!(xs.len(), 101);
    assert!((xs[0] + 3.0).abs() < 1e-12);
    assert!((xs[50]).abs() < 1e-12);
    assert!((xs[100] - 3.0).abs() < 1e-12);
}

#[test]
fn linspace_small_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
}

// =============================================================
// Wave
// =============================================================

#[test]
fn wave_uses_symmetric_limits() {
    let wave = Wave::new(30);
    let config = wave.screen_config(ScreenConfig::default());
    assert_eq!(config.x_limits, Limits::new(-5.0, 5.0));
    assert_eq!(config.y_limits, Limits::new(-5.0, 5.0));
    assert_eq!(config.size, ScreenConfig::default().size);
}

#[test]
fn wave_draws_axes_then_curve() {
    let mut wave = Wave::new(30);
    let mut screen = screen_for(&wave);
    assert!(wave.draw(&mut screen).is_ok());
    let commands = frame(&mut screen);

    // background, two axes, the curve, present
    assert_eq!(commands.len(), 5);
    match &commands[1] {
        RenderCommand::Polyline { points, .. } => {
            assert_eq!(points, &vec![PixelPoint::new(20, 50), PixelPoint::new(80, 50)]);
        }
        other => panic!("expected x axis, got {other:?}"),
    }
    match &commands[3] {
        RenderCommand::Polyline { points, .. } => assert_eq!(points.len(), 101),
        other => panic!("expected curve, got {other:?}"),
    }
}

#[test]
fn wave_advances_time_each_frame() {
    let mut wave = Wave::new(30);
    let mut screen = screen_for(&wave);
    assert!(wave.draw(&mut screen).is_ok());
    assert!(wave.draw(&mut screen).is_ok());
    assert_eq!(wave.state.frame, 2);
    assert!((wave.state.t - 2.0 / 30.0).abs() < 1e-12);
}

// =============================================================
// Attractor
// =============================================================

#[test]
fn attractor_uses_preset_limits() {
    let demo = attractor(fixed_preset(0.0, 0.0, 3, 2), 10);
    let config = demo.screen_config(ScreenConfig::default());
    assert_eq!(config.x_limits, Limits::new(-1.0, 1.0));
}

#[test]
fn attractor_draws_one_circle_per_visible_point() {
    let mut demo = attractor(fixed_preset(0.5, 0.5, 4, 3), 10);
    let mut screen = screen_for(&demo);
    assert!(demo.draw(&mut screen).is_ok());
    let commands = frame(&mut screen);
    let circles = commands.iter().filter(|c| matches!(c, RenderCommand::FilledCircle { .. })).count();
    assert_eq!(circles, 4);
}

#[test]
fn attractor_trail_fades_older_orbits() {
    let mut demo = attractor(fixed_preset(0.5, 0.5, 1, 2), 10);
    let mut screen = screen_for(&demo);
    assert!(demo.draw(&mut screen).is_ok());
    frame(&mut screen);
    assert!(demo.draw(&mut screen).is_ok());
    let commands = frame(&mut screen);

    let alphas: Vec<u8> = commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::FilledCircle { color, .. } => Some(color.a),
            _ => None,
        })
        .collect();
    // Newest orbit first at full opacity, the older one at half.
    assert_eq!(alphas, vec![255, 127]);
}

#[test]
fn attractor_trail_is_bounded() {
    let mut demo = attractor(fixed_preset(0.5, 0.5, 1, 2), 10);
    let mut screen = screen_for(&demo);
    for _ in 0..5 {
        assert!(demo.draw(&mut screen).is_ok());
    }
    assert_eq!(demo.trail.len(), 2);
}

#[test]
fn attractor_skips_points_outside_limits() {
    let mut demo = attractor(fixed_preset(5.0, 0.0, 3, 1), 10);
    let mut screen = screen_for(&demo);
    assert!(demo.draw(&mut screen).is_ok());
    let commands = frame(&mut screen);
    assert!(!commands.iter().any(|c| matches!(c, RenderCommand::FilledCircle { .. })));
}

#[test]
fn attractor_sweeps_time_window() {
    // fx echoes t, so each frame's orbit records the time it was drawn at.
    let preset = Preset {
        t0: -0.42,
        t1: -0.40,
        system: DynamicalSystem::new(|_, _, t| t, |_, _, _| 0.0),
        ..fixed_preset(0.0, 0.0, 1, 1)
    };
    let mut demo = attractor(preset, 5);
    let mut screen = screen_for(&demo);
    for frame in 0..5 {
        assert!(demo.draw(&mut screen).is_ok());
        let Some(orbit) = demo.trail.iter().next() else {
            panic!("frame {frame} left no orbit");
        };
        assert_eq!(orbit[0].x, demo.state.time_at(-0.42, frame));
    }
    assert!((demo.state.time_at(-0.42, 4) + 0.40).abs() < 1e-12);
}
