//! Attractor presets: a map, a time window, and the limits it looks good in.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use plotter::animation::DynamicalSystem;
use plotter::viewport::Limits;

use crate::error::CliError;

#[derive(Debug)]
pub struct Preset {
    pub t0: f64,
    pub t1: f64,
    pub x_limits: Limits,
    pub y_limits: Limits,
    pub system: DynamicalSystem,
    pub n_iters: usize,
    pub trail_length: usize,
}

/// Look up a preset by number.
///
/// # Errors
///
/// Returns [`CliError::UnknownPreset`] for a number with no preset.
pub fn preset(id: u32) -> Result<Preset, CliError> {
    let preset = match id {
        1 => Preset {
            t0: -0.42,
            t1: -0.40,
            x_limits: Limits::new(-1.03, 0.28),
            y_limits: Limits::new(-0.55, 0.40),
            system: DynamicalSystem::new(|x, y, t| -y * y - x * t + y, |x, y, t| x * x - x * y + t),
            n_iters: 150,
            trail_length: 10,
        },
        2 => Preset {
            t0: 0.0249,
            t1: 0.025,
            x_limits: Limits::new(-0.4, 0.65),
            y_limits: Limits::new(-0.5, 0.7),
            system: DynamicalSystem::new(
                |x, y, t| -x * x + x * t + y,
                |x, y, t| x * x - y * y - t * t - x * y + y * t - x + y,
            ),
            n_iters: 350,
            trail_length: 20,
        },
        3 => Preset {
            t0: 0.400,
            t1: 0.400_001,
            x_limits: Limits::new(-0.75, 1.7),
            y_limits: Limits::new(-1.29, 0.45),
            system: DynamicalSystem::new(
                |x, y, t| x * x - x * t + y * t - x,
                |x, y, t| -y * y - t * t - x * y - y * t - x * t - y,
            ),
            n_iters: 130,
            trail_length: 10,
        },
        4 => Preset {
            t0: 0.021,
            t1: 0.0215,
            x_limits: Limits::new(-0.4, 0.6),
            y_limits: Limits::new(-0.5, 0.6),
            system: DynamicalSystem::new(
                |x, y, t| -x * x + x * t + y,
                |x, y, t| x * x - y * y - t * t - x * y + y * t - x + y,
            ),
            n_iters: 400,
            trail_length: 10,
        },
        5 => Preset {
            t0: -0.2,
            t1: 0.0,
            x_limits: Limits::new(-1.0, 1.0),
            y_limits: Limits::new(-1.0, 1.0),
            system: DynamicalSystem::new(
                |x, y, t| -x * x + x * t * y + y,
                |x, y, t| x * x - y * y - t * t - x * y + y * t - x + y,
            ),
            n_iters: 350,
            trail_length: 10,
        },
        6 => Preset {
            t0: 0.108_100_768_72,
            t1: 0.108_100_768_755,
            x_limits: Limits::new(-1.5, 1.3),
            y_limits: Limits::new(0.0, 2.0),
            system: DynamicalSystem::new(|x, y, t| -t * t - x * y + t, |x, y, t| -x * y + x * t + y + t),
            n_iters: 800,
            trail_length: 10,
        },
        7 => Preset {
            t0: -1.189,
            t1: -1.188,
            x_limits: Limits::new(-0.8, -0.2),
            y_limits: Limits::new(-2.0, 1.0),
            system: DynamicalSystem::new(|x, _, t| t.powi(-2) + x * x - t * t, |x, y, t| -x * y + y * y - t * t),
            n_iters: 150,
            trail_length: 10,
        },
        8 => Preset {
            t0: -0.75,
            t1: -0.5,
            x_limits: Limits::new(-1.0, 1.0),
            y_limits: Limits::new(-1.0, 1.0),
            system: DynamicalSystem::new(|x, y, t| t * t - x * y + x * t, |x, y, t| y * y - x * x + t * t),
            n_iters: 150,
            trail_length: 10,
        },
        9 => Preset {
            t0: 0.195,
            t1: 0.195_02,
            x_limits: Limits::new(-0.9, -0.5),
            y_limits: Limits::new(-0.4, -0.1),
            system: DynamicalSystem::new(|x, y, t| t - x * y + x * t - x * 2.0, |x, y, t| y * y - x * x + t * t),
            n_iters: 150,
            trail_length: 10,
        },
        10 => Preset {
            t0: -0.788,
            t1: -0.786,
            x_limits: Limits::new(-1.8, 0.85),
            y_limits: Limits::new(-1.2, 1.8),
            system: DynamicalSystem::new(|x, y, t| t - x * y + x * t - x * x, |x, y, t| t * t - y * y + t * x),
            n_iters: 350,
            trail_length: 10,
        },
        11 => Preset {
            t0: -0.004_37,
            t1: -0.004_34,
            x_limits: Limits::new(-1.0, 1.0),
            y_limits: Limits::new(-1.0, 1.0),
            system: DynamicalSystem::new(|x, y, t| y + x + t, |x, y, t| y * y - x * x + t - y),
            n_iters: 500,
            trail_length: 10,
        },
        12 => Preset {
            t0: -0.0001,
            t1: 0.035,
            x_limits: Limits::new(-2.0, 0.2),
            y_limits: Limits::new(-2.0, 1.2),
            system: DynamicalSystem::new(|x, y, t| t * x + t * t - y * y, |x, y, t| x * x - t * t + y + x - t),
            n_iters: 300,
            trail_length: 10,
        },
        13 => Preset {
            t0: -0.6,
            t1: -0.37,
            x_limits: Limits::new(-1.5, 1.5),
            y_limits: Limits::new(-1.5, 1.5),
            system: DynamicalSystem::new(
                |x, y, t| x * t - y * x + y * t - x * x + y * y,
                |x, y, t| y * y - t * t + x * x - y * t + x - y,
            ),
            n_iters: 300,
            trail_length: 10,
        },
        other => return Err(CliError::UnknownPreset(other)),
    };
    Ok(preset)
}
