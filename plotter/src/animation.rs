//! Animation helpers: explicit frame time, iterated maps, and orbit trails.
//!
//! Nothing here is global. A render loop owns an [`AnimationState`] and
//! advances it once per frame; a [`DynamicalSystem`] is a pair of
//! caller-supplied update functions; a [`Trail`] keeps the most recent orbits
//! so older ones can be drawn fainter.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::collections::VecDeque;
use std::fmt;

use crate::viewport::Point;

/// Time state for a frame-driven animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Current animation time.
    pub t: f64,
    /// Frames advanced so far.
    pub frame: u64,
    /// Time step applied per frame.
    pub dt: f64,
}

impl AnimationState {
    #[must_use]
    pub fn new(t: f64, dt: f64) -> Self {
        Self { t, frame: 0, dt }
    }

    /// Real-time clock at `frame_rate` frames per second, starting at zero.
    #[must_use]
    pub fn at_frame_rate(frame_rate: u32) -> Self {
        Self::new(0.0, 1.0 / f64::from(frame_rate.max(1)))
    }

    /// Sweep `t0..=t1` evenly over `frames` frames. The last frame lands
    /// exactly on `t1` when stepped via [`Self::time_at`].
    #[must_use]
    pub fn sweep(t0: f64, t1: f64, frames: u64) -> Self {
        let steps = frames.saturating_sub(1).max(1);
        #[allow(clippy::cast_precision_loss)]
        let dt = (t1 - t0) / steps as f64;
        Self::new(t0, dt)
    }

    /// Time at `frame` for an animation that started from `start`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, start: f64, frame: u64) -> f64 {
        start + self.dt * frame as f64
    }

    /// Step one frame forward.
    pub fn advance(&mut self) {
        self.frame += 1;
        self.t += self.dt;
    }
}

type MapFn = Box<dyn Fn(f64, f64, f64) -> f64>;

/// A time-parameterised planar map `(x, y) -> (fx(x, y, t), fy(x, y, t))`.
pub struct DynamicalSystem {
    fx: MapFn,
    fy: MapFn,
}

impl fmt::Debug for DynamicalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicalSystem").finish_non_exhaustive()
    }
}

impl DynamicalSystem {
    pub fn new(fx: impl Fn(f64, f64, f64) -> f64 + 'static, fy: impl Fn(f64, f64, f64) -> f64 + 'static) -> Self {
        Self { fx: Box::new(fx), fy: Box::new(fy) }
    }

    /// Apply the map once.
    #[must_use]
    pub fn step(&self, point: Point, t: f64) -> Point {
        Point::new((self.fx)(point.x, point.y, t), (self.fy)(point.x, point.y, t))
    }

    /// Iterate up to `n_iters` times from `(t, t)`.
    ///
    /// The seed is not part of the result. Iteration stops before the first
    /// non-finite point, so a diverging orbit comes back short.
    #[must_use]
    pub fn orbit(&self, t: f64, n_iters: usize) -> Vec<Point> {
        let mut points = Vec::with_capacity(n_iters);
        let mut current = Point::new(t, t);
        for _ in 0..n_iters {
            let next = self.step(current, t);
            if !(next.x.is_finite() && next.y.is_finite()) {
                tracing::debug!(t, len = points.len(), "orbit diverged");
                break;
            }
            points.push(next);
            current = next;
        }
        points
    }
}

/// The last `capacity` orbits, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    orbits: VecDeque<Vec<Point>>,
    capacity: usize,
}

impl Trail {
    /// A trail that keeps at least one orbit.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { orbits: VecDeque::with_capacity(capacity), capacity }
    }

    /// Add the newest orbit, dropping the oldest once full.
    pub fn push(&mut self, orbit: Vec<Point>) {
        self.orbits.push_front(orbit);
        self.orbits.truncate(self.capacity);
    }

    /// Orbits from newest (age 0) to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &[Point]> {
        self.orbits.iter().map(Vec::as_slice)
    }

    /// Opacity for an orbit of the given age: `1 - age / capacity`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fade(&self, age: usize) -> f64 {
        1.0 - age as f64 / self.capacity as f64
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}
