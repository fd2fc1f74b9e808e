//! Freehand strokes and the store that owns them.
//!
//! A [`Stroke`] is built point by point while a drawing gesture is active and
//! frozen once committed. [`StrokeStore`] keeps committed strokes in append
//! order, which is also draw order and undo order. Nothing ever clears the
//! store wholesale; strokes leave only through [`StrokeStore::undo`].

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::Serialize;

use crate::viewport::Point;

/// One committed freehand line, in data space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered collection of committed strokes.
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze `points` into a stroke and append it.
    ///
    /// An empty point list is skipped and reported as `false`.
    pub fn commit(&mut self, points: Vec<Point>) -> bool {
        if points.is_empty() {
            return false;
        }
        self.strokes.push(Stroke { points });
        true
    }

    /// Remove and return the most recent stroke.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    /// Strokes in draw order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
