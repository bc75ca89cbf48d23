// src/path.rs
//! Accumulated SLE trace and driving Brownian path.
//!
//! Point `i + 1` of the trace was produced by accepting increment `i`, so
//! `trace().len() == increments().len() + 1` at all times. Point 0 is the
//! origin. Entries are only ever appended.

use num_complex::Complex64;

/// One accepted segment of the driving Brownian path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Increment {
    pub time: f64,
    pub brownian: f64,
}

/// Discretized SLE trace together with the increments that generated it
#[derive(Clone, Debug, PartialEq)]
pub struct SlePath {
    trace: Vec<Complex64>,
    increments: Vec<Increment>,
}

impl SlePath {
    pub fn new() -> Self {
        SlePath {
            trace: vec![Complex64::new(0.0, 0.0)],
            increments: Vec::new(),
        }
    }

    /// Record an accepted segment and the trace point it produced.
    pub fn append(&mut self, time_increment: f64, brownian_increment: f64, point: Complex64) {
        self.increments.push(Increment {
            time: time_increment,
            brownian: brownian_increment,
        });
        self.trace.push(point);
    }

    pub fn last_point(&self) -> Complex64 {
        // trace always holds the origin
        self.trace[self.trace.len() - 1]
    }

    pub fn increments(&self) -> &[Increment] {
        &self.increments
    }

    pub fn trace(&self) -> &[Complex64] {
        &self.trace
    }

    /// Number of accepted segments
    pub fn step_count(&self) -> usize {
        self.increments.len()
    }

    /// Sum of all accepted time increments
    pub fn horizon(&self) -> f64 {
        self.increments.iter().map(|inc| inc.time).sum()
    }
}

impl Default for SlePath {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path_is_anchored_at_origin() {
        let path = SlePath::new();

        assert_eq!(path.trace(), &[Complex64::new(0.0, 0.0)]);
        assert!(path.increments().is_empty());
        assert_eq!(path.last_point(), Complex64::new(0.0, 0.0));
        assert_eq!(path.step_count(), 0);
        assert_eq!(path.horizon(), 0.0);
    }

    #[test]
    fn test_append_keeps_sequences_paired() {
        let mut path = SlePath::new();
        path.append(0.5, 0.1, Complex64::new(0.2, 1.0));
        path.append(0.25, -0.3, Complex64::new(-0.1, 1.4));

        assert_eq!(path.trace().len(), path.increments().len() + 1);
        assert_eq!(path.step_count(), 2);
        assert_eq!(path.last_point(), Complex64::new(-0.1, 1.4));
        assert_eq!(
            path.increments(),
            &[
                Increment { time: 0.5, brownian: 0.1 },
                Increment { time: 0.25, brownian: -0.3 },
            ]
        );
        assert!((path.horizon() - 0.75).abs() < 1e-15);
    }
}
