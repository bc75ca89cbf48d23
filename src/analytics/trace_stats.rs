// src/analytics/trace_stats.rs
//! Summary statistics of a simulated SLE trace.
//!
//! `steps` is the number of accepted segments, i.e. the number of trace points
//! minus the origin.

use crate::path::SlePath;
use crate::sim::engine::SleConfig;
use num_complex::Complex64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSummary {
    pub steps: usize,
    /// Sum of the accepted time increments; equals `t` up to rounding
    pub horizon: f64,
    pub finest_step: f64,
    pub coarsest_step: f64,
    /// Segments at or below `min_stepsize`
    pub floor_steps: usize,
    /// Largest distance between neighbouring trace points
    pub max_local_jump: f64,
    /// Largest imaginary part reached by the trace
    pub max_height: f64,
    pub endpoint: Complex64,
}

impl TraceSummary {
    pub fn from_path(path: &SlePath, config: &SleConfig) -> Self {
        let increments = path.increments();
        let trace = path.trace();

        let (finest_step, coarsest_step) = if increments.is_empty() {
            (0.0, 0.0)
        } else {
            increments
                .iter()
                .fold((f64::INFINITY, 0.0f64), |(lo, hi), inc| {
                    (lo.min(inc.time), hi.max(inc.time))
                })
        };

        let floor_steps = increments
            .iter()
            .filter(|inc| inc.time <= config.min_stepsize)
            .count();

        let max_local_jump = trace
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .fold(0.0, f64::max);

        let max_height = trace.iter().map(|z| z.im).fold(0.0, f64::max);

        TraceSummary {
            steps: path.step_count(),
            horizon: path.horizon(),
            finest_step,
            coarsest_step,
            floor_steps,
            max_local_jump,
            max_height,
            endpoint: path.last_point(),
        }
    }

    /// Key/value rows for `output::write_summary_to_csv`
    pub fn to_rows(&self, config: &SleConfig) -> Vec<(String, String)> {
        vec![
            ("kappa".to_string(), config.kappa.to_string()),
            ("t".to_string(), config.t.to_string()),
            ("tol".to_string(), config.tol.to_string()),
            ("max_stepsize".to_string(), config.max_stepsize.to_string()),
            ("min_stepsize".to_string(), config.min_stepsize.to_string()),
            ("steps".to_string(), self.steps.to_string()),
            ("horizon".to_string(), self.horizon.to_string()),
            ("finest_step".to_string(), self.finest_step.to_string()),
            ("coarsest_step".to_string(), self.coarsest_step.to_string()),
            ("floor_steps".to_string(), self.floor_steps.to_string()),
            ("max_local_jump".to_string(), self.max_local_jump.to_string()),
            ("max_height".to_string(), self.max_height.to_string()),
            ("endpoint_re".to_string(), self.endpoint.re.to_string()),
            ("endpoint_im".to_string(), self.endpoint.im.to_string()),
        ]
    }
}
