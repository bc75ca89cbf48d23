// src/sim/refiner.rs
//! Adaptive Step-Size Control for SLE Traces
//!
//! # Algorithm
//!
//! Each proposed segment `(h, ΔB)` is turned into a candidate trace point by
//! solving the backward Loewner equation from the origin: the proposed segment
//! is applied first, followed by every accepted segment in reverse acceptance
//! order.
//!
//! The candidate is accepted when
//! ```text
//! h ≤ max_stepsize  and  ( |candidate - last_point| < tol  or  h ≤ min_stepsize )
//! ```
//! Otherwise the segment is bisected. The Brownian midpoint is drawn from the
//! Brownian bridge pinned at both ends of the segment,
//! ```text
//! m = ½ N(0, √h)
//! (h, ΔB) → (h/2, ΔB/2 + m), (h/2, ΔB/2 - m)
//! ```
//! and both halves are refined left to right. The right half is only proposed
//! after the left half has been fully accepted, because its replay includes the
//! left half's new segments.
//!
//! This step size control for chordal SLE follows Tom Kennedy, *Numerical
//! Computations for the Schramm-Loewner Evolution*, J. Stat. Phys. 137:839 (2009).

use crate::path::SlePath;
use crate::rng::NormalSampler;
use crate::sim::engine::SleConfig;
use crate::solvers::ninomiya_victoir::NinomiyaVictoir;
use num_complex::Complex64;
use tracing::trace;

/// Counters collected while refining a trace
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefinementStats {
    /// Segments appended to the path
    pub accepted: usize,
    /// Rejected candidates that were split in two
    pub bisections: usize,
    /// Acceptances that failed the tolerance test and were admitted by the floor
    pub floor_forced: usize,
    /// Deepest bisection level reached (root is 0)
    pub max_depth: usize,
}

/// Recursive accept/bisect controller owning the path under construction
pub struct AdaptiveRefiner<'a, S: NormalSampler + ?Sized> {
    config: &'a SleConfig,
    solver: NinomiyaVictoir,
    sampler: &'a mut S,
    path: SlePath,
    stats: RefinementStats,
}

impl<'a, S: NormalSampler + ?Sized> AdaptiveRefiner<'a, S> {
    /// The configuration is assumed to be validated by the caller.
    pub fn new(config: &'a SleConfig, sampler: &'a mut S) -> Self {
        AdaptiveRefiner {
            config,
            solver: NinomiyaVictoir::new(config.kappa),
            sampler,
            path: SlePath::new(),
            stats: RefinementStats::default(),
        }
    }

    pub fn path(&self) -> &SlePath {
        &self.path
    }

    pub fn stats(&self) -> RefinementStats {
        self.stats
    }

    pub fn into_parts(self) -> (SlePath, RefinementStats) {
        (self.path, self.stats)
    }

    /// Draw the root increment `N(0, √T)` and refine over the whole horizon.
    pub fn run(&mut self) -> Complex64 {
        let t = self.config.t;
        let root_increment = self.sampler.sample(0.0, t.sqrt());
        self.propose_and_accept(t, root_increment)
    }

    /// Refine one segment of the driving path.
    ///
    /// Returns the accepted candidate, or after a bisection the value returned
    /// for the right half. The path is the result of a run; this value is only
    /// the last point produced along the subtree.
    pub fn propose_and_accept(&mut self, time_increment: f64, brownian_increment: f64) -> Complex64 {
        self.refine(time_increment, brownian_increment, 0)
    }

    /// Candidate point for `(time_increment, brownian_increment)` given the
    /// segments accepted so far.
    pub fn candidate(&self, time_increment: f64, brownian_increment: f64) -> Complex64 {
        let start = self.solver.step(
            Complex64::new(0.0, 0.0),
            time_increment,
            brownian_increment,
        );

        self.path
            .increments()
            .iter()
            .rev()
            .fold(start, |z, inc| self.solver.step(z, inc.time, inc.brownian))
    }

    fn refine(&mut self, time_increment: f64, brownian_increment: f64, depth: usize) -> Complex64 {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let candidate = self.candidate(time_increment, brownian_increment);

        let within_ceiling = time_increment <= self.config.max_stepsize;
        let at_floor = time_increment <= self.config.min_stepsize;
        let within_tol = (candidate - self.path.last_point()).norm() < self.config.tol;

        if within_ceiling && (within_tol || at_floor) {
            if !within_tol {
                self.stats.floor_forced += 1;
            }
            self.stats.accepted += 1;
            self.path.append(time_increment, brownian_increment, candidate);
            return candidate;
        }

        // Brownian bridge midpoint over an interval of length `time_increment`
        let bridge_midpoint = 0.5 * self.sampler.sample(0.0, time_increment.sqrt());
        self.stats.bisections += 1;

        trace!(
            depth,
            time_increment,
            brownian_increment,
            bridge_midpoint,
            "bisecting segment"
        );

        let half_time_increment = 0.5 * time_increment;
        let half_increment = 0.5 * brownian_increment;

        self.refine(half_time_increment, half_increment + bridge_midpoint, depth + 1);
        self.refine(half_time_increment, half_increment - bridge_midpoint, depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(t: f64, tol: f64, max_stepsize: f64, min_stepsize: f64) -> SleConfig {
        SleConfig {
            kappa: 4.0,
            t,
            tol,
            max_stepsize,
            min_stepsize,
        }
    }

    #[test]
    fn test_candidate_without_history_is_single_step() {
        let cfg = config(1.0, 0.1, 1.0, 0.01);
        let mut sampler = |mean: f64, _std_dev: f64| mean;
        let refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        let solver = NinomiyaVictoir::new(4.0);
        let expected = solver.step(Complex64::new(0.0, 0.0), 0.3, 0.2);
        assert_eq!(refiner.candidate(0.3, 0.2), expected);
    }

    #[test]
    fn test_accept_immediately_with_loose_tolerance() {
        let cfg = config(1.0, 1e9, 1.0, 1e-3);
        let mut sampler = |_mean: f64, _std_dev: f64| -> f64 {
            panic!("no bisection expected")
        };
        let mut refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        let z = refiner.propose_and_accept(1.0, 0.4);

        assert_eq!(refiner.path().step_count(), 1);
        assert_eq!(refiner.path().last_point(), z);
        assert_eq!(
            refiner.stats(),
            RefinementStats {
                accepted: 1,
                bisections: 0,
                floor_forced: 0,
                max_depth: 0,
            }
        );
    }

    #[test]
    fn test_ceiling_forces_bisection() {
        // Loose tolerance, but a segment of 1.0 exceeds max_stepsize 0.25
        let cfg = config(1.0, 1e9, 0.25, 1e-3);
        let mut sampler = |mean: f64, _std_dev: f64| mean;
        let mut refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        refiner.propose_and_accept(1.0, 0.0);

        let times: Vec<f64> = refiner.path().increments().iter().map(|i| i.time).collect();
        assert_eq!(times, vec![0.25; 4]);

        let stats = refiner.stats();
        assert_eq!(stats.bisections, 3);
        assert_eq!(stats.accepted, 4);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.floor_forced, 0);
    }

    #[test]
    fn test_bisection_uses_bridge_midpoint() {
        let cfg = config(1.0, 1e9, 0.5, 0.5);
        let mut requests = Vec::new();
        let mut sampler = |mean: f64, std_dev: f64| {
            requests.push((mean, std_dev));
            0.6
        };
        let mut refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        refiner.propose_and_accept(1.0, 1.0);
        let increments = refiner.path().increments().to_vec();
        drop(refiner);

        // One bridge draw from N(0, √1), halved
        assert_eq!(requests, vec![(0.0, 1.0)]);
        assert_eq!(increments.len(), 2);
        assert!((increments[0].brownian - (0.5 + 0.3)).abs() < 1e-15);
        assert!((increments[1].brownian - (0.5 - 0.3)).abs() < 1e-15);
    }

    #[test]
    fn test_bisection_returns_right_half_value() {
        let cfg = config(1.0, 1e9, 0.5, 0.5);
        let mut sampler = |_mean: f64, _std_dev: f64| 0.2;
        let mut refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        let z = refiner.propose_and_accept(1.0, -0.4);

        assert_eq!(refiner.path().step_count(), 2);
        assert_eq!(z, refiner.path().last_point());
    }

    #[test]
    fn test_error_measured_against_latest_point() {
        // With a zero driver each step maps iy to i√(y² + 4h), so the two
        // halves land on i√2 and 2i. The second is within tol of i√2 but
        // not of the origin.
        let cfg = config(1.0, 1.5, 0.5, 0.125);
        let mut sampler = |mean: f64, _std_dev: f64| mean;
        let mut refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        refiner.run();

        let trace = refiner.path().trace();
        assert_eq!(refiner.path().step_count(), 2);
        assert!((trace[1] - Complex64::new(0.0, 2f64.sqrt())).norm() < 1e-12);
        assert!((trace[2] - Complex64::new(0.0, 2.0)).norm() < 1e-12);
        assert_eq!(refiner.stats().floor_forced, 0);
        assert_eq!(refiner.stats().bisections, 1);
    }

    #[test]
    fn test_floor_forced_acceptances_are_counted() {
        let cfg = config(1.0, f64::MIN_POSITIVE, 1.0, 0.25);
        let mut sampler = |mean: f64, _std_dev: f64| mean;
        let mut refiner = AdaptiveRefiner::new(&cfg, &mut sampler);

        refiner.run();

        let stats = refiner.stats();
        assert_eq!(stats.accepted, 4);
        assert_eq!(stats.floor_forced, 4);
        assert_eq!(stats.bisections, 3);
    }
}
