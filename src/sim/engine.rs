// src/sim/engine.rs
use crate::error::{validation::*, SleResult};
use crate::path::SlePath;
use crate::rng::{NormalSampler, SeededNormalSampler};
use crate::sim::refiner::{AdaptiveRefiner, RefinementStats};
use tracing::debug;

/// Parameters of one chordal SLE_κ simulation over `[0, t]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SleConfig {
    /// SLE parameter κ
    pub kappa: f64,
    /// Time horizon T
    pub t: f64,
    /// Bound on the distance between neighbouring trace points
    pub tol: f64,
    /// No segment coarser than this is ever accepted
    pub max_stepsize: f64,
    /// Segments this fine are accepted regardless of `tol`
    pub min_stepsize: f64,
}

impl SleConfig {
    /// Default configuration rescaled to the horizon `t`.
    ///
    /// Both step bounds keep their ratio to the horizon (`t/2048` and `t/2^33`).
    pub fn with_horizon(t: f64) -> Self {
        SleConfig {
            t,
            max_stepsize: t / 2048.0,
            min_stepsize: t / 2f64.powi(33),
            ..Default::default()
        }
    }

    /// Validate the simulation configuration
    pub fn validate(&self) -> SleResult<()> {
        for (name, value) in [
            ("kappa", self.kappa),
            ("t", self.t),
            ("tol", self.tol),
            ("max_stepsize", self.max_stepsize),
            ("min_stepsize", self.min_stepsize),
        ] {
            validate_finite(name, value)?;
            validate_positive(name, value)?;
        }

        validate_not_greater("max_stepsize", self.max_stepsize, "t", self.t)?;
        validate_not_greater(
            "min_stepsize",
            self.min_stepsize,
            "max_stepsize",
            self.max_stepsize,
        )?;

        Ok(())
    }

    /// Upper bound on the bisection depth, `ceil(log2(t / min_stepsize))`
    pub fn max_depth(&self) -> usize {
        (self.t / self.min_stepsize).log2().ceil().max(0.0) as usize
    }
}

impl Default for SleConfig {
    fn default() -> Self {
        SleConfig {
            kappa: 4.0,
            t: 1.0,
            tol: 0.0125,
            max_stepsize: 1.0 / 2048.0,
            min_stepsize: 1.0 / 2f64.powi(33),
        }
    }
}

/// Completed simulation: the trace and how it was refined
#[derive(Clone, Debug)]
pub struct SleRun {
    pub path: SlePath,
    pub stats: RefinementStats,
}

/// Simulate one SLE trace and return the accumulated path.
///
/// # Errors
///
/// Returns `SleError` when the configuration is invalid. Validation happens
/// before the first draw from `sampler`.
pub fn run_simulation<S: NormalSampler + ?Sized>(
    config: &SleConfig,
    sampler: &mut S,
) -> SleResult<SlePath> {
    simulate(config, sampler).map(|run| run.path)
}

/// Simulate one SLE trace, keeping the refinement statistics.
pub fn simulate<S: NormalSampler + ?Sized>(
    config: &SleConfig,
    sampler: &mut S,
) -> SleResult<SleRun> {
    config.validate()?;

    debug!(
        kappa = config.kappa,
        t = config.t,
        tol = config.tol,
        max_stepsize = config.max_stepsize,
        min_stepsize = config.min_stepsize,
        "starting SLE simulation"
    );

    let mut refiner = AdaptiveRefiner::new(config, sampler);
    // The endpoint is read from the path
    refiner.run();
    let (path, stats) = refiner.into_parts();

    debug!(
        steps = path.step_count(),
        bisections = stats.bisections,
        floor_forced = stats.floor_forced,
        max_depth = stats.max_depth,
        "SLE simulation finished"
    );

    Ok(SleRun { path, stats })
}

/// Simulate one SLE trace with a `StdRng` seeded from `seed`.
pub fn simulate_seeded(config: &SleConfig, seed: u64) -> SleResult<SleRun> {
    let mut sampler = SeededNormalSampler::new(seed);
    simulate(config, &mut sampler)
}
