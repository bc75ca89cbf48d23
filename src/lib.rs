//! # fast-sle: Adaptive Simulation of Chordal SLE Traces
//!
//! A Rust library for numerically approximating the trace of a chordal
//! Schramm-Loewner Evolution SLE_κ over a fixed time interval `[0, T]`.
//!
//! ## Key Features
//!
//! - **Ninomiya-Victoir splitting** of the backward Loewner equation, with
//!   closed-form horizontal and vertical flows
//! - **Adaptive step size control**: segments are bisected with Brownian-bridge
//!   midpoints until neighbouring trace points are within a tolerance
//! - **Reproducible**: every random draw goes through one injected sampler
//! - **Validated configuration** before any work is done
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_sle::sim::engine::{run_simulation, SleConfig};
//! use fast_sle::rng::SeededNormalSampler;
//!
//! let config = SleConfig {
//!     kappa: 8.0 / 3.0,
//!     max_stepsize: 1.0 / 64.0,
//!     min_stepsize: 1.0 / 4096.0,
//!     tol: 0.05,
//!     ..Default::default()
//! };
//!
//! let mut sampler = SeededNormalSampler::new(42);
//! let path = run_simulation(&config, &mut sampler).expect("Valid configuration");
//! println!("Number of steps = {}", path.step_count());
//! ```
//!
//! ## Mathematical Foundation
//!
//! The SLE trace at time `t` is `γ(t) = lim Z_t(0)` where `Z` solves the backward
//! Loewner equation `dZ = -2/Z dt - √κ dB` started from the origin. Each accepted
//! trace point is therefore obtained by replaying every accepted Brownian segment
//! in reverse order.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod path;
pub mod solvers;
pub mod sim;
pub mod analytics;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{SleError, SleResult};
pub use path::{Increment, SlePath};
pub use sim::engine::{run_simulation, simulate, simulate_seeded, SleConfig, SleRun};
