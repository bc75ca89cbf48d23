// demos/trace.rs
//
// cargo run --release --example trace -- [kappa] [seed] [output.csv]
use fast_sle::analytics::trace_stats::TraceSummary;
use fast_sle::math_utils::Timer;
use fast_sle::output;
use fast_sle::sim::engine::{simulate_seeded, SleConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let kappa = args
        .get(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(4.0);
    let seed = args
        .get(2)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let output_filename = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| format!("sle_trace_kappa_{}.csv", kappa));

    let config = SleConfig {
        kappa,
        ..Default::default()
    };

    println!("Chordal SLE with k = {:.2} over [0, {}]", config.kappa, config.t);
    println!(
        "tol = {}, max_stepsize = {:e}, min_stepsize = {:e}, seed = {}",
        config.tol, config.max_stepsize, config.min_stepsize, seed
    );

    let mut timer = Timer::new();
    timer.start();
    let run = match simulate_seeded(&config, seed) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed_ms = timer.elapsed_ms();

    let summary = TraceSummary::from_path(&run.path, &config);

    println!("Number of steps = {}", summary.steps);
    println!("  Bisections:        {}", run.stats.bisections);
    println!("  Floor-forced:      {}", run.stats.floor_forced);
    println!("  Max depth:         {}", run.stats.max_depth);
    println!("  Finest step:       {:e}", summary.finest_step);
    println!("  Coarsest step:     {:e}", summary.coarsest_step);
    println!("  Max local jump:    {:.6}", summary.max_local_jump);
    println!("  Max height:        {:.6}", summary.max_height);
    println!(
        "  Endpoint:          {:.6} + {:.6}i",
        summary.endpoint.re, summary.endpoint.im
    );
    println!("  Elapsed:           {:.1} ms", elapsed_ms);

    match output::write_trace_to_csv(&output_filename, &run.path) {
        Ok(()) => println!("\nTrace written to {}", output_filename),
        Err(e) => eprintln!("Could not write {}: {}", output_filename, e),
    }

    let summary_filename = match output_filename.strip_suffix(".csv") {
        Some(stem) => format!("{}_summary.csv", stem),
        None => format!("{}_summary.csv", output_filename),
    };
    match output::write_summary_to_csv(&summary_filename, &summary.to_rows(&config)) {
        Ok(()) => println!("Summary written to {}", summary_filename),
        Err(e) => eprintln!("Could not write {}: {}", summary_filename, e),
    }
}
