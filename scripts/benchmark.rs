use clap::Parser;
use fast_sle::analytics::trace_stats::TraceSummary;
use fast_sle::math_utils::Timer;
use fast_sle::sim::engine::{simulate_seeded, SleConfig};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sweep the step-size tolerance of the adaptive SLE simulation
#[derive(Parser, Debug)]
#[command(name = "benchmark", version, about)]
struct Args {
    /// SLE parameter κ
    #[arg(long, default_value_t = 4.0)]
    kappa: f64,

    /// Seed shared by every run so that only the tolerance varies
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tolerances to sweep
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.2, 0.1, 0.05, 0.025, 0.0125])]
    tol: Vec<f64>,

    /// max_stepsize as a fraction of T, given as the exponent n in T/2^n
    #[arg(long, default_value_t = 11)]
    max_level: i32,

    /// min_stepsize as a fraction of T, given as the exponent n in T/2^n
    #[arg(long, default_value_t = 33)]
    min_level: i32,

    /// Output CSV (defaults to a timestamped file name)
    #[arg(long)]
    output: Option<String>,
}

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    rust_version: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            rust_version: Self::get_rust_version(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    tol: f64,
    steps: usize,
    bisections: usize,
    floor_forced: usize,
    max_depth: usize,
    max_local_jump: f64,
    time_ms: f64,
}

fn run_sweep(args: &Args) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &tol in &args.tol {
        let config = SleConfig {
            kappa: args.kappa,
            t: 1.0,
            tol,
            max_stepsize: 1.0 / 2f64.powi(args.max_level),
            min_stepsize: 1.0 / 2f64.powi(args.min_level),
        };

        println!("Running tol = {} ...", tol);

        let mut timer = Timer::new();
        timer.start();
        let run = match simulate_seeded(&config, args.seed) {
            Ok(run) => run,
            Err(e) => {
                eprintln!("   skipped: {}", e);
                continue;
            }
        };
        let time_ms = timer.elapsed_ms();
        let summary = TraceSummary::from_path(&run.path, &config);

        info!(tol, steps = summary.steps, time_ms, "benchmark run finished");

        results.push(BenchmarkResult {
            tol,
            steps: summary.steps,
            bisections: run.stats.bisections,
            floor_forced: run.stats.floor_forced,
            max_depth: run.stats.max_depth,
            max_local_jump: summary.max_local_jump,
            time_ms,
        });
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    args: &Args,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# kappa: {}, seed: {}", args.kappa, args.seed)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Tol,Steps,Bisections,Floor_Forced,Max_Depth,Max_Local_Jump,Time_ms"
    )?;

    for result in results {
        writeln!(
            file,
            "{},{},{},{},{},{:.6},{:.2}",
            result.tol,
            result.steps,
            result.bisections,
            result.floor_forced,
            result.max_depth,
            result.max_local_jump,
            result.time_ms
        )?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("fast-sle Tolerance Sweep");
    println!("========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  Rust Version: {}", system_info.rust_version);
    println!();

    let results = run_sweep(&args);

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS (kappa = {}, seed = {})", args.kappa, args.seed);
    println!("{:=<80}", "");
    println!(
        "{:>10} {:>10} {:>12} {:>12} {:>10} {:>12} {:>12}",
        "Tol", "Steps", "Bisections", "Floor", "Depth", "Max Jump", "Time (ms)"
    );
    println!("{:-<80}", "");

    for result in &results {
        println!(
            "{:>10} {:>10} {:>12} {:>12} {:>10} {:>12.6} {:>12.2}",
            result.tol,
            result.steps,
            result.bisections,
            result.floor_forced,
            result.max_depth,
            result.max_local_jump,
            result.time_ms
        );
    }

    println!("{:=<80}", "");

    let filename = args.output.clone().unwrap_or_else(|| {
        format!(
            "sle_benchmark_{}.csv",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        )
    });

    match write_results_to_csv(&results, &system_info, &args, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => {
            eprintln!("Could not write {}: {}", filename, e);
            std::process::exit(1);
        }
    }
}
