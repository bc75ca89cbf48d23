// demos/error_handling_demo.rs
use fast_sle::error::SleError;
use fast_sle::rng::SeededNormalSampler;
use fast_sle::sim::engine::{run_simulation, SleConfig};

fn report(label: &str, config: SleConfig) {
    println!("{}", label);

    let mut sampler = SeededNormalSampler::new(42);
    match run_simulation(&config, &mut sampler) {
        Ok(path) => println!("   ✓ Success: {} steps", path.step_count()),
        Err(SleError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameters: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    println!("   Random draws consumed: {}\n", sampler.draws());
}

fn main() {
    println!("Error Handling Demo for fast-sle");
    println!("================================\n");

    report(
        "1. Testing negative kappa...",
        SleConfig {
            kappa: -4.0,
            ..Default::default()
        },
    );

    report(
        "2. Testing zero tolerance...",
        SleConfig {
            tol: 0.0,
            ..Default::default()
        },
    );

    report(
        "3. Testing non-finite horizon...",
        SleConfig {
            t: f64::NAN,
            ..Default::default()
        },
    );

    report(
        "4. Testing max_stepsize larger than the horizon...",
        SleConfig {
            max_stepsize: 2.0,
            ..Default::default()
        },
    );

    report(
        "5. Testing min_stepsize larger than max_stepsize...",
        SleConfig {
            max_stepsize: 1.0 / 1024.0,
            min_stepsize: 1.0 / 512.0,
            ..Default::default()
        },
    );

    report(
        "6. Testing valid configuration...",
        SleConfig {
            tol: 0.1,
            max_stepsize: 1.0 / 64.0,
            min_stepsize: 1.0 / 4096.0,
            ..Default::default()
        },
    );

    println!("✓ Error handling demo complete!");
    println!("Invalid configurations were rejected before any random draw.");
}
