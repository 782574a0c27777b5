mod error;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use error::{AppError, AppResult};
use ts_project::{Scenario, compile_scenario, load_scenario};
use ts_sim::results::SERIES_NAMES;
use ts_sim::{RunSummary, SimulationResults, run_sweep, simulate};

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "TideSim CLI - Tidal rotor time-domain simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run one scenario and print its summary
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Write all series to a file (.csv or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print one named series as CSV
    Series {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Series name (e.g., speed, thrust, p_elec)
        name: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run a scenario for several rotor radii in parallel
    Sweep {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Rotor radii in metres
        #[arg(long, value_delimiter = ',', required = true)]
        radius: Vec<f64>,
    },
}

#[derive(Serialize)]
struct JsonExport<'a> {
    name: &'a str,
    strategy: String,
    attachment: String,
    summary: &'a RunSummary,
    series: BTreeMap<&'static str, &'a [f64]>,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            output,
        } => cmd_run(&scenario_path, output.as_deref()),
        Commands::Series {
            scenario_path,
            name,
            output,
        } => cmd_series(&scenario_path, &name, output.as_deref()),
        Commands::Sweep {
            scenario_path,
            radius,
        } => cmd_sweep(&scenario_path, &radius),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    let config = compile_scenario(&scenario)?;
    config.validate()?;
    println!("✓ Scenario is valid ({} samples)", config.len());
    Ok(())
}

fn run_scenario(scenario_path: &Path) -> AppResult<(Scenario, SimulationResults)> {
    let scenario = load_scenario(scenario_path)?;
    let config = compile_scenario(&scenario)?;
    let results = simulate(config)?;
    Ok((scenario, results))
}

fn cmd_run(scenario_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let started = Instant::now();
    let (scenario, results) = run_scenario(scenario_path)?;
    println!(
        "✓ Simulation completed: {} ({:.3}s)",
        scenario.name,
        started.elapsed().as_secs_f64()
    );
    print_summary(&results);

    if let Some(path) = output {
        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::to_string_pretty(&JsonExport {
                name: &scenario.name,
                strategy: results.strategy.to_string(),
                attachment: results.attachment.to_string(),
                summary: &results.summary,
                series: results.series(),
            })?,
            _ => results.to_csv(),
        };
        write_output(path, content)?;
        println!("✓ Exported {} samples to {}", results.len(), path.display());
    }
    Ok(())
}

fn cmd_series(scenario_path: &Path, name: &str, output: Option<&Path>) -> AppResult<()> {
    let (_scenario, results) = run_scenario(scenario_path)?;
    let series = results.get(name).ok_or_else(|| AppError::UnknownSeries {
        name: name.to_string(),
        available: SERIES_NAMES.join(", "),
    })?;

    let mut csv = format!("time_s,{}\n", name);
    for (t, val) in results.time.iter().zip(series) {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    if let Some(path) = output {
        write_output(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_sweep(scenario_path: &Path, radii: &[f64]) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let mut members = Vec::with_capacity(radii.len());
    for &radius in radii {
        let mut member = scenario.clone();
        member.rotor.radius_m = radius;
        members.push((format!("R={radius} m"), compile_scenario(&member)?));
    }

    println!(
        "Sweeping {} radii for scenario: {}",
        members.len(),
        scenario.name
    );
    let outcomes = run_sweep(members);

    println!(
        "\n  {:<12} {:>14} {:>12} {:>14} {:>10}",
        "member", "energy (kWh)", "mean P (W)", "peak Ft (N)", "CF"
    );
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(results) => {
                let s = &results.summary;
                println!(
                    "  {:<12} {:>14.3} {:>12.1} {:>14.1} {:>10.4}",
                    outcome.label,
                    s.energy_kwh,
                    s.mean_electrical_power,
                    s.peak_thrust,
                    s.capacity_factor
                );
            }
            Err(e) => {
                failed += 1;
                println!("  {:<12} failed: {}", outcome.label, e);
            }
        }
    }

    if failed > 0 {
        return Err(AppError::SweepFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn print_summary(results: &SimulationResults) {
    let s = &results.summary;
    println!("\nRun summary:");
    println!("  Strategy:      {}", results.strategy);
    println!("  Attachment:    {}", results.attachment);
    println!("  Samples:       {}", s.samples);
    println!("  Duration:      {:.1} s", s.duration);
    if let Some(speed) = s.constant_speed {
        println!("  Fixed speed:   {:.4} rad/s", speed);
    }
    println!("  Energy:        {:.3} kWh", s.energy_kwh);
    println!("  Mean P_elec:   {:.1} W", s.mean_electrical_power);
    println!("  Capacity:      {:.2}%", 100.0 * s.capacity_factor);
    println!("  Peak thrust:   {:.1} N", s.peak_thrust);
    println!("  Min hub depth: {:.3} m", s.min_hub_depth);
    println!("  Max angle:     {:.4} rad", s.max_mooring_angle);
    println!("  Unit weight:   {:.1} N", s.turbine_weight);
}

fn write_output(path: &Path, content: String) -> AppResult<()> {
    std::fs::write(path, content).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
