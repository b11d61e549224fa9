// Citizen Ledger Tokenomics Runner — deterministic emission projections
//
// Usage:
//   cargo run --release --bin simulate                          # base + stock scenarios
//   cargo run --release --bin simulate -- --scenarios base,treasury_heavy
//   cargo run --release --bin simulate -- --staking-rate 0.3
//   cargo run --release --bin simulate -- --time-series         # per-scenario JSONL
//   cargo run --release --bin simulate -- --output-dir projections

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tokenomics_engine::{
    builtin_scenarios, compare, SimulationConfig, SimulationRecord, SimulationReport,
    SimulationRunner, DEFAULT_STAKING_RATE,
};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    output_dir: String,
    scenarios: Option<String>,
    staking_rate: f64,
    time_series: bool,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        output_dir: "output".to_string(),
        scenarios: None,
        staking_rate: DEFAULT_STAKING_RATE,
        time_series: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--output-dir" => {
                i += 1;
                if i < args.len() {
                    cli.output_dir = args[i].clone();
                }
            }
            "--scenarios" => {
                i += 1;
                if i < args.len() {
                    cli.scenarios = Some(args[i].clone());
                }
            }
            "--staking-rate" => {
                i += 1;
                if i < args.len() {
                    cli.staking_rate = args[i].parse().unwrap_or(DEFAULT_STAKING_RATE);
                }
            }
            "--time-series" => {
                cli.time_series = true;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Output helpers ─────────────────────────────────────────────────────────

fn write_jsonl(path: &Path, records: &[SimulationRecord]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    for record in records {
        let line = serde_json::to_string(record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = parse_args();
    let out_dir = Path::new(&cli.output_dir);
    std::fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let config = SimulationConfig::default();

    println!("\n  Citizen Ledger Tokenomics Runner");
    println!("  Max supply: {} | Genesis: {} | Treasury: {} bps",
        config.max_supply, config.initial_supply, config.treasury_share_bps);
    println!("  Horizon: {} years | Assumed staked: {:.0}%\n",
        config.simulation_years, cli.staking_rate * 100.0);

    // ─── Base run ───────────────────────────────────────────────────────

    let runner = match SimulationRunner::new(config.clone()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let base_records = runner.run(cli.staking_rate);

    // ─── Scenario comparison ────────────────────────────────────────────

    let selected: BTreeMap<_, _> = match &cli.scenarios {
        Some(names) => {
            let wanted: Vec<&str> = names.split(',').map(str::trim).collect();
            builtin_scenarios()
                .into_iter()
                .filter(|(name, _)| wanted.contains(&name.as_str()))
                .collect()
        }
        None => builtin_scenarios(),
    };

    if selected.is_empty() {
        eprintln!("No scenarios match: {:?}", cli.scenarios);
        std::process::exit(1);
    }

    let results = match compare(&selected, cli.staking_rate) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Scenario configuration invalid: {e}");
            std::process::exit(1);
        }
    };

    println!("  {:<16} {:>14} {:>8} {:>14} {:>16} {:>8}",
        "Scenario", "Supply(M)", "Minted%", "Treasury(M)", "StakerRwd(M)", "APY%");
    println!("  {}", "-".repeat(80));
    for (name, records) in &results {
        if let Some(last) = records.last() {
            println!("  {:<16} {:>14.1} {:>7.1}% {:>14.1} {:>16.1} {:>7.2}%",
                name,
                last.total_supply / 1e6,
                last.supply_percent,
                last.treasury_balance / 1e6,
                last.staker_rewards_total / 1e6,
                last.staking_apy,
            );
        }
    }
    println!("  {}", "-".repeat(80));

    // ─── Write report + optional time series ────────────────────────────

    let report = SimulationReport::new(&config, &base_records)
        .expect("Base run produced no samples");
    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
    let report_path = out_dir.join("report.json");
    std::fs::write(&report_path, &json).expect("Failed to write report.json");
    println!("\n  Report saved to: {}", report_path.display());

    if cli.time_series {
        for (name, records) in &results {
            let path = out_dir.join(format!("{name}.jsonl"));
            write_jsonl(&path, records).expect("Failed to write time series");
        }
        println!("  Time series saved to: {}/<scenario>.jsonl", out_dir.display());
    }
    println!();
}
