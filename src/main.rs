use anyhow::{Context, bail};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::str::FromStr;

use lightpath_simulator::analysis::{AnalysisOptions, PathReport, analyze, write_csv};
use lightpath_simulator::common::load_topology;
use lightpath_simulator::config::{ConfigSource, SimulatorConfig};
use lightpath_simulator::network::signal_calculations::{dbm_to_w, w_to_dbm};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "lightpath-simulator")]
#[command(about = "Enumerate every path of an optical topology and report latency, noise and SNR")]
struct Args {
    /// Topology JSON file
    topology: PathBuf,

    /// Config file (defaults to config.toml beside the topology file)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch power in watts
    #[arg(short, long, conflicts_with = "power_dbm")]
    power: Option<f64>,

    /// Launch power in dBm
    #[arg(long)]
    power_dbm: Option<f64>,

    /// Worker threads for the analysis
    #[arg(short, long)]
    workers: Option<usize>,

    /// Write the per-path table to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only analyze paths leaving this node
    #[arg(long)]
    from: Option<String>,

    /// Only analyze paths reaching this node
    #[arg(long)]
    to: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| SimulatorConfig::config_path_from_topology(&args.topology));
    let (mut config, config_source) = SimulatorConfig::load_or_default(&config_path)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid config {}", config_path.display()))?;

    // Logging setup
    let crate_level = match config.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).with_context(|| format!("Unknown log-level {:?}", level))?,
        None => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("lightpath_simulator"), crate_level)
        .parse_default_env()
        .init();

    match config_source {
        ConfigSource::File => info!("Loaded config {}", config_path.display()),
        ConfigSource::Defaults => debug!("No config file at {}, using defaults", config_path.display()),
    }

    if let Some(power) = args.power {
        config.signal_power = power;
    }
    if let Some(dbm) = args.power_dbm {
        config.signal_power = dbm_to_w(dbm);
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if args.output.is_some() {
        config.output = args.output.clone();
    }
    if let Err(e) = config.validate() {
        bail!(e);
    }

    let topology = load_topology(&args.topology).with_context(|| format!("Cannot load topology {}", args.topology.display()))?;
    for (label, id) in [("--from", &args.from), ("--to", &args.to)] {
        if let Some(id) = id {
            if topology.node(id).is_none() {
                bail!("{} node {} is not part of the topology", label, id);
            }
        }
    }

    info!(
        "Propagating {} W ({:.1} dBm) over every simple path",
        config.signal_power,
        w_to_dbm(config.signal_power)
    );
    let options = AnalysisOptions {
        signal_power: config.signal_power,
        workers: config.workers,
        source: args.from.clone(),
        destination: args.to.clone(),
    };
    let reports = analyze(&topology, &options);
    print_table(&reports);

    if let Some(output) = &config.output {
        let file = File::create(output).with_context(|| format!("Cannot create {}", output.display()))?;
        write_csv(&reports, BufWriter::new(file)).with_context(|| format!("Cannot write {}", output.display()))?;
        info!("Wrote {} rows to {}", reports.len(), output.display());
    }

    Ok(())
}

fn print_table(reports: &[PathReport]) {
    let width = reports.iter().map(|r| r.path_label().len()).max().unwrap_or(4).max(4);
    println!("{:<width$}  {:>18}  {:>18}  {:>10}", "Path", "Total Latency (s)", "Total Noise (W)", "SNR (dB)");
    for report in reports {
        println!(
            "{:<width$}  {:>18.6e}  {:>18.6e}  {:>10.3}",
            report.path_label(),
            report.latency,
            report.noise,
            report.snr_db
        );
    }
}
