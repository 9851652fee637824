//! `survivor-sim` - run the survivor agent headless in a generated sandbox world.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use survivor_sim::{run, SimConfig, DEFAULT_DT, DEFAULT_TICKS};

#[derive(Parser)]
#[command(name = "survivor-sim")]
#[command(about = "Run the survivor agent in a sandbox world", version)]
struct Cli {
    /// YAML file with optional `plugin` and `sandbox` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to simulate
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = DEFAULT_DT)]
    dt: f32,

    /// Override the sandbox seed
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON logs and summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json);

    if cli.dt.is_nan() || cli.dt <= 0.0 {
        bail!("--dt must be positive (got {})", cli.dt);
    }

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading sim config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.sandbox.seed = seed;
    }

    tracing::info!(
        seed = config.sandbox.seed,
        ticks = cli.ticks,
        dt = cli.dt,
        "starting simulation"
    );

    let summary = run(&config, cli.ticks, cli.dt).context("failed to start the agent")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}

fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
