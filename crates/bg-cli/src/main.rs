//! bayesgen CLI

mod config;

use anyhow::Result;
use bg_core::JointLogLikelihood;
use bg_models::{CoinFlipModel, CrashCountModel, GenerativeModel, HeightModel};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bayesgen")]
#[command(about = "bayesgen - Hierarchical generative models and log-likelihood sweeps")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelKind {
    Coin,
    Crash,
    Height,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw observations from a generative model
    Simulate {
        /// Model to sample from
        #[arg(long, value_enum)]
        model: ModelKind,

        /// Number of draws
        #[arg(long, default_value = "10")]
        n: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Coin: Beta prior shape a
        #[arg(long, default_value = "10.0")]
        a: f64,

        /// Coin: Beta prior shape b
        #[arg(long, default_value = "10.0")]
        b: f64,

        /// Crash: Exponential prior scale on the rate
        #[arg(long, default_value = "1.0")]
        rate_scale: f64,

        /// Height: prior location of the mean
        #[arg(long, default_value = "170.0")]
        mean_loc: f64,

        /// Height: prior scale of the mean
        #[arg(long, default_value = "10.0")]
        mean_scale: f64,

        /// Height: Exponential prior scale on the spread
        #[arg(long, default_value = "5.0")]
        spread_scale: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate the joint log-likelihood at one parameter vector
    Loglike {
        /// Model/data config (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Comma-separated parameter values, in model order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        params: Vec<f64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monte Carlo uniform sweep of the joint log-likelihood
    Sweep {
        /// Model/data/bounds config (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Number of draws (overrides config)
        #[arg(long)]
        n_draws: Option<usize>,

        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Threads (0 = auto; overrides config). Output does not depend on it.
        #[arg(long)]
        threads: Option<usize>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Grid scan of one parameter with the others held fixed
    Scan {
        /// Model/data config (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Parameter to scan
        #[arg(long)]
        param: String,

        /// Scan start
        #[arg(long, allow_hyphen_values = true)]
        start: f64,

        /// Scan stop
        #[arg(long, allow_hyphen_values = true)]
        stop: f64,

        /// Number of scan points (inclusive)
        #[arg(long, default_value = "50")]
        points: usize,

        /// Comma-separated values for all parameters; the scanned one is ignored
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        at: Vec<f64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Simulate {
            model,
            n,
            seed,
            a,
            b,
            rate_scale,
            mean_loc,
            mean_scale,
            spread_scale,
            output,
        } => {
            let prior = PriorArgs { a, b, rate_scale, mean_loc, mean_scale, spread_scale };
            cmd_simulate(model, n, seed, &prior, output.as_ref())
        }
        Commands::Loglike { config, params, output } => {
            cmd_loglike(&config, &params, output.as_ref())
        }
        Commands::Sweep { config, n_draws, seed, threads, output } => {
            cmd_sweep(&config, n_draws, seed, threads, output.as_ref())
        }
        Commands::Scan { config, param, start, stop, points, at, output } => {
            cmd_scan(&config, &param, start, stop, points, &at, output.as_ref())
        }
        Commands::Version => {
            println!("bayesgen {}", bg_core::VERSION);
            Ok(())
        }
    }
}

struct PriorArgs {
    a: f64,
    b: f64,
    rate_scale: f64,
    mean_loc: f64,
    mean_scale: f64,
    spread_scale: f64,
}

fn cmd_simulate(
    model: ModelKind,
    n: usize,
    seed: u64,
    prior: &PriorArgs,
    output: Option<&PathBuf>,
) -> Result<()> {
    tracing::info!(model = ?model, n, seed, "simulating");
    let (name, draws) = match model {
        ModelKind::Coin => {
            let m = CoinFlipModel::new(prior.a, prior.b)?;
            ("coin", serde_json::to_value(m.simulate_seeded(n, seed)?)?)
        }
        ModelKind::Crash => {
            let m = CrashCountModel::new(prior.rate_scale)?;
            ("crash", serde_json::to_value(m.simulate_seeded(n, seed)?)?)
        }
        ModelKind::Height => {
            let m = HeightModel::new(prior.mean_loc, prior.mean_scale, prior.spread_scale)?;
            ("height", serde_json::to_value(m.simulate_seeded(n, seed)?)?)
        }
    };

    let output_json = serde_json::json!({
        "model": name,
        "seed": seed,
        "n": n,
        "draws": draws,
    });
    write_json(output, output_json)
}

fn load_likelihood(path: &PathBuf) -> Result<(config::SweepConfig, Box<dyn JointLogLikelihood>)> {
    tracing::info!(path = %path.display(), "loading config");
    let cfg = config::read_config(path)?;
    let lik = cfg.likelihood()?;
    tracing::info!(model = cfg.model.kind(), parameters = lik.dim(), "model bound to data");
    Ok((cfg, lik))
}

fn cmd_loglike(path: &PathBuf, params: &[f64], output: Option<&PathBuf>) -> Result<()> {
    let (cfg, lik) = load_likelihood(path)?;
    let value = lik.loglike(params)?;

    let output_json = serde_json::json!({
        "model": cfg.model.kind(),
        "parameter_names": lik.parameter_names(),
        "params": params,
        "loglike": value,
    });
    write_json(output, output_json)
}

fn cmd_sweep(
    path: &PathBuf,
    n_draws: Option<usize>,
    seed: Option<u64>,
    threads: Option<usize>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let (cfg, lik) = load_likelihood(path)?;
    let bounds = cfg.checked_bounds(lik.as_ref())?;
    let n_draws = n_draws.unwrap_or(cfg.n_draws);
    let seed = seed.unwrap_or(cfg.seed);
    let threads = threads.unwrap_or(cfg.threads);

    if threads > 0 {
        // Best-effort; if a global pool already exists, keep going.
        let _ = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global();
    }

    let start = std::time::Instant::now();
    let result = bg_sweep::sweep_parallel(n_draws, bounds, lik.as_ref(), seed)?;
    tracing::info!(
        n_draws,
        seed,
        n_finite = result.n_finite(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sweep done"
    );

    let output_json = serde_json::json!({
        "model": cfg.model.kind(),
        "seed": seed,
        "n_draws": n_draws,
        "bounds": bounds,
        "n_finite": result.n_finite(),
        "best": result.best(),
        "parameter_names": result.parameter_names,
        "points": result.points,
    });
    write_json(output, output_json)
}

fn cmd_scan(
    path: &PathBuf,
    param: &str,
    start: f64,
    stop: f64,
    points: usize,
    at: &[f64],
    output: Option<&PathBuf>,
) -> Result<()> {
    let (cfg, lik) = load_likelihood(path)?;
    let scan = bg_sweep::scan_by_name(lik.as_ref(), at, param, start, stop, points)?;

    let output_json = serde_json::json!({
        "model": cfg.model.kind(),
        "param": param,
        "at": at,
        "points": scan,
    });
    write_json(output, output_json)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
