use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use plusone::{
    Config, OverflowPolicy, Result, RunError, Separator, collect_inputs, process_source,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "plusone",
    version,
    about = "Increment integers and keep the positive results",
    long_about = "Reads lists of integers from files, directories or stdin, adds one to every value, and prints the results that are strictly greater than zero, in input order."
)]
struct Cli {
    /// Files or directories to read, or `-` for stdin (default: stdin)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// What incrementing the largest value does
    #[arg(long, value_name = "POLICY")]
    overflow: Option<Overflow>,

    /// How kept values are separated in the output
    #[arg(long, value_name = "SEP")]
    separator: Option<Separator>,

    /// Print `kept/total` instead of the values
    #[arg(short, long)]
    count: bool,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print default configuration
    #[arg(long, value_name = "OPTION")]
    print_config: Option<PrintConfig>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PrintConfig {
    Default,
    Current,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Overflow {
    Checked,
    Saturating,
    Wrapping,
}

impl From<Overflow> for OverflowPolicy {
    fn from(overflow: Overflow) -> Self {
        match overflow {
            Overflow::Checked => OverflowPolicy::Checked,
            Overflow::Saturating => OverflowPolicy::Saturating,
            Overflow::Wrapping => OverflowPolicy::Wrapping,
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_directive = if cli.verbose {
        "plusone=debug"
    } else if cli.quiet {
        "plusone=error"
    } else {
        "plusone=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_path) => {
            debug!("Loading config from: {}", config_path.display());
            Config::from_file(config_path)?
        }
        None => match Config::find() {
            Some(path) => {
                debug!("Loading config from: {}", path.display());
                Config::from_file(&path)?
            }
            None => {
                debug!("Using default configuration");
                Config::default()
            }
        },
    };

    if let Some(overflow) = cli.overflow {
        config.overflow = overflow.into();
    }
    if let Some(separator) = cli.separator {
        config.separator = separator;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("plusone: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {

    // Handle print-config
    if let Some(print_config_option) = cli.print_config {
        match print_config_option {
            PrintConfig::Default => {
                print!("{}", Config::default_toml());
            }
            PrintConfig::Current => {
                let config = load_config(cli)?;
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        return Ok(());
    }

    let config = load_config(cli)?;
    debug!(overflow = %config.overflow, "Configuration loaded");

    let inputs = collect_inputs(&cli.paths, &config.extensions);
    if inputs.is_empty() {
        warn!("No input files found");
        return Ok(());
    }

    let show_headers = inputs.len() > 1 && !cli.quiet;
    let mut processed = 0;
    let mut kept = 0;
    let mut errors = Vec::new();

    for input in &inputs {
        debug!("Processing: {}", input.label());

        let outcome = input
            .read_to_string()
            .map_err(RunError::from)
            .and_then(|source| process_source(&source, &config));

        match outcome {
            Ok(outcome) => {
                if show_headers {
                    println!("==> {} <==", input.label());
                }
                print!("{}", outcome.render(config.separator, cli.count));
                processed += 1;
                kept += outcome.kept.len();
            }
            Err(e) => errors.push((input, e)),
        }
    }

    info!(processed, kept, failed = errors.len(), "Done");

    // Report errors
    if !errors.is_empty() {
        for (input, error) in &errors {
            eprintln!("{}: {}", input.label(), error);
        }
        std::io::stdout().flush()?;
        std::process::exit(1);
    }

    Ok(())
}
