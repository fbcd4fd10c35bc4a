//! Ipu - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds the trie from the
//! configured word list and answers a single prefix query.

use clap::{Parser, Subcommand};
use ipu_lib::bench::{run_benchmark, QueryKind};
use ipu_lib::config::{self, IpuConfig, LogConfig};
use ipu_lib::dictionary::DictionaryLoader;
use ipu_lib::error::{
    report_error, set_error_reporter, ErrorContext, IpuError, IpuResult, TracingErrorReporter,
};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "ipu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the suffixes completing PREFIX into known words
    Complete(QueryArgs),

    /// Print the known words starting with PREFIX
    Search(QueryArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Arguments shared by the query subcommands.
#[derive(clap::Args, Debug)]
struct QueryArgs {
    /// Prefix to complete (at least two characters)
    prefix: String,

    /// Word list to load instead of the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Time the query instead of printing its results
    #[clap(short, long)]
    bench: bool,

    /// Print output as JSON
    #[clap(long)]
    json: bool,

    /// Print at most this many results (0 falls back to the configured limit)
    #[clap(short = 'n', long)]
    limit: Option<usize>,
}

/// Initialize the logging system. Logs go to stderr so stdout only carries results.
fn init_logging(log: &LogConfig) -> IpuResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| IpuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() {
    // Usage errors exit here with clap's status code
    let args = Args::parse();
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging(&LogConfig::default());
            let mut context = ErrorContext::new(IpuError::from(e), "config");
            if let Some(path) = &args.config {
                context = context.with_details(format!("config file: {}", path.display()));
            }
            fail(context);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        fail(ErrorContext::new(e, "logging"));
    }

    match run(args.command, config) {
        Ok(()) => {}
        // Reader went away early, e.g. `ipu search bi | head`
        Err(IpuError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => fail(ErrorContext::new(e, "ipu")),
    }
}

/// Report a fatal error once, through the installed reporter, and exit 1.
fn fail(context: ErrorContext) -> ! {
    report_error(context);
    process::exit(1);
}

fn run(command: Command, config: IpuConfig) -> IpuResult<()> {
    match command {
        Command::Complete(query) => run_query(QueryKind::Complete, query, &config),
        Command::Search(query) => run_query(QueryKind::Search, query, &config),
        Command::Validate => {
            info!("Configuration validated successfully");
            writeln!(std::io::stdout(), "configuration ok")?;
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = IpuConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| IpuError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn run_query(kind: QueryKind, query: QueryArgs, config: &IpuConfig) -> IpuResult<()> {
    let loader = match &query.dictionary {
        Some(path) => DictionaryLoader::new(path).skip_comments(config.dictionary.skip_comments),
        None => DictionaryLoader::from_config(&config.dictionary),
    };

    let started = Instant::now();
    let trie = loader.load()?;
    let build_time = started.elapsed();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if query.bench {
        let report =
            run_benchmark(&trie, kind, &query.prefix, &config.bench).with_build_time(build_time);
        if query.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            writeln!(out, "{report}")?;
        }
        return Ok(());
    }

    let mut results = kind.run(&trie, &query.prefix);
    // 0 means unset here, as it does for `query.max_results`
    let limit = query.limit.filter(|&n| n > 0).or_else(|| config.query.limit());
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if query.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    } else {
        for result in &results {
            writeln!(out, "{result}")?;
        }
    }

    Ok(())
}
