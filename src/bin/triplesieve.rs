//! Triplesieve CLI — filters recorded extraction event streams.
//!
//! Usage:
//!   triplesieve filter [--input events.jsonl] [--config policy.yaml] [--format ntriples|jsonl]
//!   triplesieve config [--config policy.yaml]

use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use triplesieve::{
    replay_lines, CountingHandler, IgnoreAccidentalRdfa, JsonLinesWriter, NTriplesWriter,
    PolicyConfig, TripleHandler,
};

#[derive(Parser)]
#[command(
    name = "triplesieve",
    version,
    about = "Suppress accidental extractor output"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a JSON-lines event stream and write what survives
    Filter {
        /// Event stream to read (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "ntriples")]
        format: OutputFormat,
    },
    /// Print the effective policy configuration as YAML
    Config {
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(clap::Args)]
struct PolicyArgs {
    /// Path to a YAML policy configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the boilerplate namespace prefix
    #[arg(long)]
    namespace: Option<String>,
    /// Override the scrutinized extractor name
    #[arg(long)]
    extractor: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Ntriples,
    Jsonl,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// File values first, then flag overrides, then a single validation pass.
fn resolve_config(args: PolicyArgs) -> Result<PolicyConfig, String> {
    let mut config = match &args.config {
        Some(path) => PolicyConfig::read(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => PolicyConfig::default(),
    };
    if let Some(ns) = args.namespace {
        config = config.with_boilerplate_namespace(ns);
    }
    if let Some(name) = args.extractor {
        config = config.with_extractor_name(name);
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn BufRead>, String> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn cmd_filter(input: Option<PathBuf>, policy: PolicyArgs, format: OutputFormat) -> i32 {
    let config = match resolve_config(policy) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let reader = match open_input(input.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    tracing::info!(extractor = %config.extractor_name, "filtering");

    let stdout = io::stdout().lock();
    let writer: Box<dyn TripleHandler> = match format {
        OutputFormat::Ntriples => Box::new(NTriplesWriter::new(stdout)),
        OutputFormat::Jsonl => Box::new(JsonLinesWriter::new(stdout)),
    };
    let mut pipeline = IgnoreAccidentalRdfa::with_config(CountingHandler::new(writer), config);

    let events = match replay_lines(reader, &mut pipeline) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let counts = pipeline.into_inner().counts();
    tracing::info!(
        events,
        documents = counts.documents,
        contexts = counts.contexts,
        triples = counts.triples,
        namespaces = counts.namespaces,
        "filter complete"
    );
    0
}

fn cmd_config(policy: PolicyArgs) -> i32 {
    let yaml = resolve_config(policy).and_then(|c| c.to_yaml().map_err(|e| e.to_string()));
    match yaml {
        Ok(yaml) => {
            let mut out = io::stdout().lock();
            if let Err(e) = out.write_all(yaml.as_bytes()) {
                eprintln!("Error: {}", e);
                return 1;
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let code = match cli.command {
        Commands::Filter {
            input,
            policy,
            format,
        } => cmd_filter(input, policy, format),
        Commands::Config { policy } => cmd_config(policy),
    };
    std::process::exit(code);
}
