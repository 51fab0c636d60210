//! csf-index: cybersecurity framework self-assessment scoring
//!
//! Scores assessment files, prints the control catalog and manages
//! configuration.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use csf_index::{
    cli::{self, CatalogConfig, SchemaKind},
    config::{AppConfig, ConfigOverrides, ConfigPreset, ScoreConfig},
    pipeline::{exit_codes, AssessmentFormat},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "csf-index")]
#[command(version)]
#[command(about = "Cybersecurity framework self-assessment scoring", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Index below --min-score
    3  Error occurred

EXAMPLES:
    # Start a new assessment from the built-in catalog
    csf-index catalog -o yaml > assessment.yaml

    # Score it in the terminal
    csf-index score assessment.yaml

    # CI gate: JSON result, fail below Developing
    csf-index score assessment.json -o json --min-score 61")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "CSF_INDEX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Args)]
struct ScoreArgs {
    /// Assessment file (JSON or YAML)
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Write output to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Number of improvement areas to list
    #[arg(long)]
    top: Option<usize>,

    /// Exit with code 1 when the index is below this score
    #[arg(long)]
    min_score: Option<f64>,

    /// Treat input validation issues as errors
    #[arg(long)]
    strict: bool,

    /// Include every parameter's score in the output
    #[arg(long)]
    parameters: bool,

    /// Base preset (default, ci, strict), overridden by the config file and flags
    #[arg(long)]
    preset: Option<String>,
}

/// Arguments for the `catalog` subcommand
#[derive(Args)]
struct CatalogArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: AssessmentFormat,

    /// Write output to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Fill in generated sample measurements
    #[arg(long)]
    sample: bool,

    /// Seed for sample generation
    #[arg(long, default_value = "42", requires = "sample")]
    seed: u64,

    /// Organization name to include
    #[arg(long)]
    organization: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment file
    Score(ScoreArgs),

    /// Print the control catalog as an assessment template
    Catalog(CatalogArgs),

    /// Print a JSON Schema for assessment or config files
    Schema {
        /// Document to describe
        #[arg(value_enum, default_value = "assessment")]
        kind: SchemaKind,

        /// Write schema to file instead of stdout
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Write an example config file
    Init {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,

        /// Write a preset's values instead of the commented template
        #[arg(long)]
        preset: Option<String>,
    },
}

fn parse_preset(name: &str) -> Result<ConfigPreset> {
    ConfigPreset::from_name(name).with_context(|| {
        let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("Unknown preset: {name}. Valid options: {}", valid.join(", "))
    })
}

/// Flags shared by every subcommand.
struct GlobalOpts {
    quiet: bool,
    no_color: bool,
    config: Option<PathBuf>,
}

fn run_score_command(globals: &GlobalOpts, args: ScoreArgs) -> Result<i32> {
    let base = match args.preset.as_deref() {
        Some(name) => AppConfig::from_preset(parse_preset(name)?),
        None => AppConfig::default(),
    };
    let overrides = ConfigOverrides {
        improvement_limit: args.top,
        min_score: args.min_score,
        strict_input: ConfigOverrides::flag(args.strict),
        format: args.output,
        file: args.output_file,
        no_color: ConfigOverrides::flag(globals.no_color),
        show_parameters: ConfigOverrides::flag(args.parameters),
        quiet: ConfigOverrides::flag(globals.quiet),
    };

    let (app, loaded_from) =
        AppConfig::from_file_with_overrides(globals.config.as_deref(), &base, &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    cli::run_score(ScoreConfig::from_app(args.file, app))
}

fn run(command: Commands, globals: &GlobalOpts) -> Result<i32> {
    match command {
        Commands::Score(args) => run_score_command(globals, args),

        Commands::Catalog(args) => {
            cli::run_catalog(CatalogConfig {
                sample: args.sample,
                seed: args.seed,
                organization: args.organization,
                format: args.output,
                output_file: args.output_file,
                quiet: globals.quiet,
            })?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Schema { kind, output_file } => {
            cli::run_schema(kind, output_file)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => print!("{}", cli::show_config(globals.config.as_deref())?),
                ConfigAction::Path => {
                    eprintln!("{}", cli::describe_config_paths(globals.config.as_deref()));
                }
                ConfigAction::Init { path, preset } => {
                    let preset = preset.as_deref().map(parse_preset).transpose()?;
                    let written = cli::init_config(path, preset)?;
                    eprintln!("Created {}", written.display());
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "csf-index", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let Cli {
        verbose,
        quiet,
        no_color,
        config,
        command,
    } = Cli::parse();
    let globals = GlobalOpts {
        quiet,
        no_color,
        config,
    };

    // Initialize logging
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match run(command, &globals) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}
