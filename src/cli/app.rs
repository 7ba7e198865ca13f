//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use suds::output::OutputMode;

use super::commands;

/// suds - Stylesheet build runner
#[derive(Parser, Debug)]
#[command(
    name = "suds",
    version,
    about = "Stylesheet build runner",
    long_about = "Run declared build tasks over your stylesheets.\n\n\
                  Tasks live in suds.toml and either alias other tasks or\n\
                  stream matching files through an ordered stage pipeline\n\
                  (compile, minify, rename, write)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a task and its prerequisites
    Run {
        /// Task name (defaults to `default`)
        task: Option<String>,
    },

    /// List the declared tasks
    List,

    /// Write a starter suds.toml to the current directory
    Init {
        /// Overwrite an existing manifest
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run { task }) => commands::run(task.as_deref(), output_mode),
        Some(Command::List) => commands::list(output_mode),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("suds v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        // A bare invocation runs the default task, like any build runner.
        None => commands::run(None, output_mode),
    }
}
