mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use doctree::diagnostics;
use doctree::error::Error;

use crate::commands::RenderInput;

/// Top-level command line.
#[derive(Parser)]
#[command(name = "doctree", about = "Documentation for Protocol Buffer schemas", version)]
struct Cli {
    /// Which renderer to run.
    #[command(subcommand)]
    command: Commands,
    /// Config file to use instead of `.doctree.toml` in the working directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Rendering subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Render markdown with message anchors and tables
    Markdown(RenderArgs),
    /// Print an indented outline of the documentation tree
    Outline(RenderArgs),
}

/// Arguments shared by the rendering subcommands.
#[derive(Args)]
struct RenderArgs {
    /// JSON file of comment locations to attach
    #[arg(long)]
    comments: Option<PathBuf>,
    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// JSON schema description
    schema: PathBuf,
}

impl RenderArgs {
    /// Borrow these arguments as command input.
    fn input<'a>(&'a self, config: Option<&'a PathBuf>) -> RenderInput<'a> {
        return RenderInput {
            comments: self.comments.as_deref(),
            config: config.map(PathBuf::as_path),
            output: self.output.as_deref(),
            schema: &self.schema,
        };
    }
}

fn main() -> ExitCode {
    // stdout carries the rendered document; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_ref();

    let result = match &cli.command {
        Commands::Markdown(args) => commands::markdown(&args.input(config)),
        Commands::Outline(args) => commands::outline(&args.input(config)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics::print_error(&e);
            exit_code_for(&e)
        },
    }
}

/// Unresolved comment paths get their own code so callers can tell a
/// schema/comment mismatch from an ordinary failure.
fn exit_code_for(e: &Error) -> ExitCode {
    match e {
        Error::UnresolvedPath { .. } => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
