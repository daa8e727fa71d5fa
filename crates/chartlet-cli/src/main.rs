//! Chartlet CLI - render version-aware Ingress manifests from chart values

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod display;
mod error;
mod exit_codes;
mod util;

use commands::RenderOptions;

#[derive(Parser)]
#[command(name = "chartlet")]
#[command(author = "Chartlet Contributors")]
#[command(version)]
#[command(about = "Render version-aware Kubernetes Ingress manifests from layered chart values", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the chart's Ingress locally
    Template {
        /// Release name
        name: String,

        /// Chart path
        chart: PathBuf,

        /// Target namespace
        #[arg(short, long, default_value = "default")]
        namespace: String,

        #[command(flatten)]
        options: RenderOptions,

        /// Output directory (if not set, outputs to stdout)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Show computed values before the manifest
        #[arg(long)]
        show_values: bool,
    },

    /// Lint a chart and its overrides
    Lint {
        /// Chart path
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        options: RenderOptions,
    },

    /// Show chart information
    Show {
        /// Chart path
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also print the default values
        #[arg(long)]
        values: bool,
    },
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() -> ExitCode {
    miette::set_panic_hook();

    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Commands::Template {
            name,
            chart,
            namespace,
            options,
            output_dir,
            show_values,
        } => commands::template::run(
            &name,
            &chart,
            &namespace,
            &options,
            output_dir.as_deref(),
            show_values,
        ),

        Commands::Lint { path, options } => commands::lint::run(&path, &options),

        Commands::Show { path, values } => commands::show::run(&path, values),
    };

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}
