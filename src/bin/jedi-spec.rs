use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jedi_spec::action::HandlerTable;
use jedi_spec::registry::Registry;
use jedi_spec::render::{RenderConfig, Renderer};
use jedi_spec::spec::{self, DEFAULT_MAX_DEPTH};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "jedi-spec")]
#[command(about = "Render and validate server-driven UI specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Outline,
    Markup,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a specification file and print the resulting tree.
    Render {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Outline)]
        format: Format,

        /// Action name to bind to a logging handler. Repeatable.
        #[arg(long = "handler", value_name = "NAME")]
        handlers: Vec<String>,

        /// Forward every property, ignoring component allow-lists.
        #[arg(long)]
        no_sanitize: bool,

        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Check a specification file without rendering it.
    Validate { file: PathBuf },
    /// List the built-in component types and the properties they accept.
    Components,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            file,
            format,
            handlers,
            no_sanitize,
            max_depth,
        } => {
            let value = read_json(&file)?;

            let mut table = HandlerTable::new();
            for name in handlers {
                table.register(name, |event| {
                    info!(action = %event.action, path = %event.path, payload = %event.payload, "action fired");
                });
            }

            let registry = Registry::with_builtins();
            let config = RenderConfig::new()
                .with_sanitize_props(!no_sanitize)
                .with_max_depth(max_depth);
            let output = Renderer::new(&registry)
                .with_config(config)
                .render_value(&value, &table);

            match format {
                Format::Outline => print!("{}", output.outline()),
                Format::Markup => print!("{}", output.markup()),
            }
            for diagnostic in &output.diagnostics {
                eprintln!("{diagnostic}");
            }
        }
        Commands::Validate { file } => {
            let value = read_json(&file)?;
            let report = spec::validate(&value);
            for error in &report.errors {
                eprintln!("error: {error}");
            }
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            if !report.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
            println!("{} is valid", file.display());
        }
        Commands::Components => {
            let registry = Registry::with_builtins();
            for name in registry.names() {
                let accepted = registry
                    .resolve(name)
                    .and_then(|entry| entry.accepted())
                    .map(|props| props.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
                    .unwrap_or_else(|| "*".to_owned());
                println!("{name}: {accepted}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
