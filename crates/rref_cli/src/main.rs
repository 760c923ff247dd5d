mod commands;
mod config;
mod json_types;
mod render;
mod repl;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::commands::SUCCESS_MESSAGE;
use crate::config::{RrefConfig, DEFAULT_CONFIG_PATH};
use crate::json_types::ErrorJsonOutput;

/// Reduce matrices to reduced row-echelon form and show entries as fractions.
#[derive(Parser, Debug)]
#[command(name = "rref", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Settings file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// Character budget per cell before a fraction falls back to a decimal
    #[arg(long, global = true)]
    cell_width: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a matrix: rows split by ';' or newlines, cells by ',' or spaces
    Solve {
        /// Matrix text; read from --file or stdin when omitted
        #[arg(allow_hyphen_values = true)]
        matrix: Option<String>,

        #[arg(long, conflicts_with = "matrix")]
        file: Option<PathBuf>,
    },
    /// Show the display form (integer, fraction or decimal) of one value
    Approx {
        /// Decimal or fraction literal, e.g. 0.125 or -3/8
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the active settings, or write them to the settings file
    Config {
        #[arg(long)]
        save: bool,
    },
    /// Interactive session (default when no command is given)
    Repl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_matrix_input(matrix: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = matrix {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading matrix from stdin")?;
    Ok(text)
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = RrefConfig::load(&cli.config);
    if let Some(width) = cli.cell_width {
        cfg.cell_width = width;
    }

    match cli.command.unwrap_or(Command::Repl) {
        Command::Solve { matrix, file } => {
            let text = read_matrix_input(matrix, file)?;
            let solution = commands::solve_text(&text, &cfg)?;
            match cli.format {
                Format::Json => println!("{}", commands::solve_json(&solution, &cfg)?),
                Format::Text => {
                    println!("{}", commands::render_solution(&solution, &cfg));
                    println!("{SUCCESS_MESSAGE}");
                }
            }
        }
        Command::Approx { value } => {
            let shown = commands::approx_text(&value)?;
            match cli.format {
                Format::Json => println!("{}", commands::approx_json(&value, shown, &cfg)?),
                Format::Text => println!("{}", render::fit(shown, cfg.cell_width)),
            }
        }
        Command::Config { save } => {
            if save {
                cfg.save(&cli.config)?;
                println!("saved settings to {}", cli.config.display());
            } else {
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        }
        Command::Repl => repl::Repl::new(cfg).run()?,
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match format {
                Format::Json => match serde_json::to_string(&ErrorJsonOutput::new(format!("{e:#}"))) {
                    Ok(json) => println!("{json}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                },
                Format::Text => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
