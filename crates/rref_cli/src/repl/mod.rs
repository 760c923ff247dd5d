//! Interactive loop: each line is a matrix to reduce or a command.

mod output;

pub use output::{print_reply, ReplMsg, ReplReply};

use rustyline::error::ReadlineError;

use crate::commands::{approx_text, render_solution, solve_text, SUCCESS_MESSAGE};
use crate::config::RrefConfig;

const HELP: &str = "\
Enter a matrix to reduce it to RREF:
  1 2 3; 4 5 6          rows split by ';', cells by spaces
  1/2, -1, 0            commas allow blank cells (read as 0)
  [[2, 1], [1, 3]]      bracketed form
Commands:
  approx <value>        show the display form of one value (e.g. approx 0.125)
  config                show the active settings
  help                  this text
  quit | exit           leave";

pub struct Repl {
    config: RrefConfig,
}

impl Repl {
    pub fn new(config: RrefConfig) -> Self {
        Self { config }
    }

    /// Handle one trimmed, non-empty line.
    pub fn handle_line(&self, line: &str) -> ReplReply {
        if line == "help" {
            return vec![ReplMsg::output(HELP)];
        }
        if line == "config" {
            return match toml::to_string_pretty(&self.config) {
                Ok(text) => vec![ReplMsg::output(text.trim_end())],
                Err(e) => vec![ReplMsg::error(e.to_string())],
            };
        }
        if let Some(arg) = line.strip_prefix("approx ") {
            return match approx_text(arg) {
                Ok(value) => vec![ReplMsg::output(value.to_string())],
                Err(e) => vec![ReplMsg::error(format!("{e:#}"))],
            };
        }

        match solve_text(line, &self.config) {
            Ok(solution) => vec![
                ReplMsg::output(render_solution(&solution, &self.config)),
                ReplMsg::info(SUCCESS_MESSAGE),
            ],
            Err(e) => vec![ReplMsg::error(format!("{e:#}"))],
        }
    }

    pub fn run(&self) -> rustyline::Result<()> {
        println!("RREF solver (Gauss-Jordan). Type 'help' for input syntax.");

        let mut rl = rustyline::DefaultEditor::new()?;

        // History file path: ~/.rref_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".rref_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".rref_history"));
        let _ = rl.load_history(&history_path);

        loop {
            match rl.readline("rref> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;
                    if line == "quit" || line == "exit" {
                        break;
                    }
                    print_reply(self.handle_line(line));
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("readline failed: {err:?}");
                    break;
                }
            }
        }

        if let Err(e) = rl.save_history(&history_path) {
            tracing::debug!("could not save history: {e}");
        }
        Ok(())
    }
}
