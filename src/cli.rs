use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, config_path};
use crate::integrations::GraphClient;
use crate::render::{describe_skip, render_groups};
use crate::sync::{fetch_hierarchy, set_checklist_item_checked, set_task_completion};

const NO_TOKEN_MESSAGE: &str = "No access token configured.";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "todosync",
    version,
    about = "Show Microsoft To Do lists and toggle completion from the terminal"
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Config file to use instead of the default location.
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch every list, task and checklist item and print them grouped by list.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed, or not started with --undo.
    Complete {
        list_id: String,
        task_id: String,
        #[arg(long)]
        undo: bool,
    },
    /// Check a checklist item, or uncheck it with --uncheck.
    Check {
        list_id: String,
        task_id: String,
        item_id: String,
        #[arg(long)]
        uncheck: bool,
    },
    /// Manage the stored access token.
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// Print the config file location.
    ConfigPath,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TokenAction {
    Set { token: String },
    Clear,
    Status,
}

/// `-q` wins over `-v`; two or more `-q` leave only errors.
fn default_log_level(verbose: u8, quiet: u8) -> &'static str {
    match (quiet, verbose) {
        (2.., _) => "error",
        (1, _) => "warn",
        (0, 3..) => "trace",
        (0, 2) => "debug",
        (0, 1) => "info",
        (0, 0) => "warn",
    }
}

/// Logs go to stderr so `list --json` output stays clean on stdout.
pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_log_level(verbose, quiet)))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(config_path);
    let mut config = Config::load_from_path(&path);
    debug!(path = %path.display(), todo = ?config.todo, "loaded config");

    match cli.command {
        Command::List { json } => {
            let client = GraphClient::new(config.todo.client_settings())?;
            eprintln!("Loading tasks...");
            let report = fetch_hierarchy(&client)?;
            let groups = report.grouped();
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                print!("{}", render_groups(&groups, report.fetched_at));
            }
            for skip in &report.skipped {
                eprintln!("warning: {}", describe_skip(skip));
            }
        }
        Command::Complete {
            list_id,
            task_id,
            undo,
        } => {
            let client = GraphClient::new(config.todo.client_settings())?;
            set_task_completion(&client, &task_id, &list_id, !undo)?;
            println!(
                "Task {task_id} marked {}.",
                if undo { "not started" } else { "completed" }
            );
        }
        Command::Check {
            list_id,
            task_id,
            item_id,
            uncheck,
        } => {
            let client = GraphClient::new(config.todo.client_settings())?;
            set_checklist_item_checked(&client, &task_id, &list_id, &item_id, !uncheck)?;
            println!(
                "Checklist item {item_id} {}.",
                if uncheck { "unchecked" } else { "checked" }
            );
        }
        Command::Token { action } => match action {
            TokenAction::Set { token } => {
                config.todo.access_token = token.trim().to_string();
                config
                    .save_to_path(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Access token saved to {}.", path.display());
            }
            TokenAction::Clear => {
                config.todo.access_token.clear();
                config
                    .save_to_path(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Access token removed from {}.", path.display());
            }
            TokenAction::Status => {
                println!("{}", token_status(&config));
            }
        },
        Command::ConfigPath => println!("{}", path.display()),
    }

    Ok(())
}

fn token_status(config: &Config) -> &'static str {
    if config.todo.credential().is_some() {
        "Access token configured."
    } else {
        NO_TOKEN_MESSAGE
    }
}
