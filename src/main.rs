use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Timelike;
use clap::{Parser, Subcommand};

use claritynews::command::Command;
use claritynews::config::Config;
use claritynews::edition::view::ExploreFilter;
use claritynews::edition::AppState;
use claritynews::effects::LoggingEffectSink;
use claritynews::error::{Error, Result};
use claritynews::logging::init_tracing;
use claritynews::render;
use claritynews::store::EditionStore;

#[derive(Parser, Debug)]
#[command(name = "claritynews", version, about = "Calm news editions in the terminal")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print snapshots as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Explore list shown in text output: latest, saved or local-first
    #[arg(long, global = true, default_value = "latest", value_parser = parse_filter)]
    filter: ExploreFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the starting snapshot
    Show,
    /// Apply commands in order, then print the final snapshot
    Replay {
        /// Commands such as "start", "next", "save 3", "clarity highContrast=true"
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Read commands from stdin, printing the snapshot after each one
    Repl,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    init_tracing(&config.logging.level);

    let stories = config.load_stories().context("loading seed edition")?;
    let store = EditionStore::from_config(&config, stories);
    store.add_effect_sink(Arc::new(LoggingEffectSink));

    let output = Output {
        json: cli.json,
        filter: cli.filter,
    };
    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => output.print(&store.snapshot())?,
        Commands::Replay { commands } => {
            replay(&store, &commands)?;
            output.print(&store.snapshot())?;
        }
        Commands::Repl => repl(&store, output)?,
    }
    Ok(())
}

fn parse_filter(value: &str) -> std::result::Result<ExploreFilter, String> {
    ExploreFilter::parse(value)
        .ok_or_else(|| format!("unknown filter '{value}' (expected latest, saved or local-first)"))
}

fn replay(store: &EditionStore, commands: &[String]) -> Result<()> {
    for (index, line) in commands.iter().enumerate() {
        let command = Command::parse(line).map_err(|source| Error::Command {
            line: index + 1,
            source,
        })?;
        command.run(store);
    }
    Ok(())
}

fn repl(store: &EditionStore, output: Output) -> Result<()> {
    let stdin = io::stdin();
    output.print(&store.snapshot())?;
    prompt()?;
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            prompt()?;
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }
        match Command::parse(trimmed) {
            Ok(command) => {
                let state = command.run(store);
                output.print(&state)?;
            }
            Err(source) => {
                let err = Error::Command {
                    line: index + 1,
                    source,
                };
                eprintln!("{err}");
            }
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

/// How snapshots are written to stdout.
#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
    filter: ExploreFilter,
}

impl Output {
    fn print(&self, state: &AppState) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.json {
            let encoded = serde_json::to_string_pretty(state)?;
            writeln!(stdout, "{encoded}")?;
        } else {
            let hour = chrono::Local::now().hour();
            write!(stdout, "{}", render::summary(state, hour, self.filter))?;
        }
        Ok(())
    }
}
