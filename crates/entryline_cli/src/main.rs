use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;
use clap::Parser;
use entryline_hal::{CrosstermTerminal, Terminal, TextColors};
use entryline_ui::{EditorConfig, LineEditor, WordListCompleter};
use tracing_subscriber::EnvFilter;

/// Words offered by Tab before any `--words` are added.
const DEFAULT_WORDS: &[&str] = &[
    "cat", "cd", "clear", "echo", "exit", "grep", "history", "link", "list", "load", "ls",
    "pwd", "quit",
];

/// Interactive line editor demo: edit, submit, repeat.
#[derive(Parser, Debug)]
#[command(author, version, about = "entryline interactive line editor", long_about = None)]
struct Cli {
    /// Editor configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra completion words, comma separated
    #[arg(long, value_delimiter = ',')]
    words: Vec<String>,

    /// Write logs to this file; the terminal itself is never used for logs
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "> ")]
    prompt: String,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = EditorConfig::load_or_default(cli.config.as_deref())?;
    let mut completer = WordListCompleter::new(DEFAULT_WORDS.iter().copied());
    completer.extend(cli.words);

    let terminal = CrosstermTerminal::new()?;
    let mut editor = LineEditor::with_config(terminal, completer, config)?;
    tracing::info!("entryline started");

    loop {
        let line = editor.read_line_with_prompt(&cli.prompt)?;
        match line.trim() {
            "exit" | "quit" => break,
            "history" => {
                let entries: Vec<String> = editor.history().entries().map(str::to_owned).collect();
                let terminal = editor.terminal_mut();
                for (number, entry) in entries.iter().enumerate() {
                    let row = format!("{:>4}  {}", number + 1, entry);
                    terminal.write_text(&row, TextColors::default())?;
                    terminal.write_line()?;
                }
            }
            "" => {}
            other => {
                let echo = format!("you entered: {other}");
                let terminal = editor.terminal_mut();
                terminal.write_text(&echo, TextColors::default())?;
                terminal.write_line()?;
            }
        }
    }

    tracing::info!("entryline finished");
    Ok(())
}
