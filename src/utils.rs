use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;

use crate::catalog::CatalogEntity;

/// A line typed into the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Play { index: usize, shuffle: bool },
    Show(usize),
    List,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub const SHELL_HELP: &str = "\
Commands:
  s, search <query>   search the catalog
  p, play <n>         play entry <n> of the current listing
  shuffle <n>         play entry <n> in random order
  i, show <n>         list the songs (and albums) of entry <n>
  l, list             print the current listing again
  h, help             show this help
  q, quit             leave";

pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "s" | "search" => {
            if rest.is_empty() {
                ShellCommand::Invalid("search needs a query".to_string())
            } else {
                ShellCommand::Search(rest.to_string())
            }
        }
        "p" | "play" => match parse_index(rest) {
            Ok(index) => ShellCommand::Play {
                index,
                shuffle: false,
            },
            Err(e) => ShellCommand::Invalid(e),
        },
        "shuffle" => match parse_index(rest) {
            Ok(index) => ShellCommand::Play {
                index,
                shuffle: true,
            },
            Err(e) => ShellCommand::Invalid(e),
        },
        "i" | "show" => match parse_index(rest) {
            Ok(index) => ShellCommand::Show(index),
            Err(e) => ShellCommand::Invalid(e),
        },
        "l" | "list" => ShellCommand::List,
        "h" | "help" | "?" => ShellCommand::Help,
        "q" | "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

pub fn parse_index(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(format!("'{}' is not an entry number", raw.trim())),
    }
}

/// Picks the entry shown as `index` (1-based) in a listing.
pub fn select(entities: &[CatalogEntity], index: usize) -> Option<&CatalogEntity> {
    index.checked_sub(1).and_then(|i| entities.get(i))
}

/// Uniformly random permutation in place.
pub fn shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut rand::rng());
}

pub fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
