use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    Error,
    catalog::{CatalogEntity, SearchResultSet},
    cli::{play, search, show},
    info,
    playback::PlaybackPipeline,
    service::CatalogService,
    session::Session,
    utils::{self, SHELL_HELP, ShellCommand},
    warning,
};

pub async fn shell<S: CatalogService>(
    session: &Session<S>,
    pipeline: &PlaybackPipeline,
    max_results: u32,
) {
    let mut listing = SearchResultSet::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Type 'help' for a list of commands.");

    loop {
        prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Cannot read input: {}", e);
                break;
            }
        };

        match utils::parse_command(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Help => println!("{}", SHELL_HELP),
            ShellCommand::Quit => break,
            ShellCommand::Invalid(message) => warning!("{}", message),
            ShellCommand::List => {
                if listing.is_empty() {
                    warning!("Nothing listed yet. Search first.");
                } else {
                    listing.print();
                }
            }
            ShellCommand::Search(query) => match search(session, &query, max_results).await {
                Ok(results) => listing = results,
                Err(e) => report(&e),
            },
            ShellCommand::Play { index, shuffle } => match pick(&listing, index) {
                Some(entity) => {
                    if let Err(e) = play(session, pipeline, &entity, shuffle).await {
                        report(&e);
                    }
                }
                None => warning!("No entry numbered {}", index),
            },
            ShellCommand::Show(index) => match pick(&listing, index) {
                Some(entity) => match show(session, &entity).await {
                    Ok(Some(sub_listing)) => listing = sub_listing,
                    Ok(None) => {}
                    Err(e) => report(&e),
                },
                None => warning!("No entry numbered {}", index),
            },
        }
    }
}

fn pick(listing: &SearchResultSet, index: usize) -> Option<CatalogEntity> {
    utils::select(&listing.entities(), index).cloned()
}

fn prompt() {
    print!("> ");
    // the prompt is cosmetic
    let _ = std::io::stdout().flush();
}

fn report(e: &Error) {
    warning!("{}", e);
}
