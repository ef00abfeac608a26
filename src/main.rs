use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use pmcli::{
    cli, config, error,
    playback::{PlaybackPipeline, Player, PlaylistArtifact},
    service::RemoteCatalog,
    session::Session,
    success,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Path to the config file (defaults to <config-dir>/pmcli/config)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Player executable to launch
    #[clap(long, global = true)]
    player: Option<String>,

    /// Search hits to request per category
    #[clap(long, global = true)]
    max_results: Option<u32>,

    /// Without a subcommand the interactive shell starts
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the interactive shell
    Shell,

    /// Search the catalog and print the numbered results
    Search(SearchOptions),

    /// Search the catalog and play one of the results
    Play(PlayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search terms
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Search terms
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Number of the result to play, as printed by `search`
    #[clap(long, default_value_t = 1)]
    pub pick: usize,

    /// Play albums and artists in random order
    #[clap(long)]
    pub shuffle: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => error!("{} (exiting).", e),
    };

    if let Some(player) = cli.player {
        config.settings.player = player;
    }
    if let Some(max_results) = cli.max_results.filter(|m| *m > 0) {
        config.settings.max_results = max_results;
    }

    let service = match RemoteCatalog::new(&config.settings) {
        Ok(service) => service,
        Err(e) => error!("{} (exiting).", e),
    };

    let session = match Session::authenticate(service, &config.credentials).await {
        Ok(session) => session,
        Err(e) => error!("{} (exiting).", e),
    };
    success!("Logged in with device id {}", session.device_id());

    let pipeline = PlaybackPipeline::new(
        PlaylistArtifact::new(config::playlist_path()),
        Player::new(config.settings.player.clone()),
    );
    let max_results = config.settings.max_results;

    let outcome = match cli.command {
        None | Some(Command::Shell) => {
            cli::shell(&session, &pipeline, max_results).await;
            Ok(())
        }
        Some(Command::Search(opt)) => cli::search(&session, &opt.query.join(" "), max_results)
            .await
            .map(|_| ()),
        Some(Command::Play(opt)) => {
            cli::play_query(
                &session,
                &pipeline,
                &opt.query.join(" "),
                opt.pick,
                opt.shuffle,
                max_results,
            )
            .await
        }
        Some(Command::Completions(_)) => Ok(()),
    };

    session.close().await;

    if let Err(e) = outcome {
        error!("{}", e);
    }
}
