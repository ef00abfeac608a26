use std::path::Path;

use tokio::process::{Child, Command};

use crate::{Error, Res};

#[derive(Debug, Clone, Copy)]
pub enum PlayTarget<'a> {
    Playlist(&'a Path),
    Stream(&'a str),
}

/// External media player, `mpv` by default.
#[derive(Debug, Clone)]
pub struct Player {
    program: String,
}

impl Player {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self, target: PlayTarget<'_>) -> Vec<String> {
        match target {
            PlayTarget::Playlist(path) => vec![format!("--playlist={}", path.display())],
            PlayTarget::Stream(locator) => vec!["--really-quiet".to_string(), locator.to_string()],
        }
    }

    /// Starts the player attached to the current terminal.
    pub fn spawn(&self, target: PlayTarget<'_>) -> Res<Child> {
        Command::new(&self.program)
            .args(self.args(target))
            .spawn()
            .map_err(|e| Error::PlaybackLaunch(format!("Cannot start {}: {}", self.program, e)))
    }

    /// Blocks until the player exits. A non-zero exit status is an error.
    pub async fn wait(&self, mut child: Child) -> Res<()> {
        let status = child
            .wait()
            .await
            .map_err(|e| Error::PlaybackLaunch(format!("Lost track of {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(Error::PlaybackLaunch(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}
