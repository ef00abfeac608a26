use tokio::sync::Mutex;

use crate::{
    Error, Res,
    catalog::CatalogEntity,
    info,
    playback::{PlayTarget, Player, PlaylistArtifact},
    service::CatalogService,
    session::Session,
    utils,
};

/// Stages of a single play invocation. Failed stages end that invocation
/// only; the pipeline accepts the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStage {
    Idle,
    Resolving,
    ResolutionFailed,
    Resolved,
    WritingArtifact,
    WriteFailed,
    Written,
    Launching,
    LaunchFailed,
    PlayerRunning,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    pub label: String,
    pub track_count: usize,
    pub shuffled: bool,
}

pub struct PlaybackPipeline {
    artifact: PlaylistArtifact,
    player: Player,
    // held for a whole invocation, so plays never overlap on the artifact
    stage: Mutex<PlaybackStage>,
}

impl PlaybackPipeline {
    pub fn new(artifact: PlaylistArtifact, player: Player) -> Self {
        Self {
            artifact,
            player,
            stage: Mutex::new(PlaybackStage::Idle),
        }
    }

    pub fn artifact(&self) -> &PlaylistArtifact {
        &self.artifact
    }

    pub async fn last_stage(&self) -> PlaybackStage {
        *self.stage.lock().await
    }

    /// Resolves `entity`, writes the playlist and waits for the player.
    ///
    /// A single track is handed to the player directly and leaves the
    /// artifact untouched. Shuffling only applies to albums and artists.
    pub async fn play<S: CatalogService>(
        &self,
        entity: &CatalogEntity,
        shuffle: bool,
        session: &Session<S>,
    ) -> Res<PlayResult> {
        let mut stage = self.stage.lock().await;
        let label = entity.label();

        *stage = PlaybackStage::Resolving;
        let pb = utils::spinner(format!("Getting stream URLs for {}", label));
        let resolved = entity.resolve(session).await;
        pb.finish_and_clear();

        let mut locators = match resolved {
            Ok(locators) if locators.is_empty() => {
                *stage = PlaybackStage::ResolutionFailed;
                return Err(Error::NothingToPlay(label));
            }
            Ok(locators) => locators,
            Err(e) => {
                *stage = PlaybackStage::ResolutionFailed;
                return Err(e);
            }
        };
        *stage = PlaybackStage::Resolved;

        let single_track = matches!(entity, CatalogEntity::Track(_));
        let shuffled = shuffle && !single_track;
        if shuffled {
            utils::shuffle(&mut locators);
        }

        let target = if single_track {
            PlayTarget::Stream(&locators[0])
        } else {
            *stage = PlaybackStage::WritingArtifact;
            if let Err(e) = self.artifact.write(&locators).await {
                *stage = PlaybackStage::WriteFailed;
                return Err(e);
            }
            *stage = PlaybackStage::Written;
            PlayTarget::Playlist(self.artifact.path())
        };

        *stage = PlaybackStage::Launching;
        let child = match self.player.spawn(target) {
            Ok(child) => child,
            Err(e) => {
                *stage = PlaybackStage::LaunchFailed;
                return Err(e);
            }
        };

        *stage = PlaybackStage::PlayerRunning;
        info!("Playing {}", label);
        if let Err(e) = self.player.wait(child).await {
            *stage = PlaybackStage::LaunchFailed;
            return Err(e);
        }

        *stage = PlaybackStage::Done;
        Ok(PlayResult {
            label,
            track_count: locators.len(),
            shuffled,
        })
    }
}
