//! # Playback Module
//!
//! Hands catalog entities to an external media player. A play invocation
//! resolves the entity to stream locators, optionally shuffles them, writes
//! the playlist artifact at a fixed path, then waits for the player to exit.
//!
//! ```text
//! Idle → Resolving → Resolved → WritingArtifact → Written → Launching → PlayerRunning → Done
//!            ↓                        ↓                          ↓              ↓
//!     ResolutionFailed           WriteFailed               LaunchFailed    LaunchFailed
//! ```
//!
//! The artifact is only touched once every locator is known, so a failed
//! resolution never leaves a partial playlist behind.

mod artifact;
mod pipeline;
mod player;

pub use artifact::PlaylistArtifact;
pub use pipeline::{PlayResult, PlaybackPipeline, PlaybackStage};
pub use player::{PlayTarget, Player};
