use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{Error, Res, catalog::StreamLocator};

/// Newline-delimited list of stream locators shared with the player.
///
/// The file has no identity beyond "the most recent playlist": every write
/// truncates it, and it is only written once the full locator list is known.
#[derive(Debug, Clone)]
pub struct PlaylistArtifact {
    path: PathBuf,
}

impl PlaylistArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one locator per line. The file is closed when this returns.
    pub async fn write(&self, locators: &[StreamLocator]) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let mut contents = String::new();
        for locator in locators {
            contents.push_str(locator);
            contents.push('\n');
        }

        async_fs::write(&self.path, contents)
            .await
            .map_err(|e| self.write_error(e))
    }

    pub async fn read(&self) -> io::Result<Vec<StreamLocator>> {
        let contents = async_fs::read_to_string(&self.path).await?;
        Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::PlaylistWrite {
            path: self.path.clone(),
            source,
        }
    }
}
