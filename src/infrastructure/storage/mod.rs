use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A synthesized clip written to the audio directory
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAudio {
    pub file_name: String,
    pub url: String,
}

/// File-backed store for generated MP3 clips served under a public path.
///
/// Files are named with fresh UUIDs so concurrent writers never collide.
/// Clips older than the retention window are removed by `evict_expired`.
pub struct AudioStore {
    dir: PathBuf,
    public_path: String,
    retention: Duration,
}

impl AudioStore {
    /// Create the store, creating `dir` if needed
    pub fn new(
        dir: impl Into<PathBuf>,
        public_path: &str,
        retention: Duration,
    ) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;

        Ok(Self {
            dir,
            public_path: format!("/{}", public_path.trim_matches('/')),
            retention,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub async fn save(&self, audio: &[u8]) -> std::io::Result<StoredAudio> {
        let file_name = format!("{}.mp3", Uuid::new_v4());
        tokio::fs::write(self.dir.join(&file_name), audio).await?;

        tracing::debug!(
            file_name = %file_name,
            audio_size = audio.len(),
            "Audio file stored"
        );

        Ok(StoredAudio {
            url: format!("{}/{}", self.public_path, file_name),
            file_name,
        })
    }

    /// Delete stored clips whose modification time is older than the retention window.
    /// Returns the number of files removed.
    pub async fn evict_expired(&self) -> std::io::Result<usize> {
        let now = SystemTime::now();
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("mp3") {
                continue;
            }

            let modified = match entry.metadata().await.and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Could not stat audio file");
                    continue;
                }
            };

            let age = now.duration_since(modified).unwrap_or_default();
            if age < self.retention {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                // Another sweep may have removed it first
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Could not remove audio file")
                }
            }
        }

        Ok(removed)
    }

    /// Run `evict_expired` every `interval` until the runtime shuts down
    pub fn spawn_sweeper(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match self.evict_expired().await {
                    Ok(0) => {}
                    Ok(removed) => tracing::info!(removed, "Expired audio files removed"),
                    Err(e) => tracing::error!(error = %e, "Audio sweep failed"),
                }
            }
        })
    }
}
