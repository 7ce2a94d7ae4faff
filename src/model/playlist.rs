use super::Video;
use crate::error::{Error, Result};
use serde::Serialize;

/// Represents a named, ordered playlist of catalog videos
///
/// Entries reference videos by id; the catalog stays the single owner of
/// each [`Video`], so moderation changes show up wherever it is listed.
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    /// Playlist name as the user typed it
    pub name: String,

    /// Playlist entries (insertion order, no duplicate ids)
    entries: Vec<PlaylistEntry>,
}

/// Entry in a playlist, referencing a video by ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    /// Video ID (references Video::id)
    pub video_id: String,

    /// Position in playlist (0-based)
    pub position: u32,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a video, rejecting ids that are already present
    pub fn add(&mut self, video: &Video) -> Result<()> {
        if self.contains(video.id()) {
            return Err(Error::AlreadyInPlaylist {
                playlist: self.name.clone(),
                video_id: video.id().to_string(),
            });
        }
        let position = self.entries.len() as u32;
        self.entries.push(PlaylistEntry {
            video_id: video.id().to_string(),
            position,
        });
        Ok(())
    }

    /// Remove a video, keeping the remaining entries in order
    pub fn remove(&mut self, video: &Video) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.video_id == video.id())
            .ok_or_else(|| Error::NotInPlaylist {
                playlist: self.name.clone(),
                video_id: video.id().to_string(),
            })?;

        self.entries.remove(index);
        for (position, entry) in self.entries.iter_mut().enumerate().skip(index) {
            entry.position = position as u32;
        }
        Ok(())
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    /// Video ids in insertion order
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.video_id.as_str())
    }

    /// Get an entry by video ID
    pub fn get(&self, video_id: &str) -> Option<&PlaylistEntry> {
        self.entries.iter().find(|e| e.video_id == video_id)
    }

    /// Check if a video is in this playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.get(video_id).is_some()
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
