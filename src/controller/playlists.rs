//! Playlist lifecycle commands

use super::MediaController;
use crate::catalog::VideoCatalog;
use crate::error::{Error, Result};
use crate::model::{Playlist, Video};

/// Registry key: playlist names are unique ignoring case
fn registry_key(name: &str) -> String {
    name.to_lowercase()
}

impl<C: VideoCatalog> MediaController<C> {
    /// Create an empty playlist under the exact name given
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        let key = registry_key(name);
        if self.playlists.contains_key(&key) {
            return Err(Error::DuplicatePlaylistName {
                name: name.to_string(),
            });
        }

        self.playlists.insert(key, Playlist::new(name));
        log::info!("Created playlist {:?}", name);
        Ok(())
    }

    /// Delete a playlist by name (case-insensitive)
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        let playlist = self
            .playlists
            .remove(&registry_key(name))
            .ok_or_else(|| Error::playlist_not_found(name))?;

        log::info!(
            "Deleted playlist {:?} ({} videos)",
            playlist.name,
            playlist.len()
        );
        Ok(())
    }

    /// Append a video to a playlist.
    ///
    /// Checks run in order: playlist exists, video exists, video is not
    /// flagged, video is not already present. Only the first failure is
    /// reported.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&registry_key(name))
            .ok_or_else(|| Error::playlist_not_found(name))?;
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| Error::video_not_found(video_id))?;

        if video.is_flagged() {
            return Err(Error::VideoFlagged {
                video_id: video_id.to_string(),
                reason: video.flagged_reason().to_string(),
            });
        }

        playlist.add(video)?;
        log::debug!("Added {:?} to playlist {:?}", video_id, playlist.name);
        Ok(())
    }

    /// Remove a video from a playlist. Flagged videos may be removed.
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&registry_key(name))
            .ok_or_else(|| Error::playlist_not_found(name))?;
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| Error::video_not_found(video_id))?;

        playlist.remove(video)?;
        log::debug!("Removed {:?} from playlist {:?}", video_id, playlist.name);
        Ok(())
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&registry_key(name))
            .ok_or_else(|| Error::playlist_not_found(name))?;

        playlist.clear();
        log::debug!("Cleared playlist {:?}", playlist.name);
        Ok(())
    }

    /// Playlist names as created, sorted case-sensitively
    pub fn list_playlists(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get a playlist by name (case-insensitive)
    pub fn playlist(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&registry_key(name))
            .ok_or_else(|| Error::playlist_not_found(name))
    }

    /// Videos of a playlist in insertion order. An empty playlist yields
    /// `Ok` with no videos.
    pub fn show_playlist(&self, name: &str) -> Result<Vec<&Video>> {
        let playlist = self.playlist(name)?;
        Ok(playlist
            .video_ids()
            .filter_map(|id| self.catalog.get(id))
            .collect())
    }
}
