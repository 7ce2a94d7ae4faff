//! Error types for catalog, playlist and playback commands

use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Every expected failure a command can report
///
/// None of these are fatal: the controller state is unchanged when a
/// command returns one of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No video with this id in the catalog
    #[error("Video does not exist: {video_id}")]
    VideoNotFound { video_id: String },

    /// No playlist matches this name (case-insensitive)
    #[error("Playlist does not exist: {name}")]
    PlaylistNotFound { name: String },

    /// A playlist with the same name (ignoring case) already exists
    #[error("A playlist with the same name already exists: {name}")]
    DuplicatePlaylistName { name: String },

    /// The video is already a member of the playlist
    #[error("Video {video_id} already added to {playlist}")]
    AlreadyInPlaylist { playlist: String, video_id: String },

    /// The video is not a member of the playlist
    #[error("Video {video_id} is not in playlist {playlist}")]
    NotInPlaylist { playlist: String, video_id: String },

    /// Flagged videos cannot be played or added to playlists
    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { video_id: String, reason: String },

    /// Flag requested on a video that is already flagged
    #[error("Video is already flagged: {video_id}")]
    AlreadyFlagged { video_id: String },

    /// Allow requested on a video that is not flagged
    #[error("Video is not flagged: {video_id}")]
    NotFlagged { video_id: String },

    /// Stop/pause/resume with nothing current
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Resume requested while the current video is already playing
    #[error("Video is not paused: {video_id}")]
    NotPaused { video_id: String },

    /// Random playback found no unflagged video
    #[error("No videos available")]
    NoVideosAvailable,
}

impl Error {
    pub(crate) fn video_not_found(video_id: &str) -> Self {
        Error::VideoNotFound {
            video_id: video_id.to_string(),
        }
    }

    pub(crate) fn playlist_not_found(name: &str) -> Self {
        Error::PlaylistNotFound {
            name: name.to_string(),
        }
    }
}
