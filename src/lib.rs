//! Vidcatalog - in-process video library manager
//!
//! This library tracks a fixed catalog of videos and lets a caller build
//! named playlists, drive a single now-playing pointer, search the catalog
//! and moderate videos by flagging them. Every command returns a typed
//! result; rendering it is left to the caller.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod model;
pub mod playback;

pub use catalog::{InMemoryCatalog, VideoCatalog};
pub use controller::{ControllerConfig, MediaController, NowPlaying, SearchKind, SearchResults};
pub use error::{Error, Result};
pub use model::{Playlist, PlaylistEntry, Video, VideoRecord};
pub use playback::{PauseOutcome, PlaybackEvent, PlaybackState};
