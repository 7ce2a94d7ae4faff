//! Data model for the video library
//!
//! These types are independent of where the catalog is loaded from and
//! of how command results are rendered.

mod playlist;
mod video;

pub use playlist::{Playlist, PlaylistEntry};
pub use video::{Video, VideoRecord, DEFAULT_FLAG_REASON};
