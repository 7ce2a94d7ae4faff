//! Flag and allow commands

use super::MediaController;
use crate::catalog::VideoCatalog;
use crate::error::{Error, Result};
use crate::playback::PlaybackEvent;

impl<C: VideoCatalog> MediaController<C> {
    /// Flag a video, stopping it first if it is the current video.
    ///
    /// Without a reason the configured default is recorded. Returns the
    /// stop event when playback was interrupted.
    pub fn flag(
        &mut self,
        video_id: &str,
        reason: Option<&str>,
    ) -> Result<Option<PlaybackEvent>> {
        let video = self
            .catalog
            .get_mut(video_id)
            .ok_or_else(|| Error::video_not_found(video_id))?;

        if video.is_flagged() {
            return Err(Error::AlreadyFlagged {
                video_id: video_id.to_string(),
            });
        }

        let stopped = self.playback.stop_if_current(video_id);

        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(self.config.default_flag_reason.as_str());
        video.flag(reason);

        log::info!(
            "Flagged video {:?} (reason: {})",
            video_id,
            video.flagged_reason()
        );
        Ok(stopped)
    }

    /// Remove the flag from a video
    pub fn allow(&mut self, video_id: &str) -> Result<()> {
        let video = self
            .catalog
            .get_mut(video_id)
            .ok_or_else(|| Error::video_not_found(video_id))?;

        if !video.is_flagged() {
            return Err(Error::NotFlagged {
                video_id: video_id.to_string(),
            });
        }

        video.allow();
        log::info!("Removed flag from video {:?}", video_id);
        Ok(())
    }
}
