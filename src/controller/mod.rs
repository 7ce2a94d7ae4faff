//! Media controller
//!
//! Owns one session's state: the catalog, the playlist registry, the
//! now-playing pointer and the last search. Every command validates before
//! it mutates, so a returned error always means nothing changed.

mod config;
mod moderation;
mod playlists;
mod search;

pub use config::ControllerConfig;
pub use search::{SearchKind, SearchResults};

use crate::catalog::VideoCatalog;
use crate::error::{Error, Result};
use crate::model::{Playlist, Video};
use crate::playback::{PauseOutcome, PlaybackEvent, PlaybackState};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// What is currently loaded, resolved live against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NowPlaying<'a> {
    Stopped,
    Playing(&'a Video),
    Paused(&'a Video),
}

/// Orchestrates catalog queries, playlists, playback and moderation
pub struct MediaController<C: VideoCatalog> {
    catalog: C,
    config: ControllerConfig,

    /// Playlists keyed by lower-cased name; each keeps its original name
    playlists: BTreeMap<String, Playlist>,

    playback: PlaybackState,

    /// Ids from the most recent search, in presented order
    last_search: Option<Vec<String>>,

    rng: StdRng,
}

impl<C: VideoCatalog> MediaController<C> {
    /// Create a controller with default configuration
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, ControllerConfig::default())
    }

    /// Create a controller with the given configuration
    pub fn with_config(catalog: C, config: ControllerConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        log::debug!("Media controller ready: {} videos", catalog.len());

        Self {
            catalog,
            config,
            playlists: BTreeMap::new(),
            playback: PlaybackState::default(),
            last_search: None,
            rng,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Number of videos in the catalog
    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    /// Every catalog video sorted by title, flagged ones included
    pub fn list_videos(&self) -> Vec<&Video> {
        let mut videos = self.catalog.get_all();
        videos.sort();
        videos
    }

    /// Get a video by ID
    pub fn video(&self, id: &str) -> Result<&Video> {
        self.catalog.get(id).ok_or_else(|| Error::video_not_found(id))
    }

    /// Current playback state
    pub fn playback_state(&self) -> &PlaybackState {
        &self.playback
    }

    /// Play a video, stopping the current one first
    pub fn play(&mut self, video_id: &str) -> Result<Vec<PlaybackEvent>> {
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

        let events = self.playback.play(video.id());
        log::debug!("Playback events: {:?}", events);
        Ok(events)
    }

    /// Play a uniformly random unflagged video
    pub fn play_random(&mut self) -> Result<Vec<PlaybackEvent>> {
        let candidates: Vec<&Video> = self
            .catalog
            .get_all()
            .into_iter()
            .filter(|v| !v.is_flagged())
            .collect();

        let video = candidates
            .choose(&mut self.rng)
            .ok_or(Error::NoVideosAvailable)?;

        log::debug!(
            "Random pick {:?} out of {} candidates",
            video.id(),
            candidates.len()
        );
        Ok(self.playback.play(video.id()))
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Result<PlaybackEvent> {
        let event = self.playback.stop()?;
        log::debug!("Playback event: {:?}", event);
        Ok(event)
    }

    /// Pause the current video. Pausing a paused video is reported, not rejected.
    pub fn pause(&mut self) -> Result<PauseOutcome> {
        self.playback.pause()
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Result<PlaybackEvent> {
        self.playback.resume()
    }

    pub fn now_playing(&self) -> NowPlaying<'_> {
        let current = self.playback.current().and_then(|id| self.catalog.get(id));
        match current {
            None => NowPlaying::Stopped,
            Some(video) if self.playback.is_playing() => NowPlaying::Playing(video),
            Some(video) => NowPlaying::Paused(video),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    pub(crate) fn sample_catalog() -> InMemoryCatalog {
        [
            Video::new("Funny Dogs", "funny_dogs_video_id", ["#dog", "#animal"]),
            Video::new("Amazing Cats", "amazing_cats_video_id", ["#cat", "#animal"]),
            Video::new("Another Cat Video", "another_cat_video_id", ["#cat", "#animal"]),
            Video::new("Life at Google", "life_at_google_video_id", ["#google", "#career"]),
            Video::new("Video about nothing", "nothing_video_id", Vec::<String>::new()),
        ]
        .into_iter()
        .collect()
    }

    pub(crate) fn controller() -> MediaController<InMemoryCatalog> {
        MediaController::with_config(sample_catalog(), ControllerConfig::new().with_seed(7))
    }

    #[test]
    fn test_list_videos_sorted_by_title() {
        let controller = controller();
        let titles: Vec<&str> = controller.list_videos().into_iter().map(Video::title).collect();
        assert_eq!(
            titles,
            vec![
                "Amazing Cats",
                "Another Cat Video",
                "Funny Dogs",
                "Life at Google",
                "Video about nothing",
            ]
        );
        assert_eq!(controller.video_count(), 5);
    }

    #[test]
    fn test_list_videos_includes_flagged() {
        let mut controller = controller();
        controller
            .flag("amazing_cats_video_id", Some("dont_like_cats"))
            .unwrap();

        let videos = controller.list_videos();
        assert_eq!(videos.len(), 5);
        let cats = videos
            .iter()
            .find(|v| v.id() == "amazing_cats_video_id")
            .unwrap();
        assert!(cats.is_flagged());
        assert_eq!(cats.flagged_reason(), "dont_like_cats");
        assert_eq!(videos[0].title(), "Amazing Cats");
    }

    #[test]
    fn test_play_unknown_video() {
        let mut controller = controller();
        assert_eq!(
            controller.play("does_not_exist"),
            Err(Error::VideoNotFound {
                video_id: "does_not_exist".to_string()
            })
        );
        assert_eq!(controller.now_playing(), NowPlaying::Stopped);
    }

    #[test]
    fn test_play_replaces_current() {
        let mut controller = controller();
        controller.play("amazing_cats_video_id").unwrap();
        let events = controller.play("funny_dogs_video_id").unwrap();

        assert_eq!(
            events,
            vec![
                PlaybackEvent::Stopped("amazing_cats_video_id".to_string()),
                PlaybackEvent::Started("funny_dogs_video_id".to_string()),
            ]
        );
        match controller.now_playing() {
            NowPlaying::Playing(video) => assert_eq!(video.title(), "Funny Dogs"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_play_flagged_leaves_state_untouched() {
        let mut controller = controller();
        controller.play("funny_dogs_video_id").unwrap();
        controller
            .flag("amazing_cats_video_id", Some("dont_like_cats"))
            .unwrap();

        assert_eq!(
            controller.play("amazing_cats_video_id"),
            Err(Error::VideoFlagged {
                video_id: "amazing_cats_video_id".to_string(),
                reason: "dont_like_cats".to_string(),
            })
        );
        assert_eq!(
            controller.playback_state(),
            &PlaybackState::Playing("funny_dogs_video_id".to_string())
        );
    }

    #[test]
    fn test_now_playing_reports_pause() {
        let mut controller = controller();
        controller.play("nothing_video_id").unwrap();
        controller.pause().unwrap();

        match controller.now_playing() {
            NowPlaying::Paused(video) => assert_eq!(video.id(), "nothing_video_id"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_play_random_skips_flagged() {
        let mut controller = controller();
        for id in [
            "funny_dogs_video_id",
            "amazing_cats_video_id",
            "another_cat_video_id",
            "nothing_video_id",
        ] {
            controller.flag(id, None).unwrap();
        }

        for _ in 0..20 {
            let events = controller.play_random().unwrap();
            assert_eq!(
                events.last(),
                Some(&PlaybackEvent::Started("life_at_google_video_id".to_string()))
            );
        }
    }

    #[test]
    fn test_play_random_all_flagged() {
        let mut controller = controller();
        let ids: Vec<String> = controller
            .list_videos()
            .into_iter()
            .map(|v| v.id().to_string())
            .collect();
        for id in &ids {
            controller.flag(id, None).unwrap();
        }

        assert_eq!(controller.play_random(), Err(Error::NoVideosAvailable));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = controller();
        let mut b = controller();
        for _ in 0..5 {
            assert_eq!(a.play_random(), b.play_random());
        }
    }
}
