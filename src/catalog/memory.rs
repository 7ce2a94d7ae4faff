use super::VideoCatalog;
use crate::model::{Video, VideoRecord};
use std::collections::HashMap;

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// Videos in load order
    videos: Vec<Video>,

    /// Index into `videos` by video ID
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loaded records
    pub fn from_records(records: impl IntoIterator<Item = VideoRecord>) -> Self {
        records.into_iter().map(Video::from).collect()
    }

    /// Add a video. Returns false, leaving the catalog unchanged, if the id is taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(video.id()) {
            log::warn!("Skipping duplicate video id {:?} ({})", video.id(), video.title());
            return false;
        }
        self.index.insert(video.id().to_string(), self.videos.len());
        self.videos.push(video);
        true
    }
}

impl FromIterator<Video> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = Video>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for video in iter {
            catalog.add_video(video);
        }
        log::debug!("Loaded catalog: {} videos", catalog.videos.len());
        catalog
    }
}

impl VideoCatalog for InMemoryCatalog {
    fn get_all(&self) -> Vec<&Video> {
        self.videos.iter().collect()
    }

    fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        let i = *self.index.get(id)?;
        self.videos.get_mut(i)
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}
