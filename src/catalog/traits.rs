//! Catalog trait definition

use crate::model::Video;

/// Video catalog trait - allows swapping the backing store
pub trait VideoCatalog {
    /// All videos, in the catalog's own order
    fn get_all(&self) -> Vec<&Video>;

    /// Look up a video by id
    fn get(&self, id: &str) -> Option<&Video>;

    /// Mutable lookup, used only to flag and allow videos
    fn get_mut(&mut self, id: &str) -> Option<&mut Video>;

    /// Total number of videos
    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
