//! Title and tag search with an optional follow-up selection

use super::MediaController;
use crate::catalog::VideoCatalog;
use crate::error::Result;
use crate::model::Video;
use crate::playback::PlaybackEvent;
use serde::Serialize;

/// Which field a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Case-insensitive substring of the title
    Title,
    /// Case-insensitive exact match of any tag
    Tag,
}

impl SearchKind {
    fn matches(self, video: &Video, term: &str) -> bool {
        match self {
            SearchKind::Title => video.title_contains(term),
            SearchKind::Tag => video.has_tag(term),
        }
    }
}

/// Unflagged matches sorted by title, presented as a 1-indexed list
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub kind: SearchKind,
    pub term: String,
    pub videos: Vec<Video>,
}

impl SearchResults {
    /// No unflagged video matched
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Results paired with their 1-based selection number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Video)> {
        self.videos.iter().enumerate().map(|(i, v)| (i + 1, v))
    }
}

impl<C: VideoCatalog> MediaController<C> {
    pub fn search_by_title(&mut self, term: &str) -> SearchResults {
        self.search(SearchKind::Title, term)
    }

    pub fn search_by_tag(&mut self, tag: &str) -> SearchResults {
        self.search(SearchKind::Tag, tag)
    }

    /// Search the catalog, remembering the results for [`Self::select_search_result`]
    pub fn search(&mut self, kind: SearchKind, term: &str) -> SearchResults {
        let mut videos: Vec<Video> = self
            .catalog
            .get_all()
            .into_iter()
            .filter(|v| !v.is_flagged() && kind.matches(v, term))
            .cloned()
            .collect();
        videos.sort();

        log::debug!("Search {:?} {:?}: {} results", kind, term, videos.len());

        self.last_search = if videos.is_empty() {
            None
        } else {
            Some(videos.iter().map(|v| v.id().to_string()).collect())
        };

        SearchResults {
            kind,
            term: term.to_string(),
            videos,
        }
    }

    /// Follow up the last search with the user's choice.
    ///
    /// A 1-based number (plain ASCII digits) within range plays that
    /// video. Anything else is "no selection" and returns `Ok(None)`.
    /// The last search is consumed either way.
    pub fn select_search_result(&mut self, choice: &str) -> Result<Option<Vec<PlaybackEvent>>> {
        let Some(results) = self.last_search.take() else {
            return Ok(None);
        };

        let selected = Some(choice)
            .filter(|c| !c.is_empty() && c.chars().all(|ch| ch.is_ascii_digit()))
            .and_then(|c| c.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| results.get(i));

        match selected {
            Some(video_id) => self.play(video_id).map(Some),
            None => {
                log::debug!("No search result selected for input {:?}", choice);
                Ok(None)
            }
        }
    }
}
