use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Inbound shape of a catalog entry, whatever format it was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Stable unique identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags in catalog order
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single catalog video
///
/// Identity and tags are fixed at construction. Only the moderation
/// fields change afterwards, and only through [`Video::flag`] and
/// [`Video::allow`], which keep `flagged_reason` non-empty exactly when
/// `flagged` is set.
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    id: String,
    title: String,
    tags: Vec<String>,
    flagged: bool,
    flagged_reason: String,
}

impl Video {
    /// Create an unflagged video
    pub fn new<I, S>(title: impl Into<String>, id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flagged: false,
            flagged_reason: String::new(),
        }
    }

    /// Get the video ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the tags in catalog order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Empty unless the video is flagged
    pub fn flagged_reason(&self) -> &str {
        &self.flagged_reason
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Mark the video as flagged. A blank reason becomes [`DEFAULT_FLAG_REASON`];
    /// any other reason is stored as given.
    pub fn flag(&mut self, reason: &str) {
        self.flagged = true;
        self.flagged_reason = if reason.trim().is_empty() {
            DEFAULT_FLAG_REASON.to_string()
        } else {
            reason.to_string()
        };
    }

    /// Clear the flag and its reason
    pub fn allow(&mut self) {
        self.flagged = false;
        self.flagged_reason.clear();
    }
}

impl From<VideoRecord> for Video {
    fn from(record: VideoRecord) -> Self {
        Self::new(record.title, record.id, record.tags)
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.id == other.id
    }
}

impl Eq for Video {}

impl PartialOrd for Video {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Video {
    // Title first; id only breaks ties so Ord agrees with Eq
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.id.cmp(&other.id))
    }
}
