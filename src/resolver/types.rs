use serde::{Deserialize, Serialize};

/// Creator of the resolved video, as reported by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Author {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub unique_id: String,
    #[serde(default)]
    pub avatar: String,
}

/// Normalized result of a successful resolution.
///
/// The upstream contract is loose: any field may be absent or empty, so
/// everything defaults. `duration` is `None` when the upstream source omitted
/// it; `Some(0)` is a literal zero reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResolvedMedia {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub author: Author,
    /// Video URL without the platform watermark.
    #[serde(default)]
    pub play: String,
    /// Video URL with the platform watermark.
    #[serde(default)]
    pub wmplay: String,
    /// Extracted audio track URL.
    #[serde(default)]
    pub music: String,
    #[serde(default)]
    pub duration: Option<u64>,
}

impl ResolvedMedia {
    /// At least one of the three media URLs is non-empty.
    pub fn has_playable_media(&self) -> bool {
        !self.play.is_empty() || !self.wmplay.is_empty() || !self.music.is_empty()
    }
}

/// Raw upstream response envelope: `code == 0` signals success and carries
/// `data`; any other code signals failure with `msg` as the reason.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<ResolvedMedia>,
}
