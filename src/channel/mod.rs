/// Channel profile records and the pipeline that builds them
///
/// `ChannelClient` fetches a channel page, `BlobLocator` isolates the
/// embedded data and `normalize_channel` turns it into a `ChannelRecord`.

pub mod client;
pub mod entry;
pub mod normalizer;

pub use client::ChannelClient;
pub use entry::{build_entry, grid_item_node, watch_url};
pub use normalizer::normalize_channel;

pub use crate::extract::VideoDuration;
use crate::fetch::RequestOptions;
use serde::{Deserialize, Serialize};

/// Normalized channel profile.
///
/// `None` means the page did not carry the field; it is never folded into
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    pub name: Option<String>,
    pub id: Option<String>,
    pub url: Option<String>,
    pub rss_url: Option<String>,
    /// Channel handle, e.g. "@example"
    pub vanity_url: Option<String>,
    pub description: Option<String>,
    /// Subscriber count as displayed, e.g. "1.2M".
    ///
    /// Read from the header's visible text. Only when that is missing is the
    /// leading token of the accessibility label used instead, which reads as
    /// "1.2" for "1.2 million subscribers".
    pub subscribers: Option<String>,
    /// Avatar URL (first, smallest entry)
    pub thumbnail: Option<String>,
    /// First external link shown in the header
    pub first_link: Option<String>,
    /// Banner URL (last, largest entry)
    pub banner: Option<String>,
    pub tags: Vec<String>,
    /// Declared video count as displayed, e.g. "1.2K"
    pub videos_count_text: Option<String>,
    /// Declared video count
    pub videos_count: Option<u64>,
    pub videos: Vec<VideoEntry>,
    pub shorts: Vec<VideoEntry>,
    pub unlisted: Option<bool>,
    pub family_safe: Option<bool>,
}

/// One video or short from a channel tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub title: Option<String>,
    pub id: Option<String>,
    /// Watch URL derived from `id`
    pub url: Option<String>,
    /// Highest resolution thumbnail
    pub thumbnail: Option<String>,
    pub duration: Option<VideoDuration>,
    /// View count as displayed, e.g. "1.2K"
    pub views: Option<String>,
}

/// Per-call extraction options
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    /// Build `videos` and `shorts` from the channel tabs
    pub include_videos: bool,
    /// Passed through to the page loader
    pub request_options: RequestOptions,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            include_videos: true,
            request_options: RequestOptions::default(),
        }
    }
}
