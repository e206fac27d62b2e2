/// Assembles a `ChannelRecord` from the embedded page data
use super::entry::{build_entry, grid_item_node};
use super::{ChannelRecord, VideoEntry};
use crate::extract::path::{
    array_at, bool_at, first_at, last_at, lookup, str_at, string_at,
    Step::{self, Index, Key},
};
use crate::extract::{leading_token, parse_count, parse_keywords};
use serde_json::Value;
use tracing::debug;

static NULL: Value = Value::Null;

const CHANNEL_METADATA: [Step<'static>; 2] = [Key("metadata"), Key("channelMetadataRenderer")];

const PAGE_HEADER: [Step<'static>; 4] = [
    Key("header"),
    Key("pageHeaderRenderer"),
    Key("content"),
    Key("pageHeaderViewModel"),
];

const METADATA_ROWS: [Step<'static>; 3] = [
    Key("metadata"),
    Key("contentMetadataViewModel"),
    Key("metadataRows"),
];

const BROWSE_TABS: [Step<'static>; 3] = [
    Key("contents"),
    Key("twoColumnBrowseResultsRenderer"),
    Key("tabs"),
];

pub const VIDEOS_TAB: &str = "Videos";
pub const SHORTS_TAB: &str = "Shorts";

/// Build the channel record from parsed page data.
///
/// Missing fields become `None`; nothing here fails. The same input always
/// yields the same record.
pub fn normalize_channel(data: &Value, include_videos: bool) -> ChannelRecord {
    let meta = lookup(data, &CHANNEL_METADATA).unwrap_or(&NULL);
    let header = lookup(data, &PAGE_HEADER).unwrap_or(&NULL);
    let rows = lookup(header, &METADATA_ROWS).unwrap_or(&NULL);

    // Row 0 holds the handle, row 1 holds subscribers then video count
    let vanity_url = string_at(rows, &[Index(0), Key("metadataParts"), Index(0), Key("text"), Key("content")]);

    let subscribers = str_at(rows, &[Index(1), Key("metadataParts"), Index(0), Key("text"), Key("content")])
        .or_else(|| str_at(rows, &[Index(1), Key("metadataParts"), Index(0), Key("accessibilityLabel")]))
        .and_then(leading_token)
        .map(str::to_string);

    let videos_count_text = str_at(rows, &[Index(1), Key("metadataParts"), Index(1), Key("text"), Key("content")])
        .and_then(leading_token)
        .map(str::to_string);

    let banner = last_at(header, &[Key("banner"), Key("imageBannerViewModel"), Key("image"), Key("sources")])
        .and_then(|source| string_at(source, &[Key("url")]));

    let thumbnail = first_at(meta, &[Key("avatar"), Key("thumbnails")])
        .and_then(|thumb| string_at(thumb, &[Key("url")]));

    let tags = str_at(meta, &[Key("keywords")])
        .map(parse_keywords)
        .unwrap_or_default();

    let (videos, shorts) = if include_videos {
        (tab_entries(data, VIDEOS_TAB), tab_entries(data, SHORTS_TAB))
    } else {
        (Vec::new(), Vec::new())
    };

    ChannelRecord {
        name: string_at(meta, &[Key("title")]),
        id: string_at(meta, &[Key("externalId")]),
        url: string_at(meta, &[Key("channelUrl")]),
        rss_url: string_at(meta, &[Key("rssUrl")]),
        vanity_url,
        description: string_at(meta, &[Key("description")]),
        subscribers,
        thumbnail,
        first_link: string_at(header, &[Key("attribution"), Key("attributionViewModel"), Key("text"), Key("content")]),
        banner,
        tags,
        videos_count: videos_count_text.as_deref().and_then(parse_count),
        videos_count_text,
        videos,
        shorts,
        unlisted: bool_at(data, &[Key("microformat"), Key("microformatDataRenderer"), Key("unlisted")]),
        family_safe: bool_at(meta, &[Key("isFamilySafe")]),
    }
}

/// The browse tab titled `title`, if the page has one
pub fn find_tab<'v>(data: &'v Value, title: &str) -> Option<&'v Value> {
    array_at(data, &BROWSE_TABS)?
        .iter()
        .find(|tab| str_at(tab, &[Key("tabRenderer"), Key("title")]) == Some(title))
}

/// Entries of the grid under the tab titled `title`, in document order
fn tab_entries(data: &Value, title: &str) -> Vec<VideoEntry> {
    let Some(tab) = find_tab(data, title) else {
        debug!("No {} tab on page", title);
        return Vec::new();
    };

    let items = array_at(
        tab,
        &[Key("tabRenderer"), Key("content"), Key("richGridRenderer"), Key("contents")],
    )
    .unwrap_or_default();

    let entries: Vec<VideoEntry> = items
        .iter()
        .filter_map(grid_item_node)
        .map(build_entry)
        .collect();

    debug!("Built {} entries from {} tab ({} grid items)", entries.len(), title, items.len());
    entries
}
