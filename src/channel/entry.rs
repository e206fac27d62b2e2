use super::VideoEntry;
use crate::extract::path::{last_at, lookup, str_at, string_at, Step::{Index, Key}};
use crate::extract::{leading_token, VideoDuration};
use serde_json::Value;
use tracing::warn;

/// Watch URL for a video id
pub fn watch_url(id: &str) -> String {
    format!("https://youtu.be/{}", id)
}

/// The video-like node inside one grid item.
///
/// Regular uploads carry a `videoRenderer`, shorts grids may carry a
/// `reelItemRenderer` instead. Continuation items carry neither.
pub fn grid_item_node(item: &Value) -> Option<&Value> {
    lookup(item, &[Key("richItemRenderer"), Key("content"), Key("videoRenderer")])
        .or_else(|| lookup(item, &[Key("richItemRenderer"), Key("content"), Key("reelItemRenderer")]))
}

/// Build an entry from one video-like node. Each field degrades to `None`
/// on its own.
pub fn build_entry(node: &Value) -> VideoEntry {
    let id = string_at(node, &[Key("videoId")]);

    let title = str_at(node, &[Key("title"), Key("runs"), Index(0), Key("text")])
        .or_else(|| str_at(node, &[Key("title"), Key("simpleText")]))
        .or_else(|| str_at(node, &[Key("headline"), Key("simpleText")]))
        .map(str::to_string);

    let thumbnail = last_at(node, &[Key("thumbnail"), Key("thumbnails")])
        .and_then(|thumb| string_at(thumb, &[Key("url")]));

    let duration = str_at(node, &[Key("lengthText"), Key("simpleText")]).and_then(|text| {
        match VideoDuration::parse(text) {
            Ok(duration) => Some(duration),
            Err(e) => {
                warn!("Ignoring duration of video {}: {}", id.as_deref().unwrap_or("?"), e);
                None
            }
        }
    });

    let views = str_at(node, &[Key("viewCountText"), Key("simpleText")])
        .and_then(leading_token)
        .map(str::to_string);

    VideoEntry {
        url: id.as_deref().map(watch_url),
        title,
        id,
        thumbnail,
        duration,
        views,
    }
}
