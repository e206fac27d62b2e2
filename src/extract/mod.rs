/// Page data extraction primitives
///
/// Everything that touches the untyped `serde_json::Value` tree or parses
/// display strings lives here. The channel module only sees typed results.

pub mod blob;
pub mod duration;
pub mod keywords;
pub mod path;
pub mod text;

pub use blob::{content_between, BlobLocator, INITIAL_DATA_END, INITIAL_DATA_START};
pub use duration::{parse_duration_seconds, VideoDuration};
pub use keywords::parse_keywords;
pub use path::{lookup, Step};
pub use text::{leading_token, parse_count};
