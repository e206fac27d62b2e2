/// Null-tolerant traversal of untyped page data
///
/// Every lookup is total: a missing key, an out-of-range index or a step
/// into the wrong kind of value ends the walk with `None`.
use serde_json::Value;

/// One field access in a traversal path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Index an object by key
    Key(&'a str),
    /// Index an array by position
    Index(usize),
}

/// Follow `steps` from `value`, stopping with `None` at the first miss
pub fn lookup<'v>(value: &'v Value, steps: &[Step<'_>]) -> Option<&'v Value> {
    steps.iter().try_fold(value, |current, step| match step {
        Step::Key(key) => current.as_object()?.get(*key),
        Step::Index(index) => current.as_array()?.get(*index),
    })
}

/// String at `steps`, if present and a string
pub fn str_at<'v>(value: &'v Value, steps: &[Step<'_>]) -> Option<&'v str> {
    lookup(value, steps)?.as_str()
}

/// Owned string at `steps`
pub fn string_at(value: &Value, steps: &[Step<'_>]) -> Option<String> {
    str_at(value, steps).map(str::to_string)
}

pub fn bool_at(value: &Value, steps: &[Step<'_>]) -> Option<bool> {
    lookup(value, steps)?.as_bool()
}

pub fn array_at<'v>(value: &'v Value, steps: &[Step<'_>]) -> Option<&'v [Value]> {
    lookup(value, steps)?.as_array().map(Vec::as_slice)
}

/// First element of the array at `steps`
pub fn first_at<'v>(value: &'v Value, steps: &[Step<'_>]) -> Option<&'v Value> {
    array_at(value, steps)?.first()
}

/// Last element of the array at `steps`
pub fn last_at<'v>(value: &'v Value, steps: &[Step<'_>]) -> Option<&'v Value> {
    array_at(value, steps)?.last()
}
