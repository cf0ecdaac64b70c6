//! Emptiness and content checks over optional and primitive values.

use std::sync::LazyLock;

use regex::Regex;

/// Characters allowed in "plain" text: ASCII letters, digits and spaces.
const PLAIN_TEXT_PATTERN: &str = r"^[a-zA-Z0-9 ]*$";

static PLAIN_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLAIN_TEXT_PATTERN).expect("valid regex"));

/// An uploaded file as seen by the web layer.
pub trait UploadedFile {
    /// Size in bytes, when the client reported one.
    fn content_length(&self) -> Option<u64>;
}

/// True iff the value is absent. Applies to any reference or optional date.
pub fn is_absent<T>(value: Option<T>) -> bool {
    value.is_none()
}

/// True iff the sequence is absent or yields no elements.
///
/// At most one element is pulled, so single-pass iterators are not drained.
pub fn is_empty_seq<I: IntoIterator>(value: Option<I>) -> bool {
    match value {
        Some(items) => items.into_iter().next().is_none(),
        None => true,
    }
}

/// True iff the bytes are absent or zero-length.
pub fn is_empty_bytes(value: Option<&[u8]>) -> bool {
    value.map_or(true, |bytes| bytes.is_empty())
}

/// True iff the text is absent, empty or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// True iff the number is absent or not positive.
///
/// Zero counts as empty: ids and counts of zero mean "not set".
pub fn is_empty_number<N: Into<i64>>(value: Option<N>) -> bool {
    !has_value(value)
}

/// True iff the number is present and positive.
pub fn has_value<N: Into<i64>>(value: Option<N>) -> bool {
    value.is_some_and(|n| n.into() > 0)
}

/// True iff no file was uploaded or its length is unknown or zero.
///
/// Stricter than the legacy upload check, which only tested for a missing
/// file: a posted file with an empty or unreported body is also empty here.
pub fn is_empty_upload<F: UploadedFile + ?Sized>(file: Option<&F>) -> bool {
    file.map_or(true, |f| f.content_length().unwrap_or(0) == 0)
}

/// True iff the text contains any character other than ASCII letters,
/// digits and spaces.
pub fn has_special_char(value: &str) -> bool {
    !PLAIN_TEXT_RE.is_match(value)
}

/// The element at `index`, or `default` when out of bounds.
pub fn try_get_element<T: Clone>(items: &[T], index: usize, default: T) -> T {
    items.get(index).cloned().unwrap_or(default)
}
