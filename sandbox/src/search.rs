//! Substring matching over a candidate pool.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::SearchError;

/// An entry of a candidate pool.
///
/// Pools are usually plain strings, but they may also come from loosely typed
/// sources (a JSON config file, for instance). Entries that are not text make
/// [`search_string`] fail with [`SearchError::InvalidInputKind`].
pub trait SearchItem {
    /// The entry's text, or `None` if it is not text.
    fn as_text(&self) -> Option<&str>;

    /// Short name of the entry's kind, used in error reports.
    fn kind_name(&self) -> &'static str {
        "string"
    }
}

impl SearchItem for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl SearchItem for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl SearchItem for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl SearchItem for Arc<str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: SearchItem + ?Sized> SearchItem for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }
}

impl SearchItem for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn kind_name(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

/// Return the pool entries that contain `query` as a substring.
///
/// The query is trimmed and lowercased, and the comparison lowercases every
/// entry too (Unicode-aware). An empty or whitespace-only query matches
/// nothing. Results keep pool order; the pool itself is left untouched.
///
/// Every entry is checked before matching, so a non-text entry fails the
/// whole call even when the query is empty.
///
/// # Example
///
/// ```
/// use sandbox::search::search_string;
///
/// let items = ["Alpha", "beta", "Gamma", "alphabet"];
/// assert_eq!(search_string(&items, "be").unwrap(), ["beta", "alphabet"]);
/// assert!(search_string(&items, "  ").unwrap().is_empty());
/// ```
pub fn search_string<I: SearchItem>(items: &[I], query: &str) -> Result<Vec<String>, SearchError> {
    let texts = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_text().ok_or(SearchError::InvalidInputKind {
                index,
                kind: item.kind_name(),
            })
        })
        .collect::<Result<Vec<&str>, _>>()?;

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    Ok(texts
        .into_iter()
        .filter(|text| text.to_lowercase().contains(&needle))
        .map(str::to_owned)
        .collect())
}
