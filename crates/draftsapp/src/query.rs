//! # Query Engine
//!
//! Builds the archive view: a filtered, sorted copy of a collection. The input
//! slice is never touched; callers get a fresh `Vec` back.
//!
//! ## Pipeline
//!
//! 1. **Text**: case-insensitive substring match against `message + " " + thought`.
//!    A blank query matches everything.
//! 2. **Tag**: [`TagFilter::All`] keeps everything, [`TagFilter::Only`] keeps exact matches,
//!    [`TagFilter::Unknown`] (a label outside the vocabulary) keeps nothing.
//! 3. **Sort**: [`SortMode::Newest`] (descending `createdAt`) or
//!    [`SortMode::MostRelated`] (descending `relates`). Both sorts are stable, so
//!    ties keep their collection order and repeated calls give the same answer.

use crate::model::{Record, Tag, UnknownTag};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
    Unknown(String),
}

impl TagFilter {
    /// Like `parse`, but a label outside the vocabulary becomes
    /// [`TagFilter::Unknown`] instead of an error.
    pub fn parse_lenient(label: &str) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| TagFilter::Unknown(label.trim().to_string()))
    }

    pub fn matches(&self, tag: Tag) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(wanted) => *wanted == tag,
            TagFilter::Unknown(_) => false,
        }
    }
}

impl FromStr for TagFilter {
    type Err = UnknownTag;

    /// `"all"` disables the filter; anything else must be a tag label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TagFilter::All);
        }
        s.parse().map(TagFilter::Only)
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str("all"),
            TagFilter::Only(tag) => write!(f, "{}", tag),
            TagFilter::Unknown(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    MostRelated,
}

impl SortMode {
    /// Parses a sort name. Unrecognized names fall back to [`SortMode::Newest`].
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "relate" | "relates" | "related" | "most-related" => SortMode::MostRelated,
            _ => SortMode::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::MostRelated => "relate",
        }
    }
}

impl From<&str> for SortMode {
    fn from(value: &str) -> Self {
        SortMode::parse_lenient(value)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub text: String,
    pub tag: TagFilter,
    pub sort: SortMode,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_tag(mut self, tag: TagFilter) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Runs `query` over `records` and returns the matching records in view order.
pub fn run(records: &[Record], query: &RecordQuery) -> Vec<Record> {
    let needle = query.needle();

    let mut view: Vec<Record> = records
        .iter()
        .filter(|r| match &needle {
            Some(n) => r.haystack().to_lowercase().contains(n.as_str()),
            None => true,
        })
        .filter(|r| query.tag.matches(r.tag))
        .cloned()
        .collect();

    // slice::sort_by is stable
    match query.sort {
        SortMode::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::MostRelated => view.sort_by(|a, b| b.relates.cmp(&a.relates)),
    }

    view
}
