use crate::error::NotesError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type alias for Result with `NotesError`
pub type Result<T> = std::result::Result<T, NotesError>;

/// Substituted for a null note body or an absent approval column
pub const MISSING_PLACEHOLDER: &str = "MISSING";

/// Module name used when a note carries no bracketed tag
pub const MODULE_PLACEHOLDER: &str = "MODULE";

/// The closed set of sections a release note can end up in.
///
/// Declaration order is the output order, so the derived `Ord` drives
/// section ordering and `Missing` always sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DisplayCategory {
    #[serde(rename = "New feature")]
    NewFeature,
    #[serde(rename = "Improvement")]
    Improvement,
    #[serde(rename = "Bug fix")]
    BugFix,
    #[serde(rename = "Removal")]
    Removal,
    #[serde(rename = "MISSING CATEGORY")]
    Missing,
}

impl DisplayCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewFeature => "New feature",
            Self::Improvement => "Improvement",
            Self::BugFix => "Bug fix",
            Self::Removal => "Removal",
            Self::Missing => "MISSING CATEGORY",
        }
    }

    /// Section heading for a group holding `count` notes.
    #[must_use]
    pub fn heading(self, count: usize) -> String {
        if count <= 1 {
            return self.label().to_string();
        }
        match self {
            Self::BugFix => "Bug fixes".to_string(),
            other => format!("{}s", other.label()),
        }
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ticket record as read from the export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketRow {
    pub key: String,
    pub category: Option<String>,
    pub note: Option<String>,
    /// `None` when the export has no approval column
    pub approved: Option<String>,
}

impl TicketRow {
    pub fn new(key: impl Into<String>, category: Option<&str>, note: Option<&str>) -> Self {
        Self {
            key: key.into(),
            category: category.map(str::to_string),
            note: note.map(str::to_string),
            approved: None,
        }
    }

    #[must_use]
    pub fn with_approved(mut self, approved: impl Into<String>) -> Self {
        self.approved = Some(approved.into());
        self
    }
}

/// A note ready for rendering, placeholders already substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub key: String,
    pub note: String,
    pub approved: String,
}

impl From<TicketRow> for NoteEntry {
    fn from(row: TicketRow) -> Self {
        Self {
            key: row.key,
            note: row.note.unwrap_or_else(|| MISSING_PLACEHOLDER.to_string()),
            approved: row.approved.unwrap_or_else(|| MISSING_PLACEHOLDER.to_string()),
        }
    }
}

/// Notes grouped by display category.
///
/// Keys iterate in category order; each group keeps the order in which its
/// rows were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedNotes {
    groups: BTreeMap<DisplayCategory, Vec<NoteEntry>>,
}

impl GroupedNotes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: DisplayCategory, entry: NoteEntry) {
        self.groups.entry(category).or_default().push(entry);
    }

    #[must_use]
    pub fn get(&self, category: DisplayCategory) -> Option<&[NoteEntry]> {
        self.groups.get(&category).map(Vec::as_slice)
    }

    /// Non-empty groups in category order
    pub fn iter(&self) -> impl Iterator<Item = (DisplayCategory, &[NoteEntry])> + '_ {
        self.groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    #[must_use]
    pub fn categories(&self) -> Vec<DisplayCategory> {
        self.iter().map(|(category, _)| category).collect()
    }

    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
