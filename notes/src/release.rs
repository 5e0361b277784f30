use crate::clipboard::CopyBoard;
use crate::config::{CategoryMapping, CategoryPolicy, NotesConfig};
use crate::download::DownloadLink;
use crate::error::NotesError;
use crate::formatter::{NotesRenderer, OutputFormat, PlainTextRenderer};
use crate::header::DocumentHeader;
use crate::types::{DisplayCategory, GroupedNotes, NoteEntry, Result, TicketRow};

/// Default name of the downloadable text file
pub const DOWNLOAD_FILE_NAME: &str = "data.txt";

/// Buckets rows by display category, keeping row order inside each bucket.
///
/// # Errors
/// With [`CategoryPolicy::Strict`], returns [`NotesError::UnknownCategory`]
/// for the first row whose category has no mapping.
pub fn group_notes<I>(
    rows: I,
    mapping: &CategoryMapping,
    policy: CategoryPolicy,
) -> Result<GroupedNotes>
where
    I: IntoIterator<Item = TicketRow>,
{
    let mut notes = GroupedNotes::new();

    for row in rows {
        let resolved = row.category.as_deref().and_then(|raw| mapping.resolve(raw));
        let category = match (resolved, policy) {
            (Some(category), _) => category,
            (None, CategoryPolicy::Lenient) => DisplayCategory::Missing,
            (None, CategoryPolicy::Strict) => {
                return Err(NotesError::UnknownCategory {
                    key: row.key,
                    category: row.category.unwrap_or_default(),
                });
            }
        };

        notes.push(category, NoteEntry::from(row));
    }

    Ok(notes)
}

/// Grouped notes together with their document header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    header: DocumentHeader,
    notes: GroupedNotes,
}

impl ReleaseNotes {
    /// Groups `rows` using the mapping and policy from `config`
    ///
    /// # Errors
    /// Returns error on an unknown category under the strict policy
    pub fn build<I>(rows: I, header: DocumentHeader, config: &NotesConfig) -> Result<Self>
    where
        I: IntoIterator<Item = TicketRow>,
    {
        let notes = group_notes(rows, &config.category_mapping(), config.policy)?;
        Ok(Self { header, notes })
    }

    #[must_use]
    pub const fn new(header: DocumentHeader, notes: GroupedNotes) -> Self {
        Self { header, notes }
    }

    #[must_use]
    pub const fn header(&self) -> &DocumentHeader {
        &self.header
    }

    #[must_use]
    pub const fn notes(&self) -> &GroupedNotes {
        &self.notes
    }

    #[must_use]
    pub fn render_with(&self, renderer: &dyn NotesRenderer) -> String {
        renderer.render(&self.header, &self.notes)
    }

    #[must_use]
    pub fn render(&self, format: OutputFormat) -> String {
        self.render_with(format.renderer().as_ref())
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.render_with(&PlainTextRenderer)
    }

    /// Plain-text rendering packed into a `data:` link
    #[must_use]
    pub fn download_link(&self) -> DownloadLink {
        DownloadLink::new(&self.to_text(), DOWNLOAD_FILE_NAME)
    }

    /// Plain-text rendering split into copyable lines
    #[must_use]
    pub fn copy_board(&self) -> CopyBoard {
        CopyBoard::from_text(&self.to_text())
    }
}
