//! Release notes from issue-tracker CSV exports.
//!
//! Rows are grouped by their release notes category, emitted in a fixed
//! category order and rendered as HTML or plain text.

pub mod clipboard;
pub mod config;
pub mod download;
pub mod error;
pub mod formatter;
pub mod header;
pub mod release;
pub mod table;
pub mod types;
pub mod utils;

pub use clipboard::{CopyBoard, CopyLine, osc52_sequence};
pub use config::{CategoryMapping, CategoryPolicy, ColumnNames, NotesConfig};
pub use download::DownloadLink;
pub use error::NotesError;
pub use formatter::{HtmlRenderer, NotesRenderer, OutputFormat, PlainTextRenderer};
pub use header::{DocumentHeader, release_date};
pub use release::{DOWNLOAD_FILE_NAME, ReleaseNotes, group_notes};
pub use table::{LoadedTable, load_rows, read_rows};
pub use types::{DisplayCategory, GroupedNotes, NoteEntry, Result, TicketRow};
pub use utils::{ModuleTag, extract_module};
