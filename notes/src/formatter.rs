use crate::header::DocumentHeader;
use crate::types::GroupedNotes;
use crate::utils::{escape_html, extract_module};
use std::path::Path;

// --- Traits ---

/// Renders grouped notes into one document string.
///
/// Implementors provide the three fragments; `render` walks the groups in
/// category order and stitches them together.
pub trait NotesRenderer: Send + Sync {
    fn header(&self, header: &DocumentHeader) -> String;

    fn heading(&self, heading: &str) -> String;

    fn entry(&self, module: &str, key: &str, note: &str) -> String;

    fn render(&self, header: &DocumentHeader, notes: &GroupedNotes) -> String {
        let mut document = String::with_capacity(1024);
        document.push_str(&self.header(header));

        for (category, entries) in notes.iter() {
            document.push_str(&self.heading(&category.heading(entries.len())));

            for entry in entries {
                let tag = extract_module(&entry.note);
                document.push_str(&self.entry(&tag.module, &entry.key, &tag.body));
            }
        }

        document
    }
}

// HTML fragment for direct display
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl NotesRenderer for HtmlRenderer {
    fn header(&self, header: &DocumentHeader) -> String {
        format!(
            "<h3>Patch version {}</h3><p style=\"font-style: italic;\">Release date: {}</p>",
            escape_html(&header.patch_version),
            escape_html(&header.release_date)
        )
    }

    fn heading(&self, heading: &str) -> String {
        format!(
            "<h3 style=\"font-style: italic;\">{}</h3>",
            escape_html(heading)
        )
    }

    fn entry(&self, module: &str, key: &str, note: &str) -> String {
        format!(
            "<p><b>{} ({})</b><br>{}</p>",
            escape_html(module),
            escape_html(key),
            escape_html(note)
        )
    }
}

// Plain text for line-by-line copying and download
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer;

impl NotesRenderer for PlainTextRenderer {
    fn header(&self, header: &DocumentHeader) -> String {
        format!(
            "Patch Version {}\nRelease date: {}\n\n",
            header.patch_version, header.release_date
        )
    }

    fn heading(&self, heading: &str) -> String {
        format!("\n{heading}\n\n")
    }

    fn entry(&self, module: &str, key: &str, note: &str) -> String {
        format!("{module} ({key})\n{note}\n\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

impl OutputFormat {
    #[must_use]
    pub fn renderer(self) -> Box<dyn NotesRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer),
            Self::Text => Box::new(PlainTextRenderer),
        }
    }

    /// Picks the format from a file extension, `None` for unknown extensions
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "html" | "htm" => Some(Self::Html),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }
}
