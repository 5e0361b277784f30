//! Shared fixtures for the end-to-end tests.

use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Vorgangstyp,Vorgangsschlüssel,Zusammenfassung,Benutzerdefinierte Felder (Release Notes Category),Benutzerdefinierte Felder (Release Notes),Benutzerdefinierte Felder (Release Notes approved),Lösungsversionen,Lösungsversionen";

/// A realistic export: mixed categories, multi-valued version columns,
/// a quoted note with a comma, an unknown category and an empty note.
pub fn sample_export() -> String {
    let rows = [
        "Story,PROJ-101,Dark mode,New feature,[UI] Added a dark theme,Yes,23.0.1,23.1.0",
        "Bug,PROJ-102,Login,Bug fix,[Auth] Fixed login timeout,Yes,23.0.1,",
        "Task,PROJ-103,Paging,API,\"[REST] Lists are paged, 50 per page\",No,23.0.1,",
        "Story,PROJ-104,Reports,Improvement,Faster report generation,,23.0.1,",
        "Epic,PROJ-105,Platform,Epic,[Infra] Moved to new cluster,Yes,23.0.1,",
        "Bug,PROJ-106,Export,Bug fix,,No,23.0.1,",
        "Task,PROJ-107,SOAP,Removal,[Legacy] Removed the SOAP endpoint,Yes,23.0.1,",
        "Story,PROJ-108,Search,New feature,[Search] Fuzzy matching,Yes,23.0.1,",
    ];
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// Writes `content` to `name` inside `dir` and returns the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
