use crate::config::NotesConfig;
use crate::error::NotesError;
use crate::types::Result;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Formats `now` as a calendar date in `tz`
///
/// # Errors
/// Returns error if `format` holds a specifier chrono does not know
pub fn release_date(now: DateTime<Utc>, tz: Tz, format: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(NotesError::InvalidDateFormat(format.to_string()));
    }
    Ok(now
        .with_timezone(&tz)
        .format_with_items(items.into_iter())
        .to_string())
}

/// Title block of a release notes document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub patch_version: String,
    pub release_date: String,
}

impl DocumentHeader {
    pub fn new(patch_version: impl Into<String>, release_date: impl Into<String>) -> Self {
        Self {
            patch_version: patch_version.into(),
            release_date: release_date.into(),
        }
    }

    /// Header dated with the current day in the configured timezone
    ///
    /// # Errors
    /// Returns error if the configured timezone or date format is invalid
    pub fn today(patch_version: impl Into<String>, config: &NotesConfig) -> Result<Self> {
        Self::at(patch_version, Utc::now(), config)
    }

    /// # Errors
    /// Returns error if the configured timezone or date format is invalid
    pub fn at(
        patch_version: impl Into<String>,
        now: DateTime<Utc>,
        config: &NotesConfig,
    ) -> Result<Self> {
        let tz = config.timezone()?;
        let date = release_date(now, tz, &config.date_format)?;
        Ok(Self::new(patch_version, date))
    }
}
