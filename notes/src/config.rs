use crate::error::NotesError;
use crate::types::{DisplayCategory, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "relnotes.toml";

/// What to do with a row whose category has no mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPolicy {
    /// File the row under "MISSING CATEGORY"
    #[default]
    Lenient,
    /// Abort the whole render
    Strict,
}

/// Header names of the export columns, matched exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub key: String,
    pub category: String,
    pub note: String,
    pub approved: String,
    pub solution_version: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            key: "Vorgangsschlüssel".to_string(),
            category: "Benutzerdefinierte Felder (Release Notes Category)".to_string(),
            note: "Benutzerdefinierte Felder (Release Notes)".to_string(),
            approved: "Benutzerdefinierte Felder (Release Notes approved)".to_string(),
            solution_version: "Lösungsversionen".to_string(),
        }
    }
}

/// Raw category label to display category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapping {
    entries: HashMap<String, DisplayCategory>,
}

impl Default for CategoryMapping {
    fn default() -> Self {
        let entries = [
            ("New feature", DisplayCategory::NewFeature),
            ("Improvement", DisplayCategory::Improvement),
            ("API", DisplayCategory::Improvement),
            ("Bug fix", DisplayCategory::BugFix),
            ("Removal", DisplayCategory::Removal),
        ]
        .into_iter()
        .map(|(raw, category)| (raw.to_string(), category))
        .collect();

        Self { entries }
    }
}

impl CategoryMapping {
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<DisplayCategory> {
        self.entries.get(raw).copied()
    }

    pub fn insert(&mut self, raw: impl Into<String>, category: DisplayCategory) {
        self.entries.insert(raw.into(), category);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Settings for loading an export and rendering its notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    pub columns: ColumnNames,
    /// Extra raw labels, merged over the built-in mapping
    pub categories: HashMap<String, DisplayCategory>,
    pub policy: CategoryPolicy,
    pub timezone: String,
    pub date_format: String,
    pub default_patch_version: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            categories: HashMap::new(),
            policy: CategoryPolicy::Lenient,
            timezone: "Europe/Berlin".to_string(),
            date_format: "%d-%B-%Y".to_string(),
            default_patch_version: "23.0.".to_string(),
        }
    }
}

impl NotesConfig {
    /// Parses a TOML configuration string
    ///
    /// # Errors
    /// Returns error if the TOML is malformed
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration file
    ///
    /// # Errors
    /// Returns error if the file is missing or cannot be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NotesError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
    }

    /// Finds and loads the configuration to use.
    ///
    /// An explicit path must exist. Otherwise `./relnotes.toml` and then
    /// `<config dir>/relnotes/config.toml` are tried, falling back to the
    /// defaults. Returns the path that was loaded, if any.
    ///
    /// # Errors
    /// Returns error if a found file cannot be read or parsed
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("relnotes").join("config.toml"));
        }
        paths
    }

    /// Built-in mapping with the configured extra labels applied
    #[must_use]
    pub fn category_mapping(&self) -> CategoryMapping {
        let mut mapping = CategoryMapping::default();
        for (raw, category) in &self.categories {
            mapping.insert(raw.clone(), *category);
        }
        mapping
    }

    /// # Errors
    /// Returns error if the timezone name is not a known IANA zone
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| NotesError::InvalidTimezone(self.timezone.clone()))
    }
}

/// Generate a commented `relnotes.toml` template with the default settings
#[must_use]
pub fn generate_default_config_template() -> String {
    r#"# Release notes configuration

# "lenient" files tickets with an unknown category under MISSING CATEGORY,
# "strict" aborts the render on the first unknown category
policy = "lenient"

# Release date is computed in this timezone
timezone = "Europe/Berlin"
date_format = "%d-%B-%Y"

# Seed for the patch version prompt
default_patch_version = "23.0."

# Export column headers, matched exactly
[columns]
key = "Vorgangsschlüssel"
category = "Benutzerdefinierte Felder (Release Notes Category)"
note = "Benutzerdefinierte Felder (Release Notes)"
approved = "Benutzerdefinierte Felder (Release Notes approved)"
solution_version = "Lösungsversionen"

# Extra category labels on top of the built-in ones
# ("New feature", "Improvement", "API", "Bug fix", "Removal").
# Targets: "New feature", "Improvement", "Bug fix", "Removal"
[categories]
# "Enhancement" = "Improvement"
"#
    .to_string()
}

/// Writes the default template, refusing to overwrite unless `force` is set
///
/// # Errors
/// Returns error if the file exists without `force` or cannot be written
pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(NotesError::Other(format!(
            "{} already exists, use --force to overwrite it",
            path.display()
        )));
    }
    fs::write(path, generate_default_config_template())?;
    Ok(())
}
