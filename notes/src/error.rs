use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Error context to enrich error messages
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub source: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation: {}", self.operation)?;
        if let Some(source) = &self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

/// Errors that can occur while loading a ticket export or rendering release notes
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Required column '{0}' not found in export")]
    MissingColumn(String),

    #[error("Ticket {key} has unknown release notes category '{category}'")]
    UnknownCategory { key: String, category: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("No line with index {0}")]
    InvalidLine(usize),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<NotesError>),

    #[error("{context}: {source}")]
    ContextualError {
        context: ErrorContext,
        source: Box<NotesError>,
    },
}

impl NotesError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn with_operation_context(
        self,
        operation: impl Into<String>,
        source: Option<impl Into<String>>,
    ) -> Self {
        Self::ContextualError {
            context: ErrorContext {
                operation: operation.into(),
                source: source.map(Into::into),
            },
            source: Box::new(self),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::Csv(e) => format!("Could not read the CSV export: {e}"),
            Self::ConfigParse(e) => format!("Invalid configuration file: {e}"),
            Self::ConfigNotFound(path) => {
                format!("Configuration file not found: {}", path.display())
            }
            Self::MissingColumn(name) => {
                format!("The export has no column named '{name}'")
            }
            Self::UnknownCategory { key, category } => format!(
                "Ticket {key} uses release notes category '{category}', which has no mapping"
            ),
            Self::InvalidTimezone(name) => format!("Unknown timezone '{name}'"),
            Self::InvalidDateFormat(format) => {
                format!("Date format '{format}' has an unknown specifier")
            }
            Self::InvalidLine(index) => format!("There is no line number {index}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            Self::ContextualError { context, source } => {
                format!("{}: {}", context, source.user_message())
            }
        }
    }
}
