use crate::error::NotesError;
use crate::types::Result;
use crate::utils::escape_html;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// A text document offered for download through a `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    file_name: String,
    payload: String,
}

impl DownloadLink {
    pub fn new(text: &str, file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            payload: STANDARD.encode(text.as_bytes()),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Base64 of the UTF-8 text
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:file/txt;base64,{}", self.payload)
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<a href=\"{}\" download=\"{}\">Download text file</a>",
            self.data_uri(),
            escape_html(&self.file_name)
        )
    }

    /// # Errors
    /// Returns error if the payload is not valid base64 or UTF-8
    pub fn decode(&self) -> Result<String> {
        let bytes = STANDARD
            .decode(&self.payload)
            .map_err(|e| NotesError::Other(format!("Invalid download payload: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| NotesError::Other(format!("Download payload is not UTF-8: {e}")))
    }
}
