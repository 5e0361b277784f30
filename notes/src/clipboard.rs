use crate::error::NotesError;
use crate::types::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::collections::BTreeSet;

/// Suffix shown next to a line once it has been copied
pub const COPIED_ACK: &str = "Copied!";

/// One non-blank line of a rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLine {
    /// Position among the non-blank lines, stable for the board's lifetime
    pub index: usize,
    pub text: String,
}

/// Copyable lines of a document and which of them were copied already
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyBoard {
    lines: Vec<CopyLine>,
    copied: BTreeSet<usize>,
}

impl CopyBoard {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(index, line)| CopyLine {
                index,
                text: line.to_string(),
            })
            .collect();

        Self {
            lines,
            copied: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CopyLine] {
        &self.lines
    }

    /// Marks a line as copied; the mark is never cleared
    ///
    /// # Errors
    /// Returns error if no line has this index
    pub fn mark_copied(&mut self, index: usize) -> Result<&CopyLine> {
        let line = self.lines.get(index).ok_or(NotesError::InvalidLine(index))?;
        self.copied.insert(index);
        Ok(line)
    }

    #[must_use]
    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.contains(&index)
    }

    #[must_use]
    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }

    /// Display text of a line, acknowledged once copied
    #[must_use]
    pub fn label(&self, index: usize) -> Option<String> {
        let line = self.lines.get(index)?;
        if self.is_copied(index) {
            Some(format!("{}  {COPIED_ACK}", line.text))
        } else {
            Some(line.text.clone())
        }
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        (0..self.lines.len())
            .filter_map(|index| self.label(index))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Terminal escape sequence that puts `text` on the system clipboard (OSC 52)
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "Patch Version 23.0.1\nRelease date: 05-March-2024\n\n\
                            \nBug fix\n\n\
                            Auth (PROJ-12)\nFixed login timeout\n\n";

    #[test]
    fn test_blank_lines_are_skipped() {
        let board = CopyBoard::from_text(DOCUMENT);
        assert_eq!(board.len(), 5);
        assert_eq!(board.lines()[2].text, "Bug fix");
        assert_eq!(board.lines()[4].index, 4);
    }

    #[test]
    fn test_copied_state_persists() {
        let mut board = CopyBoard::from_text(DOCUMENT);
        assert!(!board.is_copied(3));

        let line = board.mark_copied(3).unwrap();
        assert_eq!(line.text, "Auth (PROJ-12)");

        board.mark_copied(0).unwrap();
        board.mark_copied(3).unwrap();

        assert!(board.is_copied(3));
        assert!(board.is_copied(0));
        assert_eq!(board.copied_count(), 2);
        assert_eq!(board.label(3).unwrap(), "Auth (PROJ-12)  Copied!");
        assert_eq!(board.label(4).unwrap(), "Fixed login timeout");
    }

    #[test]
    fn test_mark_copied_out_of_range() {
        let mut board = CopyBoard::from_text(DOCUMENT);
        assert!(matches!(board.mark_copied(5), Err(NotesError::InvalidLine(5))));
        assert_eq!(board.copied_count(), 0);
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("Auth"), "\x1b]52;c;QXV0aA==\x07");
    }
}
