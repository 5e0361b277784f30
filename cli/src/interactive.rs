use crate::error::{CliError, Result};
use crate::ui;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use notes::{CopyBoard, osc52_sequence};
use std::io::{self, Write};

const DONE_ITEM: &str = "Done";

fn ensure_terminal() -> Result<()> {
    if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stderr) {
        Ok(())
    } else {
        Err(CliError::Other(
            "Interactive mode needs a terminal, run without --interactive".to_string(),
        ))
    }
}

/// Ask for the patch version, pre-filled with `seed`
pub fn prompt_patch_version(seed: &str) -> Result<String> {
    ensure_terminal()?;

    let version: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Patch version")
        .with_initial_text(seed)
        .interact_text()?;

    Ok(version.trim().to_string())
}

/// Let the user copy document lines one at a time until they pick "Done".
///
/// Copied lines stay marked for the rest of the session.
pub fn copy_lines(mut board: CopyBoard) -> Result<()> {
    if board.is_empty() {
        return Ok(());
    }
    ensure_terminal()?;

    let theme = ColorfulTheme::default();
    let mut cursor = 0;

    loop {
        let mut items = board.labels();
        items.push(DONE_ITEM.to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt("Select a line to copy")
            .items(&items)
            .default(cursor)
            .interact_opt()?;

        match selection {
            Some(index) if index < board.len() => {
                let line = board.mark_copied(index)?;
                let mut stderr = io::stderr();
                write!(stderr, "{}", osc52_sequence(&line.text))?;
                stderr.flush()?;
                cursor = (index + 1).min(board.len());
            }
            _ => break,
        }
    }

    ui::info_message(&format!("Copied {} of {} lines", board.copied_count(), board.len()));
    Ok(())
}
