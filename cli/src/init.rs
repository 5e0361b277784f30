use crate::error::{Result, ResultExt};
use crate::ui;
use notes::config::write_default_config;
use std::path::Path;

pub fn execute(path: &Path, force: bool) -> Result<()> {
    ui::status_message(&format!("Creating {}", path.display()));
    write_default_config(path, force)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    ui::success_message("Configuration file created");
    ui::info_message(&format!(
        "Edit {} to adjust column names, categories and the release date timezone",
        path.display()
    ));
    Ok(())
}
