use crate::error::{Result, ResultExt};
use crate::interactive;
use crate::progress::ProgressTracker;
use crate::ui;
use notes::{CategoryPolicy, DocumentHeader, NotesConfig, OutputFormat, ReleaseNotes};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub csv: PathBuf,
    pub patch_version: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub download: Option<PathBuf>,
    pub download_link: bool,
    pub strict: bool,
    pub config: Option<PathBuf>,
    pub interactive: bool,
    pub verbose: bool,
}

/// Where the patch version in the title came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Flag,
    SolutionVersion,
    Default,
}

/// Picks the patch version: the flag, then the export's solution version,
/// then the configured seed.
pub fn pick_patch_version(
    flag: Option<&str>,
    solution_version: Option<&str>,
    seed: &str,
) -> (String, VersionSource) {
    if let Some(version) = flag {
        return (version.to_string(), VersionSource::Flag);
    }
    if let Some(version) = solution_version {
        return (version.to_string(), VersionSource::SolutionVersion);
    }
    (seed.to_string(), VersionSource::Default)
}

/// Format from the flag, then the output file extension, then HTML
pub fn pick_format(flag: Option<OutputFormat>, output: Option<&PathBuf>) -> OutputFormat {
    flag.or_else(|| output.and_then(|path| OutputFormat::from_path(path)))
        .unwrap_or_default()
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let mut progress = ProgressTracker::new("Release Notes", args.verbose).with_steps(vec![
        "Loading configuration".to_string(),
        "Reading CSV export".to_string(),
        "Grouping release notes".to_string(),
        "Rendering document".to_string(),
    ]);

    progress.start_step();
    let (mut config, config_path) = NotesConfig::discover(args.config.as_deref())?;
    if args.strict {
        config.policy = CategoryPolicy::Strict;
    }
    if args.verbose {
        match &config_path {
            Some(path) => ui::info_message(&format!("Using configuration {}", path.display())),
            None => ui::info_message("Using default configuration"),
        }
    }
    progress.complete_step();

    progress.start_step();
    let table = notes::load_rows(&args.csv, &config.columns)
        .with_context(|| format!("Failed to load {}", args.csv.display()))?;
    if args.verbose {
        ui::info_message(&format!("Read {} tickets", table.len()));
        if !table.has_approval_column {
            ui::info_message("Export has no approval column, approvals marked MISSING");
        }
    }
    if table.is_empty() {
        ui::warning_message("The export contains no tickets");
    }
    progress.complete_step();

    let (mut patch_version, source) = pick_patch_version(
        args.patch_version.as_deref(),
        table.solution_version(),
        &config.default_patch_version,
    );
    if args.interactive && source != VersionSource::Flag {
        patch_version = interactive::prompt_patch_version(&patch_version)?;
    } else if source == VersionSource::Default {
        ui::warning_message(&format!(
            "No patch version given or found in the export, using '{patch_version}'"
        ));
    }

    progress.start_step();
    let header = DocumentHeader::today(patch_version, &config)?;
    let release = ReleaseNotes::build(table.rows, header, &config)?;
    if args.verbose {
        for (category, entries) in release.notes().iter() {
            ui::info_message(&format!("{}: {}", category, entries.len()));
        }
    }
    progress.complete_step();

    progress.start_step();
    let format = pick_format(args.format, args.output.as_ref());
    let document = release.render(format);
    match &args.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ui::success_message(&format!("Release notes saved to {}", path.display()));
        }
        None => println!("{document}"),
    }

    if let Some(path) = &args.download {
        fs::write(path, release.to_text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ui::success_message(&format!("Text file saved to {}", path.display()));
    }

    if args.download_link {
        println!("{}", release.download_link().to_html());
    }
    progress.complete_step();
    progress.complete();

    if args.interactive {
        interactive::copy_lines(release.copy_board())?;
    }

    Ok(())
}
