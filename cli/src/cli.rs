use clap::{Parser, Subcommand, ValueEnum};
use notes::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(
    author,
    version,
    about = "Turn issue tracker CSV exports into release notes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render release notes grouped by release notes category
    Render {
        /// CSV export of the tickets in the release
        csv: PathBuf,

        /// Patch version for the title (defaults to the first row's solution version)
        #[clap(short, long)]
        patch_version: Option<String>,

        /// Output format (defaults to the --output extension, then HTML)
        #[clap(short, long, value_enum)]
        format: Option<FormatType>,

        /// Write the document to this file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Also save the plain-text notes for download, `--download=PATH` (defaults to data.txt)
        #[clap(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "data.txt"
        )]
        download: Option<PathBuf>,

        /// Print an HTML download link carrying the plain-text notes
        #[clap(long, default_value_t = false)]
        download_link: bool,

        /// Fail on tickets whose category has no mapping
        #[clap(long, default_value_t = false)]
        strict: bool,

        /// Configuration file (defaults to relnotes.toml when present)
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Prompt for the patch version and pick lines to copy
        #[clap(short, long, default_value_t = false)]
        interactive: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Create a relnotes.toml with the default settings
    Init {
        /// Where to write the configuration
        #[clap(short, long, default_value = "relnotes.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatType {
    /// HTML fragment with headings and bold module lines
    Html,

    /// Plain text with blank-line separators
    Text,
}

impl From<FormatType> for OutputFormat {
    fn from(format: FormatType) -> Self {
        match format {
            FormatType::Html => Self::Html,
            FormatType::Text => Self::Text,
        }
    }
}
