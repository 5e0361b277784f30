mod cli;
mod error;
mod init;
mod interactive;
mod progress;
mod render;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use render::RenderArgs;
use std::process;

fn main() {
    ui::configure_colors();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            csv,
            patch_version,
            format,
            output,
            download,
            download_link,
            strict,
            config,
            interactive,
            verbose,
        } => render::execute(RenderArgs {
            csv,
            patch_version,
            format: format.map(Into::into),
            output,
            download,
            download_link,
            strict,
            config,
            interactive,
            verbose,
        }),
        Commands::Init { path, force } => init::execute(&path, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
