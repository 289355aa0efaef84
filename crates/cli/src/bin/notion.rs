use std::fs;
use std::path::PathBuf;

use clap::Parser;
use plume_cli::error::{CliError, Result};
use plume_cli::io;
use plume_core::convert_notion;

/// Converts a Notion Markdown export to Astro Starlight MDX.
#[derive(Parser, Debug)]
#[command(
    name = "plume-notion",
    about = "Convert a Notion Markdown export to Starlight MDX"
)]
struct Cli {
    /// Input file exported from Notion
    input: PathBuf,

    /// Output path for the converted MDX (parent directories are created)
    output: PathBuf,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if !cli.input.exists() {
        return Err(CliError::NotFound(cli.input));
    }

    let content = io::read_text_utf8(&cli.input)?;
    let converted = convert_notion(&content);

    if let Some(parent) = cli.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    io::write_text_atomic(&cli.output, &converted, io::TextEncoding::Utf8)?;
    println!("wrote {}", cli.output.display());
    Ok(())
}
