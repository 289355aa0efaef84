use std::path::PathBuf;

use clap::Parser;
use plume_cli::error::{CliError, Result};
use plume_cli::{diff, io};
use plume_core::apply_replacements;

/// Fixed find-replace pass over a single Markdown/MDX file.
#[derive(Parser, Debug)]
#[command(
    name = "plume-replace",
    about = "Resolve escaped angle brackets and dots, drop <br> tags"
)]
struct Cli {
    /// File to process
    file: PathBuf,

    /// Apply the changes; the default is a diff preview
    #[arg(long)]
    write: bool,

    /// Save the original under a .bak name before writing
    #[arg(long)]
    backup: bool,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let code = match e {
            CliError::NotAFile(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if !cli.file.is_file() {
        return Err(CliError::NotAFile(cli.file));
    }

    let (original, encoding) = io::read_text_with_fallback(&cli.file)?;
    let updated = apply_replacements(&original);

    if updated == original {
        println!("no change: {}", cli.file.display());
        return Ok(());
    }

    if !cli.write {
        print!("{}", diff::unified_diff(&cli.file, &original, &updated));
        return Ok(());
    }

    if cli.backup {
        let backup = io::write_backup(&cli.file, &original, encoding)?;
        println!("backup saved: {}", backup.display());
    }
    io::write_text_atomic(&cli.file, &updated, encoding)?;
    println!("wrote {} ({})", cli.file.display(), encoding.label());
    Ok(())
}
