use std::path::{Path, PathBuf};

use clap::Parser;
use plume_cli::error::Result;
use plume_cli::io;
use plume_core::correct_typography;

/// French typographic corrector for Markdown/MDX files.
#[derive(Parser, Debug)]
#[command(
    name = "plume-typo",
    about = "Apply French typographic corrections to Markdown/MDX files"
)]
struct Cli {
    /// Files to correct
    #[arg(required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Apply corrections (atomic rewrite); the default reports what would change
    #[arg(long)]
    write: bool,

    /// Print corrected text to stdout instead of touching files
    #[arg(long)]
    stdout: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Per-file errors are reported and the batch keeps going.
    let mut failures = 0usize;
    for path in &cli.files {
        if let Err(e) = process_file(path, cli.write, cli.stdout) {
            failures += 1;
            eprintln!("error: {}: {e}", path.display());
        }
    }
    if failures > 0 {
        std::process::exit(1);
    }
}

fn process_file(path: &Path, write: bool, to_stdout: bool) -> Result<()> {
    let original = io::read_text_utf8(path)?;
    let corrected = correct_typography(&original)?;

    if to_stdout {
        print!("{corrected}");
        return Ok(());
    }
    if corrected == original {
        println!("unchanged: {}", path.display());
        return Ok(());
    }
    if write {
        io::write_text_atomic(path, &corrected, io::TextEncoding::Utf8)?;
        println!("corrected: {}", path.display());
    } else {
        println!("would correct: {} (pass --write to apply)", path.display());
    }
    Ok(())
}
