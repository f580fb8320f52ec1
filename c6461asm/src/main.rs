use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use c6461asm::{assemble_with_options, AssemblerOptions, UnresolvedPolicy, OBJECT_FILE_NAME};
use clap::Parser;
use log::info;

/// Two-pass assembler for the C6461 instructional machine.
///
/// Writes a listing to LISTING and the object stream to output.obj in the
/// current directory.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Assembly source file
    source: PathBuf,
    /// Where to write the listing
    listing: PathBuf,
    /// Fail on undefined symbols instead of assembling them as 0
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let program_text = fs::read_to_string(&args.source)
        .with_context(|| format!("Couldn't read source file {}", args.source.display()))?;

    let options = AssemblerOptions {
        unresolved: if args.strict {
            UnresolvedPolicy::Error
        } else {
            UnresolvedPolicy::Zero
        },
    };
    let assembly = assemble_with_options(&program_text, options)
        .with_context(|| format!("Couldn't assemble {}", args.source.display()))?;

    fs::write(&args.listing, assembly.listing())
        .with_context(|| format!("Error writing output file {}", args.listing.display()))?;
    fs::write(OBJECT_FILE_NAME, assembly.object())
        .with_context(|| format!("Error writing output file {}", OBJECT_FILE_NAME))?;

    info!(
        "{} words, {} labels",
        assembly.records.len(),
        assembly.symbols.len()
    );

    Ok(())
}
