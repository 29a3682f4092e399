//! Man page generator for bcm283x-spi
//!
//! Writes `bcm283x-spi.1` plus one `bcm283x-spi-<command>.1` page per
//! subcommand, so `man bcm283x-spi-divider` works like `git` style pages.
//!
//! Usage: cargo run --bin gen-manpage -- [output-dir]

use clap::{Command, CommandFactory};
use std::fs;
use std::io;
use std::path::PathBuf;

#[path = "../cli.rs"]
#[allow(dead_code)]
mod cli;

/// Render the top-level page and one page per subcommand
///
/// Returns `(file name, roff source)` pairs.
fn render_pages(cmd: Command) -> io::Result<Vec<(String, Vec<u8>)>> {
    let name = cmd.get_name().to_string();
    let mut pages = Vec::new();

    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let page_name = format!("{}-{}", name, sub.get_name());
        let mut buffer = Vec::new();
        clap_mangen::Man::new(sub.clone())
            .title(page_name.clone())
            .render(&mut buffer)?;
        pages.push((format!("{}.1", page_name), buffer));
    }

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    pages.insert(0, (format!("{}.1", name), buffer));

    Ok(pages)
}

fn main() -> io::Result<()> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));

    fs::create_dir_all(&output_dir)?;

    for (file_name, roff) in render_pages(cli::Cli::command())? {
        let path = output_dir.join(&file_name);
        fs::write(&path, roff)?;
        println!("Wrote {}", path.display());
    }

    println!("\nView with: man -l {}", output_dir.join("bcm283x-spi.1").display());
    Ok(())
}
