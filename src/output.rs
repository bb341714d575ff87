//! Saving and loading lists of generated links.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::period::TimeRange;

pub const DEFAULT_PREFIX: &str = "era5_links";

/// Joins links into one newline separated block of text.
pub fn join_links(links: &[String]) -> String {
    links.join("\n")
}

/// `<prefix>_<dataset>_<startYYYY><startM>-<endYYYY><endM>.txt`
pub fn link_file_name(prefix: &str, dataset_id: &str, range: &TimeRange) -> String {
    let (start, end) = (range.start(), range.end());

    format!(
        "{}_{}_{}{}-{}{}.txt",
        prefix,
        dataset_id,
        start.year(),
        start.month(),
        end.year(),
        end.month()
    )
}

/// Where to save a link file when no directory is given.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Writes one link per line, each terminated by `\n`.
pub fn write_link_file(path: &Path, links: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create `{}`", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create `{}`", path.display()))?;
    let mut writer = BufWriter::new(file);

    for link in links {
        writeln!(writer, "{}", link)?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads a link file back, ignoring blank lines.
pub fn read_link_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open `{}`", path.display()))?;
    let reader = io::BufReader::new(file);
    let mut links = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let link = line.trim();
        if !link.is_empty() {
            links.push(link.to_string());
        }
    }

    Ok(links)
}

// -- Tests -------------------------------------------------------------------
