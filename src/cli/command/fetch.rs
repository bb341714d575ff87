use std::path::Path;

use anyhow::{anyhow, Result};

use crate::{download::fetch_links, output::read_link_file};

pub async fn fetch(link_file: &Path, dir: &Path) -> Result<String> {
    let links = read_link_file(link_file)?;
    if links.is_empty() {
        return Err(anyhow!("`{}` contains no links", link_file.display()));
    }

    let summary = fetch_links(&links, dir).await?;

    Ok(format!(
        "{} file(s) saved to `{}`, {} already present",
        summary.downloaded,
        dir.display(),
        summary.skipped
    ))
}
