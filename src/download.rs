//! Downloads files listed in a link file.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Error, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::cli::{create_progress_bar, create_spinner};

#[derive(Debug, Default, PartialEq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub skipped: usize,
}

/// Name of the object a URL points at, used as the local file name.
pub fn file_name_from_url(url: &str) -> Result<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty() && !name.contains(':'))
        .ok_or_else(|| anyhow!("Cannot derive a file name from `{}`", url))
}

/// Downloads every link into `dir`, skipping files that already exist.
pub async fn fetch_links(links: &[String], dir: &Path) -> Result<FetchSummary> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create `{}`", dir.display()))?;

    let client = reqwest::Client::new();
    let mut summary = FetchSummary::default();
    let pb = create_progress_bar(links.len() as u64, "Downloading files...");

    for link in links {
        let file_path = dir.join(file_name_from_url(link)?);

        if file_path.exists() {
            warn!("{} already exists, skipping", file_path.display());
            summary.skipped += 1;
            pb.inc(1);
            continue;
        }

        let bar = create_spinner(format!("Downloading {}", file_path.display()));
        download_with_progress(&client, link, &file_path, &bar).await?;
        bar.finish_and_clear();

        summary.downloaded += 1;
        pb.inc(1);
    }

    pb.finish_with_message("Files downloaded");
    info!(
        "{} downloaded, {} skipped into {}",
        summary.downloaded,
        summary.skipped,
        dir.display()
    );

    Ok(summary)
}

/// Streams `url` into `file_path`, turning the spinner into a byte counter
/// once the content length is known. The file only appears when complete.
pub async fn download_with_progress(
    client: &reqwest::Client,
    url: &str,
    file_path: &Path,
    progress_bar: &ProgressBar,
) -> Result<PathBuf, Error> {
    debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::msg(format!("Failed to download file: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::msg(format!(
            "Failed to download `{}`: {}",
            url,
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);
    if total_size > 0 {
        progress_bar.set_length(total_size);
        progress_bar.set_style(
            ProgressStyle::with_template(
                "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {eta}",
            )?
            .progress_chars("=> "),
        );
    }

    let dir = file_path
        .parent()
        .ok_or_else(|| anyhow!("`{}` has no parent directory", file_path.display()))?;
    let mut file = NamedTempFile::new_in(dir)?;
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| Error::msg(format!("Error reading chunk: {}", e)))?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        progress_bar.set_position(downloaded);
    }

    file.persist(file_path)?;

    Ok(file_path.to_path_buf())
}

// -- Tests -------------------------------------------------------------------
