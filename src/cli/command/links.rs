//! Generate the download links for a selection and save or print them.

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::LinksArgs,
    output::{default_output_dir, join_links, link_file_name, write_link_file},
    period::TimeRange,
    selection::Selection,
};

#[derive(Debug)]
pub enum LinksOutput {
    /// Links joined by newlines, ready to print.
    Text(String),
    /// Path of the saved link file and the number of links in it.
    File(String, usize),
}

pub fn links(args: &LinksArgs) -> Result<LinksOutput> {
    let mut selection = Selection::new(&args.dataset)?;
    for variable in &args.variables {
        selection.select_variable(variable);
    }
    selection.set_range(args.start, args.end);
    if !args.months.is_empty() {
        selection.set_months(args.months.iter().copied());
    }

    let links = selection.generate()?;

    if args.print {
        return Ok(LinksOutput::Text(join_links(links)));
    }

    let range = TimeRange::new(args.start, args.end)?;
    let file_name = link_file_name(&args.prefix, &args.dataset, &range);
    let file_path = args
        .output_dir
        .clone()
        .unwrap_or_else(default_output_dir)
        .join(file_name);

    debug!("Writing {} links to {}", links.len(), file_path.display());
    write_link_file(&file_path, links)?;

    Ok(LinksOutput::File(
        file_path.to_string_lossy().to_string(),
        links.len(),
    ))
}

// -- Tests -------------------------------------------------------------------
