//! Expands a month range into the full list of file URLs.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{catalog::Dataset, link::download_link, period::TimeRange};

/// Returns every URL covering `range` for the selected variables.
///
/// Links are ordered by month, then by variable in the order given, then by
/// file within the month. When `months` is given only those calendar months
/// (1-12) of each year are included.
pub fn expand_links<S: AsRef<str>>(
    dataset: &Dataset,
    variables: &[S],
    range: &TimeRange,
    months: Option<&BTreeSet<u32>>,
) -> Vec<String> {
    let mut links = Vec::with_capacity(link_count(dataset, variables.len(), range, months));

    for ym in range.months() {
        if !includes(months, ym.month()) {
            continue;
        }

        let file_days = dataset.granularity.file_days(ym);
        debug!(
            "{} {}: {} file(s) per variable",
            dataset.id,
            ym,
            file_days.len()
        );

        for variable in variables {
            for &day in &file_days {
                links.push(download_link(dataset, variable.as_ref(), ym, day));
            }
        }
    }

    links
}

/// Number of links [`expand_links`] would return, without building them.
pub fn link_count(
    dataset: &Dataset,
    variable_count: usize,
    range: &TimeRange,
    months: Option<&BTreeSet<u32>>,
) -> usize {
    range
        .months()
        .filter(|ym| includes(months, ym.month()))
        .map(|ym| dataset.granularity.files_per_month(ym) * variable_count)
        .sum()
}

fn includes(months: Option<&BTreeSet<u32>>, month: u32) -> bool {
    months.map_or(true, |m| m.contains(&month))
}

// -- Tests -------------------------------------------------------------------
