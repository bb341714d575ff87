//! Describe the catalog on the command line.

use anyhow::Result;

use crate::{
    catalog::{self, Dataset, Variable, ERA5_DATASETS},
    error::SelectionError,
};

pub fn datasets() -> String {
    ERA5_DATASETS
        .iter()
        .map(describe_dataset)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn variables(dataset_id: &str) -> Result<String> {
    let dataset = catalog::dataset(dataset_id)
        .ok_or_else(|| SelectionError::UnknownDataset(dataset_id.to_string()))?;

    let lines: Vec<String> = dataset.variables.iter().map(describe_variable).collect();

    Ok(lines.join("\n"))
}

fn describe_dataset(dataset: &Dataset) -> String {
    format!(
        "{:<24}{} ({}, {}) - {}, {} variables",
        dataset.id,
        dataset.name,
        dataset.frequency,
        dataset.granularity,
        dataset.description,
        dataset.variables.len()
    )
}

fn describe_variable(variable: &Variable) -> String {
    let mut line = format!("{:<16}{} ({})", variable.id, variable.name, variable.description);

    if let Some(unit) = variable.unit {
        line.push_str(&format!(" [{}]", unit));
    }
    if let Some(size) = variable.typical_size {
        line.push_str(&format!(" {}", size));
    }

    line
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_list_every_dataset() {
        let listing = datasets();

        assert_eq!(listing.lines().count(), 3);
        assert!(listing.contains("e5.oper.an.pl"));
        assert!(listing.contains("Accumulated Forecast (Semi-monthly, semi-monthly files)"));
    }

    #[test]
    fn should_list_variables() {
        let listing = variables("e5.oper.an.pl").unwrap();

        assert_eq!(listing.lines().count(), 9);
        assert!(listing
            .lines()
            .any(|l| l.starts_with("128_130_t") && l.contains("Temperature (温度) ~200 MB/day")));
    }

    #[test]
    fn should_fail_for_unknown_dataset() {
        let err = variables("nope").unwrap_err();

        assert_eq!(err.to_string(), "Unknown dataset `nope`");
    }
}
