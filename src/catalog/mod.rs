//! Static catalog of the ERA5 datasets and variables served by the NCAR bucket.

mod era5;

use std::{fmt, ops::RangeInclusive};

use crate::period::YearMonth;

pub use era5::ERA5_DATASETS;

/// Years that can be selected. The archive starts in 1940.
pub const YEARS: RangeInclusive<i32> = 1940..=2025;

/// Months that can be selected.
pub const MONTHS: RangeInclusive<u32> = 1..=12;

/// Dataset selected when nothing else has been chosen (Surface Analysis).
pub const DEFAULT_DATASET_ID: &str = "e5.oper.an.sfc";

#[derive(Debug)]
/// A category of archived data sharing one file naming convention.
pub struct Dataset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub frequency: &'static str,
    pub granularity: Granularity,
    pub variables: &'static [Variable],
}

impl Dataset {
    /// Looks up a variable of this dataset by its `<table>_<code>_<shortname>` id.
    pub fn variable(&self, id: &str) -> Option<&'static Variable> {
        self.variables.iter().find(|v| v.id == id)
    }
}

#[derive(Debug)]
/// One physical quantity within a dataset.
pub struct Variable {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unit: Option<&'static str>,
    pub typical_size: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the files of a dataset are cut in time.
pub enum Granularity {
    /// One file per calendar day, hours 00 to 23.
    Daily,
    /// One file per calendar month.
    Monthly,
    /// Two files per month, split on the 16th at 06 UTC.
    SemiMonthly,
}

impl Granularity {
    /// Day values handed to the link builder for each file of `ym`.
    pub fn file_days(self, ym: YearMonth) -> Vec<u32> {
        match self {
            Granularity::Daily => (1..=ym.days_in_month()).collect(),
            Granularity::Monthly => vec![1],
            Granularity::SemiMonthly => vec![1, 16],
        }
    }

    pub fn files_per_month(self, ym: YearMonth) -> usize {
        match self {
            Granularity::Daily => ym.days_in_month() as usize,
            Granularity::Monthly => 1,
            Granularity::SemiMonthly => 2,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Daily => "daily files",
            Granularity::Monthly => "monthly files",
            Granularity::SemiMonthly => "semi-monthly files",
        };
        write!(f, "{}", label)
    }
}

/// Finds a dataset by id.
pub fn dataset(id: &str) -> Option<&'static Dataset> {
    ERA5_DATASETS.iter().find(|d| d.id == id)
}

/// Returns the dataset used when the caller has not picked one.
pub fn default_dataset() -> &'static Dataset {
    dataset(DEFAULT_DATASET_ID).unwrap_or(&ERA5_DATASETS[0])
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_find_dataset_by_id() {
        let ds = dataset("e5.oper.fc.sfc.accumu").unwrap();

        assert_eq!(ds.name, "Accumulated Forecast");
        assert_eq!(ds.granularity, Granularity::SemiMonthly);
        assert!(dataset("e5.oper.an.ml").is_none());
    }

    #[test]
    fn should_default_to_surface_analysis() {
        assert_eq!(default_dataset().id, "e5.oper.an.sfc");
    }

    #[test]
    fn should_map_every_dataset_to_a_granularity() {
        let granularities: Vec<Granularity> =
            ERA5_DATASETS.iter().map(|d| d.granularity).collect();

        assert_eq!(
            granularities,
            vec![
                Granularity::Daily,
                Granularity::Monthly,
                Granularity::SemiMonthly
            ]
        );
    }

    #[test]
    fn should_have_unique_variable_ids_per_dataset() {
        for ds in ERA5_DATASETS {
            let ids: HashSet<&str> = ds.variables.iter().map(|v| v.id).collect();
            assert_eq!(ids.len(), ds.variables.len(), "duplicate in {}", ds.id);
        }
    }

    #[test]
    fn should_encode_variable_ids_as_table_code_name() {
        for ds in ERA5_DATASETS {
            for v in ds.variables {
                let parts: Vec<&str> = v.id.split('_').collect();
                assert_eq!(parts.len(), 3, "{}", v.id);
                assert!(parts[0].chars().all(|c| c.is_ascii_digit()));
                assert_eq!(parts[1].len(), 3, "{}", v.id);
                assert!(!parts[2].is_empty());
            }
        }
    }

    #[test]
    fn should_find_variable_in_dataset() {
        let ds = dataset("e5.oper.an.sfc").unwrap();
        let v = ds.variable("128_167_2t").unwrap();

        assert_eq!(v.name, "2m Temperature");
        assert_eq!(v.typical_size, Some("~1 GB/month"));
        assert!(v.unit.is_none());
        assert!(ds.variable("128_060_pv").is_none());
    }

    #[test]
    fn should_count_files_per_month() {
        let feb = YearMonth::new(2024, 2).unwrap();

        assert_eq!(Granularity::Daily.files_per_month(feb), 29);
        assert_eq!(Granularity::Monthly.files_per_month(feb), 1);
        assert_eq!(Granularity::SemiMonthly.files_per_month(feb), 2);
        assert_eq!(Granularity::SemiMonthly.file_days(feb), vec![1, 16]);
    }

    #[test]
    fn should_cover_selectable_years() {
        assert_eq!(YEARS.clone().count(), 86);
        assert_eq!(MONTHS.clone().count(), 12);
    }
}
