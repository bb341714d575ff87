//! Builds download URLs for single files in the ERA5 bucket.
//!
//! Every file lives at
//! `<base>/<dataset>/<YYYYMM>/<dataset>.<variable>.ll025sc.<start>_<end>.nc`
//! where the `<start>_<end>` timestamps depend on how the dataset is cut in
//! time (see [`Granularity`]).

use crate::{
    catalog::{self, Dataset, Granularity},
    error::SelectionError,
    period::YearMonth,
};

pub const BASE_URL: &str = "https://nsf-ncar-era5.s3.amazonaws.com";

/// 0.25 degree regular lat/lon grid, scalar fields.
pub const RESOLUTION_TAG: &str = "ll025sc";

/// Semi-monthly files switch from the first to the second half after this day.
const FIRST_HALF_LAST_DAY: u32 = 15;

/// Returns the URL of the file holding `variable_id` for the given month.
///
/// `day` selects the file within the month: the calendar day for daily
/// datasets, the half of the month for semi-monthly ones. Monthly datasets
/// ignore it.
pub fn download_link(dataset: &Dataset, variable_id: &str, ym: YearMonth, day: u32) -> String {
    format!(
        "{}/{}/{}/{}",
        BASE_URL,
        dataset.id,
        ym.compact(),
        file_name(dataset, variable_id, ym, day)
    )
}

/// Same as [`download_link`] but resolves the dataset from the catalog.
pub fn download_link_by_id(
    dataset_id: &str,
    variable_id: &str,
    ym: YearMonth,
    day: u32,
) -> Result<String, SelectionError> {
    let dataset = catalog::dataset(dataset_id)
        .ok_or_else(|| SelectionError::UnknownDataset(dataset_id.to_string()))?;

    Ok(download_link(dataset, variable_id, ym, day))
}

/// Object name of the file, without the bucket prefix.
pub fn file_name(dataset: &Dataset, variable_id: &str, ym: YearMonth, day: u32) -> String {
    format!(
        "{}.{}.{}.{}.nc",
        dataset.id,
        variable_id,
        RESOLUTION_TAG,
        time_range(dataset.granularity, ym, day)
    )
}

/// The `<start>_<end>` timestamp pair (`YYYYMMDDHH`) embedded in a file name.
pub fn time_range(granularity: Granularity, ym: YearMonth, day: u32) -> String {
    let (year, month) = (ym.year(), ym.month());

    match granularity {
        Granularity::Daily => {
            format!("{year}{month:02}{day:02}00_{year}{month:02}{day:02}23")
        }
        Granularity::Monthly => {
            let last_day = ym.days_in_month();
            format!("{year}{month:02}0100_{year}{month:02}{last_day:02}23")
        }
        Granularity::SemiMonthly if day <= FIRST_HALF_LAST_DAY => {
            format!("{year}{month:02}0106_{year}{month:02}1606")
        }
        Granularity::SemiMonthly => {
            let next = ym.next();
            format!(
                "{year}{month:02}1606_{}{:02}0106",
                next.year(),
                next.month()
            )
        }
    }
}

// -- Tests -------------------------------------------------------------------
