//! Download links for the NSF NCAR ERA5 reanalysis archive.

pub mod catalog;
pub mod cli;
pub mod download;
pub mod error;
pub mod expand;
pub mod link;
pub mod logging;
pub mod output;
pub mod period;
pub mod selection;
