//! Command line interface.

pub mod command;

use std::{borrow::Cow, path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{catalog::DEFAULT_DATASET_ID, output::DEFAULT_PREFIX, period::YearMonth};

const SPINNER_TICK_MS: u64 = 100;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available datasets
    Datasets {},
    /// List the variables of a dataset
    Variables {
        /// Dataset id, e.g. e5.oper.an.sfc
        dataset: String,
    },
    /// Generate download links for a selection
    Links(LinksArgs),
    /// Download every file listed in a link file
    Fetch {
        /// Link file written by `links`
        link_file: PathBuf,
        /// Directory to save the files in
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct LinksArgs {
    /// Dataset id
    #[arg(short, long, default_value = DEFAULT_DATASET_ID)]
    pub dataset: String,

    /// Variable id, repeat for several (order is kept)
    #[arg(long = "variable", visible_alias = "var")]
    pub variables: Vec<String>,

    /// First month, YYYY-MM
    #[arg(short, long, default_value = "2023-01")]
    pub start: YearMonth,

    /// Last month (inclusive), YYYY-MM
    #[arg(short, long, default_value = "2023-01")]
    pub end: YearMonth,

    /// Only include these calendar months, repeat for several
    #[arg(short, long = "month", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub months: Vec<u32>,

    /// File name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Directory to save the link file in (defaults to the home directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the links to stdout instead of saving them
    #[arg(short, long)]
    pub print: bool,
}

/// Spinner shown while a file of unknown size downloads; ticks on its own.
pub fn create_spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} {bytes}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));

    bar
}

/// Counts files handled out of `size`.
pub fn create_progress_bar(size: u64, message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let bar = ProgressBar::new(size).with_message(message);
    if let Ok(style) = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}") {
        bar.set_style(style.progress_chars("##-"));
    }

    bar
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn should_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_parse_links_command() {
        let cli = Cli::try_parse_from([
            "era5-links",
            "links",
            "--dataset",
            "e5.oper.an.pl",
            "--variable",
            "128_130_t",
            "--var",
            "128_129_z",
            "--start",
            "2023-02",
            "--end",
            "2023-03",
            "--month",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Links(args) => {
                assert_eq!(args.dataset, "e5.oper.an.pl");
                assert_eq!(args.variables, vec!["128_130_t", "128_129_z"]);
                assert_eq!(args.start, YearMonth::new(2023, 2).unwrap());
                assert_eq!(args.end, YearMonth::new(2023, 3).unwrap());
                assert_eq!(args.months, vec![3]);
                assert_eq!(args.prefix, "era5_links");
                assert!(!args.print);
            }
            _ => panic!("expected links command"),
        }
    }

    #[test]
    fn should_default_links_selection() {
        let cli = Cli::try_parse_from(["era5-links", "links"]).unwrap();

        match cli.command {
            Commands::Links(args) => {
                assert_eq!(args.dataset, "e5.oper.an.sfc");
                assert!(args.variables.is_empty());
                assert_eq!(args.start, YearMonth::new(2023, 1).unwrap());
                assert!(args.output_dir.is_none());
            }
            _ => panic!("expected links command"),
        }
    }

    #[test]
    fn should_reject_month_13() {
        assert!(Cli::try_parse_from(["era5-links", "links", "--month", "13"]).is_err());
        assert!(Cli::try_parse_from(["era5-links", "links", "--start", "2023-13"]).is_err());
    }

    #[test]
    fn should_create_file_progress_bar() {
        let bar = create_progress_bar(4, "Downloading files...");
        bar.inc(3);

        assert_eq!(bar.length(), Some(4));
        assert_eq!(bar.position(), 3);
        assert_eq!(bar.message(), "Downloading files...");
    }

    #[test]
    fn should_create_spinner_with_owned_message() {
        let spinner = create_spinner(format!("Downloading {}", "a.nc"));

        assert_eq!(spinner.length(), None);
        assert_eq!(spinner.message(), "Downloading a.nc");
        spinner.finish_and_clear();
    }

    #[test]
    fn should_count_verbosity() {
        let cli = Cli::try_parse_from(["era5-links", "-vv", "datasets"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
