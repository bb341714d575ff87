use anyhow::{Error, Result};
use clap::Parser;
use era5_links::{
    cli::{command, command::links::LinksOutput, Cli, Commands},
    logging,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Datasets {} => println!("{}", command::datasets()),
        Commands::Variables { dataset } => match command::variables(dataset) {
            Ok(listing) => println!("{}", listing),
            Err(e) => eprintln!("Error: {:#}", e),
        },
        Commands::Links(args) => match command::links(args) {
            Ok(LinksOutput::Text(text)) => println!("{}", text),
            Ok(LinksOutput::File(filename, count)) => {
                println!("{} links saved to `{}`", count, filename)
            }
            Err(e) => eprintln!("Error: {:#}", e),
        },
        Commands::Fetch { link_file, dir } => match command::fetch(link_file, dir).await {
            Ok(message) => println!("{}", message),
            Err(e) => eprintln!("Error: {:#}", e),
        },
    }

    Ok(())
}
