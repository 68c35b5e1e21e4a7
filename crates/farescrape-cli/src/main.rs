//! farescrape CLI entry point: argument parsing, logging, command dispatch.

use clap::Parser;
use farescrape_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Scrape(scrape_args) => commands::scrape_execute(scrape_args).await,
        cli::Command::Config(config_args) => commands::config_execute(config_args),
    };

    result.map_err(error::cli_error_to_miette)
}
