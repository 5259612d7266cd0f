mod cli;
mod logging;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::info;

use yearcal::config::Config;
use yearcal::generate::write_calendar;
use yearcal::locale::NorwayCalendar;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("failed to load configuration")?;

    let year = cli
        .year
        .or(config.year)
        .unwrap_or_else(|| Local::now().year());
    let style = config.layout.to_style()?;
    info!(year, "generating calendar");

    let mut locale = NorwayCalendar::with_default_rules(config.holidays.include_sundays);
    for rule in config.holidays.extra_rules {
        locale.add_holiday_rule(rule);
    }
    locale
        .add_env_rules()
        .context("failed to read extra holiday rules")?
        .populate_cal(year, year)
        .with_context(|| format!("failed to compute holidays for {year}"))?;
    let holidays = locale.get_cal();

    if cli.list_holidays {
        for date in holidays.holidays_in_year(year)? {
            println!("{date}");
        }
        return Ok(());
    }

    let dir = cli
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = write_calendar(year, &style, &holidays, &dir)
        .with_context(|| format!("failed to generate calendar for {year}"))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("Calendar for {year} saved as '{file_name}'");
    Ok(())
}
