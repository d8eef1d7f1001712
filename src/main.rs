use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mktcal::configuration::Configuration;
use mktcal::holidays_for_year;
use mktcal::manager::manager::IManager;

/// Print the US stock market holidays of a year.
#[derive(Parser)]
#[command(name = "mktcal", version, allow_negative_numbers = true)]
struct Cli {
    year: i32,

    /// JSON configuration with a `holiday_calendar` array
    #[arg(long, requires = "calendar")]
    config: Option<PathBuf>,

    /// Calendar name to use from the configuration
    #[arg(long, requires = "config")]
    calendar: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (title, mut holidays): (String, Vec<_>) = match (cli.config, cli.calendar) {
        (Some(config_path), Some(calendar_name)) => {
            let config = Configuration::new();
            config
                .from_reader(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            let calendar = config.holiday_calendar_manager().get(&calendar_name)?;
            let closures = calendar.get_recurring_holiday_set(cli.year)?.into_iter().collect();
            (format!("{} {} Holidays", cli.year, calendar_name), closures)
        },
        _ => (format!("{} US Market Holidays", cli.year), holidays_for_year(cli.year)?.into_iter().collect())
    };

    holidays.sort();
    println!("{}:", title);
    for holiday in holidays {
        println!("  {} ({})", holiday, holiday.format("%A"));
    }
    Ok(())
}
