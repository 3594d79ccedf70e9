use anyhow::{Context, Result};
use datehash::config::Config;
use datehash::constants::USAGE;
use datehash::grid;
use datehash::utils::datetime;
use datehash::{logger, DateHashUtil};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--init-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    if config.logging.enabled {
        logger::init(&config.logging)?;
    }

    let util = DateHashUtil::from_config(&config);
    let today = util.today();

    let (year, month) = match args.as_slice() {
        [] => (today.year, today.month),
        [year, month] => (
            year.parse().with_context(|| format!("Invalid year '{}'", year))?,
            month.parse().with_context(|| format!("Invalid month '{}'", month))?,
        ),
        _ => anyhow::bail!(USAGE),
    };
    log::info!("Rendering {}-{}", year, month);

    println!("{}", util.format_title(year, month, &config.display.title_format)?);

    println!("{}", grid::weekday_labels(util.week_start()).join(" "));

    for week in util.month_grid(year, month)? {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) if *day == today => format!("{:>2}*", day.date),
                Some(day) => format!("{:>2} ", day.date),
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", cells.concat().trim_end());
    }

    println!("\nToday: {}", datetime::format_date(today, &config.display.date_format)?);
    Ok(())
}
