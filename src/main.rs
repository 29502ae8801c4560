use anyhow::{Context, Result};
use datekit::clock::{Clock, FixedClock, SystemClock};
use datekit::config::Config;
use datekit::constants::ERROR_MISSING_AT_VALUE;
use datekit::utils::datetime;
use datekit::{logger, DayPart, RelativeDateFormatter, Weekday};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let mut target = None;
    let mut at = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--init-config" => {
                let path = Config::get_default_config_path()?;
                return Config::generate_default_config(&path);
            }
            "--at" => match args.next() {
                Some(value) => at = Some(value),
                None => {
                    eprintln!("{}", ERROR_MISSING_AT_VALUE);
                    std::process::exit(2);
                }
            },
            _ => target = Some(arg),
        }
    }

    let config = Config::load()?;
    if let Some(path) = logger::init(&config.logging)? {
        eprintln!("📝 Logging to {}", path.display());
    }

    match at {
        Some(at) => {
            let now = datetime::parse_moment(&at).with_context(|| format!("Failed to parse --at '{}'", at))?;
            run(&config, &FixedClock::new(now), target.as_deref())
        }
        None => run(&config, &SystemClock, target.as_deref()),
    }
}

fn run(config: &Config, clock: &impl Clock, target: Option<&str>) -> Result<()> {
    let now = clock.now();

    let Some(target) = target else {
        let part = DayPart::classify_now(clock);
        println!("{} {}", part.emoji(), part.greeting());
        println!("Today is {}, {}", Weekday::from_moment(&now), datetime::longhand(&now));
        return Ok(());
    };

    let moment = datetime::parse_moment(target).with_context(|| format!("Failed to parse date '{}'", target))?;
    let formatter = RelativeDateFormatter::from_config(&config.display)?;
    log::debug!("Formatting {} relative to {}", moment, now);

    println!("{}", formatter.relative_shorthand(&moment, &now));
    println!(
        "{} at {}",
        config.display.format_long_date(&moment)?,
        config.display.format_time(&moment)?
    );
    println!("{}", datetime::time_ago_since(&moment, &now));
    Ok(())
}
