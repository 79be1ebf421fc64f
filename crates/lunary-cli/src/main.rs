//! CLI frontend for Lunary's seeded tarot cards.

mod commands;

use std::path::PathBuf;
use std::process;

use chrono::{FixedOffset, NaiveDate, Offset, Utc, Weekday};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "lunary",
    about = "Lunary - deterministic daily tarot cards",
    version,
    propagate_version = true
)]
struct Cli {
    /// UTC offset used to decide what "today" is (e.g. +02:00, -05:30, Z)
    #[arg(long, global = true, default_value = "Z", value_parser = parse_offset)]
    offset: FixedOffset,

    /// Load the deck from a JSON file instead of the bundled one
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the card for a seed base (a date, a timestamp, or any label)
    Draw {
        /// Base seed (default: today's date)
        base: Option<String>,

        /// Personalize with a name
        #[arg(short, long)]
        name: Option<String>,

        /// Personalize further with a birthday
        #[arg(short, long)]
        birthday: Option<String>,

        /// Draw from these items instead of the deck (repeatable)
        #[arg(long = "from", value_name = "ITEM")]
        pool: Vec<String>,

        /// Print the selection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the daily and weekly cards with guidance and trends
    Reading {
        /// Your name
        #[arg(short, long)]
        name: Option<String>,

        /// Your birthday
        #[arg(short, long)]
        birthday: Option<String>,

        /// Day of the reading (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Days of history analyzed for trends
        #[arg(long, default_value = "30")]
        days: u32,

        /// First day of the week (e.g. sun, mon)
        #[arg(long, default_value = "sun")]
        week_start: Weekday,

        /// Skip the trend analysis
        #[arg(long)]
        no_trends: bool,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the cards of the previous days
    History {
        /// Your name (default: the shared general card)
        #[arg(short, long)]
        name: Option<String>,

        /// Your birthday
        #[arg(short, long)]
        birthday: Option<String>,

        /// Day to count back from (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of days
        #[arg(long, default_value = "7")]
        days: u32,
    },

    /// Analyze patterns in your recent daily cards
    Trends {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your birthday
        #[arg(short, long)]
        birthday: Option<String>,

        /// Day to count back from (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Days of history to analyze
        #[arg(long, default_value = "30")]
        days: u32,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a card by name
    Card {
        /// Card name (case-insensitive)
        name: String,
    },
}

/// Parse `+HH:MM`, `-HH:MM`, `+HH`, `Z` or `UTC` into a fixed offset.
fn parse_offset(input: &str) -> Result<FixedOffset, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("z") || input.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let invalid = || format!("invalid UTC offset: \"{input}\" (expected e.g. +02:00)");
    let (sign, rest) = if let Some(rest) = input.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = input.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LUNARY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &Context, command: Commands) -> Result<(), String> {
    match command {
        Commands::Draw {
            base,
            name,
            birthday,
            pool,
            json,
        } => commands::draw::run(
            ctx,
            base.as_deref(),
            name.as_deref(),
            birthday.as_deref(),
            &pool,
            json,
        ),
        Commands::Reading {
            name,
            birthday,
            date,
            days,
            week_start,
            no_trends,
            json,
        } => commands::reading::run(
            ctx,
            commands::querent(name, birthday),
            date,
            days,
            week_start,
            !no_trends,
            json,
        ),
        Commands::History {
            name,
            birthday,
            date,
            days,
        } => commands::history::run(ctx, name, birthday, date, days),
        Commands::Trends {
            name,
            birthday,
            date,
            days,
            json,
        } => commands::trends::run(
            ctx,
            commands::querent(Some(name), birthday),
            date,
            days,
            json,
        ),
        Commands::Card { name } => commands::card::run(ctx, &name),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = Context::load(cli.deck.as_deref(), cli.offset)
        .and_then(|ctx| run(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("utc").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("+02:00").unwrap().local_minus_utc(), 7200);
        assert_eq!(parse_offset("-05:30").unwrap().local_minus_utc(), -19800);
        assert_eq!(parse_offset("+9").unwrap().local_minus_utc(), 32400);
        assert!(parse_offset("02:00").is_err());
        assert!(parse_offset("+02:75").is_err());
        assert!(parse_offset("+30:00").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
