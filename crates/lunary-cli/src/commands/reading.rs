use chrono::{NaiveDate, Weekday};
use colored::Colorize;
use lunary_tarot::{Querent, Reading, ReadingConfig};

use super::Context;

pub fn run(
    ctx: &Context,
    querent: Querent,
    date: Option<NaiveDate>,
    days: u32,
    week_start: Weekday,
    include_trends: bool,
    json: bool,
) -> Result<(), String> {
    let config = ReadingConfig::default()
        .with_timeframe(days)
        .with_week_start(week_start)
        .with_utc_offset(ctx.offset)
        .with_trends(include_trends);
    let reading = match date {
        Some(date) => Reading::build(&ctx.deck, &querent, date, &config),
        None => Reading::today(&ctx.deck, &querent, &config),
    };
    let today = reading.date;

    if json {
        return super::print_json(&reading);
    }

    let who = querent.name.as_deref().unwrap_or("you");
    println!(
        "  {} {}",
        format!("Reading for {who}").bold().underline(),
        today.format("%A, %B %-d, %Y").to_string().dimmed()
    );
    println!();

    println!("  {}", "Card of the day".bold());
    super::print_card(reading.daily);
    println!();

    println!(
        "  {} {}",
        "Card of the week".bold(),
        format!("(from {})", reading.week_start).dimmed()
    );
    super::print_card(reading.weekly);
    println!();

    println!("  {}", "Guidance".bold());
    println!("  {}", reading.guidance.daily_message);
    println!("  {}", reading.guidance.weekly_message);
    for point in &reading.guidance.action_points {
        println!("    - {point}");
    }
    println!();

    println!("  {} {}", "Shared energy today:".dimmed(), reading.general.name);

    if let Some(trends) = &reading.trends {
        println!();
        super::trends::print_analysis(trends);
    }

    Ok(())
}
