use chrono::NaiveDate;
use comfy_table::{ContentArrangement, Table};
use lunary_tarot::config::MAX_TIMEFRAME_DAYS;
use lunary_tarot::reading::{general_history, personal_history};

use super::Context;

pub fn run(
    ctx: &Context,
    name: Option<String>,
    birthday: Option<String>,
    date: Option<NaiveDate>,
    days: u32,
) -> Result<(), String> {
    let days = days.clamp(1, MAX_TIMEFRAME_DAYS);
    let today = ctx.date_or_today(date);
    let history = match name {
        Some(name) => {
            let querent = super::querent(Some(name), birthday);
            personal_history(&ctx.deck, &querent, today, days)
        }
        None => general_history(&ctx.deck, today, days),
    };

    if history.is_empty() {
        println!("  No days to show.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Day", "Card", "Keywords"]);

    for past in &history {
        let keywords = past
            .card
            .keywords
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            past.date.to_string(),
            past.date.format("%a").to_string(),
            past.card.name.clone(),
            keywords,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} days", history.len());

    Ok(())
}
