use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use lunary_tarot::config::MAX_TIMEFRAME_DAYS;
use lunary_tarot::trends::analyze_recent;
use lunary_tarot::{Querent, TrendAnalysis};

use super::Context;

pub fn run(
    ctx: &Context,
    querent: Querent,
    date: Option<NaiveDate>,
    days: u32,
    json: bool,
) -> Result<(), String> {
    let days = days.clamp(1, MAX_TIMEFRAME_DAYS);
    let today = ctx.date_or_today(date);
    let analysis = analyze_recent(&ctx.deck, &querent, today, days);

    if json {
        return super::print_json(&analysis);
    }

    print_analysis(&analysis);
    Ok(())
}

pub fn print_analysis(analysis: &TrendAnalysis) {
    println!(
        "  {} {}",
        "Trends".bold().underline(),
        format!("(last {} days)", analysis.timeframe_days).dimmed()
    );
    println!();

    if !analysis.dominant_themes.is_empty() {
        println!("  themes: {}", analysis.dominant_themes.join(", "));
        println!();
    }

    if !analysis.frequent_cards.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Card", "Count", "Reading"]);
        for card in &analysis.frequent_cards {
            table.add_row(vec![
                card.name.clone(),
                card.count.to_string(),
                card.reading.clone(),
            ]);
        }
        println!("{table}");
        println!();
    }

    for suit in &analysis.suit_patterns {
        println!(
            "  {} {}",
            suit.family.to_string().bold(),
            format!("x{}", suit.count).dimmed()
        );
        println!("  {}", suit.reading);
    }
    for number in &analysis.number_patterns {
        println!(
            "  {} {}",
            number.rank.to_string().bold(),
            number.cards.join(", ").dimmed()
        );
        println!("  {}", number.reading);
    }
    for arcana in &analysis.arcana_patterns {
        println!("  {}", arcana.arcana.to_string().bold());
        println!("  {}", arcana.reading);
    }

    let quiet = analysis.frequent_cards.is_empty()
        && analysis.suit_patterns.is_empty()
        && analysis.number_patterns.is_empty()
        && analysis.arcana_patterns.is_empty();
    if quiet {
        println!("  No strong patterns yet.");
    }
}
