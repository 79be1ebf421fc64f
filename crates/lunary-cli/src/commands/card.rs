use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, name: &str) -> Result<(), String> {
    let card = ctx.deck.find(name).map_err(|e| e.to_string())?;

    super::print_card(card);
    println!();
    println!("  arcana: {}", card.arcana());
    println!("  suit:   {}", card.family());
    if let Some(rank) = card.rank() {
        println!("  number: {} ({})", rank, rank.meaning().dimmed());
    }
    if let Some(index) = ctx.deck.catalog().index_of(&card.name) {
        println!("  index:  {index}");
    }

    Ok(())
}
