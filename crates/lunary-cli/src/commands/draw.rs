use colored::Colorize;
use lunary_seed::{SeedContext, pick_from_slice};

use super::Context;

pub fn run(
    ctx: &Context,
    base: Option<&str>,
    name: Option<&str>,
    birthday: Option<&str>,
    pool: &[String],
    json: bool,
) -> Result<(), String> {
    let base = match base {
        Some(base) => base.to_string(),
        None => ctx.date_or_today(None).to_string(),
    };
    let seed = SeedContext::from_parts(&base, name, birthday);

    if !pool.is_empty() {
        return draw_from_pool(&seed.canonical(), pool, json);
    }

    let selection = ctx.deck.draw(&seed);

    if json {
        return super::print_json(&selection);
    }

    super::print_card(selection.item);
    println!();
    println!("  {}  {}", "seed: ".dimmed(), selection.seed);
    println!(
        "  {}  {} of {}",
        "index:".dimmed(),
        selection.index,
        ctx.deck.len()
    );

    Ok(())
}

/// Pick one of the `--from` items instead of a card.
fn draw_from_pool(seed: &str, pool: &[String], json: bool) -> Result<(), String> {
    let item = pick_from_slice(pool, seed).ok_or("nothing to draw from")?;

    if json {
        return super::print_json(&serde_json::json!({ "seed": seed, "item": item }));
    }

    println!("  {}", item.bold());
    println!();
    println!("  {}  {}", "seed: ".dimmed(), seed);
    Ok(())
}
