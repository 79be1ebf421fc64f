//! Daily and weekly readings.
//!
//! A reading pairs a person's card of the day with their card of the week,
//! adds guidance text built from both, and optionally a trend analysis over
//! the days before. Everything is recomputed from seeds on demand; nothing is
//! stored.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::ReadingConfig;
use crate::deck::{TarotCard, TarotDeck};
use crate::labels::{self, COSMIC_IDENTITY};
use crate::trends::{self, TrendAnalysis};

/// The person a reading is for.
///
/// Both fields are optional. An anonymous querent gets the same cards as
/// anyone else who is anonymous on that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Querent {
    /// Display name.
    pub name: Option<String>,
    /// Birthday, in whatever form the caller stores it.
    pub birthday: Option<String>,
}

impl Querent {
    /// A querent with no identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A querent known by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            birthday: None,
        }
    }

    /// Attach a birthday.
    pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    fn card<'a>(&self, deck: &'a TarotDeck, base: &str) -> &'a TarotCard {
        deck.tarot_card(base, self.name.as_deref(), self.birthday.as_deref())
    }
}

/// A person's card for `date`.
pub fn daily_card<'a>(deck: &'a TarotDeck, querent: &Querent, date: NaiveDate) -> &'a TarotCard {
    querent.card(deck, &labels::daily_label(date))
}

/// A person's card for the week beginning `week_start`.
pub fn weekly_card<'a>(
    deck: &'a TarotDeck,
    querent: &Querent,
    week_start: NaiveDate,
) -> &'a TarotCard {
    querent.card(deck, &labels::weekly_label(week_start))
}

/// The card everyone shares on `date`.
pub fn general_card(deck: &TarotDeck, date: NaiveDate) -> &TarotCard {
    deck.tarot_card(&labels::cosmic_label(date), Some(COSMIC_IDENTITY), None)
}

/// Guidance text drawn from a daily and a weekly card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    /// What today's card says.
    pub daily_message: String,
    /// What this week's card says.
    pub weekly_message: String,
    /// Short things to focus on.
    pub action_points: Vec<String>,
}

/// Build guidance from the day's and the week's card.
pub fn guidance(daily: &TarotCard, weekly: &TarotCard) -> Guidance {
    let lead = daily.keyword(0).unwrap_or(&daily.name);
    let focus = match daily.keyword(1) {
        Some(second) => format!("Focus on: {lead} and {second}"),
        None => format!("Focus on: {lead}"),
    };
    let theme = weekly.keyword(0).unwrap_or(&weekly.name);
    let insight = daily.keyword(2).unwrap_or(lead);

    Guidance {
        daily_message: format!(
            "Today, the universe presents \"{}\" - {}",
            daily.name, daily.information
        ),
        weekly_message: format!(
            "Your weekly energy flows through \"{}\" - {}",
            weekly.name, weekly.information
        ),
        action_points: vec![
            focus,
            format!("Weekly theme: {theme}"),
            format!("Key insight: {insight} is highlighted in your path"),
        ],
    }
}

/// A complete reading for one day.
#[derive(Debug, Clone, Serialize)]
pub struct Reading<'a> {
    /// The day the reading is for.
    pub date: NaiveDate,
    /// First day of the week containing `date`.
    pub week_start: NaiveDate,
    /// The querent's card of the day.
    pub daily: &'a TarotCard,
    /// The querent's card of the week.
    pub weekly: &'a TarotCard,
    /// The card everyone shares today.
    pub general: &'a TarotCard,
    /// Guidance built from the daily and weekly cards.
    pub guidance: Guidance,
    /// Patterns in the preceding days, when enabled.
    pub trends: Option<TrendAnalysis>,
}

impl<'a> Reading<'a> {
    /// Build the reading for the current day at the configured UTC offset.
    pub fn today(deck: &'a TarotDeck, querent: &Querent, config: &ReadingConfig) -> Self {
        Self::build(deck, querent, labels::today(config.utc_offset), config)
    }

    /// Build the reading for `querent` on `today`.
    pub fn build(
        deck: &'a TarotDeck,
        querent: &Querent,
        today: NaiveDate,
        config: &ReadingConfig,
    ) -> Self {
        let week_start = labels::week_start(today, config.week_start);
        let daily = daily_card(deck, querent, today);
        let weekly = weekly_card(deck, querent, week_start);
        let general = general_card(deck, today);
        let trends = config
            .include_trends
            .then(|| trends::analyze_recent(deck, querent, today, config.timeframe_days));

        debug!(
            %today,
            %week_start,
            daily = %daily,
            weekly = %weekly,
            "reading built"
        );

        Self {
            date: today,
            week_start,
            daily,
            weekly,
            general,
            guidance: guidance(daily, weekly),
            trends,
        }
    }
}

/// A card paired with the day it was drawn for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PastCard<'a> {
    /// The day.
    pub date: NaiveDate,
    /// The card for that day.
    pub card: &'a TarotCard,
}

/// General cards for the `days` days ending today, most recent first.
pub fn general_history(deck: &TarotDeck, today: NaiveDate, days: u32) -> Vec<PastCard<'_>> {
    labels::past_days(today, days, true)
        .into_iter()
        .map(|date| PastCard {
            date,
            card: general_card(deck, date),
        })
        .collect()
}

/// A person's daily cards for the `days` days before today, most recent
/// first.
pub fn personal_history<'a>(
    deck: &'a TarotDeck,
    querent: &Querent,
    today: NaiveDate,
    days: u32,
) -> Vec<PastCard<'a>> {
    labels::past_days(today, days, false)
        .into_iter()
        .map(|date| PastCard {
            date,
            card: daily_card(deck, querent, date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Weekday};

    use super::*;

    fn deck() -> TarotDeck {
        TarotDeck::standard().unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn card(name: &str, keywords: &[&str], information: &str) -> TarotCard {
        TarotCard {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            information: information.to_string(),
        }
    }

    #[test]
    fn querent_builders() {
        assert_eq!(Querent::anonymous(), Querent::default());
        let q = Querent::named("Alice").with_birthday("1990-05-01");
        assert_eq!(q.name.as_deref(), Some("Alice"));
        assert_eq!(q.birthday.as_deref(), Some("1990-05-01"));
    }

    #[test]
    fn daily_card_ignores_name_formatting() {
        let deck = deck();
        let day = ymd(2025, 4, 2);
        let a = daily_card(&deck, &Querent::named("Alice"), day);
        let b = daily_card(&deck, &Querent::named("  ALICE "), day);
        assert_eq!(a, b);
    }

    #[test]
    fn general_card_is_shared() {
        let deck = deck();
        let day = ymd(2025, 4, 2);
        assert_eq!(
            general_card(&deck, day),
            deck.tarot_card("cosmic-2025-04-02-92-energy", Some("cosmic-daily-energy"), None)
        );
    }

    #[test]
    fn weekly_card_is_stable_across_the_week() {
        let deck = deck();
        let querent = Querent::named("Alice");
        let config = ReadingConfig::default().with_trends(false);
        let monday = Reading::build(&deck, &querent, ymd(2025, 1, 13), &config);
        let saturday = Reading::build(&deck, &querent, ymd(2025, 1, 18), &config);
        assert_eq!(monday.week_start, ymd(2025, 1, 12));
        assert_eq!(monday.weekly, saturday.weekly);
    }

    #[test]
    fn week_start_follows_config() {
        let deck = deck();
        let config = ReadingConfig::default()
            .with_week_start(Weekday::Mon)
            .with_trends(false);
        let reading = Reading::build(&deck, &Querent::anonymous(), ymd(2025, 1, 12), &config);
        assert_eq!(reading.week_start, ymd(2025, 1, 6));
    }

    #[test]
    fn guidance_text() {
        let daily = card("The Star", &["Hope", "faith", "renewal"], "Healing follows.");
        let weekly = card("The Sun", &["Joy"], "Warmth returns.");
        let g = guidance(&daily, &weekly);
        assert_eq!(
            g.daily_message,
            "Today, the universe presents \"The Star\" - Healing follows."
        );
        assert_eq!(
            g.weekly_message,
            "Your weekly energy flows through \"The Sun\" - Warmth returns."
        );
        assert_eq!(
            g.action_points,
            [
                "Focus on: Hope and faith",
                "Weekly theme: Joy",
                "Key insight: renewal is highlighted in your path",
            ]
        );
    }

    #[test]
    fn guidance_without_keywords_uses_names() {
        let daily = card("Sun", &[], "");
        let weekly = card("Moon", &[], "");
        let g = guidance(&daily, &weekly);
        assert_eq!(
            g.action_points,
            [
                "Focus on: Sun",
                "Weekly theme: Moon",
                "Key insight: Sun is highlighted in your path",
            ]
        );
    }

    #[test]
    fn reading_includes_trends_when_enabled() {
        let deck = deck();
        let config = ReadingConfig::default().with_timeframe(14);
        let reading = Reading::build(&deck, &Querent::named("Bob"), ymd(2025, 6, 1), &config);
        let trends = reading.trends.unwrap();
        assert_eq!(trends.timeframe_days, 14);
        assert!(!trends.dominant_themes.is_empty());
    }

    #[test]
    fn today_follows_the_configured_offset() {
        let deck = deck();
        let querent = Querent::named("Alice");
        let base = ReadingConfig::default().with_trends(false);
        let east = base
            .clone()
            .with_utc_offset(FixedOffset::east_opt(14 * 3600).unwrap());
        let west = base.with_utc_offset(FixedOffset::west_opt(12 * 3600).unwrap());
        let ahead = Reading::today(&deck, &querent, &east);
        let behind = Reading::today(&deck, &querent, &west);
        let gap = (ahead.date - behind.date).num_days();
        assert!((1..=2).contains(&gap), "gap: {gap}");
        assert_eq!(ahead.daily, daily_card(&deck, &querent, ahead.date));
    }

    #[test]
    fn reading_near_the_earliest_date() {
        let deck = deck();
        let earliest = NaiveDate::MIN + chrono::Duration::days(1);
        let config = ReadingConfig::default().with_timeframe(30);
        let reading = Reading::build(&deck, &Querent::named("Alice"), earliest, &config);
        assert!(reading.week_start <= earliest);
        assert_eq!(reading.trends.unwrap().timeframe_days, 30);
    }

    #[test]
    fn histories() {
        let deck = deck();
        let today = ymd(2025, 3, 10);
        let general = general_history(&deck, today, 7);
        assert_eq!(general.len(), 7);
        assert_eq!(general[0].date, today);
        assert_eq!(general[0].card, general_card(&deck, today));

        let querent = Querent::named("Alice");
        let personal = personal_history(&deck, &querent, today, 7);
        assert_eq!(personal.len(), 7);
        assert_eq!(personal[0].date, ymd(2025, 3, 9));
        assert_eq!(personal[6].date, ymd(2025, 3, 3));
        assert_eq!(personal[0].card, daily_card(&deck, &querent, ymd(2025, 3, 9)));
    }

    #[test]
    fn reading_serializes() {
        let deck = deck();
        let config = ReadingConfig::default().with_timeframe(7);
        let reading = Reading::build(&deck, &Querent::anonymous(), ymd(2025, 6, 1), &config);
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["date"], "2025-06-01");
        assert_eq!(json["daily"]["name"], reading.daily.name.as_str());
        assert!(json["trends"]["dominant_themes"].is_array());
    }
}
