//! Named matchers for the elements of a covers.com odds page.

use std::str::FromStr;

use ::scraper::{CaseSensitivity, ElementRef};

use crate::model::MarketType;

/// Classes every "open odds" games table carries (the fixed left column).
const GAME_TABLE_CLASSES: [&str; 5] = [
    "table",
    "__OpenOddsTable",
    "covers-CoversMatchups-Table",
    "covers-CoversOdds-gamelineTable",
    "covers-CoversComponents-fixedColumn",
];

/// Classes of the scrolling sportsbook grid beside the games table.
const ODDS_GRID_CLASSES: [&str; 5] = [
    "table",
    "__OddsTable",
    "covers-CoversMatchups-Table",
    "covers-CoversOdds-gamelineTable",
    "covers-CoversComponents-fixedHeaderTable",
];

pub(crate) fn is_tag(el: &ElementRef, name: &str) -> bool {
    el.value().name() == name
}

pub(crate) fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().has_class(class, CaseSensitivity::CaseSensitive)
}

pub(crate) fn has_all_classes(el: &ElementRef, classes: &[&str]) -> bool {
    classes.iter().all(|c| has_class(el, c))
}

fn id_contains(el: &ElementRef, needle: &str) -> bool {
    el.value().attr("id").is_some_and(|id| id.contains(needle))
}

/// Non-empty value of `name` on `el`.
pub(crate) fn data_attr<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).filter(|v| !v.is_empty())
}

/// The games table for the moneyline market.
pub(crate) fn is_moneyline_table(el: &ElementRef) -> bool {
    is_tag(el, "table")
        && id_contains(el, "moneyline")
        && has_all_classes(el, &GAME_TABLE_CLASSES)
}

/// The games table for the three-way (win/draw/win) market.
pub(crate) fn is_threeway_table(el: &ElementRef) -> bool {
    is_tag(el, "table")
        && id_contains(el, "threeway-game")
        && has_all_classes(el, &GAME_TABLE_CLASSES)
}

/// The sportsbook grid holding the odds cells.
pub(crate) fn is_odds_table(el: &ElementRef) -> bool {
    is_tag(el, "table") && has_all_classes(el, &ODDS_GRID_CLASSES)
}

pub(crate) fn is_game_row(el: &ElementRef) -> bool {
    is_tag(el, "tr") && has_class(el, "oddsGameRow")
}

pub(crate) fn is_completed_marker(el: &ElementRef) -> bool {
    is_tag(el, "div") && has_class(el, "__isCompleted")
}

/// A sportsbook odds cell for a moneyline or three-way market.
///
/// Cells without a game id or book name never match.
pub(crate) fn is_odds_cell(el: &ElementRef) -> bool {
    is_tag(el, "td")
        && has_class(el, "liveOddsCell")
        && cell_key(el).is_some()
        && market_type(el).is_some()
}

/// The `(data-game, data-book)` pair tying an odds cell to a game and sportsbook.
pub(crate) fn cell_key<'a>(el: &ElementRef<'a>) -> Option<(&'a str, &'a str)> {
    Some((data_attr(el, "data-game")?, data_attr(el, "data-book")?))
}

pub(crate) fn market_type(el: &ElementRef) -> Option<MarketType> {
    el.value()
        .attr("data-type")
        .and_then(|t| MarketType::from_str(t).ok())
}
