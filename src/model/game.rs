use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Odds;

/// A game row from a league's odds table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    /// Site-assigned identifier, shared by the row and its odds cells.
    pub id: String,
    pub home: String,
    pub away: String,
}

impl Game {
    /// The matchup label, `"{home} vs. {away}"`.
    pub fn label(&self) -> String {
        format!("{} vs. {}", self.home, self.away)
    }
}

/// Games in row order. A later row with an already seen identifier replaces
/// the earlier game in place.
pub type GameRows = Vec<Game>;

/// Sportsbook name to the odds it quotes for a game.
pub type BookOdds = BTreeMap<String, Odds>;

/// A game joined with the odds every sportsbook quotes for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOdds {
    pub id: String,
    pub label: String,
    pub quotes: BookOdds,
}
