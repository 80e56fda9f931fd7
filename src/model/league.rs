use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::GameOdds;

/// A league listed on the odds hub page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub name: String,
    /// Site-relative path to the league's odds page, e.g. `/sport/basketball/nba/odds`.
    pub link: String,
}

/// League name to league, as listed on the hub page. Later duplicates replace earlier ones.
pub type LeagueDirectory = BTreeMap<String, League>;

/// Every live game of one league with the odds offered for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueOdds {
    pub league: String,
    pub games: Vec<GameOdds>,
}

impl LeagueOdds {
    /// Number of (game, sportsbook) quotes in this league.
    pub fn quote_count(&self) -> usize {
        self.games.iter().map(|g| g.quotes.len()).sum()
    }
}
