use itertools::Itertools;

use crate::model::{FlatRecord, LeagueOdds};

/// One record per (league, game, sportsbook), in iteration order.
pub fn flatten(leagues: &[LeagueOdds]) -> Vec<FlatRecord> {
    leagues
        .iter()
        .flat_map(|league| {
            league.games.iter().flat_map(move |game| {
                game.quotes.iter().map(move |(site, odds)| FlatRecord {
                    league: league.league.clone(),
                    game: game.label.clone(),
                    site: site.clone(),
                    odds: odds.clone(),
                })
            })
        })
        .collect_vec()
}
