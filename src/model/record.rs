use serde::Serialize;

use crate::model::Odds;

/// One row of the snapshot: a sportsbook's odds for a game in a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRecord {
    #[serde(rename = "League")]
    pub league: String,
    #[serde(rename = "Game")]
    pub game: String,
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Odds")]
    pub odds: Odds,
}
