use ::scraper::ElementRef;
use tracing::{debug, warn};

use crate::error::{OddsError, Result};
use crate::model::{Game, GameRows};
use crate::scraper::predicates::{
    data_attr, has_class, is_completed_marker, is_game_row, is_moneyline_table, is_tag,
    is_threeway_table,
};
use crate::scraper::{element_text, find_all, find_first, select_first, Html};

/// The games table of a league page: moneyline if present, otherwise three-way.
pub(crate) fn find_games_table(document: &Html) -> Result<ElementRef<'_>> {
    let root = document.root_element();
    find_first(root, is_moneyline_table)
        .or_else(|| find_first(root, is_threeway_table))
        .ok_or(OddsError::TableNotFound)
}

/// Extract the live and upcoming games of a league page, in row order.
///
/// A page without a games table has no games. Rows that cannot be read are
/// skipped with a warning.
pub(crate) fn parse_games(document: &Html) -> Result<GameRows> {
    let table = match find_games_table(document) {
        Ok(table) => table,
        Err(OddsError::TableNotFound) => {
            debug!("no moneyline or three-way table, league has no games");
            return Ok(GameRows::new());
        }
        Err(e) => return Err(e),
    };

    let mut games = GameRows::new();
    for row in find_all(table, is_game_row) {
        if is_completed(row) {
            continue;
        }
        match parse_game_row(row) {
            Ok(game) => upsert_game(&mut games, game),
            Err(e) => warn!(error = %e, "skipping unparsable game row"),
        }
    }

    debug!(count = games.len(), "parsed game rows");
    Ok(games)
}

fn upsert_game(games: &mut GameRows, game: Game) {
    match games.iter_mut().find(|g| g.id == game.id) {
        Some(existing) => *existing = game,
        None => games.push(game),
    }
}

/// A row without the completion marker is live or upcoming.
fn is_completed(row: ElementRef) -> bool {
    find_first(row, is_completed_marker).is_some()
}

fn parse_game_row(row: ElementRef) -> Result<Game> {
    let teams = find_first(row, |el| is_tag(el, "div") && has_class(el, "__teams"))
        .ok_or(OddsError::ElementNotFound { context: "teams" })?;

    let home = select_first(teams, "div.__home a")?
        .map(|a| element_text(&a))
        .ok_or(OddsError::ElementNotFound {
            context: "home team",
        })?;
    let away = select_first(teams, "div.__away a")?
        .map(|a| element_text(&a))
        .ok_or(OddsError::ElementNotFound {
            context: "away team",
        })?;

    let id = find_first(row, |el| is_tag(el, "button"))
        .and_then(|button| data_attr(&button, "data-game"))
        .ok_or(OddsError::ElementNotFound { context: "game id" })?
        .to_string();

    Ok(Game { id, home, away })
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) const TABLE_CLASSES: &str = "table __OpenOddsTable covers-CoversMatchups-Table covers-CoversOdds-gamelineTable covers-CoversComponents-fixedColumn";

    pub(crate) fn game_row(id: &str, home: &str, away: &str, completed: bool) -> String {
        let marker = if completed {
            r#"<div class="__isCompleted">Final</div>"#
        } else {
            ""
        };
        format!(
            r#"<tr class="oddsGameRow"><td>{marker}<div class="__teams">
                <div class="__away"><a href="/away">{away}</a></div>
                <div class="__home"><a href="/home">
                    {home}
                </a></div>
            </div><button class="__matchupBtn" data-game="{id}">Matchup</button></td></tr>"#
        )
    }

    pub(crate) fn games_table(id: &str, rows: &[String]) -> String {
        format!(
            r#"<table id="{id}" class="{TABLE_CLASSES}"><tbody>{}</tbody></table>"#,
            rows.concat()
        )
    }
}
