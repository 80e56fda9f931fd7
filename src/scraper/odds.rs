use std::collections::BTreeMap;

use ::scraper::ElementRef;
use tracing::debug;

use crate::model::{BookOdds, Odds};
use crate::scraper::predicates::{cell_key, has_class, is_odds_cell, is_odds_table, is_tag};
use crate::scraper::{element_text, find_all, find_first, Html};

/// Every moneyline/three-way odds cell of a page, grouped by game id.
///
/// Odds cells live in a grid rendered apart from the game rows and are tied
/// to a game only by their `data-game` attribute, so the page is scanned once
/// and games are looked up by id afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OddsIndex {
    by_game: BTreeMap<String, BookOdds>,
}

impl OddsIndex {
    pub(crate) fn build(document: &Html) -> Self {
        let root = document.root_element();
        let grids = find_all(root, is_odds_table).count();

        let mut by_game: BTreeMap<String, BookOdds> = BTreeMap::new();
        let mut cells = 0usize;
        let keyed = find_all(root, is_odds_cell)
            .filter_map(|cell| Some((cell_key(&cell)?, cell)));
        for ((game, book), cell) in keyed {
            by_game
                .entry(game.to_string())
                .or_default()
                .insert(book.to_string(), parse_odds_cell(cell));
            cells += 1;
        }

        debug!(grids, cells, games = by_game.len(), "indexed odds cells");
        Self { by_game }
    }

    /// Odds per sportsbook for `game_id`; empty when no cell carries that id.
    pub(crate) fn quotes_for(&self, game_id: &str) -> BookOdds {
        self.by_game.get(game_id).cloned().unwrap_or_default()
    }

    pub(crate) fn game_count(&self) -> usize {
        self.by_game.len()
    }
}

/// Read the away/home (and draw, if offered) American odds of one cell.
fn parse_odds_cell(cell: ElementRef) -> Odds {
    let away = side_odds(cell, "__awayOdds").unwrap_or_default();
    let home = side_odds(cell, "__homeOdds").unwrap_or_default();
    let draw = side_odds(cell, "__drawOdds");
    Odds { away, home, draw }
}

/// `None` when the side's sub-cell is missing, empty text when it has no American value.
fn side_odds(cell: ElementRef, side_class: &str) -> Option<String> {
    let side = find_first(cell, |el| is_tag(el, "div") && has_class(el, side_class))?;
    let american = find_first(side, |el| is_tag(el, "div") && has_class(el, "__american"))
        .map(|el| element_text(&el))
        .unwrap_or_default();
    Some(american)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn page(cells: &[String]) -> Html {
        Html::parse_document(&format!(
            "<html><body>{}</body></html>",
            odds_grid(cells)
        ))
    }

    #[test]
    fn test_two_way_odds() {
        let document = page(&[
            odds_cell("5", "BookA", "moneyline", Some("-110"), Some("+120"), None),
            odds_cell("5", "BookB", "moneyline", Some("-105"), Some("+115"), None),
        ]);
        let index = OddsIndex::build(&document);
        let quotes = index.quotes_for("5");

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes["BookA"], Odds::two_way("-110", "+120"));
        assert_eq!(quotes["BookB"].to_vec(), vec!["-105", "+115"]);
    }

    #[test]
    fn test_draw_odds_make_three() {
        let document = page(&[odds_cell(
            "12",
            "BookA",
            "threeway",
            Some("+240"),
            Some("+105"),
            Some("+230"),
        )]);
        let quotes = OddsIndex::build(&document).quotes_for("12");

        assert_eq!(quotes["BookA"].arity(), 3);
        assert_eq!(quotes["BookA"].to_vec(), vec!["+240", "+105", "+230"]);
    }

    #[test]
    fn test_missing_side_is_empty_string() {
        let document = page(&[
            odds_cell("5", "BookA", "moneyline", None, Some("+120"), None),
            odds_cell("5", "BookB", "threeway", Some("+200"), None, Some("+210")),
        ]);
        let quotes = OddsIndex::build(&document).quotes_for("5");

        assert_eq!(quotes["BookA"].to_vec(), vec!["", "+120"]);
        assert_eq!(quotes["BookB"].to_vec(), vec!["+200", "", "+210"]);
    }

    #[test]
    fn test_cells_grouped_by_game_and_filtered_by_market() {
        let document = page(&[
            odds_cell("5", "BookA", "moneyline", Some("-110"), Some("+120"), None),
            odds_cell("6", "BookA", "moneyline", Some("+150"), Some("-170"), None),
            odds_cell("5", "BookC", "spread", Some("-3.5"), Some("+3.5"), None),
            r#"<td class="liveOddsCell" data-game="5" data-type="moneyline"></td>"#.to_string(),
        ]);
        let index = OddsIndex::build(&document);

        assert_eq!(index.game_count(), 2);
        assert_eq!(
            index.quotes_for("5").keys().collect::<Vec<_>>(),
            vec!["BookA"]
        );
        assert_eq!(index.quotes_for("6")["BookA"], Odds::two_way("+150", "-170"));
        assert!(index.quotes_for("7").is_empty());
    }

    #[test]
    fn test_cells_found_outside_the_grid() {
        let document = Html::parse_document(&format!(
            "<table><tr>{}</tr></table>",
            odds_cell("5", "BookA", "moneyline", Some("-110"), Some("+120"), None)
        ));
        assert_eq!(OddsIndex::build(&document).quotes_for("5").len(), 1);
    }

    #[test]
    fn test_same_book_twice_last_wins() {
        let document = page(&[
            odds_cell("5", "BookA", "moneyline", Some("-110"), Some("+120"), None),
            odds_cell("5", "BookA", "moneyline", Some("-115"), Some("+125"), None),
        ]);
        let quotes = OddsIndex::build(&document).quotes_for("5");
        assert_eq!(quotes["BookA"], Odds::two_way("-115", "+125"));
    }
}
