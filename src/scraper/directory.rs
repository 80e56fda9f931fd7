use ::scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::{OddsError, Result};
use crate::model::{League, LeagueDirectory};
use crate::scraper::{element_text, Html};

/// Extract every league listed on the odds hub page.
///
/// A missing container or a heading without its name or link fails the whole
/// directory. A container with no headings yields an empty directory.
pub(crate) fn parse_league_directory(document: &Html) -> Result<LeagueDirectory> {
    let container_selector = Selector::parse("div.__oddsHubCont")?;
    let container = document
        .select(&container_selector)
        .next()
        .ok_or(OddsError::DirectoryExtraction {
            context: "odds hub container",
        })?;

    let heading_selector = Selector::parse("h2.__leagueName")?;
    let mut directory = LeagueDirectory::new();
    for heading in container.select(&heading_selector) {
        let league = parse_league(&heading)?;
        directory.insert(league.name.clone(), league);
    }

    debug!(count = directory.len(), "parsed league directory");
    Ok(directory)
}

fn parse_league(heading: &ElementRef) -> Result<League> {
    let name_selector = Selector::parse("span")?;
    let name = heading
        .select(&name_selector)
        .next()
        .map(|span| element_text(&span))
        .ok_or(OddsError::DirectoryExtraction {
            context: "league name",
        })?;

    let link_selector = Selector::parse("a.__cta")?;
    let link = heading
        .select(&link_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or(OddsError::DirectoryExtraction {
            context: "league link",
        })?
        .trim()
        .to_string();

    Ok(League { name, link })
}
