use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::flatten::flatten;
use crate::model::*;
use crate::output::write_records;
use crate::scraper::games::parse_games;
use crate::scraper::odds::OddsIndex;
use crate::scraper::{self, HttpSource, PageSource};

/// The main entry point for scraping covers.com odds.
///
/// `OddsClient` pairs a [`PageSource`] (HTTP by default) with a
/// [`ScrapeConfig`] and walks the hub page, then each league page, one at a
/// time.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> covers_odds::Result<()> {
/// use covers_odds::OddsClient;
///
/// let client = OddsClient::new();
/// let records = client.scrape_records().await?;
/// println!("Found {} quotes", records.len());
/// # Ok(())
/// # }
/// ```
pub struct OddsClient<S = HttpSource> {
    source: S,
    config: ScrapeConfig,
}

impl OddsClient<HttpSource> {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_config(ScrapeConfig::default())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_source(HttpSource::new(client), ScrapeConfig::default())
    }

    /// Create a new HTTP client scraping from and writing to the given locations.
    pub fn with_config(config: ScrapeConfig) -> Self {
        Self::with_source(HttpSource::default(), config)
    }
}

impl Default for OddsClient<HttpSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PageSource> OddsClient<S> {
    /// Create a client that reads pages from `source`.
    pub fn with_source(source: S, config: ScrapeConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Fetch the odds hub and list its leagues.
    #[instrument(skip(self))]
    pub async fn get_league_directory(&self) -> Result<LeagueDirectory> {
        let url = self.config.hub_url();
        let document = scraper::get_document(&self.source, &url).await?;
        scraper::directory::parse_league_directory(&document)
    }

    /// Fetch a league's odds page and join its games with their odds.
    ///
    /// Games are keyed by matchup label; a later row with the same label
    /// replaces the earlier one.
    #[instrument(skip_all, fields(league = %league.name))]
    pub async fn get_league_odds(&self, league: &League) -> Result<LeagueOdds> {
        let url = self.config.resolve(&league.link);
        let document = scraper::get_document(&self.source, &url).await?;

        let games = parse_games(&document)?;
        let index = OddsIndex::build(&document);
        debug!(
            games = games.len(),
            priced_games = index.game_count(),
            "joining games with odds"
        );
        let mut by_label: BTreeMap<String, GameOdds> = BTreeMap::new();
        for game in games {
            let label = game.label();
            let quotes = index.quotes_for(&game.id);
            by_label.insert(
                label.clone(),
                GameOdds {
                    id: game.id,
                    label,
                    quotes,
                },
            );
        }

        Ok(LeagueOdds {
            league: league.name.clone(),
            games: by_label.into_values().collect(),
        })
    }

    /// Scrape every league on the hub, one after another.
    #[instrument(skip(self))]
    pub async fn scrape(&self) -> Result<Vec<LeagueOdds>> {
        let directory = self.get_league_directory().await?;
        debug!(leagues = directory.len(), "scraping leagues");

        let mut leagues = Vec::with_capacity(directory.len());
        for league in directory.values() {
            let odds = self.get_league_odds(league).await?;
            info!(
                league = %league.name,
                games = odds.games.len(),
                quotes = odds.quote_count(),
                "scraped league"
            );
            leagues.push(odds);
        }
        Ok(leagues)
    }

    /// Scrape every league and flatten the result into records.
    pub async fn scrape_records(&self) -> Result<Vec<FlatRecord>> {
        let leagues = self.scrape().await?;
        Ok(flatten(&leagues))
    }

    /// Scrape every league and write the records to the configured output path.
    ///
    /// Returns the number of records written.
    pub async fn snapshot(&self) -> Result<usize> {
        let records = self.scrape_records().await?;
        write_records(&self.config.output_path, &records)?;
        info!(
            records = records.len(),
            path = %self.config.output_path.display(),
            "wrote odds snapshot"
        );
        Ok(records.len())
    }
}
