pub use client::OddsClient;
pub use config::ScrapeConfig;
pub use error::{OddsError, Result};
pub use flatten::flatten;
pub use model::*;
pub use output::write_records;
pub use crate::scraper::{HttpSource, PageSource};

pub mod client;
pub mod config;
pub mod error;
pub mod flatten;
pub mod model;
pub mod output;
pub(crate) mod scraper;
