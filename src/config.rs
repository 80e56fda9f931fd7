use std::path::PathBuf;

pub const BASE_URL: &str = "https://www.covers.com";
pub const HUB_PATH: &str = "/sport/odds";
pub const OUTPUT_PATH: &str = "data/out.json";

/// Where to scrape from and where to write the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub hub_path: String,
    pub output_path: PathBuf,
}

impl ScrapeConfig {
    /// Absolute URL of the odds hub page.
    pub fn hub_url(&self) -> String {
        self.resolve(&self.hub_path)
    }

    /// Resolve a site-relative link against `base_url`. Absolute links pass through.
    pub fn resolve(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else if link.starts_with("//") {
            format!("https:{link}")
        } else if link.starts_with('/') {
            format!("{}{link}", self.base_url.trim_end_matches('/'))
        } else {
            format!("{}/{link}", self.base_url.trim_end_matches('/'))
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            hub_path: HUB_PATH.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}
