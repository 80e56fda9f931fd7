pub(crate) mod directory;
pub(crate) mod games;
pub(crate) mod odds;
pub(crate) mod predicates;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::{OddsError, Result};

/// Something that can hand back the raw markup of a page.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await.map_err(|e| OddsError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OddsError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.text().await.map_err(|e| OddsError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
    }
}

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document<S: PageSource>(source: &S, url: &str) -> Result<Html> {
    debug!(url, "fetching page");
    let body = source.fetch(url).await?;
    Ok(Html::parse_document(&body))
}

/// All elements below `root`, in document order, for which `pred` holds.
pub(crate) fn find_all<'a, P>(root: ElementRef<'a>, pred: P) -> impl Iterator<Item = ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |el| pred(el))
}

/// The first element below `root` for which `pred` holds.
pub(crate) fn find_first<'a, P>(root: ElementRef<'a>, pred: P) -> Option<ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    find_all(root, pred).next()
}

/// The first element below `root` matching the CSS `selector`.
pub(crate) fn select_first<'a>(root: ElementRef<'a>, selector: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = Selector::parse(selector)?;
    Ok(root.select(&selector).next())
}

/// All text below `element`, concatenated and trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::PageSource;
    use crate::error::{OddsError, Result};

    /// Serves canned markup keyed by absolute URL.
    #[derive(Debug, Default)]
    pub(crate) struct StaticPages {
        pages: HashMap<String, String>,
    }

    impl StaticPages {
        pub(crate) fn with_page(mut self, url: &str, body: impl Into<String>) -> Self {
            self.pages.insert(url.to_string(), body.into());
            self
        }
    }

    impl PageSource for StaticPages {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| OddsError::PageUnavailable {
                    url: url.to_string(),
                })
        }
    }
}
