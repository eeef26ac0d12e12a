use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use paccheck_core::{Article, Error, Result};

use crate::scrapers::NewsScraper;

pub const ARCH_LINUX_URL: &str = "https://archlinux.org";

/// Matches one news entry on the front page: an `<h4>` heading wrapping
/// the title link, then the `<p>` body inside the article-content block.
/// Dot-matches-newline, non-greedy between boundaries. Tied to the exact
/// markup the site serves; a layout change makes this yield nothing.
static ARTICLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<h4>\s*?<a href="[/\w-]*"\s*?title="[\w\W]*?">([\w\W]*?)</a>.*?<div class="article-content">\s*?<p>(.*?)</div>"#,
    )
    .expect("news entry pattern is valid")
});

/// Scrapes the Arch Linux homepage with a single blocking GET and a
/// pattern match over the returned markup.
pub struct ArchNewsScraper {
    url: Url,
    client: reqwest::blocking::Client,
}

impl ArchNewsScraper {
    pub fn new() -> Self {
        Self::with_url(ARCH_LINUX_URL).expect("default news URL is valid")
    }

    /// Scraper pointed at an alternate endpoint; tests use a local one.
    pub fn with_url(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            url,
            client: reqwest::blocking::Client::new(),
        })
    }

    /// One GET against the configured endpoint, whole body read into
    /// memory as text. No timeout or retry; any transport failure is the
    /// caller's problem.
    fn fetch_page(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "fetching news page");
        let body = self.client.get(self.url.clone()).send()?.text()?;
        tracing::debug!(bytes = body.len(), "news page fetched");
        Ok(body)
    }

    /// Applies the entry pattern, collecting up to `max_articles`
    /// (title, body) pairs from the start of the document.
    ///
    /// Zero matches is an error, not an empty result: a silent no-op here
    /// would mean the user permanently stops seeing announcements.
    pub fn extract(html: &str, max_articles: usize) -> Result<Vec<Article>> {
        let articles: Vec<Article> = ARTICLE_RE
            .captures_iter(html)
            .take(max_articles)
            .map(|caps| Article::new(&caps[1], &caps[2]))
            .collect();

        if articles.is_empty() {
            return Err(Error::Scraping(
                "no news entries matched the front page markup".to_string(),
            ));
        }

        tracing::debug!(count = articles.len(), "extracted news entries");
        Ok(articles)
    }
}

impl NewsScraper for ArchNewsScraper {
    fn source(&self) -> &str {
        "Arch Linux"
    }

    fn fetch_latest(&self, max_articles: usize) -> Result<Vec<Article>> {
        let html = self.fetch_page()?;
        Self::extract(&html, max_articles)
    }
}
