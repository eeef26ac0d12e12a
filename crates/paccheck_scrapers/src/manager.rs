use std::sync::Arc;

use paccheck_core::{Article, Error, MarkerStore, Result};

use crate::scrapers::{ArticleStatus, NewsScraper};

/// How many leading characters of the second-newest article are compared
/// against the stored marker when inferring missed updates.
const MISSED_PREFIX_LEN: usize = 10;

/// Result of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Newest article on the page.
    pub article: Article,
    pub status: ArticleStatus,
    /// More than one article appeared since the marker was last saved.
    pub missed_updates: bool,
    /// The marker record did not exist before this run.
    pub first_run: bool,
}

/// Composes a marker store and a scraper and classifies the fetched feed
/// against the stored acknowledgment.
pub struct CheckManager {
    store: Arc<dyn MarkerStore>,
    scraper: Box<dyn NewsScraper>,
}

impl CheckManager {
    pub fn new(store: Arc<dyn MarkerStore>, scraper: Box<dyn NewsScraper>) -> Self {
        Self { store, scraper }
    }

    /// Fetches the two newest entries and diffs the top one against the
    /// stored marker.
    pub fn check(&self) -> Result<CheckReport> {
        let first_run = self.store.ensure_exists()?;

        // Two entries: the newest for display, the one behind it for the
        // missed-update check.
        let articles = self.scraper.fetch_latest(2)?;
        let article = articles
            .first()
            .cloned()
            .ok_or_else(|| Error::Scraping("scraper returned no articles".to_string()))?;

        let marker = self.store.read()?;
        // A first run never compares: the empty marker is not an
        // acknowledgment of anything.
        if !first_run && marker == article.body_html {
            tracing::info!(source = self.scraper.source(), "no new announcements");
            return Ok(CheckReport {
                article,
                status: ArticleStatus::Unchanged,
                missed_updates: false,
                first_run,
            });
        }

        // The stored marker should still match the entry that is now
        // second on the page; if it does not, more than one update landed
        // since the last save. Only a short prefix is compared because
        // the site truncates the rendered body of older entries, so full
        // equality does not hold for them.
        let missed_updates = match articles.get(1) {
            Some(previous) => {
                !marker.starts_with(prefix(&previous.body_html, MISSED_PREFIX_LEN))
            }
            None => {
                return Err(Error::Scraping(
                    "front page yielded fewer than two news entries".to_string(),
                ))
            }
        };

        tracing::info!(
            source = self.scraper.source(),
            missed_updates,
            first_run,
            "new announcement detected"
        );

        Ok(CheckReport {
            article,
            status: ArticleStatus::Updated,
            missed_updates,
            first_run,
        })
    }

    /// Persists `article` as the acknowledged marker, verbatim.
    pub fn acknowledge(&self, article: &Article) -> Result<()> {
        self.store.write(&article.body_html)
    }
}

/// First `max` characters of `s`, capped at its length.
fn prefix(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paccheck_storage::MemoryMarkerStore;

    struct FixedScraper {
        articles: Vec<Article>,
    }

    impl NewsScraper for FixedScraper {
        fn source(&self) -> &str {
            "fixture"
        }

        fn fetch_latest(&self, max_articles: usize) -> Result<Vec<Article>> {
            Ok(self.articles.iter().take(max_articles).cloned().collect())
        }
    }

    fn manager(store: Arc<dyn MarkerStore>, articles: Vec<Article>) -> CheckManager {
        CheckManager::new(store, Box::new(FixedScraper { articles }))
    }

    fn two_articles() -> Vec<Article> {
        vec![
            Article::new("A", "<p>body A</p>"),
            Article::new("B", "<p>body B</p>"),
        ]
    }

    #[test]
    fn unchanged_marker_reports_nothing_new() {
        let store = Arc::new(MemoryMarkerStore::with_marker("<p>body A</p>"));
        let report = manager(store, two_articles()).check().unwrap();
        assert_eq!(report.status, ArticleStatus::Unchanged);
        assert!(!report.missed_updates);
        assert!(!report.first_run);
    }

    #[test]
    fn first_run_is_always_an_update() {
        let store = Arc::new(MemoryMarkerStore::new());
        let report = manager(store, two_articles()).check().unwrap();
        assert!(report.first_run);
        assert_eq!(report.status, ArticleStatus::Updated);
    }

    #[test]
    fn single_missed_update_when_marker_matches_second_entry() {
        let store = Arc::new(MemoryMarkerStore::with_marker("<p>body B</p>"));
        let report = manager(store, two_articles()).check().unwrap();
        assert_eq!(report.status, ArticleStatus::Updated);
        assert!(!report.missed_updates);
    }

    #[test]
    fn truncated_older_entry_still_matches_by_prefix() {
        // The saved marker is longer than what the page now renders for
        // the same entry; the leading characters still line up
        let store = Arc::new(MemoryMarkerStore::with_marker(
            "<p>body B</p> plus a tail the page no longer shows",
        ));
        let report = manager(store, two_articles()).check().unwrap();
        assert!(!report.missed_updates);
    }

    #[test]
    fn foreign_second_entry_means_missed_updates() {
        // Whatever was acknowledged has scrolled past the second slot
        let store = Arc::new(MemoryMarkerStore::with_marker("<p>body C</p>"));
        let report = manager(store, two_articles()).check().unwrap();
        assert_eq!(report.status, ArticleStatus::Updated);
        assert!(report.missed_updates);
    }

    #[test]
    fn second_entry_shorter_than_prefix_compares_full_text() {
        let store = Arc::new(MemoryMarkerStore::with_marker("tiny"));
        let articles = vec![Article::new("A", "<p>body A</p>"), Article::new("B", "tiny")];
        let report = manager(store, articles).check().unwrap();
        assert!(!report.missed_updates);
    }

    #[test]
    fn fewer_than_two_entries_on_a_change_is_an_error() {
        let store = Arc::new(MemoryMarkerStore::with_marker("<p>old</p>"));
        let articles = vec![Article::new("A", "<p>new</p>")];
        assert!(matches!(
            manager(store, articles).check(),
            Err(Error::Scraping(_))
        ));
    }

    #[test]
    fn unchanged_with_a_single_entry_is_not_an_error() {
        // The second entry is only needed once a change is detected
        let store = Arc::new(MemoryMarkerStore::with_marker("<p>same</p>"));
        let articles = vec![Article::new("A", "<p>same</p>")];
        let report = manager(store, articles).check().unwrap();
        assert_eq!(report.status, ArticleStatus::Unchanged);
    }

    #[test]
    fn acknowledge_persists_the_body_verbatim() {
        let store = Arc::new(MemoryMarkerStore::new());
        let mgr = manager(store.clone(), two_articles());
        let report = mgr.check().unwrap();
        mgr.acknowledge(&report.article).unwrap();
        assert_eq!(store.read().unwrap(), "<p>body A</p>");
    }

    #[test]
    fn declining_leaves_the_marker_empty() {
        let store = Arc::new(MemoryMarkerStore::new());
        let mgr = manager(store.clone(), two_articles());
        mgr.check().unwrap();
        // No acknowledge call: the freshly created marker stays empty
        assert_eq!(store.read().unwrap(), "");
    }

    #[test]
    fn prefix_is_char_boundary_safe() {
        assert_eq!(prefix("àéîôù-12345", 10), "àéîôù-1234");
        assert_eq!(prefix("short", 10), "short");
        assert_eq!(prefix("", 10), "");
    }
}
