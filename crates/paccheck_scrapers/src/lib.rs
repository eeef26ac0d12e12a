pub mod manager;
pub mod scrapers;

pub use manager::{CheckManager, CheckReport};
pub use scrapers::{ArchNewsScraper, ArticleStatus, NewsScraper};

pub mod prelude {
    pub use super::scrapers::NewsScraper;
    pub use paccheck_core::{Article, Error, Result};
}
