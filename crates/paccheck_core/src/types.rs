/// One news entry scraped from the front page, newest first in page order.
///
/// Re-derived on every run. The raw `body_html` doubles as the equality
/// key for change detection, so it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub body_html: String,
}

impl Article {
    pub fn new(title: impl Into<String>, body_html: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_html: body_html.into(),
        }
    }
}
