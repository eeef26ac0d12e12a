use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use paccheck_core::Article;

use crate::theme::Theme;

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<code>(.*?)</code>").expect("code pattern is valid"));
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<h2>(.*?)</h2>").expect("heading pattern is valid"));
/// Anything still shaped like a tag after the styled spans are handled.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("tag pattern is valid"));

/// Turns raw article HTML into styled plain text for the terminal.
pub struct Presenter {
    theme: Theme,
}

impl Presenter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Startup banner shown before the fetch.
    pub fn banner(&self) -> String {
        format!(
            "{}{}",
            self.theme.banner.apply(":: "),
            self.theme.emphasis.apply("Checking Arch Linux news...")
        )
    }

    /// Styled, tag-stripped, entity-decoded rendering of one article:
    /// title, dash underline, blank line, body.
    ///
    /// Only `<code>` and `<h2>` get styling; every other tag is stripped.
    pub fn render(&self, article: &Article) -> String {
        let title = html_escape::decode_html_entities(&article.title).to_string();
        let underline = "-".repeat(title.chars().count());

        let body = CODE_RE.replace_all(&article.body_html, |caps: &Captures| {
            self.theme.code.apply(&caps[1]).to_string()
        });
        let body = HEADING_RE.replace_all(&body, |caps: &Captures| {
            format!("\n{}", self.theme.emphasis.apply(&caps[1]))
        });
        let body = TAG_RE.replace_all(&body, "");
        let body = html_escape::decode_html_entities(body.as_ref()).to_string();

        format!(
            "{}\n{}\n\n{}",
            self.theme.title.apply(&title),
            self.theme.emphasis.apply(&underline),
            body.trim()
        )
    }

    /// Acknowledgment question; printed without a trailing newline.
    pub fn prompt(&self) -> String {
        format!(
            "{} (y/n) ",
            self.theme
                .emphasis
                .apply("Acknowledge and save this news feed?")
        )
    }

    /// Advisory line for stdout.
    pub fn note(&self, msg: &str) -> String {
        format!(
            "{}{}{}",
            self.theme.note_label.apply("note"),
            self.theme.emphasis.apply(": "),
            msg
        )
    }

    /// Fatal diagnostic line for stderr.
    pub fn error_line(&self, msg: &str) -> String {
        format!(
            "{}{} {}",
            self.theme.error_label.apply("error"),
            self.theme.emphasis.apply(":"),
            msg
        )
    }
}
