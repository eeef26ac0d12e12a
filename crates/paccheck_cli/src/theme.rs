use crossterm::style::{Attribute, Color, ContentStyle};

/// Styles for every piece of terminal output. Built once in `main` and
/// handed to the presenter, so tests can swap in the plain variant.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// The `::` prefix on the startup banner.
    pub banner: ContentStyle,
    /// Bold-only style shared by the banner text, the title underline,
    /// `<h2>` headings, the prompt and label separators.
    pub emphasis: ContentStyle,
    pub title: ContentStyle,
    pub code: ContentStyle,
    pub note_label: ContentStyle,
    pub error_label: ContentStyle,
}

impl Theme {
    /// The fixed palette: bold blue banner prefix, bold yellow title,
    /// cyan code spans, bold red error label. Emitted unconditionally,
    /// with no terminal detection.
    pub fn colored() -> Self {
        Self {
            banner: bold(Color::DarkBlue),
            emphasis: bold_only(),
            title: bold(Color::DarkYellow),
            code: fg(Color::DarkCyan),
            note_label: bold(Color::DarkYellow),
            error_label: bold(Color::DarkRed),
        }
    }

    /// No styling at all; rendered output is plain text.
    pub fn plain() -> Self {
        Self {
            banner: ContentStyle::new(),
            emphasis: ContentStyle::new(),
            title: ContentStyle::new(),
            code: ContentStyle::new(),
            note_label: ContentStyle::new(),
            error_label: ContentStyle::new(),
        }
    }
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..Default::default()
    }
}

fn bold(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

fn bold_only() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}
