//! Table styling.
//!
//! Header and border styles come from the theme, with optional color
//! overrides from `.dpsrc`. Cell styles depend on the column and, for
//! `Status` and `Health`, on the value itself.

pub mod colors;

pub use colors::{ORANGE, parse_color, to_terminal_color};

use std::borrow::Cow;

use ratatui::style::{Color, Modifier, Style};

/// Length of a shortened container ID.
pub const SHORT_ID_LEN: usize = 12;

/// Placeholder shown for an empty `Health` cell.
pub const NO_HEALTH: &str = "N/A";

/// A cell's display text and style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell<'a> {
    /// Text to draw.
    pub text: Cow<'a, str>,
    /// Style to draw it with.
    pub style: Style,
}

/// Styles used to draw the container table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTheme {
    /// Header row style.
    pub header: Style,
    /// Border and separator style.
    pub border: Style,
    /// Keep full container IDs.
    pub no_trunc: bool,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().add_modifier(Modifier::DIM),
            no_trunc: false,
        }
    }
}

impl TableTheme {
    /// Replaces the header text color.
    #[must_use]
    pub fn with_header_color(mut self, color: Option<Color>) -> Self {
        if let Some(color) = color {
            self.header = self.header.fg(color);
        }
        self
    }

    /// Replaces the border color.
    #[must_use]
    pub fn with_border_color(mut self, color: Option<Color>) -> Self {
        if let Some(color) = color {
            self.border = self.border.fg(color);
        }
        self
    }

    /// Keeps full container IDs.
    #[must_use]
    pub fn with_no_trunc(mut self, no_trunc: bool) -> Self {
        self.no_trunc = no_trunc;
        self
    }

    /// Text and style for `value` in the column named `header`.
    #[must_use]
    pub fn cell<'a>(&self, header: &str, value: &'a str) -> StyledCell<'a> {
        let plain = Style::default();
        let (text, style) = match header {
            "Status" => (Cow::Borrowed(value), status_style(value)),
            "Health" if value.is_empty() => (Cow::Borrowed(NO_HEALTH), dim(plain)),
            "Health" => (Cow::Borrowed(value), health_style(value)),
            "ID" => (self.short_id(value), plain.fg(Color::Cyan)),
            "Names" => (Cow::Borrowed(value), bold(plain)),
            "Ports" => (Cow::Borrowed(value), plain.fg(Color::Magenta)),
            "Image" => (Cow::Borrowed(value), plain.fg(Color::Blue)),
            "Command" | "Created" => (Cow::Borrowed(value), dim(plain)),
            "Size" => (Cow::Borrowed(value), plain.fg(Color::Green)),
            "Labels" => (
                Cow::Borrowed(value),
                dim(plain).add_modifier(Modifier::ITALIC),
            ),
            _ => (Cow::Borrowed(value), plain),
        };
        StyledCell { text, style }
    }

    fn short_id<'a>(&self, id: &'a str) -> Cow<'a, str> {
        if self.no_trunc {
            return Cow::Borrowed(id);
        }
        match id.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => Cow::Borrowed(&id[..end]),
            None => Cow::Borrowed(id),
        }
    }
}

fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

fn dim(style: Style) -> Style {
    style.add_modifier(Modifier::DIM)
}

/// Style for a `Status` value, by the first state word found in it.
#[must_use]
pub fn status_style(value: &str) -> Style {
    let status = value.to_lowercase();
    let plain = Style::default();
    if status.contains("up") || status.contains("running") {
        bold(plain.fg(Color::Green))
    } else if status.contains("exited") || status.contains("dead") {
        bold(plain.fg(Color::Red))
    } else if status.contains("created") {
        bold(plain.fg(Color::Yellow))
    } else if status.contains("paused") {
        bold(plain.fg(Color::Blue))
    } else if status.contains("restarting") {
        bold(plain.fg(ORANGE))
    } else if status.contains("removing") {
        dim(plain.fg(Color::Red))
    } else {
        dim(plain.fg(Color::White))
    }
}

/// Style for a non-empty `Health` value.
#[must_use]
pub fn health_style(value: &str) -> Style {
    let health = value.to_lowercase();
    let plain = Style::default();
    // "unhealthy" contains "healthy"
    if health.contains("unhealthy") {
        bold(plain.fg(Color::Red))
    } else if health.contains("healthy") {
        bold(plain.fg(Color::Green))
    } else if health.contains("starting") {
        bold(plain.fg(Color::Yellow))
    } else if health.contains("n/a") {
        dim(plain)
    } else {
        dim(plain.fg(Color::White))
    }
}
