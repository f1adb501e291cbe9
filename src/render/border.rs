//! Table border styles.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use ratatui::symbols::line;

/// ASCII line set.
pub const ASCII: line::Set = line::Set {
    vertical: "|",
    horizontal: "-",
    top_right: "+",
    top_left: "+",
    bottom_right: "+",
    bottom_left: "+",
    vertical_left: "+",
    vertical_right: "+",
    horizontal_down: "+",
    horizontal_up: "+",
    cross: "+",
};

/// Border style of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableStyle {
    /// `+`, `-` and `|`.
    Ascii,
    /// Inner lines only.
    Minimal,
    /// Box drawing with rounded corners.
    #[default]
    Rounded,
    /// Horizontal rules only.
    Simple,
    /// Box drawing with square corners.
    Square,
}

impl TableStyle {
    /// All styles.
    pub const ALL: [TableStyle; 5] = [
        Self::Ascii,
        Self::Minimal,
        Self::Rounded,
        Self::Simple,
        Self::Square,
    ];

    /// Lower-case name as used on the command line and in config.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Minimal => "minimal",
            Self::Rounded => "rounded",
            Self::Simple => "simple",
            Self::Square => "square",
        }
    }

    /// Parse a style name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }

    /// Line symbols and which lines are drawn.
    #[must_use]
    pub fn borders(self) -> Borders {
        match self {
            Self::Ascii => Borders::boxed(ASCII),
            Self::Rounded => Borders::boxed(line::ROUNDED),
            Self::Square => Borders::boxed(line::NORMAL),
            Self::Minimal => Borders {
                symbols: line::NORMAL,
                outer_horizontal: false,
                outer_vertical: false,
                inner_vertical: true,
            },
            Self::Simple => Borders {
                symbols: line::NORMAL,
                outer_horizontal: true,
                outer_vertical: false,
                inner_vertical: false,
            },
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown table style '{s}'"))
    }
}

/// Which lines a style draws, and with which symbols.
///
/// The header rule and row separators are always drawn. Column gaps always
/// take one cell; without inner vertical lines the gap is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    /// Line symbols.
    pub symbols: line::Set,
    /// Top and bottom rules.
    pub outer_horizontal: bool,
    /// Left and right edges.
    pub outer_vertical: bool,
    /// Lines between columns.
    pub inner_vertical: bool,
}

impl Borders {
    const fn boxed(symbols: line::Set) -> Self {
        Self {
            symbols,
            outer_horizontal: true,
            outer_vertical: true,
            inner_vertical: true,
        }
    }

    /// Cells used by borders and padding for `columns` columns.
    #[must_use]
    pub fn overhead(&self, columns: usize) -> usize {
        if columns == 0 {
            return 0;
        }
        let edges = if self.outer_vertical { 2 } else { 0 };
        // One padding cell each side of every column, one gap between columns.
        columns * 2 + (columns - 1) + edges
    }
}
