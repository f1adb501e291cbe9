//! Column widths and cell folding.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width constraints of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Widest header or cell line, in terminal cells.
    pub natural: usize,
    /// Upper bound, if any.
    pub max: Option<usize>,
}

impl ColumnSpec {
    /// Natural width capped by `max`, at least 1.
    #[must_use]
    pub fn preferred(&self) -> usize {
        let width = match self.max {
            Some(max) => self.natural.min(max),
            None => self.natural,
        };
        width.max(1)
    }
}

/// Display width of the widest line of `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Fits columns into `available` cells.
///
/// Columns start at their preferred width. If that is too wide, the widest
/// column shrinks one cell at a time (never below 1). Leftover space is
/// spread over columns that have no maximum width.
#[must_use]
pub fn fit_widths(specs: &[ColumnSpec], available: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = specs.iter().map(ColumnSpec::preferred).collect();
    let mut total: usize = widths.iter().sum();

    while total > available {
        let Some((idx, &widest)) = widths
            .iter()
            .enumerate()
            .max_by_key(|&(idx, w)| (*w, std::cmp::Reverse(idx)))
        else {
            break;
        };
        if widest <= 1 {
            break;
        }
        widths[idx] -= 1;
        total -= 1;
    }

    let growable: Vec<usize> = specs
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.max.is_none())
        .map(|(idx, _)| idx)
        .collect();
    if total < available && !growable.is_empty() {
        let extra = available - total;
        let share = extra / growable.len();
        let rest = extra % growable.len();
        for (n, &idx) in growable.iter().enumerate() {
            widths[idx] += share + usize::from(n < rest);
        }
    }

    widths
}

/// Wraps `text` into lines no wider than `width`.
///
/// Lines break at spaces where possible. Words wider than `width` are
/// folded mid-word. Explicit newlines are kept. Always returns at least one
/// line.
#[must_use]
pub fn fold(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in raw.split(' ') {
            let word_width = word.width();
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width + char_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }

        lines.push(line);
    }

    lines
}
