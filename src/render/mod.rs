//! Container table rendering.
//!
//! The table is drawn into a ratatui [`Buffer`] by [`ContainerTable`] and
//! then written to the terminal line by line with [`output::write_buffer`].
//! Nothing here filters or reorders rows; the schema and records arrive
//! final.

pub mod border;
pub mod layout;
pub mod output;

pub use border::{Borders, TableStyle};
pub use output::write_buffer;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::columns::ColumnSchema;
use crate::fields::Justify;
use crate::record::Record;
use crate::theme::TableTheme;
use layout::{ColumnSpec, fit_widths, fold, text_width};

/// Width used when stdout is not a terminal.
pub const FALLBACK_WIDTH: u16 = 120;

#[derive(Debug, Clone)]
struct TableColumn {
    header: &'static str,
    justify: Justify,
    max_width: Option<usize>,
}

#[derive(Debug, Clone)]
struct TableCell {
    text: String,
    style: Style,
}

/// Which horizontal rule is being drawn.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

/// A styled table of containers.
#[derive(Debug, Clone)]
pub struct ContainerTable {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<TableCell>>,
    theme: TableTheme,
    borders: Borders,
}

impl ContainerTable {
    /// Builds the table cells for `records` under `schema`.
    #[must_use]
    pub fn new(schema: &ColumnSchema, records: &[Record], theme: TableTheme) -> Self {
        let columns = schema
            .columns()
            .iter()
            .map(|column| TableColumn {
                header: column.header(),
                justify: column.field.justify,
                max_width: column.field.max_width.map(usize::from),
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                schema
                    .columns()
                    .iter()
                    .map(|column| {
                        let value = record.text(column.key);
                        let cell = theme.cell(column.header(), &value);
                        TableCell {
                            text: cell.text.into_owned(),
                            style: cell.style,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows,
            theme,
            borders: TableStyle::default().borders(),
        }
    }

    /// Sets the border style.
    #[must_use]
    pub fn style(mut self, style: TableStyle) -> Self {
        self.borders = style.borders();
        self
    }

    /// Returns true if the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of body rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column widths for a table `width` cells wide.
    fn widths(&self, width: u16) -> Vec<usize> {
        let specs: Vec<ColumnSpec> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cells = self.rows.iter().map(|row| text_width(&row[idx].text));
                ColumnSpec {
                    natural: cells.fold(text_width(column.header), usize::max),
                    max: column.max_width,
                }
            })
            .collect();

        let available = usize::from(width).saturating_sub(self.borders.overhead(specs.len()));
        fit_widths(&specs, available)
    }

    /// Folded lines of every cell in a row.
    fn fold_row<'a>(
        cells: impl Iterator<Item = &'a str>,
        widths: &[usize],
    ) -> Vec<Vec<String>> {
        cells
            .zip(widths)
            .map(|(text, &width)| fold(text, width))
            .collect()
    }

    fn header_lines(&self, widths: &[usize]) -> Vec<Vec<String>> {
        Self::fold_row(self.columns.iter().map(|c| c.header), widths)
    }

    fn body_lines(&self, widths: &[usize]) -> Vec<Vec<Vec<String>>> {
        self.rows
            .iter()
            .map(|row| Self::fold_row(row.iter().map(|c| c.text.as_str()), widths))
            .collect()
    }

    /// Total lines needed to draw the table `width` cells wide.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        if self.is_empty() {
            return 0;
        }
        let widths = self.widths(width);
        let header = row_height(&self.header_lines(&widths));
        let body: usize = self
            .body_lines(&widths)
            .iter()
            .map(|row| row_height(row))
            .sum();
        let outer = if self.borders.outer_horizontal { 2 } else { 0 };
        let separators = self.rows.len().saturating_sub(1);

        let total = outer + header + 1 + body + separators;
        u16::try_from(total).unwrap_or_else(|_| {
            debug!("Table needs {} lines; clamped to {}", total, u16::MAX);
            u16::MAX
        })
    }

    /// Draws the whole table into a fresh buffer `width` cells wide.
    #[must_use]
    pub fn to_buffer(&self, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, self.height(width));
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf);
        buf
    }

    fn draw_rule(&self, rule: Rule, widths: &[usize], x: u16, y: u16, buf: &mut Buffer) {
        let set = self.borders.symbols;
        let (left, junction, right) = match rule {
            Rule::Top => (set.top_left, set.horizontal_down, set.top_right),
            Rule::Middle => (set.vertical_right, set.cross, set.vertical_left),
            Rule::Bottom => (set.bottom_left, set.horizontal_up, set.bottom_right),
        };
        let junction = if self.borders.inner_vertical {
            junction
        } else {
            set.horizontal
        };

        let mut line = String::new();
        if self.borders.outer_vertical {
            line.push_str(left);
        }
        for (idx, width) in widths.iter().enumerate() {
            if idx > 0 {
                line.push_str(junction);
            }
            line.push_str(&set.horizontal.repeat(width + 2));
        }
        if self.borders.outer_vertical {
            line.push_str(right);
        }

        put(buf, x, y, &line, line.width(), self.theme.border);
    }

    fn draw_row(
        &self,
        lines: &[Vec<String>],
        styles: &[Style],
        widths: &[usize],
        x: u16,
        y: u16,
        buf: &mut Buffer,
    ) -> u16 {
        let height = row_height(lines);
        let vertical = self.borders.symbols.vertical;

        for line_idx in 0..height {
            let y = y.saturating_add(to_u16(line_idx));
            let mut cx = x;

            if self.borders.outer_vertical {
                put(buf, cx, y, vertical, 1, self.theme.border);
                cx = cx.saturating_add(1);
            }

            for (idx, ((cell, column), &width)) in
                lines.iter().zip(&self.columns).zip(widths).enumerate()
            {
                if idx > 0 {
                    if self.borders.inner_vertical {
                        put(buf, cx, y, vertical, 1, self.theme.border);
                    }
                    cx = cx.saturating_add(1);
                }

                let text = cell.get(line_idx).map_or("", String::as_str);
                let offset = match column.justify {
                    Justify::Left => 0,
                    Justify::Right => width.saturating_sub(text.width()),
                };
                put(
                    buf,
                    cx.saturating_add(to_u16(1 + offset)),
                    y,
                    text,
                    width,
                    styles[idx],
                );
                cx = cx.saturating_add(to_u16(width + 2));
            }

            if self.borders.outer_vertical {
                put(buf, cx, y, vertical, 1, self.theme.border);
            }
        }

        to_u16(height)
    }
}

impl Widget for &ContainerTable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 || self.is_empty() {
            return;
        }

        let widths = self.widths(area.width);
        let mut y = area.y;

        if self.borders.outer_horizontal {
            self.draw_rule(Rule::Top, &widths, area.x, y, buf);
            y = y.saturating_add(1);
        }

        let header_styles = vec![self.theme.header; self.columns.len()];
        y = y.saturating_add(self.draw_row(
            &self.header_lines(&widths),
            &header_styles,
            &widths,
            area.x,
            y,
            buf,
        ));
        self.draw_rule(Rule::Middle, &widths, area.x, y, buf);
        y = y.saturating_add(1);

        for (idx, (lines, row)) in self.body_lines(&widths).iter().zip(&self.rows).enumerate() {
            if idx > 0 {
                self.draw_rule(Rule::Middle, &widths, area.x, y, buf);
                y = y.saturating_add(1);
            }
            let styles: Vec<Style> = row.iter().map(|cell| cell.style).collect();
            y = y.saturating_add(self.draw_row(lines, &styles, &widths, area.x, y, buf));
        }

        if self.borders.outer_horizontal {
            self.draw_rule(Rule::Bottom, &widths, area.x, y, buf);
        }
    }
}

fn row_height(cells: &[Vec<String>]) -> usize {
    cells.iter().map(Vec::len).max().unwrap_or(1).max(1)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Writes `text` at (x, y), clipped to `max_width` and to the buffer.
fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: usize, style: Style) {
    let area = buf.area;
    if x >= area.right() || y >= area.bottom() {
        return;
    }
    buf.set_stringn(x, y, text, max_width, style);
}
