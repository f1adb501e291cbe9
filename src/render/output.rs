//! Writing a rendered buffer to a terminal or pipe.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::to_terminal_color;

const ATTRIBUTES: [(Modifier, Attribute); 7] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::SLOW_BLINK, Attribute::SlowBlink),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pen {
    fg: Color,
    bg: Color,
    modifier: Modifier,
}

impl Pen {
    const PLAIN: Pen = Pen {
        fg: Color::Reset,
        bg: Color::Reset,
        modifier: Modifier::empty(),
    };
}

/// Writes every line of `buf` to `out`, each followed by a newline.
///
/// Trailing blanks are dropped. With `color` off only the symbols are
/// written.
pub fn write_buffer<W: Write>(out: &mut W, buf: &Buffer, color: bool) -> io::Result<()> {
    let area = buf.area;

    for y in area.top()..area.bottom() {
        let last = (area.left()..area.right())
            .rev()
            .find(|&x| {
                let cell = &buf[(x, y)];
                cell.symbol() != " " || (color && cell.bg != Color::Reset)
            })
            .map_or(area.left(), |x| x + 1);

        let mut pen = Pen::PLAIN;
        let mut skip = 0;

        for x in area.left()..last {
            let cell = &buf[(x, y)];
            if skip > 0 {
                skip -= 1;
                continue;
            }
            skip = cell.symbol().width().saturating_sub(1);

            if color {
                let next = Pen {
                    fg: cell.fg,
                    bg: cell.bg,
                    modifier: cell.modifier,
                };
                if next != pen {
                    set_pen(out, next)?;
                    pen = next;
                }
            }
            queue!(out, Print(cell.symbol()))?;
        }

        if pen != Pen::PLAIN {
            set_pen(out, Pen::PLAIN)?;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()
}

fn set_pen<W: Write>(out: &mut W, pen: Pen) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if pen.fg != Color::Reset {
        queue!(out, SetForegroundColor(to_terminal_color(pen.fg)))?;
    }
    if pen.bg != Color::Reset {
        queue!(out, SetBackgroundColor(to_terminal_color(pen.bg)))?;
    }
    for (modifier, attribute) in ATTRIBUTES {
        if pen.modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}
