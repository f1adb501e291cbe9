//! Color parsing for config values.
//!
//! Colors are parsed into ratatui [`Color`]s, which the table buffer stores,
//! and converted to crossterm colors when the buffer is written out.

use crossterm::style::Color as TermColor;
use ratatui::style::Color;

/// Orange used for restarting containers.
pub const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Parse a color string into a ratatui Color.
///
/// Supports:
/// - Hex colors: `#RRGGBB` or `#RGB`
/// - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`, `white`, `orange`
/// - Bright variants: `bright_red`, `light_blue`, etc.
/// - ANSI index: `color0` through `color255`
///
/// Returns `None` for anything else, including an empty string.
///
/// # Examples
/// ```
/// use docker_ps_cli::theme::colors::parse_color;
/// use ratatui::style::Color;
///
/// assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
/// assert_eq!(parse_color("light_blue"), Some(Color::LightBlue));
/// ```
#[must_use]
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if s.starts_with('#') {
        return parse_hex_color(&s);
    }

    match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "orange" => Some(ORANGE),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "lightred" | "light_red" | "bright_red" => Some(Color::LightRed),
        "lightgreen" | "light_green" | "bright_green" => Some(Color::LightGreen),
        "lightyellow" | "light_yellow" | "bright_yellow" => Some(Color::LightYellow),
        "lightblue" | "light_blue" | "bright_blue" => Some(Color::LightBlue),
        "lightmagenta" | "light_magenta" | "bright_magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light_cyan" | "bright_cyan" => Some(Color::LightCyan),
        "reset" | "default" => Some(Color::Reset),
        _ => s
            .strip_prefix("color")
            .and_then(|idx| idx.parse::<u8>().ok())
            .map(Color::Indexed),
    }
}

/// Parse a hex color string (#RRGGBB or #RGB).
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Converts a ratatui color to the crossterm color used for output.
#[must_use]
pub fn to_terminal_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#00FF00"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        assert_eq!(parse_color("#f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#0f0"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color(" Blue "), Some(Color::Blue));
        assert_eq!(parse_color("orange"), Some(ORANGE));
        assert_eq!(parse_color("bright_red"), Some(Color::LightRed));
        assert_eq!(parse_color("light_green"), Some(Color::LightGreen));
    }

    #[test]
    fn test_parse_indexed_color() {
        assert_eq!(parse_color("color0"), Some(Color::Indexed(0)));
        assert_eq!(parse_color("color255"), Some(Color::Indexed(255)));
        assert_eq!(parse_color("color256"), None);
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_to_terminal_color() {
        assert_eq!(to_terminal_color(Color::Blue), TermColor::DarkBlue);
        assert_eq!(to_terminal_color(Color::LightBlue), TermColor::Blue);
        assert_eq!(
            to_terminal_color(ORANGE),
            TermColor::Rgb {
                r: 255,
                g: 165,
                b: 0
            }
        );
    }
}
