//! Splits a find expression into segments.
//!
//! Segments are separated by whitespace or commas. Single quotes keep their
//! contents literally. Double quotes keep separators, and a backslash inside
//! them escapes `"` or `\`. Outside quotes a backslash escapes any character.

/// One piece of a find expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A complete segment with quotes removed.
    Word(String),
    /// Raw text of a segment whose quote was never closed.
    Unterminated(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits `input` into segments.
///
/// An unterminated quote swallows the rest of the input into a single
/// [`Segment::Unterminated`]; segments before it are unaffected.
#[must_use]
pub fn split(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut word_start = 0;
    let mut quote = Quote::None;
    let mut chars = input.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    word.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.peek() {
                    Some(&(_, next)) if next == '"' || next == '\\' => {
                        word.push(next);
                        chars.next();
                    }
                    _ => word.push(c),
                },
                _ => word.push(c),
            },
            Quote::None => {
                if is_separator(c) {
                    if in_word {
                        segments.push(Segment::Word(std::mem::take(&mut word)));
                        in_word = false;
                    }
                    continue;
                }
                if !in_word {
                    in_word = true;
                    word_start = idx;
                }
                match c {
                    '\'' => quote = Quote::Single,
                    '"' => quote = Quote::Double,
                    '\\' => match chars.next() {
                        Some((_, next)) => word.push(next),
                        None => word.push(c),
                    },
                    _ => word.push(c),
                }
            }
        }
    }

    if quote != Quote::None {
        segments.push(Segment::Unterminated(input[word_start..].to_string()));
    } else if in_word {
        segments.push(Segment::Word(word));
    }

    segments
}
