//! Case-insensitive glob and substring matching of find patterns.

use globset::{GlobBuilder, GlobMatcher};

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Characters that switch a pattern from substring to glob matching.
const GLOB_CHARS: [char; 4] = ['*', '?', '[', ']'];

/// Returns true if `pattern` is matched as a glob.
#[must_use]
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_CHARS)
}

/// A compiled find pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Whole-value shell glob, compiled from the lower-cased pattern.
    Glob(GlobMatcher),
    /// Lower-cased substring.
    Substring(String),
}

impl Pattern {
    /// Compiles `raw`.
    ///
    /// Braces are always literal. If the brackets do not form a valid class,
    /// the glob is rebuilt with brackets taken literally and a warning is
    /// sent to `sink`.
    pub fn compile(raw: &str, sink: &mut dyn DiagnosticSink) -> Self {
        let lowered = raw.to_lowercase();
        if !is_glob(&lowered) {
            return Self::Substring(lowered);
        }

        match build_glob(&translate(&lowered)) {
            Ok(matcher) => Self::Glob(matcher),
            Err(err) => {
                sink.warn(Diagnostic::InvalidGlob {
                    pattern: raw.to_string(),
                    reason: err.kind().to_string(),
                });
                match build_glob(&escape_brackets(&lowered)) {
                    Ok(matcher) => Self::Glob(matcher),
                    // Only `*` and `?` are left unescaped, which always compile.
                    Err(_) => Self::Substring(lowered),
                }
            }
        }
    }

    /// Tests a record value against the pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        match self {
            Self::Glob(matcher) => matcher.is_match(value.as_str()),
            Self::Substring(needle) => value.contains(needle.as_str()),
        }
    }
}

fn build_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(false)
        .build()
        .map(|glob| glob.compile_matcher())
}

/// Rewrites fnmatch syntax into globset syntax.
///
/// `{` and `}` outside classes are wrapped in classes of their own. Only `!`
/// negates a class, so a `^` in first position is moved to the end of its
/// class (`[^a]` becomes `[a^]`, `[^]` becomes `^`).
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut in_class = false;
    // Right after `[`, before any `!`.
    let mut opened = false;
    // A `]` here is a member, not the end of the class.
    let mut class_start = false;
    let mut caret = false;
    let mut members = 0usize;

    for c in pattern.chars() {
        if in_class {
            if opened && c == '!' {
                opened = false;
                out.push(c);
                continue;
            }
            if opened && c == '^' {
                opened = false;
                class_start = false;
                caret = true;
                continue;
            }
            opened = false;

            if c == ']' && !class_start {
                in_class = false;
                if caret {
                    caret = false;
                    if members == 0 {
                        out.pop();
                        out.push('^');
                        continue;
                    }
                    // Keep a trailing `-` last so it stays literal.
                    if members > 1 && out.ends_with('-') {
                        out.insert(out.len() - 1, '^');
                    } else {
                        out.push('^');
                    }
                }
                out.push(']');
                continue;
            }

            class_start = false;
            members += 1;
            out.push(c);
            continue;
        }
        match c {
            '[' => {
                in_class = true;
                opened = true;
                class_start = true;
                members = 0;
                out.push(c);
            }
            '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    if caret {
        out.push('^');
    }
    out
}

/// Makes every bracket and brace literal, leaving `*` and `?` active.
fn escape_brackets(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 3);
    for c in pattern.chars() {
        match c {
            '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}
