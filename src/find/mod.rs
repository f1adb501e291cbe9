//! Post-fetch record filtering.
//!
//! A find expression is a list of `key=pattern` segments, all of which must
//! match for a record to be kept:
//!
//! ```text
//! Status=running,Names=web-*
//! Image=ubuntu "Status=Up 2*"
//! ```
//!
//! Keys go through the field alias table. Patterns containing `*`, `?`, `[`
//! or `]` are shell globs over the whole value; anything else is a
//! substring test. Both are case-insensitive. Segments that cannot be used
//! are reported and skipped, and an expression with no usable segment keeps
//! every record.

pub mod pattern;
pub mod tokenize;

pub use pattern::Pattern;
pub use tokenize::Segment;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::fields::FieldUniverse;
use crate::record::Record;

/// One resolved `key=pattern` condition.
#[derive(Debug, Clone)]
pub struct Predicate {
    key: String,
    pattern: String,
    matcher: Pattern,
}

impl Predicate {
    /// Canonical record key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Pattern as typed, case preserved.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the record's value for this key matches.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.matcher.matches(&record.text(&self.key))
    }
}

/// A parsed find expression.
#[derive(Debug, Clone, Default)]
pub struct FindExpression {
    predicates: Vec<Predicate>,
}

impl FindExpression {
    /// Parses `expr` against the keys of `universe`.
    pub fn parse(expr: &str, universe: &FieldUniverse<'_>, sink: &mut dyn DiagnosticSink) -> Self {
        let mut predicates = Vec::new();

        for segment in tokenize::split(expr) {
            let part = match segment {
                Segment::Word(word) => word,
                Segment::Unterminated(raw) => {
                    sink.warn(Diagnostic::UnterminatedQuote(raw));
                    continue;
                }
            };

            let Some((key, pattern)) = part.split_once('=') else {
                sink.warn(Diagnostic::MissingEquals(part));
                continue;
            };

            let Some(canonical) = universe.canonical_key(key) else {
                sink.warn(Diagnostic::UnknownFindKey(key.to_string()));
                continue;
            };

            predicates.push(Predicate {
                key: canonical.to_string(),
                pattern: pattern.to_string(),
                matcher: Pattern::compile(pattern, sink),
            });
        }

        Self { predicates }
    }

    /// Resolved predicates in expression order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns true if nothing will be filtered out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns true if every predicate matches.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Keeps matching records, order preserved.
    #[must_use]
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Filters `docker ps` records with a find expression.
#[must_use]
pub fn filter(records: Vec<Record>, expr: &str, sink: &mut dyn DiagnosticSink) -> Vec<Record> {
    FindExpression::parse(expr, &FieldUniverse::docker(), sink).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    fn container(id: &str, status: &str, names: &str) -> Record {
        Record::from_pairs([("ID", id), ("Status", status), ("Names", names)])
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.text("ID").into_owned()).collect()
    }

    #[test]
    fn test_status_glob_keeps_only_up() {
        let records = vec![
            container("abc123", "Up 2 hours", "web-1"),
            container("def456", "Exited (0)", "db-1"),
        ];
        let kept = filter(records, "Status=Up*", &mut NullSink);
        assert_eq!(ids(&kept), vec!["abc123"]);
    }

    #[test]
    fn test_multiple_predicates_are_anded() {
        let records = vec![
            container("a", "running", "web-1"),
            container("b", "running", "db-1"),
            container("c", "exited", "web-2"),
        ];
        let kept = filter(records, "Status=running,Names=web-*", &mut NullSink);
        assert_eq!(ids(&kept), vec!["a"]);
    }

    #[test]
    fn test_only_bang_negates_a_class() {
        let records = vec![
            container("1", "running", "a"),
            container("2", "running", "b"),
        ];
        let kept = filter(records.clone(), "Names=[^a]", &mut NullSink);
        assert_eq!(ids(&kept), vec!["1"]);

        let kept = filter(records, "Names=[!a]", &mut NullSink);
        assert_eq!(ids(&kept), vec!["2"]);
    }

    #[test]
    fn test_substring_on_image() {
        let records = vec![
            Record::from_pairs([("ID", "1"), ("Image", "ubuntu:24.04")]),
            Record::from_pairs([("ID", "2"), ("Image", "alpine:3")]),
        ];
        let kept = filter(records, "image=UBUNTU", &mut NullSink);
        assert_eq!(ids(&kept), vec!["1"]);
    }

    #[test]
    fn test_aliases_resolve_to_source_keys() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let expr = FindExpression::parse(
            "created=2024 name=web img=nginx publish=8080 state=running",
            &FieldUniverse::docker(),
            &mut sink,
        );
        let keys: Vec<_> = expr.predicates().iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["CreatedAt", "Names", "Image", "Ports", "State"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_invalid_segments_are_reported_and_skipped() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let expr = FindExpression::parse(
            "running colour=red Status=up",
            &FieldUniverse::docker(),
            &mut sink,
        );
        assert_eq!(expr.predicates().len(), 1);
        assert_eq!(expr.predicates()[0].key(), "Status");
        assert_eq!(
            sink,
            vec![
                Diagnostic::MissingEquals("running".to_string()),
                Diagnostic::UnknownFindKey("colour".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_valid_predicates_is_noop() {
        let records = vec![
            container("a", "running", "web-1"),
            container("b", "exited", "db-1"),
        ];
        let kept = filter(records.clone(), "", &mut NullSink);
        assert_eq!(kept, records);

        let mut sink: Vec<Diagnostic> = Vec::new();
        let kept = filter(records.clone(), "bogus nokey=1", &mut sink);
        assert_eq!(kept, records);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_pattern_splits_on_first_equals() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let expr = FindExpression::parse(
            "Labels=com.example.role=web",
            &FieldUniverse::docker(),
            &mut sink,
        );
        assert_eq!(expr.predicates()[0].pattern(), "com.example.role=web");

        let record = Record::from_pairs([("Labels", "com.example.role=web,tier=front")]);
        assert!(expr.matches(&record));
    }

    #[test]
    fn test_missing_key_reads_as_empty() {
        let records = vec![
            Record::from_pairs([("ID", "a"), ("Health", "healthy")]),
            Record::from_pairs([("ID", "b")]),
        ];
        let kept = filter(records.clone(), "Health=*", &mut NullSink);
        assert_eq!(ids(&kept), vec!["a", "b"]);

        let kept = filter(records, "Health=?*", &mut NullSink);
        assert_eq!(ids(&kept), vec!["a"]);
    }

    #[test]
    fn test_quoted_pattern_with_spaces() {
        let records = vec![
            container("a", "Up 2 hours", "web-1"),
            container("b", "Up 20 minutes", "web-2"),
        ];
        let kept = filter(records, r#"Status="up 2 h""#, &mut NullSink);
        assert_eq!(ids(&kept), vec!["a"]);
    }

    #[test]
    fn test_unterminated_quote_keeps_earlier_segments() {
        let records = vec![
            container("a", "running", "web-1"),
            container("b", "exited", "web-2"),
        ];
        let mut sink: Vec<Diagnostic> = Vec::new();
        let kept = filter(records, r#"Status=run Names="web"#, &mut sink);
        assert_eq!(ids(&kept), vec!["a"]);
        assert!(matches!(sink[0], Diagnostic::UnterminatedQuote(_)));
    }

    #[test]
    fn test_numeric_values_match_as_text() {
        let mut values = serde_json::Map::new();
        values.insert("ID".to_string(), "a".into());
        values.insert("Size".to_string(), 1024.into());
        let kept = filter(vec![Record::new(values)], "size=102", &mut NullSink);
        assert_eq!(kept.len(), 1);
    }
}
