//! Column selection.
//!
//! Turns per-field show/hide directives and a free-text hide list into the
//! ordered list of columns to render.
//!
//! Any explicit show directive replaces the default column set with exactly
//! the shown fields. Hidden fields and hide-list names are then removed from
//! whichever base set was chosen.

use std::collections::{BTreeMap, BTreeSet};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::fields::{Field, FieldUniverse};

/// Visibility directive for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directive {
    /// The user asked for this column.
    Shown,
    /// The user asked to hide this column.
    Hidden,
    /// No directive given.
    #[default]
    Unset,
}

impl Directive {
    /// Builds a directive from a `--x` / `--no-x` flag pair.
    ///
    /// When both are present the one given last wins, which the CLI layer
    /// resolves before calling this, so at most one of them is set here.
    #[must_use]
    pub fn from_flags(show: bool, hide: bool) -> Self {
        match (show, hide) {
            (true, false) => Self::Shown,
            (false, true) => Self::Hidden,
            _ => Self::Unset,
        }
    }
}

/// One directive per field, keyed by lower-cased display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDirectives {
    states: BTreeMap<String, Directive>,
}

impl ColumnDirectives {
    /// Creates an empty directive set (every field unset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directive for a field, replacing any previous one.
    pub fn set(&mut self, field: &str, directive: Directive) {
        let key = field.trim().to_lowercase();
        if directive == Directive::Unset {
            self.states.remove(&key);
        } else {
            self.states.insert(key, directive);
        }
    }

    /// Builder form of [`ColumnDirectives::set`].
    #[must_use]
    pub fn with(mut self, field: &str, directive: Directive) -> Self {
        self.set(field, directive);
        self
    }

    /// Returns the directive for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Directive {
        self.states
            .get(&field.trim().to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Returns true if no field has a directive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Column names to suppress regardless of show directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HideList {
    names: BTreeSet<String>,
}

impl HideList {
    /// Creates an empty hide list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hide list from raw arguments, each possibly comma-separated.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for arg in args {
            list.extend_csv(arg.as_ref());
        }
        list
    }

    /// Adds every non-empty, comma-separated name in `value`.
    pub fn extend_csv(&mut self, value: &str) {
        for name in value.split(',') {
            self.insert(name);
        }
    }

    /// Adds one name. Names are trimmed and lower-cased; blanks are ignored.
    pub fn insert(&mut self, name: &str) {
        let name = name.trim().to_lowercase();
        if !name.is_empty() {
            self.names.insert(name);
        }
    }

    /// Returns true if `name` is hidden (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_lowercase())
    }

    /// Iterates hidden names, lower-cased, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns true if nothing is hidden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A resolved column: what to print as header and where to read the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The field behind this column.
    pub field: Field,
    /// Record key holding the cell value.
    pub key: &'static str,
}

impl Column {
    /// Display header.
    #[must_use]
    pub fn header(&self) -> &'static str {
        self.field.name
    }
}

/// The ordered columns to render. Immutable once resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    /// Columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// (header, key) pairs in display order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        self.columns.iter().map(|c| (c.header(), c.key)).collect()
    }

    /// Returns true if a column with this header is present.
    #[must_use]
    pub fn contains(&self, header: &str) -> bool {
        self.columns.iter().any(|c| c.field.is_named(header))
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Resolves the final column schema.
///
/// Fields without a source key are dropped with a warning. Hide-list names
/// that match no field are reported and otherwise ignored.
pub fn resolve(
    universe: &FieldUniverse<'_>,
    directives: &ColumnDirectives,
    hide_list: &HideList,
    sink: &mut dyn DiagnosticSink,
) -> ColumnSchema {
    let mut shown: Vec<&Field> = Vec::new();
    let mut hidden: Vec<&Field> = Vec::new();

    for field in universe.fields() {
        match directives.get(field.name) {
            Directive::Shown => {
                if !shown.iter().any(|f| f.is_named(field.name)) {
                    shown.push(field);
                }
            }
            Directive::Hidden => hidden.push(field),
            Directive::Unset => {}
        }
    }

    let base: Vec<&Field> = if shown.is_empty() {
        universe.defaults().collect()
    } else {
        shown
    };

    let mut exclude: BTreeSet<String> = hidden.iter().map(|f| f.name.to_lowercase()).collect();
    for name in hide_list.iter() {
        if universe.field(name).is_none() {
            sink.warn(Diagnostic::UnknownColumn(name.to_string()));
        }
        exclude.insert(name.to_string());
    }

    let mut columns = Vec::with_capacity(base.len());
    for field in base {
        if exclude.contains(&field.name.to_lowercase()) {
            continue;
        }
        match field.source_key {
            Some(key) => columns.push(Column { field: *field, key }),
            None => sink.warn(Diagnostic::UnmappedField(field.name.to_string())),
        }
    }

    ColumnSchema { columns }
}
