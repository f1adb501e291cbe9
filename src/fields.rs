//! Displayable fields of `docker ps` output.
//!
//! The field universe is the single source of truth for valid column names
//! and valid find keys. Column order in the table follows universe order.

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Left aligned (default).
    #[default]
    Left,
    /// Right aligned.
    Right,
}

/// A displayable attribute of a container record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// User-facing header, e.g. "Created".
    pub name: &'static str,
    /// Key in the raw record, e.g. "CreatedAt". `None` means the field
    /// cannot be displayed.
    pub source_key: Option<&'static str>,
    /// Whether the field belongs to the default column set.
    pub default: bool,
    /// CLI flag stem, e.g. `port` for `--port` / `--no-port`.
    pub flag: &'static str,
    /// Cell alignment.
    pub justify: Justify,
    /// Maximum rendered width in terminal cells.
    pub max_width: Option<u16>,
}

impl Field {
    const fn new(name: &'static str, source_key: &'static str, flag: &'static str) -> Self {
        Self {
            name,
            source_key: Some(source_key),
            default: false,
            flag,
            justify: Justify::Left,
            max_width: None,
        }
    }

    const fn shown_by_default(mut self) -> Self {
        self.default = true;
        self
    }

    const fn right(mut self) -> Self {
        self.justify = Justify::Right;
        self
    }

    const fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Returns true if `name` names this field (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// Fields of `docker ps`, in display order.
pub const DOCKER_FIELDS: &[Field] = &[
    Field::new("ID", "ID", "id").shown_by_default().right(),
    Field::new("Image", "Image", "image").shown_by_default(),
    Field::new("Command", "Command", "command")
        .shown_by_default()
        .max_width(80),
    Field::new("Created", "CreatedAt", "created")
        .shown_by_default()
        .right(),
    Field::new("Status", "Status", "status").shown_by_default(),
    Field::new("Ports", "Ports", "port").shown_by_default(),
    Field::new("Names", "Names", "name").shown_by_default(),
    Field::new("Size", "Size", "size").right(),
    Field::new("Health", "Health", "health"),
    Field::new("Labels", "Labels", "label").max_width(80),
];

/// Alternate spellings mapped to canonical source keys.
///
/// Lookups are case-insensitive. `RunningFor` and `State` are valid find
/// keys even though they are not columns.
pub const DOCKER_KEY_ALIASES: &[(&str, &str)] = &[
    ("ID", "ID"),
    ("Image", "Image"),
    ("Img", "Image"),
    ("Command", "Command"),
    ("Cmd", "Command"),
    ("Created", "CreatedAt"),
    ("CreatedAt", "CreatedAt"),
    ("Status", "Status"),
    ("Ports", "Ports"),
    ("Port", "Ports"),
    ("Publish", "Ports"),
    ("Names", "Names"),
    ("Name", "Names"),
    ("Size", "Size"),
    ("Health", "Health"),
    ("Labels", "Labels"),
    ("Label", "Labels"),
    ("RunningFor", "RunningFor"),
    ("State", "State"),
];

/// An ordered set of fields plus the alias table used to resolve keys.
#[derive(Debug, Clone, Copy)]
pub struct FieldUniverse<'a> {
    fields: &'a [Field],
    aliases: &'a [(&'a str, &'a str)],
}

impl<'a> FieldUniverse<'a> {
    /// Builds a universe from a field list and an alias table.
    #[must_use]
    pub const fn new(fields: &'a [Field], aliases: &'a [(&'a str, &'a str)]) -> Self {
        Self { fields, aliases }
    }

    /// The `docker ps` universe.
    #[must_use]
    pub const fn docker() -> FieldUniverse<'static> {
        FieldUniverse::new(DOCKER_FIELDS, DOCKER_KEY_ALIASES)
    }

    /// All fields in display order.
    #[must_use]
    pub fn fields(&self) -> &'a [Field] {
        self.fields
    }

    /// Default columns in display order.
    pub fn defaults(&self) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(|f| f.default)
    }

    /// Finds a field by display name (case-insensitive).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'a Field> {
        self.fields.iter().find(|f| f.is_named(name))
    }

    /// Resolves a user-typed key to its canonical source key.
    ///
    /// Both the key and the alias table are compared lower-cased, so
    /// `created`, `CREATED` and `createdat` all resolve to `CreatedAt`.
    #[must_use]
    pub fn canonical_key(&self, key: &str) -> Option<&'a str> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.aliases
            .iter()
            .find(|(alias, _)| alias.to_lowercase() == key)
            .map(|(_, canonical)| *canonical)
    }
}

impl Default for FieldUniverse<'static> {
    fn default() -> Self {
        Self::docker()
    }
}
