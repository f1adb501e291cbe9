//! docker-ps-cli
//!
//! A wrapper for `docker ps` with selectable columns, post-fetch find
//! filters and a styled table.
//!
//! # Architecture
//!
//! - **Fields**: the fixed universe of displayable columns and key aliases
//! - **Columns**: resolves show/hide directives into a column schema
//! - **Find**: parses `key=pattern` expressions and filters records
//! - **Docker**: runs `docker ps` and parses its JSON lines
//! - **Render**: draws the table into a ratatui buffer and writes it out
//!
//! # Usage
//!
//! ```
//! use docker_ps_cli::columns::{resolve, ColumnDirectives, Directive, HideList};
//! use docker_ps_cli::diagnostics::NullSink;
//! use docker_ps_cli::fields::FieldUniverse;
//! use docker_ps_cli::find;
//! use docker_ps_cli::record::Record;
//!
//! let directives = ColumnDirectives::new()
//!     .with("Ports", Directive::Shown)
//!     .with("Names", Directive::Shown);
//! let hidden = HideList::from_args(["Ports"]);
//! let schema = resolve(&FieldUniverse::docker(), &directives, &hidden, &mut NullSink);
//! assert_eq!(schema.pairs(), vec![("Names", "Names")]);
//!
//! let records = vec![
//!     Record::from_pairs([("ID", "abc123"), ("Status", "Up 2 hours")]),
//!     Record::from_pairs([("ID", "def456"), ("Status", "Exited (0)")]),
//! ];
//! let kept = find::filter(records, "Status=Up*", &mut NullSink);
//! assert_eq!(kept.len(), 1);
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::struct_excessive_bools)]

pub mod app;
pub mod cli;
pub mod columns;
pub mod config;
pub mod diagnostics;
pub mod docker;
pub mod error;
pub mod fields;
pub mod find;
pub mod logging;
pub mod record;
pub mod render;
pub mod theme;

// Re-export main types
pub use cli::Cli;
pub use columns::{ColumnDirectives, ColumnSchema, Directive, HideList, resolve};
pub use config::Config;
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use error::AppError;
pub use fields::{Field, FieldUniverse};
pub use find::{FindExpression, filter};
pub use record::Record;
