//! Core types for Reinhardt data tables
//!
//! This crate provides the Django-tables2 style building blocks that column
//! types are written against:
//!
//! - **HTML**: escaping and the [`SafeString`](html::SafeString) marker
//! - **Attributes**: per-context [`ColumnAttrs`](attrs::ColumnAttrs) and the
//!   [`AttributeDict`](attrs::AttributeDict) serializer
//! - **Columns**: the [`Column`](column::Column) trait, the plain
//!   [`BaseColumn`](column::BaseColumn) and [`BoundColumn`](column::BoundColumn)
//! - **Library**: link-time registration of column types by name
//! - **Tables**: ordered named columns rendered to HTML
//! - **Configuration**: tables declared in TOML
//!
//! # Architecture
//!
//! ```text
//! TableConfig ──build──▶ ColumnLibrary ──factory──▶ Box<dyn Column>
//!                                                        │
//!                         Table ◀──────add_column────────┘
//!                           │
//!                        render ──▶ BoundColumn::render ──▶ SafeString
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attrs;
pub mod column;
pub mod config;
pub mod error;
pub mod html;
pub mod library;
pub mod table;

// Re-exports for convenience
pub use attrs::{AttributeDict, Attrs, AttrsConfig, ColumnAttrs, VALID_ATTRS_KEYS};
pub use column::{BaseColumn, BoundColumn, Column, ColumnOptions};
pub use config::{ColumnSpec, TableConfig};
pub use error::{Result, TableError};
pub use html::SafeString;
pub use library::{ColumnLibrary, ColumnRegistration, RegistrationDiagnostic};
pub use table::{Row, Table};
