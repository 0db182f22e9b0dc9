//! # Reinhardt Tables
//!
//! Data table rendering for Reinhardt, inspired by Django-tables2.
//!
//! Tables are ordered sets of named columns. Each column type decides how its
//! cells render; the table stitches header and body cells into a `<table>`.
//! Column types register themselves in a [`ColumnLibrary`] so tables can also
//! be declared in TOML.
//!
//! ## Feature Flags
//!
//! - `editable` (default) - [`EditableColumn`], cells rendered as
//!   `<input type="contenteditable">`
//!
//! Only column types whose crates are compiled in are registered; see
//! [`registered_column_types`] and [`library_diagnostics`].
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_tables::prelude::*;
//! use serde_json::json;
//!
//! let mut table = Table::new();
//! table
//!     .add_column(
//!         "title",
//!         Box::new(EditableColumn::new(
//!             ColumnAttrs::new().td_input(attrs([("class", "inline-edit")])),
//!             ColumnOptions::new(),
//!         )),
//!     )
//!     .unwrap();
//!
//! let row: Row = [("title".to_string(), json!("Draft"))].into_iter().collect();
//! let html = table.render(&[row]);
//! assert!(html.as_str().contains(
//!     r#"<input type="contenteditable" name="title" value="Draft" class="inline-edit"/>"#
//! ));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use reinhardt_tables_core::{
	AttributeDict, Attrs, AttrsConfig, BaseColumn, BoundColumn, Column, ColumnAttrs,
	ColumnLibrary, ColumnOptions, ColumnRegistration, ColumnSpec, RegistrationDiagnostic, Result,
	Row, SafeString, Table, TableConfig, TableError, VALID_ATTRS_KEYS,
};
pub use reinhardt_tables_core::{attrs, column, config, html, library, table};

#[cfg(feature = "editable")]
pub use reinhardt_tables_editable::{DEPRECATION_TARGET, Deprecation, EditableColumn};

/// The process-wide column library
pub fn library() -> &'static ColumnLibrary {
	ColumnLibrary::global()
}

/// Names of the column types available in this build, sorted
///
/// # Examples
///
/// ```
/// let types = reinhardt_tables::registered_column_types();
/// assert!(types.contains(&"column".to_string()));
/// ```
pub fn registered_column_types() -> Vec<String> {
	library().type_names()
}

/// Column types that were submitted but could not be registered
pub fn library_diagnostics() -> Vec<RegistrationDiagnostic> {
	library().diagnostics()
}

/// Builds a table from TOML configuration using the process-wide library
pub fn table_from_toml(source: &str) -> Result<Table> {
	TableConfig::from_toml_str(source)?.build(library())
}

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::attrs::attrs;
	pub use crate::{
		AttributeDict, Attrs, BaseColumn, BoundColumn, Column, ColumnAttrs, ColumnLibrary,
		ColumnOptions, Row, SafeString, Table, TableConfig, TableError,
	};
	pub use serde_json::Value;

	#[cfg(feature = "editable")]
	pub use crate::EditableColumn;
}
