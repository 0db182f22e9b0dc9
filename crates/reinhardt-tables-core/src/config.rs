//! Table configuration files
//!
//! Tables can be declared in TOML and built against a
//! [`ColumnLibrary`](crate::library::ColumnLibrary):
//!
//! ```toml
//! [attrs]
//! class = "paleblue"
//!
//! [[columns]]
//! name = "title"
//! type = "editable"
//! verbose_name = "Title"
//!
//! [columns.attrs.td__input]
//! class = "inline-edit"
//! ```
//!
//! `type` defaults to `"column"`. Keys other than `name`, `type` and `attrs`
//! are [`ColumnOptions`]; unknown keys end up in `ColumnOptions::extra`.

use crate::attrs::{Attrs, AttrsConfig};
use crate::column::ColumnOptions;
use crate::error::{Result, TableError};
use crate::library::ColumnLibrary;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_column_type() -> String {
	"column".to_string()
}

/// Configuration of a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
	/// Column name within the table
	pub name: String,
	/// Registered column type
	#[serde(rename = "type", default = "default_column_type")]
	pub type_name: String,
	/// Raw attribute configuration, classified by [`AttrsConfig::from_map`]
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attrs: Option<Attrs>,
	/// Remaining column options
	#[serde(flatten)]
	pub options: ColumnOptions,
}

impl ColumnSpec {
	/// Creates a spec with no attributes and default options
	pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			type_name: type_name.into(),
			attrs: None,
			options: ColumnOptions::new(),
		}
	}

	/// Classifies the raw attribute configuration, if any
	pub fn attrs_config(&self) -> Result<Option<AttrsConfig>> {
		self.attrs
			.clone()
			.map(AttrsConfig::from_map)
			.transpose()
			.map_err(|err| match err {
				TableError::InvalidConfig(msg) => {
					TableError::InvalidConfig(format!("column '{}': {}", self.name, msg))
				}
				other => other,
			})
	}
}

/// Configuration of a whole table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
	/// `<table>` element attributes
	pub attrs: Attrs,
	/// Columns in display order
	pub columns: Vec<ColumnSpec>,
}

impl TableConfig {
	/// Parses a configuration from TOML text
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a TOML configuration file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let source = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Builds the table, resolving column types in `library`
	pub fn build(&self, library: &ColumnLibrary) -> Result<Table> {
		let mut table = Table::new().with_attrs(self.attrs.clone());
		for spec in &self.columns {
			let column = library.build(spec)?;
			table.add_column(spec.name.clone(), column)?;
		}
		tracing::debug!("built table with {} columns", table.len());
		Ok(table)
	}
}
