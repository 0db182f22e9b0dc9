//! Table definition and HTML rendering

use crate::attrs::{AttributeDict, Attrs};
use crate::column::{BoundColumn, Column};
use crate::error::{Result, TableError};
use crate::html::{SafeString, conditional_escape};
use indexmap::IndexMap;
use serde_json::Value;

static NULL: Value = Value::Null;

/// One table row: column name to cell value
pub type Row = IndexMap<String, Value>;

/// An ordered set of named columns
///
/// # Example
///
/// ```rust
/// use reinhardt_tables_core::attrs::ColumnAttrs;
/// use reinhardt_tables_core::column::{BaseColumn, ColumnOptions};
/// use reinhardt_tables_core::table::{Row, Table};
/// use serde_json::json;
///
/// let mut table = Table::new();
/// table
///     .add_column("name", Box::new(BaseColumn::new(ColumnAttrs::new(), ColumnOptions::new())))
///     .unwrap();
///
/// let row: Row = [("name".to_string(), json!("Alice"))].into_iter().collect();
/// let html = table.render(&[row]);
/// assert!(html.as_str().contains("<td>Alice</td>"));
/// ```
#[derive(Debug, Default)]
pub struct Table {
	columns: IndexMap<String, Box<dyn Column>>,
	attrs: Attrs,
}

impl Table {
	/// Creates a table without columns
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `<table>` element's attributes
	pub fn with_attrs(mut self, attrs: Attrs) -> Self {
		self.attrs = attrs;
		self
	}

	/// The `<table>` element's attributes
	pub fn attrs(&self) -> &Attrs {
		&self.attrs
	}

	/// Appends a column under `name`
	pub fn add_column(&mut self, name: impl Into<String>, column: Box<dyn Column>) -> Result<()> {
		let name = name.into();
		if self.columns.contains_key(&name) {
			return Err(TableError::DuplicateColumn(name));
		}
		self.columns.insert(name, column);
		Ok(())
	}

	/// Number of columns, visible or not
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns `true` if the table has no columns
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Looks up a column by name
	pub fn column(&self, name: &str) -> Option<BoundColumn<'_>> {
		self.columns
			.get_key_value(name)
			.map(|(name, column)| BoundColumn::new(name, column.as_ref()))
	}

	/// All columns in definition order
	pub fn columns(&self) -> impl Iterator<Item = BoundColumn<'_>> {
		self.columns
			.iter()
			.map(|(name, column)| BoundColumn::new(name, column.as_ref()))
	}

	/// Visible columns in definition order
	pub fn visible_columns(&self) -> impl Iterator<Item = BoundColumn<'_>> {
		self.columns().filter(|bound| bound.visible())
	}

	/// Renders the table as HTML
	///
	/// Cells for columns missing from a row render the column default.
	pub fn render(&self, rows: &[Row]) -> SafeString {
		let columns: Vec<BoundColumn<'_>> = self.visible_columns().collect();
		let mut html = open_tag("table", &AttributeDict::from(self.attrs.clone()));

		html.push_str("<thead><tr>");
		for bound in &columns {
			html.push_str(&open_tag("th", &bound.header_cell_attrs()));
			html.push_str(&conditional_escape(&bound.header()));
			html.push_str("</th>");
		}
		html.push_str("</tr></thead><tbody>");

		for row in rows {
			html.push_str("<tr>");
			for bound in &columns {
				let value = row.get(bound.name()).unwrap_or(&NULL);
				html.push_str(&open_tag("td", &bound.body_cell_attrs()));
				html.push_str(&conditional_escape(&bound.render(value)));
				html.push_str("</td>");
			}
			html.push_str("</tr>");
		}

		html.push_str("</tbody></table>");
		SafeString::new(html)
	}
}

fn open_tag(tag: &str, attrs: &AttributeDict) -> String {
	let attrs = attrs.as_html();
	if attrs.is_empty() {
		format!("<{}>", tag)
	} else {
		format!("<{} {}>", tag, attrs)
	}
}
