//! Base column implementation and column options

use super::Column;
use crate::attrs::{Attrs, AttrsConfig, ColumnAttrs, VALID_ATTRS_KEYS};
use crate::config::ColumnSpec;
use crate::error::{Result, TableError};
use crate::library::ColumnRegistration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options accepted by every column type
///
/// Column types forward the options they do not interpret themselves to
/// [`BaseColumn`]. Keys nobody recognizes are kept in [`extra`](Self::extra)
/// so embedding applications can carry their own settings on a column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
	/// Header text; defaults to the humanized column name
	#[serde(skip_serializing_if = "Option::is_none")]
	pub verbose_name: Option<String>,
	/// Whether the table may be ordered by this column; the column type decides when unset
	#[serde(skip_serializing_if = "Option::is_none")]
	pub orderable: Option<bool>,
	/// Whether the column is rendered; defaults to true
	#[serde(skip_serializing_if = "Option::is_none")]
	pub visible: Option<bool>,
	/// Value rendered when a row has none
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<Value>,
	/// Deprecated header `<input>` attributes, superseded by `th__input`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header_attrs: Option<Attrs>,
	/// Application-defined options passed through untouched
	#[serde(flatten)]
	pub extra: IndexMap<String, Value>,
}

impl ColumnOptions {
	/// Creates options with every setting left to the column type
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header text
	pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = Some(verbose_name.into());
		self
	}

	/// Sets whether this column is orderable
	pub fn orderable(mut self, orderable: bool) -> Self {
		self.orderable = Some(orderable);
		self
	}

	/// Sets whether this column is visible
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = Some(visible);
		self
	}

	/// Sets the value rendered for missing cells
	pub fn default_value(mut self, value: impl Into<Value>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Sets header `<input>` attributes the old way
	#[deprecated(note = "use `ColumnAttrs::th_input` instead")]
	pub fn header_attrs(mut self, attrs: Attrs) -> Self {
		self.header_attrs = Some(attrs);
		self
	}

	/// Adds an option by name
	///
	/// Names of typed options (`verbose_name`, `orderable`, `visible`,
	/// `default`, `header_attrs`) set that option instead of landing in
	/// [`extra`](Self::extra), the same as when options are deserialized.
	pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		let key = key.into();
		let value = value.into();
		if RESERVED_OPTIONS.contains(&key.as_str()) {
			self.set_reserved(&key, value);
		} else {
			self.extra.insert(key, value);
		}
		self
	}

	fn set_reserved(&mut self, key: &str, value: Value) {
		match (key, value) {
			("verbose_name", Value::String(verbose_name)) => self.verbose_name = Some(verbose_name),
			("orderable", Value::Bool(orderable)) => self.orderable = Some(orderable),
			("visible", Value::Bool(visible)) => self.visible = Some(visible),
			("default", value) => self.default = Some(value),
			("header_attrs", Value::Object(map)) => self.header_attrs = Some(map.into_iter().collect()),
			(key, value) => {
				tracing::warn!("ignoring option {:?}: unexpected value {}", key, value);
			}
		}
	}
}

const RESERVED_OPTIONS: [&str; 5] = ["verbose_name", "orderable", "visible", "default", "header_attrs"];

/// The plain column: renders the cell value as escaped text
///
/// # Example
///
/// ```rust
/// use reinhardt_tables_core::attrs::{ColumnAttrs, attrs};
/// use reinhardt_tables_core::column::{BaseColumn, BoundColumn, Column, ColumnOptions};
/// use serde_json::json;
///
/// let column = BaseColumn::new(
///     ColumnAttrs::new().td(attrs([("class", "num")])),
///     ColumnOptions::new().orderable(false),
/// );
/// let bound = BoundColumn::new("age", &column);
/// assert_eq!(bound.render(&json!(42)).as_str(), "42");
/// assert!(!column.orderable());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColumn {
	attrs: ColumnAttrs,
	verbose_name: Option<String>,
	orderable: bool,
	visible: bool,
	default: Value,
	extra: IndexMap<String, Value>,
}

impl BaseColumn {
	/// Registered type name
	pub const TYPE_NAME: &'static str = "column";

	/// Creates a column from its attribute configuration and options
	///
	/// `header_attrs` has no meaning for a plain column and is dropped.
	pub fn new(attrs: ColumnAttrs, options: ColumnOptions) -> Self {
		if options.header_attrs.is_some() {
			tracing::debug!("plain column ignores header_attrs");
		}
		Self {
			attrs,
			verbose_name: options.verbose_name,
			orderable: options.orderable.unwrap_or(true),
			visible: options.visible.unwrap_or(true),
			default: options.default.unwrap_or(Value::Null),
			extra: options.extra,
		}
	}

	/// Application-defined options carried by this column
	pub fn extra(&self) -> &IndexMap<String, Value> {
		&self.extra
	}

	fn from_spec(spec: &ColumnSpec) -> Result<Box<dyn Column>> {
		let attrs = match spec.attrs_config()? {
			None => ColumnAttrs::new(),
			Some(AttrsConfig::Structured(attrs)) => attrs,
			Some(AttrsConfig::Legacy(_)) => {
				return Err(TableError::InvalidConfig(format!(
					"column '{}': attrs keys must be one of {}",
					spec.name,
					VALID_ATTRS_KEYS.join(", ")
				)));
			}
		};
		Ok(Box::new(Self::new(attrs, spec.options.clone())))
	}
}

impl Column for BaseColumn {
	fn type_name(&self) -> &'static str {
		Self::TYPE_NAME
	}

	fn attrs(&self) -> &ColumnAttrs {
		&self.attrs
	}

	fn orderable(&self) -> bool {
		self.orderable
	}

	fn visible(&self) -> bool {
		self.visible
	}

	fn verbose_name(&self) -> Option<&str> {
		self.verbose_name.as_deref()
	}

	fn default_value(&self) -> &Value {
		&self.default
	}
}

inventory::submit! {
	ColumnRegistration::new(BaseColumn::TYPE_NAME, BaseColumn::from_spec)
}
