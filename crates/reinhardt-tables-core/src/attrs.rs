//! HTML attribute handling for columns
//!
//! Columns carry their HTML attributes as a [`ColumnAttrs`] value: one ordered
//! attribute mapping per render context. The recognized contexts are
//!
//! - `th`, `td`, `cell`: header cell, body cell, and both
//! - `input`: `<input>` elements in both header and body cells
//! - `th__input`: replaces `input` for header cells
//! - `td__input`: replaces `input` for body cells
//!
//! [`AttributeDict`] merges attribute layers and serializes them to an HTML
//! attribute string. Attribute values are always escaped by the serializer;
//! callers pass raw values.

use crate::html::{SafeString, escape};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered mapping of HTML attribute name to value
pub type Attrs = IndexMap<String, Value>;

/// Top-level keys accepted in a structured attribute configuration
pub const VALID_ATTRS_KEYS: [&str; 6] = ["input", "th__input", "td__input", "th", "td", "cell"];

/// Builds an [`Attrs`] mapping from string pairs
///
/// # Examples
///
/// ```
/// use reinhardt_tables_core::attrs::attrs;
///
/// let a = attrs([("class", "x"), ("maxlength", "10")]);
/// assert_eq!(a["class"], "x");
/// ```
pub fn attrs<K, V, I>(pairs: I) -> Attrs
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<Value>,
{
	pairs
		.into_iter()
		.map(|(k, v)| (k.into(), v.into()))
		.collect()
}

/// Converts an attribute value to its HTML text form
///
/// Returns `None` for `null`, which means "omit the attribute".
/// Arrays are space-joined so class lists can be given as sequences.
pub fn attr_value_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		Value::Array(items) => Some(
			items
				.iter()
				.filter_map(attr_value_to_string)
				.collect::<Vec<_>>()
				.join(" "),
		),
		Value::Object(_) => Some(value.to_string()),
	}
}

/// An ordered set of HTML attributes ready to be rendered
///
/// # Examples
///
/// ```
/// use reinhardt_tables_core::attrs::{AttributeDict, attrs};
///
/// let base = attrs([("type", "text"), ("name", "title")]);
/// let dict = AttributeDict::merged(&base, &attrs([("class", "wide")]));
/// assert_eq!(dict.as_html().as_str(), r#"type="text" name="title" class="wide""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDict {
	attrs: Attrs,
}

impl AttributeDict {
	/// Creates an empty attribute set
	pub fn new() -> Self {
		Self::default()
	}

	/// Layers `overrides` on top of `base`
	///
	/// Keys from `overrides` win. An overridden key keeps its position from
	/// `base`; keys only present in `overrides` are appended in their order.
	pub fn merged(base: &Attrs, overrides: &Attrs) -> Self {
		let mut dict = Self::from(base.clone());
		dict.extend(overrides);
		dict
	}

	/// Inserts or replaces one attribute
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Inserts or replaces every attribute in `overrides`
	pub fn extend(&mut self, overrides: &Attrs) {
		for (name, value) in overrides {
			self.attrs.insert(name.clone(), value.clone());
		}
	}

	/// Number of attributes, including `null` ones that will not render
	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	/// Returns `true` if no attributes are set
	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Iterates attributes in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.attrs.iter()
	}

	/// Serializes to an HTML attribute string
	///
	/// Produces `name="value"` pairs separated by single spaces in iteration
	/// order. Values are HTML-escaped, `null` values are omitted, and names
	/// that could break out of the attribute context are skipped.
	pub fn as_html(&self) -> SafeString {
		let mut parts = Vec::with_capacity(self.attrs.len());
		for (name, value) in &self.attrs {
			if !is_valid_attr_name(name) {
				tracing::debug!("skipping invalid HTML attribute name {:?}", name);
				continue;
			}
			if let Some(text) = attr_value_to_string(value) {
				parts.push(format!("{}=\"{}\"", name, escape(&text)));
			}
		}
		SafeString::new(parts.join(" "))
	}

}

impl From<Attrs> for AttributeDict {
	fn from(attrs: Attrs) -> Self {
		Self { attrs }
	}
}

fn is_valid_attr_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}

/// Per-context attribute configuration of a column
///
/// Serialized with the double-underscore key names (`th__input`, `td__input`)
/// so configuration files keep the familiar spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnAttrs {
	/// Attributes of the header cell (`<th>`)
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub th: Attrs,
	/// Attributes of body cells (`<td>`)
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub td: Attrs,
	/// Attributes shared by header and body cells
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub cell: Attrs,
	/// `<input>` attributes for both header and body cells
	#[serde(skip_serializing_if = "Option::is_none")]
	pub input: Option<Attrs>,
	/// `<input>` attributes for header cells, replacing `input`
	#[serde(rename = "th__input", skip_serializing_if = "Option::is_none")]
	pub th_input: Option<Attrs>,
	/// `<input>` attributes for body cells, replacing `input`
	#[serde(rename = "td__input", skip_serializing_if = "Option::is_none")]
	pub td_input: Option<Attrs>,
}

impl ColumnAttrs {
	/// Creates an empty configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `<th>` attributes
	pub fn th(mut self, attrs: Attrs) -> Self {
		self.th = attrs;
		self
	}

	/// Sets `<td>` attributes
	pub fn td(mut self, attrs: Attrs) -> Self {
		self.td = attrs;
		self
	}

	/// Sets attributes shared by `<th>` and `<td>`
	pub fn cell(mut self, attrs: Attrs) -> Self {
		self.cell = attrs;
		self
	}

	/// Sets `<input>` attributes for both contexts
	pub fn input(mut self, attrs: Attrs) -> Self {
		self.input = Some(attrs);
		self
	}

	/// Sets header-context `<input>` attributes
	pub fn th_input(mut self, attrs: Attrs) -> Self {
		self.th_input = Some(attrs);
		self
	}

	/// Sets body-context `<input>` attributes
	pub fn td_input(mut self, attrs: Attrs) -> Self {
		self.td_input = Some(attrs);
		self
	}

	/// Effective `<th>` attributes (`cell` overlaid with `th`)
	pub fn header_cell(&self) -> AttributeDict {
		AttributeDict::merged(&self.cell, &self.th)
	}

	/// Effective `<td>` attributes (`cell` overlaid with `td`)
	pub fn body_cell(&self) -> AttributeDict {
		AttributeDict::merged(&self.cell, &self.td)
	}

	/// Input override for body cells: `td__input`, falling back to `input`
	///
	/// An empty mapping counts as unset, so `td__input = {}` still falls
	/// back to `input`.
	pub fn body_input(&self) -> Option<&Attrs> {
		Self::first_non_empty(self.td_input.as_ref(), self.input.as_ref())
	}

	/// Input override for header cells: `th__input`, falling back to `input`
	pub fn header_input(&self) -> Option<&Attrs> {
		Self::first_non_empty(self.th_input.as_ref(), self.input.as_ref())
	}

	fn first_non_empty<'a>(specific: Option<&'a Attrs>, general: Option<&'a Attrs>) -> Option<&'a Attrs> {
		specific
			.filter(|a| !a.is_empty())
			.or_else(|| general.filter(|a| !a.is_empty()))
	}
}

/// Attribute configuration as found in an untyped source (TOML, JSON)
///
/// A raw mapping whose keys are all outside [`VALID_ATTRS_KEYS`] is an
/// old-style flat mapping of input attributes. Anything else is structured.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrsConfig {
	/// Per-context configuration
	Structured(ColumnAttrs),
	/// Flat input attributes from before per-context keys existed
	Legacy(Attrs),
}

impl AttrsConfig {
	/// Classifies and parses a raw attribute mapping
	///
	/// Unknown keys next to recognized ones are ignored. A recognized key with
	/// a non-mapping value is an error.
	pub fn from_map(raw: IndexMap<String, Value>) -> crate::Result<Self> {
		let recognized = raw.keys().any(|k| VALID_ATTRS_KEYS.contains(&k.as_str()));
		if !raw.is_empty() && !recognized {
			return Ok(AttrsConfig::Legacy(raw));
		}

		let mut structured = ColumnAttrs::new();
		for (key, value) in raw {
			let slot = match key.as_str() {
				"th" => &mut structured.th,
				"td" => &mut structured.td,
				"cell" => &mut structured.cell,
				"input" => structured.input.get_or_insert_with(Attrs::new),
				"th__input" => structured.th_input.get_or_insert_with(Attrs::new),
				"td__input" => structured.td_input.get_or_insert_with(Attrs::new),
				other => {
					tracing::debug!("ignoring unrecognized attrs key {:?}", other);
					continue;
				}
			};
			*slot = match value {
				Value::Object(map) => map.into_iter().collect(),
				other => {
					return Err(crate::TableError::InvalidConfig(format!(
						"attrs key '{}' must be a mapping of attributes, got {}",
						key, other
					)));
				}
			};
		}
		Ok(AttrsConfig::Structured(structured))
	}
}

impl From<ColumnAttrs> for AttrsConfig {
	fn from(attrs: ColumnAttrs) -> Self {
		AttrsConfig::Structured(attrs)
	}
}
