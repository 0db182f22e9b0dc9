//! Editable column type implementation

use crate::deprecation::Deprecation;
use reinhardt_tables_core::attrs::AttributeDict;
use reinhardt_tables_core::{
	Attrs, AttrsConfig, BaseColumn, BoundColumn, Column, ColumnAttrs, ColumnOptions,
	ColumnRegistration, ColumnSpec, Result, SafeString,
};
use serde_json::Value;

/// Column whose body cells render as a contenteditable `<input>`
///
/// Sensible defaults:
///
/// - the input's `name` attribute is the column name (overridable via attrs)
/// - `orderable` defaults to `false`
///
/// In addition to the `th`, `td` and `cell` attrs every column supports, the
/// input is configured through
///
/// - `input`: `<input>` attributes in both `<td>` and `<th>`
/// - `th__input`: replaces `input` in header cells
/// - `td__input`: replaces `input` in body cells
///
/// Saving edited values is up to the embedding application (usually a
/// script posting changes back to an API endpoint).
///
/// # Example
///
/// ```rust
/// use reinhardt_tables_core::attrs::{ColumnAttrs, attrs};
/// use reinhardt_tables_core::{BoundColumn, Column, ColumnOptions};
/// use reinhardt_tables_editable::EditableColumn;
/// use serde_json::json;
///
/// let column = EditableColumn::new(
///     ColumnAttrs::new().td_input(attrs([("class", "x")])),
///     ColumnOptions::new(),
/// );
/// let bound = BoundColumn::new("field1", &column);
///
/// assert_eq!(
///     column.render(&json!("hello"), &bound).as_str(),
///     r#"<input type="contenteditable" name="field1" value="hello" class="x"/>"#
/// );
/// assert!(!column.orderable());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EditableColumn {
	base: BaseColumn,
	deprecations: Vec<Deprecation>,
}

impl EditableColumn {
	/// Registered type name
	pub const TYPE_NAME: &'static str = "editable";

	/// `type` attribute of the rendered input
	pub const INPUT_TYPE: &'static str = "contenteditable";

	/// Creates an editable column from structured attrs
	pub fn new(attrs: ColumnAttrs, options: ColumnOptions) -> Self {
		Self::normalize(attrs, options, Vec::new())
	}

	/// Creates an editable column from a flat mapping of input attributes
	///
	/// The mapping is used as `td__input` and a deprecation warning is
	/// emitted. An empty mapping carries no attributes and is accepted
	/// silently.
	#[deprecated(note = "use `EditableColumn::new` with `ColumnAttrs::td_input`")]
	pub fn with_legacy_attrs(attrs: Attrs, options: ColumnOptions) -> Self {
		if attrs.is_empty() {
			return Self::new(ColumnAttrs::new(), options);
		}
		let deprecation = Deprecation::LegacyFlatAttrs {
			attrs: attrs.clone(),
		};
		deprecation.emit();
		Self::normalize(ColumnAttrs::new().td_input(attrs), options, vec![deprecation])
	}

	/// Creates an editable column from attrs read out of configuration
	pub fn from_config(config: AttrsConfig, options: ColumnOptions) -> Self {
		match config {
			AttrsConfig::Structured(attrs) => Self::new(attrs, options),
			#[allow(deprecated)]
			AttrsConfig::Legacy(attrs) => Self::with_legacy_attrs(attrs, options),
		}
	}

	fn normalize(
		mut attrs: ColumnAttrs,
		mut options: ColumnOptions,
		mut deprecations: Vec<Deprecation>,
	) -> Self {
		if let Some(header_attrs) = options.header_attrs.take() {
			let deprecation = Deprecation::HeaderAttrs;
			deprecation.emit();
			deprecations.push(deprecation);
			attrs
				.th_input
				.get_or_insert_with(Attrs::new)
				.extend(header_attrs);
		}

		let options = ColumnOptions {
			orderable: Some(options.orderable.unwrap_or(false)),
			..options
		};

		Self {
			base: BaseColumn::new(attrs, options),
			deprecations,
		}
	}

	fn from_spec(spec: &ColumnSpec) -> Result<Box<dyn Column>> {
		let config = spec
			.attrs_config()?
			.unwrap_or_else(|| AttrsConfig::Structured(ColumnAttrs::new()));
		Ok(Box::new(Self::from_config(config, spec.options.clone())))
	}

	/// Deprecated configuration forms translated during construction
	pub fn deprecations(&self) -> &[Deprecation] {
		&self.deprecations
	}

	/// Application-defined options carried by this column
	pub fn extra(&self) -> &indexmap::IndexMap<String, Value> {
		self.base.extra()
	}

	/// Renders the body-cell input for `value` under the input name `name`
	pub fn render_input(&self, value: &Value, name: &str) -> SafeString {
		let mut dict = AttributeDict::new();
		dict.insert("type", Self::INPUT_TYPE);
		dict.insert("name", name);
		dict.insert("value", value.clone());
		if let Some(overrides) = self.base.attrs().body_input() {
			dict.extend(overrides);
		}
		SafeString::new(format!("<input {}/>", dict.as_html()))
	}

	/// Renders a header-context input from `th__input` (or `input`)
	///
	/// Tables keep the plain verbose name in the header; this is for
	/// templates that want an input there as well.
	pub fn header_input(&self) -> SafeString {
		let mut dict = AttributeDict::new();
		dict.insert("type", Self::INPUT_TYPE);
		if let Some(overrides) = self.base.attrs().header_input() {
			dict.extend(overrides);
		}
		SafeString::new(format!("<input {}/>", dict.as_html()))
	}
}

impl Column for EditableColumn {
	fn type_name(&self) -> &'static str {
		Self::TYPE_NAME
	}

	fn attrs(&self) -> &ColumnAttrs {
		self.base.attrs()
	}

	fn orderable(&self) -> bool {
		self.base.orderable()
	}

	fn visible(&self) -> bool {
		self.base.visible()
	}

	fn verbose_name(&self) -> Option<&str> {
		self.base.verbose_name()
	}

	fn default_value(&self) -> &Value {
		self.base.default_value()
	}

	fn render(&self, value: &Value, bound_column: &BoundColumn<'_>) -> SafeString {
		self.render_input(value, bound_column.name())
	}
}

inventory::submit! {
	ColumnRegistration::new(EditableColumn::TYPE_NAME, EditableColumn::from_spec)
}
