#![allow(deprecated)]


use fixtures::{editable_table, sample_rows};
use reinhardt_tables::prelude::*;
use reinhardt_tables::{Deprecation, VALID_ATTRS_KEYS};
use rstest::*;
use serde_json::json;

fn render_cell(column: &EditableColumn, value: Value, name: &str) -> String {
	let bound = BoundColumn::new(name, column);
	column.render(&value, &bound).into_string()
}

/// Attribute `name="value"` pairs of a rendered input, in order
fn attribute_pairs(html: &str) -> Vec<(String, String)> {
	let inner = html
		.strip_prefix("<input ")
		.and_then(|rest| rest.strip_suffix("/>"))
		.expect("rendered cell is a self-closing input");
	inner
		.split("\" ")
		.map(|pair| {
			let (name, value) = pair.split_once("=\"").expect("name=\"value\" pair");
			(name.to_string(), value.trim_end_matches('"').to_string())
		})
		.collect()
}

#[rstest]
fn test_td_input_cell_has_exactly_four_attributes() {
	// Arrange
	let column = EditableColumn::new(
		ColumnAttrs::new().td_input(attrs([("class", "x")])),
		ColumnOptions::new(),
	);

	// Act
	let html = render_cell(&column, json!("hello"), "field1");

	// Assert
	assert_eq!(
		attribute_pairs(&html),
		[
			("type".to_string(), "contenteditable".to_string()),
			("name".to_string(), "field1".to_string()),
			("value".to_string(), "hello".to_string()),
			("class".to_string(), "x".to_string()),
		]
	);
}

#[rstest]
fn test_generic_input_used_without_td_input() {
	let column = EditableColumn::new(
		ColumnAttrs::new().input(attrs([("class", "y")])),
		ColumnOptions::new(),
	);

	let html = render_cell(&column, json!("hello"), "field1");

	assert!(html.contains(r#"class="y""#));
}

#[rstest]
fn test_td_input_wins_over_input() {
	let column = EditableColumn::new(
		ColumnAttrs::new()
			.input(attrs([("class", "y")]))
			.td_input(attrs([("class", "x")])),
		ColumnOptions::new(),
	);

	let html = render_cell(&column, json!("hello"), "field1");

	assert!(html.contains(r#"class="x""#));
	assert!(!html.contains(r#"class="y""#));
}

#[rstest]
fn test_rendering_twice_is_byte_identical() {
	let column = EditableColumn::new(
		ColumnAttrs::new().td_input(attrs([("class", "x"), ("data-row", "4")])),
		ColumnOptions::new(),
	);

	let first = render_cell(&column, json!("hello"), "field1");
	let second = render_cell(&column, json!("hello"), "field1");

	assert_eq!(first.as_bytes(), second.as_bytes());
}

#[rstest]
fn test_orderable_defaults_to_false() {
	let column = EditableColumn::new(ColumnAttrs::new(), ColumnOptions::new());
	let overridden = EditableColumn::new(ColumnAttrs::new(), ColumnOptions::new().orderable(true));

	assert!(!column.orderable());
	assert!(overridden.orderable());
}

#[rstest]
fn test_legacy_flat_attrs_warn_once() {
	// Act
	let column = EditableColumn::with_legacy_attrs(attrs([("class", "x")]), ColumnOptions::new());

	// Assert
	assert_eq!(column.deprecations().len(), 1);
	let message = column.deprecations()[0].to_string();
	assert!(VALID_ATTRS_KEYS.iter().all(|key| message.contains(key)));
	assert_eq!(
		render_cell(&column, json!("hello"), "field1"),
		r#"<input type="contenteditable" name="field1" value="hello" class="x"/>"#
	);
}

#[rstest]
fn test_header_attrs_removed_from_forwarded_options() {
	let options = ColumnOptions::new()
		.header_attrs(attrs([("class", "h")]))
		.extra("endpoint", "/articles/");

	let column = EditableColumn::new(ColumnAttrs::new(), options);

	assert_eq!(column.deprecations(), [Deprecation::HeaderAttrs]);
	assert_eq!(column.attrs().th_input, Some(attrs([("class", "h")])));
	assert_eq!(column.extra().len(), 1);
	assert_eq!(column.extra()["endpoint"], "/articles/");
}

#[rstest]
fn test_table_renders_editable_cells(editable_table: Table, sample_rows: Vec<Row>) {
	// Act
	let html = editable_table.render(&sample_rows);

	// Assert
	let html = html.as_str();
	assert!(html.starts_with(r#"<table id="articles"><thead><tr><th>ID</th><th>Title</th></tr></thead>"#));
	assert!(html.contains(
		r#"<td class="editable"><input type="contenteditable" name="title" value="Draft" class="inline-edit"/></td>"#
	));
	assert!(html.contains(r#"value="Review &lt;urgent&gt;""#));
	assert!(!html.contains("alice"));
	assert_eq!(html.matches("<input ").count(), 3);
}

#[rstest]
fn test_table_column_metadata(editable_table: Table) {
	let title = editable_table.column("title").unwrap();
	let id = editable_table.column("id").unwrap();

	assert!(!title.orderable());
	assert!(id.orderable());
	assert_eq!(title.column().type_name(), "editable");
}

#[rstest]
fn test_missing_value_uses_default() {
	let mut table = Table::new();
	table
		.add_column(
			"note",
			Box::new(EditableColumn::new(
				ColumnAttrs::new(),
				ColumnOptions::new().default_value(""),
			)),
		)
		.unwrap();

	let html = table.render(&[Row::new()]);

	assert!(html.as_str().contains(r#"<input type="contenteditable" name="note" value=""/>"#));
}
