
use fixtures::sample_rows;
use reinhardt_tables::prelude::*;
use reinhardt_tables::{Deprecation, EditableColumn as Editable};
use rstest::*;
use std::io::Write;

const ARTICLES: &str = r#"
[attrs]
class = "articles"

[[columns]]
name = "id"
verbose_name = "ID"

[[columns]]
name = "title"
type = "editable"

[columns.attrs.input]
class = "y"

[columns.attrs.td__input]
class = "x"
maxlength = 80

[[columns]]
name = "author"
type = "editable"
orderable = true
attrs = { class = "legacy" }
"#;

#[rstest]
fn test_library_exposes_compiled_column_types() {
	let types = reinhardt_tables::registered_column_types();

	assert_eq!(types, ["column", "editable"]);
	assert!(reinhardt_tables::library_diagnostics().is_empty());
}

#[rstest]
fn test_table_from_toml(sample_rows: Vec<Row>) {
	// Arrange
	let table = reinhardt_tables::table_from_toml(ARTICLES).unwrap();

	// Act
	let html = table.render(&sample_rows[..1]);

	// Assert
	let html = html.as_str();
	assert!(html.contains(
		r#"<input type="contenteditable" name="title" value="Draft" class="x" maxlength="80"/>"#
	));
	assert!(html.contains(
		r#"<input type="contenteditable" name="author" value="alice" class="legacy"/>"#
	));
	assert!(html.contains("<td>1</td>"));
}

#[rstest]
fn test_config_orderable_flags() {
	let table = reinhardt_tables::table_from_toml(ARTICLES).unwrap();

	assert!(table.column("id").unwrap().orderable());
	assert!(!table.column("title").unwrap().orderable());
	assert!(table.column("author").unwrap().orderable());
}

#[rstest]
fn test_config_legacy_attrs_are_reinterpreted() {
	// Arrange
	let config = TableConfig::from_toml_str(ARTICLES).unwrap();
	let author = &config.columns[2];

	// Act
	let column = Editable::from_config(
		author.attrs_config().unwrap().unwrap(),
		author.options.clone(),
	);

	// Assert
	assert_eq!(column.attrs().td_input, Some(attrs([("class", "legacy")])));
	assert!(matches!(
		column.deprecations(),
		[Deprecation::LegacyFlatAttrs { .. }]
	));
}

#[rstest]
fn test_config_header_attrs_option() {
	let config = TableConfig::from_toml_str(
		r#"
[[columns]]
name = "title"
type = "editable"
header_attrs = { placeholder = "Search" }

[columns.attrs.th__input]
class = "filter"
"#,
	)
	.unwrap();
	let spec = &config.columns[0];

	let column = Editable::from_config(spec.attrs_config().unwrap().unwrap(), spec.options.clone());

	assert_eq!(column.deprecations(), [Deprecation::HeaderAttrs]);
	assert_eq!(
		column.header_input().as_str(),
		r#"<input type="contenteditable" class="filter" placeholder="Search"/>"#
	);
}

#[rstest]
fn test_table_from_file() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(ARTICLES.as_bytes()).unwrap();

	// Act
	let config = TableConfig::from_file(file.path()).unwrap();
	let table = config.build(reinhardt_tables::library()).unwrap();

	// Assert
	let names: Vec<_> = table.columns().map(|c| c.name()).collect();
	assert_eq!(names, ["id", "title", "author"]);
}

#[rstest]
fn test_unknown_column_type_is_an_error() {
	let result = reinhardt_tables::table_from_toml(
		r#"
[[columns]]
name = "chart"
type = "sparkline"
"#,
	);

	assert!(matches!(result, Err(TableError::UnknownColumnType(name)) if name == "sparkline"));
}
