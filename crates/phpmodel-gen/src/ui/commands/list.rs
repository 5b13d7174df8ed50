use std::path::Path;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use crossterm::style::Stylize;

use crate::{
  document::{Document, Schema, SchemaOrRef},
  ui::Colors,
  utils::{SchemaExt, spec::SpecLoader},
};

fn schema_shape(schema: &Schema) -> &'static str {
  if schema.has_intersection() {
    "allOf"
  } else if schema.has_union() {
    "oneOf"
  } else if schema.has_enum_values() {
    "enum"
  } else if schema.is_array() {
    "array"
  } else if schema.is_dictionary() {
    "dictionary"
  } else if schema.is_plain_object() {
    "object"
  } else {
    "scalar"
  }
}

fn schema_row(document: &Document, name: &str, entry: &SchemaOrRef) -> (String, String, String) {
  let index = crate::generator::registry::DocumentIndex::new(document);
  match index.resolve_node(entry) {
    Ok((_, schema)) => (
      name.to_string(),
      schema_shape(schema).to_string(),
      schema.properties.len().to_string(),
    ),
    Err(_) => (name.to_string(), "unresolved".to_string(), "-".to_string()),
  }
}

pub async fn list_schemas(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;

  println!(
    "{}",
    format!(
      "{} {} (openapi {})",
      document.info.title, document.info.version, document.openapi
    )
    .with(colors.primary())
  );

  let mut table = Table::new();
  table.load_preset(UTF8_FULL_CONDENSED);
  table.set_header(vec!["Schema", "Shape", "Properties"]);

  for (name, entry) in &document.components.schemas {
    let (name, shape, properties) = schema_row(&document, name, entry);
    table.add_row(vec![name, shape, properties]);
  }

  println!("{table}");
  println!(
    "{}",
    format!(
      "{} schemas, {} request bodies, {} responses",
      document.components.schemas.len(),
      document.components.request_bodies.len(),
      document.components.responses.len()
    )
    .with(colors.primary())
  );

  Ok(())
}
