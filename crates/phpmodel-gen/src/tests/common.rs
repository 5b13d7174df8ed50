use serde_json::json;

use crate::{
  document::{Document, Schema},
  generator::{
    config::GeneratorConfig,
    converter::{ClassTransformer, TransformedSchema},
    errors::TransformError,
    model::{ClassDef, EnumDef, PhpType},
    namespace::NamespaceResolver,
    registry::{ComponentCategory, DocumentIndex},
  },
};

/// Builds a document whose components carry only the given schema map.
pub fn document_with_schemas(schemas: serde_json::Value) -> Document {
  serde_json::from_value(json!({
    "openapi": "3.0.3",
    "info": { "title": "Fixture", "version": "1.0.0" },
    "components": { "schemas": schemas }
  }))
  .expect("fixture document should deserialize")
}

/// Builds a full document from arbitrary component maps.
pub fn document_with_components(components: serde_json::Value) -> Document {
  serde_json::from_value(json!({
    "openapi": "3.0.3",
    "info": { "title": "Fixture", "version": "1.0.0" },
    "components": components
  }))
  .expect("fixture document should deserialize")
}

pub fn schema_from(value: serde_json::Value) -> Schema {
  serde_json::from_value(value).expect("fixture schema should deserialize")
}

pub fn default_config() -> GeneratorConfig {
  GeneratorConfig::default()
}

/// Runs the transformer against one named schema of the fixture document.
pub fn transform_named(
  document: &Document,
  config: &GeneratorConfig,
  name: &str,
) -> Result<Option<TransformedSchema>, TransformError> {
  let namespaces = NamespaceResolver::new(&config.namespace);
  let transformer = ClassTransformer::new(document, config, &namespaces);
  let index = DocumentIndex::new(document);
  let entry = document
    .components
    .schemas
    .get(name)
    .unwrap_or_else(|| panic!("schema '{name}' missing from fixture"));
  let (_, schema) = index.resolve_node(entry).expect("fixture schema should resolve");
  transformer.transform(ComponentCategory::Schemas, name, schema)
}

/// Like [`transform_named`] but unwraps the outcome, panicking when the
/// schema produced nothing.
pub fn transform_expect(document: &Document, config: &GeneratorConfig, name: &str) -> Vec<PhpType> {
  transform_named(document, config, name)
    .expect("transform should succeed")
    .expect("transform should produce types")
    .types
}

pub fn find_class<'a>(types: &'a [PhpType], name: &str) -> &'a ClassDef {
  types
    .iter()
    .find_map(|t| match t {
      PhpType::Class(def) if def.name == name => Some(def),
      _ => None,
    })
    .unwrap_or_else(|| panic!("class '{name}' should be generated"))
}

pub fn find_enum<'a>(types: &'a [PhpType], name: &str) -> &'a EnumDef {
  types
    .iter()
    .find_map(|t| match t {
      PhpType::Enum(def) if def.name == name => Some(def),
      _ => None,
    })
    .unwrap_or_else(|| panic!("enum '{name}' should be generated"))
}
