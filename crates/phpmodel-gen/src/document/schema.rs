use indexmap::IndexMap;
use serde::Deserialize;

/// A JSON Schema `type` keyword value.
///
/// Unknown type strings are carried through as [`SchemaType::Other`] so the
/// resolver can name them in its error instead of failing the document parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SchemaType {
  String,
  Number,
  Integer,
  Boolean,
  Array,
  Object,
  Null,
  Other(String),
}

impl From<String> for SchemaType {
  fn from(value: String) -> Self {
    match value.as_str() {
      "string" => Self::String,
      "number" => Self::Number,
      "integer" => Self::Integer,
      "boolean" => Self::Boolean,
      "array" => Self::Array,
      "object" => Self::Object,
      "null" => Self::Null,
      _ => Self::Other(value),
    }
  }
}

impl From<&str> for SchemaType {
  fn from(value: &str) -> Self {
    Self::from(value.to_string())
  }
}

/// A reference or an inline schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Schema(Box<Schema>),
}

impl SchemaOrRef {
  #[must_use]
  pub fn as_ref_path(&self) -> Option<&str> {
    match self {
      Self::Ref { ref_path } => Some(ref_path),
      Self::Schema(_) => None,
    }
  }
}

/// `additionalProperties` accepts a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Bool(bool),
  Schema(Box<SchemaOrRef>),
}

/// A single OpenAPI schema object.
///
/// Property maps use [`IndexMap`] so declared order survives into generated
/// constructor parameter lists. Recognized `x-` extensions are typed fields.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
  #[serde(rename = "type", default)]
  pub schema_type: Option<SchemaType>,

  #[serde(default)]
  pub format: Option<String>,

  #[serde(default)]
  pub title: Option<String>,

  #[serde(default)]
  pub description: Option<String>,

  #[serde(default)]
  pub nullable: Option<bool>,

  #[serde(rename = "default", default)]
  pub default_value: Option<serde_json::Value>,

  #[serde(default)]
  pub properties: IndexMap<String, SchemaOrRef>,

  #[serde(default)]
  pub required: Vec<String>,

  #[serde(rename = "additionalProperties", default)]
  pub additional_properties: Option<AdditionalProperties>,

  #[serde(default)]
  pub items: Option<Box<SchemaOrRef>>,

  #[serde(rename = "allOf", default)]
  pub all_of: Vec<SchemaOrRef>,

  #[serde(rename = "oneOf", default)]
  pub one_of: Vec<SchemaOrRef>,

  #[serde(rename = "anyOf", default)]
  pub any_of: Vec<SchemaOrRef>,

  #[serde(rename = "enum", default)]
  pub enum_values: Vec<serde_json::Value>,

  #[serde(default)]
  pub example: Option<serde_json::Value>,

  #[serde(default)]
  pub deprecated: Option<bool>,

  /// Per-schema namespace override.
  #[serde(rename = "x-php-namespace", default)]
  pub php_namespace: Option<String>,

  /// Member names for enum cases, matched positionally to `enum`.
  #[serde(rename = "x-enum-varnames", default)]
  pub enum_var_names: Vec<String>,

  /// Doc-comments for enum cases, matched positionally to `enum`.
  #[serde(rename = "x-enum-descriptions", default)]
  pub enum_descriptions: Vec<String>,
}

impl Schema {
  /// Convenience constructor for a bare typed schema.
  #[must_use]
  pub fn of_type(schema_type: SchemaType) -> Self {
    Self {
      schema_type: Some(schema_type),
      ..Self::default()
    }
  }
}
