use crate::document::{AdditionalProperties, Schema, SchemaType};

/// Extension methods for [`Schema`] to query its shape conveniently.
pub trait SchemaExt {
  /// Returns true if the schema carries a primitive `type` keyword
  /// (string, number, integer or boolean).
  fn has_primitive_type(&self) -> bool;

  /// Returns true if the schema can resolve to a scalar with no class
  /// indirection: a primitive type, no properties, no enum values and no
  /// composition keywords.
  fn is_scalar_like(&self) -> bool;

  /// Returns true if the schema is explicitly `type: null`.
  fn is_null(&self) -> bool;

  /// Returns true if the schema is an array type.
  fn is_array(&self) -> bool;

  /// Returns true if the schema declares enum values.
  fn has_enum_values(&self) -> bool;

  /// Returns true if the schema has `oneOf` variants.
  fn has_union(&self) -> bool;

  /// Returns true if the schema has `allOf` composition.
  fn has_intersection(&self) -> bool;

  /// Returns true if the schema is an object with a fixed property set.
  fn is_plain_object(&self) -> bool;

  /// Returns true if the schema has no fixed properties but declares
  /// `additionalProperties`, i.e. it models a string-keyed dictionary.
  /// A literal `additionalProperties: false` does not count.
  fn is_dictionary(&self) -> bool;

  /// Returns true if `nullable: true` is set explicitly.
  fn is_explicitly_nullable(&self) -> bool;
}

impl SchemaExt for Schema {
  fn has_primitive_type(&self) -> bool {
    matches!(
      self.schema_type,
      Some(SchemaType::String | SchemaType::Number | SchemaType::Integer | SchemaType::Boolean)
    )
  }

  fn is_scalar_like(&self) -> bool {
    self.has_primitive_type()
      && self.properties.is_empty()
      && self.enum_values.is_empty()
      && self.one_of.is_empty()
      && self.any_of.is_empty()
      && self.all_of.is_empty()
  }

  fn is_null(&self) -> bool {
    matches!(self.schema_type, Some(SchemaType::Null))
  }

  fn is_array(&self) -> bool {
    matches!(self.schema_type, Some(SchemaType::Array))
  }

  fn has_enum_values(&self) -> bool {
    !self.enum_values.is_empty()
  }

  fn has_union(&self) -> bool {
    !self.one_of.is_empty()
  }

  fn has_intersection(&self) -> bool {
    !self.all_of.is_empty()
  }

  fn is_plain_object(&self) -> bool {
    if self.has_enum_values() || self.has_union() || self.has_intersection() || self.is_array() {
      return false;
    }
    let is_object_type = matches!(self.schema_type, Some(SchemaType::Object)) || self.schema_type.is_none();
    is_object_type && !self.properties.is_empty()
  }

  fn is_dictionary(&self) -> bool {
    if !self.properties.is_empty() {
      return false;
    }
    match &self.additional_properties {
      Some(AdditionalProperties::Bool(allowed)) => *allowed,
      Some(AdditionalProperties::Schema(_)) => true,
      None => false,
    }
  }

  fn is_explicitly_nullable(&self) -> bool {
    self.nullable == Some(true)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::document::Schema;

  fn schema(value: serde_json::Value) -> Schema {
    serde_json::from_value(value).expect("schema fixture")
  }

  #[test]
  fn scalar_like_requires_a_bare_primitive() {
    assert!(schema(json!({ "type": "string" })).is_scalar_like());
    assert!(schema(json!({ "type": "integer", "format": "int64" })).is_scalar_like());
    assert!(!schema(json!({ "type": "string", "enum": ["a"] })).is_scalar_like());
    assert!(!schema(json!({ "type": "object" })).is_scalar_like());
    assert!(!schema(json!({ "type": "string", "allOf": [{ "type": "string" }] })).is_scalar_like());
  }

  #[test]
  fn plain_objects_need_properties_and_no_compositions() {
    assert!(schema(json!({ "type": "object", "properties": { "id": { "type": "string" } } })).is_plain_object());
    assert!(schema(json!({ "properties": { "id": { "type": "string" } } })).is_plain_object());
    assert!(!schema(json!({ "type": "object" })).is_plain_object());
    assert!(!schema(json!({ "type": "object", "properties": { "id": {} }, "oneOf": [{}] })).is_plain_object());
  }

  #[test]
  fn dictionaries_are_additional_properties_without_fixed_ones() {
    assert!(schema(json!({ "type": "object", "additionalProperties": true })).is_dictionary());
    assert!(schema(json!({ "type": "object", "additionalProperties": { "type": "string" } })).is_dictionary());
    assert!(!schema(json!({ "type": "object", "additionalProperties": false })).is_dictionary());
    assert!(
      !schema(json!({
        "type": "object",
        "properties": { "id": { "type": "string" } },
        "additionalProperties": true
      }))
      .is_dictionary()
    );
  }
}
