use serde_json::json;

use crate::{
  generator::{
    errors::TransformError,
    model::{ClassKind, PhpValueType, SerializerShape},
  },
  tests::common::{default_config, document_with_schemas, find_class, transform_expect, transform_named},
};

#[test]
fn additional_properties_schema_produces_an_entry_class_pair() {
  let document = document_with_schemas(json!({
    "Test": {
      "type": "object",
      "additionalProperties": { "$ref": "#/components/schemas/Test2" }
    },
    "Test2": {
      "type": "object",
      "properties": { "id": { "type": "string" } }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Test");

  assert_eq!(types.len(), 2);
  let parent = find_class(&types, "Test");
  let entry = find_class(&types, "TestDictionary");

  match &parent.kind {
    ClassKind::Dictionary { entry_class, value } => {
      assert_eq!(entry_class, "TestDictionary");
      assert_eq!(value.base, PhpValueType::Object("Test2".to_string()));
    }
    other => panic!("expected a dictionary, got {other:?}"),
  }

  assert_eq!(entry.properties.len(), 2);
  assert_eq!(entry.property("key").unwrap().type_ref.to_php_type(), "string");
  assert_eq!(entry.property("value").unwrap().type_ref.to_php_type(), "Test2");
}

#[test]
fn boolean_additional_properties_keep_mixed_values() {
  let document = document_with_schemas(json!({
    "Bag": { "type": "object", "additionalProperties": true }
  }));
  let types = transform_expect(&document, &default_config(), "Bag");
  let entry = find_class(&types, "BagDictionary");

  assert_eq!(entry.property("value").unwrap().type_ref.to_php_type(), "mixed");
}

#[test]
fn additional_properties_false_is_not_a_dictionary() {
  let document = document_with_schemas(json!({
    "Empty": { "type": "object", "additionalProperties": false }
  }));
  let outcome = transform_named(&document, &default_config(), "Empty").unwrap();
  assert!(outcome.is_none());
}

#[test]
fn fixed_properties_win_over_additional_properties() {
  let document = document_with_schemas(json!({
    "Mixed": {
      "type": "object",
      "properties": { "id": { "type": "string" } },
      "additionalProperties": true
    }
  }));
  let types = transform_expect(&document, &default_config(), "Mixed");
  let class = find_class(&types, "Mixed");
  assert_eq!(class.kind, ClassKind::Plain);
}

#[test]
fn dictionary_serializer_zips_entries() {
  let document = document_with_schemas(json!({
    "Test": {
      "type": "object",
      "additionalProperties": { "type": "integer" }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Test");
  let parent = find_class(&types, "Test");

  let plan = parent.serializer.as_ref().expect("dictionaries always serialize");
  assert_eq!(plan.shape, SerializerShape::Dictionary { value_dates: None });
}

#[test]
fn date_valued_dictionary_formats_entry_values() {
  let document = document_with_schemas(json!({
    "Schedule": {
      "type": "object",
      "additionalProperties": { "type": "string", "format": "date" }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Schedule");
  let parent = find_class(&types, "Schedule");

  let plan = parent.serializer.as_ref().unwrap();
  assert!(matches!(
    plan.shape,
    SerializerShape::Dictionary {
      value_dates: Some(crate::generator::model::DateKind::Date)
    }
  ));
}

#[test]
fn union_valued_dictionary_with_dates_cannot_serialize() {
  let document = document_with_schemas(json!({
    "Odd": {
      "type": "object",
      "additionalProperties": {
        "oneOf": [
          { "type": "string", "format": "date" },
          { "type": "integer" }
        ]
      }
    }
  }));
  let err = transform_named(&document, &default_config(), "Odd").unwrap_err();
  assert_eq!(
    err,
    TransformError::DictionarySerialize {
      class: "Odd".to_string()
    }
  );
}

#[test]
fn inline_dictionary_property_wraps_like_a_named_one() {
  let document = document_with_schemas(json!({
    "Holder": {
      "type": "object",
      "properties": {
        "labels": {
          "type": "object",
          "additionalProperties": { "type": "string" }
        }
      }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Holder");

  let holder = find_class(&types, "Holder");
  find_class(&types, "HolderLabels");
  find_class(&types, "HolderLabelsDictionary");

  assert_eq!(
    holder.property("labels").unwrap().type_ref.base,
    PhpValueType::Object("HolderLabels".to_string())
  );
}
