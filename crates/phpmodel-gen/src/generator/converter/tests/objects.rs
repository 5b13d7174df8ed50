use serde_json::json;

use crate::{
  generator::model::{PhpType, PhpValueType},
  tests::common::{default_config, document_with_schemas, find_class, transform_expect, transform_named},
};

#[test]
fn required_string_property_stays_non_nullable() {
  let document = document_with_schemas(json!({
    "Test5": {
      "type": "object",
      "properties": { "id": { "type": "string" } },
      "required": ["id"]
    }
  }));
  let types = transform_expect(&document, &default_config(), "Test5");

  assert_eq!(types.len(), 1);
  let class = find_class(&types, "Test5");
  assert_eq!(class.properties.len(), 1);

  let id = &class.properties[0];
  assert_eq!(id.name, "id");
  assert!(id.required);
  assert!(!id.nullable);
  assert_eq!(id.type_ref.to_php_type(), "string");
}

#[test]
fn optional_properties_are_nullable_with_null_default() {
  let document = document_with_schemas(json!({
    "User": {
      "type": "object",
      "properties": {
        "id": { "type": "string" },
        "name": { "type": "string" }
      },
      "required": ["id"]
    }
  }));
  let types = transform_expect(&document, &default_config(), "User");
  let class = find_class(&types, "User");

  let name = class.property("name").unwrap();
  assert!(!name.required);
  assert!(name.nullable);
  assert!(name.has_null_default());
  assert_eq!(name.type_ref.to_php_type(), "?string");
}

#[test]
fn explicit_nullable_forces_nullability_on_required_properties() {
  let document = document_with_schemas(json!({
    "User": {
      "type": "object",
      "properties": {
        "id": { "type": "string", "nullable": true }
      },
      "required": ["id"]
    }
  }));
  let types = transform_expect(&document, &default_config(), "User");
  let class = find_class(&types, "User");

  let id = class.property("id").unwrap();
  assert!(id.required);
  assert!(id.nullable);
  assert!(!id.has_null_default());
}

#[test]
fn properties_keep_declared_order() {
  let document = document_with_schemas(json!({
    "Ordered": {
      "type": "object",
      "properties": {
        "zebra": { "type": "string" },
        "apple": { "type": "string" },
        "mango": { "type": "string" }
      }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Ordered");
  let class = find_class(&types, "Ordered");

  let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["zebra", "apple", "mango"]);
}

#[test]
fn wire_names_convert_to_camel_case_and_are_kept() {
  let document = document_with_schemas(json!({
    "Event": {
      "type": "object",
      "properties": { "created_at": { "type": "string" } }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Event");
  let class = find_class(&types, "Event");

  let property = &class.properties[0];
  assert_eq!(property.name, "createdAt");
  assert_eq!(property.wire_name, "created_at");
}

#[test]
fn inline_object_property_spawns_a_sibling_class() {
  let document = document_with_schemas(json!({
    "Order": {
      "type": "object",
      "properties": {
        "shipping_address": {
          "type": "object",
          "properties": { "street": { "type": "string" } },
          "required": ["street"]
        }
      }
    }
  }));
  let types = transform_expect(&document, &default_config(), "Order");

  let order = find_class(&types, "Order");
  let address = order.property("shippingAddress").unwrap();
  assert_eq!(address.type_ref.base, PhpValueType::Object("OrderShippingAddress".to_string()));

  let inline = find_class(&types, "OrderShippingAddress");
  assert_eq!(inline.namespace, order.namespace);
  assert!(inline.property("street").unwrap().required);
}

#[test]
fn deeply_nested_inline_objects_chain_their_names() {
  let document = document_with_schemas(json!({
    "A": {
      "type": "object",
      "properties": {
        "b": {
          "type": "object",
          "properties": {
            "c": {
              "type": "object",
              "properties": { "leaf": { "type": "string" } }
            }
          }
        }
      }
    }
  }));
  let types = transform_expect(&document, &default_config(), "A");

  find_class(&types, "AB");
  find_class(&types, "ABC");
}

#[test]
fn reference_to_scalar_named_schema_inlines_the_scalar() {
  let document = document_with_schemas(json!({
    "Uuid": { "type": "string", "format": "uuid" },
    "User": {
      "type": "object",
      "properties": { "id": { "$ref": "#/components/schemas/Uuid" } },
      "required": ["id"]
    }
  }));
  let types = transform_expect(&document, &default_config(), "User");
  let class = find_class(&types, "User");

  assert_eq!(class.property("id").unwrap().type_ref.to_php_type(), "string");
  assert!(types.iter().all(|t| t.name() != "Uuid"));
}

#[test]
fn bare_scalar_schema_produces_no_class() {
  let document = document_with_schemas(json!({
    "JustAString": { "type": "string" }
  }));
  let outcome = transform_named(&document, &default_config(), "JustAString").unwrap();
  assert!(outcome.is_none());
}

#[test]
fn transform_is_idempotent() {
  let document = document_with_schemas(json!({
    "Test": {
      "type": "object",
      "properties": {
        "reference": {
          "oneOf": [
            { "type": "object", "properties": { "id": { "type": "string" } } },
            { "$ref": "#/components/schemas/Test2" }
          ]
        },
        "when": { "type": "string", "format": "date-time" }
      }
    },
    "Test2": {
      "type": "object",
      "properties": { "id": { "type": "string" } }
    }
  }));
  let config = default_config();

  let first = transform_expect(&document, &config, "Test");
  let second = transform_expect(&document, &config, "Test");
  assert_eq!(first, second);

  let first_names: Vec<&str> = first.iter().map(PhpType::name).collect();
  let second_names: Vec<&str> = second.iter().map(PhpType::name).collect();
  assert_eq!(first_names, second_names);
}

#[test]
fn all_of_schema_collapses_into_one_class() {
  let document = document_with_schemas(json!({
    "Base": {
      "type": "object",
      "properties": { "id": { "type": "string" } },
      "required": ["id"]
    },
    "Derived": {
      "allOf": [
        { "$ref": "#/components/schemas/Base" },
        { "type": "object", "properties": { "name": { "type": "string" } } }
      ]
    }
  }));
  let types = transform_expect(&document, &default_config(), "Derived");
  let class = find_class(&types, "Derived");

  assert!(class.property("id").unwrap().required);
  assert!(class.property("name").unwrap().nullable);
}
