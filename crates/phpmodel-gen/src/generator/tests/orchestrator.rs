use serde_json::json;

use crate::{
  generator::{
    errors::TransformError,
    model::PhpType,
    orchestrator::ClassGenerator,
  },
  tests::common::{default_config, document_with_components},
};

#[test]
fn categories_emit_in_fixed_order() {
  let document = document_with_components(json!({
    "schemas": {
      "Zeta": { "type": "object", "properties": { "id": { "type": "string" } } }
    },
    "requestBodies": {
      "CreateUser": {
        "content": {
          "application/json": {
            "schema": { "type": "object", "properties": { "name": { "type": "string" } } }
          }
        }
      }
    },
    "responses": {
      "UserList": {
        "description": "ok",
        "content": {
          "application/json": {
            "schema": { "type": "object", "properties": { "total": { "type": "integer" } } }
          }
        }
      }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();

  let names: Vec<&str> = output.types.iter().map(PhpType::name).collect();
  assert_eq!(names, ["Zeta", "CreateUser", "UserList"]);

  let namespaces: Vec<String> = output.types.iter().map(|t| t.namespace().to_string()).collect();
  assert_eq!(
    namespaces,
    [
      "App\\Models\\Schemas",
      "App\\Models\\RequestBodies",
      "App\\Models\\Responses"
    ]
  );
}

#[test]
fn non_json_request_body_fails_the_run() {
  let document = document_with_components(json!({
    "requestBodies": {
      "Upload": {
        "content": {
          "text/plain": { "schema": { "type": "string" } }
        }
      }
    }
  }));
  let config = default_config();
  let err = ClassGenerator::new(&document, &config).generate().unwrap_err();

  assert_eq!(
    err,
    TransformError::OnlyJsonContentTypeSupported {
      component: "Upload".to_string(),
      media_types: "text/plain".to_string()
    }
  );
}

#[test]
fn json_with_parameters_still_counts_as_json() {
  let document = document_with_components(json!({
    "responses": {
      "Ok": {
        "description": "ok",
        "content": {
          "application/json; charset=utf-8": {
            "schema": { "type": "object", "properties": { "id": { "type": "string" } } }
          }
        }
      }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();
  assert_eq!(output.types.len(), 1);
}

#[test]
fn components_without_content_are_skipped() {
  let document = document_with_components(json!({
    "responses": {
      "NoContent": { "description": "no body" }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();

  assert!(output.types.is_empty());
  assert_eq!(output.stats.components_skipped, 1);
}

#[test]
fn inline_children_flatten_next_to_their_parent() {
  let document = document_with_components(json!({
    "schemas": {
      "Order": {
        "type": "object",
        "properties": {
          "address": {
            "type": "object",
            "properties": { "street": { "type": "string" } }
          }
        }
      },
      "Other": { "type": "object", "properties": { "id": { "type": "string" } } }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();

  let names: Vec<&str> = output.types.iter().map(PhpType::name).collect();
  assert_eq!(names, ["Order", "OrderAddress", "Other"]);
  assert_eq!(output.stats.inline_types_generated, 1);
}

#[test]
fn request_body_referencing_a_schema_imports_across_namespaces() {
  let document = document_with_components(json!({
    "schemas": {
      "User": { "type": "object", "properties": { "id": { "type": "string" } } }
    },
    "requestBodies": {
      "CreateUser": {
        "content": {
          "application/json": {
            "schema": {
              "type": "object",
              "properties": { "user": { "$ref": "#/components/schemas/User" } },
              "required": ["user"]
            }
          }
        }
      }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();

  let body = output
    .types
    .iter()
    .find_map(|t| match t {
      PhpType::Class(def) if def.name == "CreateUser" => Some(def),
      _ => None,
    })
    .expect("request body class");

  assert!(body.uses.contains("App\\Models\\Schemas\\User"));

  let imports = output
    .imports
    .for_namespace(&body.namespace)
    .expect("request body namespace imports");
  assert!(imports.contains("App\\Models\\Schemas\\User"));
}

#[test]
fn scalar_schemas_are_skipped_with_a_warning() {
  let document = document_with_components(json!({
    "schemas": {
      "JustAString": { "type": "string" }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();

  assert!(output.types.is_empty());
  assert_eq!(output.stats.warnings.len(), 1);
}

#[test]
fn stats_count_generated_shapes() {
  let document = document_with_components(json!({
    "schemas": {
      "Status": { "type": "string", "enum": ["a", "b"] },
      "Bag": { "type": "object", "additionalProperties": true },
      "Names": { "type": "array", "items": { "type": "string" } },
      "User": { "type": "object", "properties": { "id": { "type": "string" } } }
    }
  }));
  let config = default_config();
  let output = ClassGenerator::new(&document, &config).generate().unwrap();

  assert_eq!(output.stats.enums_generated, 1);
  assert_eq!(output.stats.dictionaries_generated, 1);
  assert_eq!(output.stats.array_wrappers_generated, 1);
  assert!(output.stats.classes_generated >= 3);
}
