use serde_json::json;

use crate::{
  generator::{codegen::Printer, config::GeneratorConfig},
  tests::common::{default_config, document_with_schemas, transform_expect},
};

fn render(document_schemas: serde_json::Value, config: &GeneratorConfig, schema: &str) -> String {
  let document = document_with_schemas(document_schemas);
  let types = transform_expect(&document, config, schema);
  let target = types
    .iter()
    .find(|t| t.name() == schema)
    .expect("primary type should be generated");
  Printer::new(config).render(target).unwrap().contents
}

#[test]
fn nullable_dates_format_with_optional_chaining() {
  let config = default_config();
  let contents = render(
    json!({
      "Event": {
        "type": "object",
        "properties": {
          "id": { "type": "string" },
          "startedAt": { "type": "string", "format": "date-time" }
        },
        "required": ["id"]
      }
    }),
    &config,
    "Event",
  );

  assert!(contents.contains("public function jsonSerialize(): mixed"));
  assert!(contents.contains(r"'startedAt' => $this->startedAt?->format('Y-m-d\\TH:i:sP'),"));
  assert!(contents.contains("'id' => $this->id,"));
}

#[test]
fn required_dates_format_without_chaining() {
  let config = default_config();
  let contents = render(
    json!({
      "Event": {
        "type": "object",
        "properties": { "day": { "type": "string", "format": "date" } },
        "required": ["day"]
      }
    }),
    &config,
    "Event",
  );

  assert!(contents.contains("'day' => $this->day->format('Y-m-d'),"));
  assert!(!contents.contains("array_filter"));
}

#[test]
fn date_arrays_map_elements_preserving_null() {
  let config = default_config();
  let contents = render(
    json!({
      "Log": {
        "type": "object",
        "properties": {
          "id": { "type": "string" },
          "days": { "type": "array", "items": { "type": "string", "format": "date" } }
        },
        "required": ["id"]
      }
    }),
    &config,
    "Log",
  );

  assert!(contents.contains(
    "'days' => $this->days === null ? null : array_map(fn (\\DateTimeInterface $item): string => $item->format('Y-m-d'), $this->days),"
  ));
}

#[test]
fn optional_keys_filter_but_required_nullable_keys_stay() {
  let config = default_config();
  let contents = render(
    json!({
      "Event": {
        "type": "object",
        "properties": {
          "id": { "type": "string", "nullable": true },
          "when": { "type": "string", "format": "date-time" }
        },
        "required": ["id"]
      }
    }),
    &config,
    "Event",
  );

  assert!(contents.contains("array_filter"));
  assert!(contents.contains("\\in_array($key, ['id'], true)"));
}

#[test]
fn union_date_branches_check_the_runtime_type() {
  let config = default_config();
  let contents = render(
    json!({
      "Thing": {
        "type": "object",
        "properties": {
          "when": {
            "oneOf": [
              { "type": "string", "format": "date" },
              { "type": "integer" }
            ]
          }
        },
        "required": ["when"]
      }
    }),
    &config,
    "Thing",
  );

  assert!(contents.contains(
    "'when' => $this->when instanceof \\DateTimeInterface ? $this->when->format('Y-m-d') : $this->when,"
  ));
}

#[test]
fn dictionaries_zip_keys_against_values() {
  let config = default_config();
  let contents = render(
    json!({
      "Bag": { "type": "object", "additionalProperties": { "type": "integer" } }
    }),
    &config,
    "Bag",
  );

  assert!(contents.contains("foreach ($this->items as $item) {"));
  assert!(contents.contains("$data[$item->key] = $item->value;"));
}

#[test]
fn date_valued_dictionaries_format_values() {
  let config = default_config();
  let contents = render(
    json!({
      "Schedule": {
        "type": "object",
        "additionalProperties": { "type": "string", "format": "date" }
      }
    }),
    &config,
    "Schedule",
  );

  assert!(contents.contains(
    "$data[$item->key] = $item->value instanceof \\DateTimeInterface ? $item->value->format('Y-m-d') : $item->value;"
  ));
}

#[test]
fn collection_wrappers_return_their_inner_list() {
  let config = default_config();
  let contents = render(
    json!({
      "Names": { "type": "array", "items": { "type": "string" } }
    }),
    &config,
    "Names",
  );

  assert!(contents.contains("return $this->items;"));
}

#[test]
fn date_collections_map_their_items() {
  let config = default_config();
  let contents = render(
    json!({
      "Days": { "type": "array", "items": { "type": "string", "format": "date" } }
    }),
    &config,
    "Days",
  );

  assert!(contents.contains(
    "return array_map(fn (\\DateTimeInterface $item): string => $item->format('Y-m-d'), $this->items);"
  ));
}

#[test]
fn custom_format_strings_are_honored() {
  let mut config = default_config();
  config.date_format = "d/m/Y".to_string();

  let contents = render(
    json!({
      "Event": {
        "type": "object",
        "properties": { "day": { "type": "string", "format": "date" } },
        "required": ["day"]
      }
    }),
    &config,
    "Event",
  );

  assert!(contents.contains("$this->day->format('d/m/Y')"));
}
