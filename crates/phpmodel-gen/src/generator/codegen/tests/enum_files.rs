use serde_json::json;

use crate::{
  generator::codegen::Printer,
  tests::common::{default_config, document_with_schemas, transform_expect},
};

#[test]
fn string_enums_render_as_backed_enums() {
  let config = default_config();
  let document = document_with_schemas(json!({
    "Status": { "type": "string", "enum": ["active", "on-hold"] }
  }));
  let types = transform_expect(&document, &config, "Status");
  let contents = Printer::new(&config).render(&types[0]).unwrap().contents;

  assert!(contents.contains("enum Status: string\n{"));
  assert!(contents.contains("case Active = 'active';"));
  assert!(contents.contains("case OnHold = 'on-hold';"));
}

#[test]
fn int_enums_render_numeric_values() {
  let config = default_config();
  let document = document_with_schemas(json!({
    "Code": { "type": "integer", "enum": [1, 2] }
  }));
  let types = transform_expect(&document, &config, "Code");
  let contents = Printer::new(&config).render(&types[0]).unwrap().contents;

  assert!(contents.contains("enum Code: int\n{"));
  assert!(contents.contains("case _1 = 1;"));
}

#[test]
fn case_descriptions_render_as_doc_comments() {
  let config = default_config();
  let document = document_with_schemas(json!({
    "Status": {
      "type": "string",
      "enum": ["a"],
      "x-enum-varnames": ["Alpha"],
      "x-enum-descriptions": ["the first"]
    }
  }));
  let types = transform_expect(&document, &config, "Status");
  let contents = Printer::new(&config).render(&types[0]).unwrap().contents;

  assert!(contents.contains("/** the first */"));
  assert!(contents.contains("case Alpha = 'a';"));
}

#[test]
fn single_quotes_in_values_are_escaped() {
  let config = default_config();
  let document = document_with_schemas(json!({
    "Quote": { "type": "string", "enum": ["it's"] }
  }));
  let types = transform_expect(&document, &config, "Quote");
  let contents = Printer::new(&config).render(&types[0]).unwrap().contents;

  assert!(contents.contains(r"case ItS = 'it\'s';"));
}
