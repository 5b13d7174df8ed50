use super::{INDENT, doc_block, serializers};
use crate::generator::{
  config::GeneratorConfig,
  errors::TransformError,
  model::{ClassDef, ClassKind, PropertyDef, TypeRef},
};

pub(super) fn render_class(def: &ClassDef, config: &GeneratorConfig) -> Result<String, TransformError> {
  match &def.kind {
    ClassKind::Plain | ClassKind::DictionaryEntry => render_plain_class(def, config),
    ClassKind::Dictionary { entry_class, .. } => render_dictionary_class(def, entry_class, config),
    ClassKind::ArrayWrapper { item } => render_array_wrapper(def, item, config),
  }
}

fn interfaces(def: &ClassDef) -> Vec<&'static str> {
  match def.kind {
    ClassKind::ArrayWrapper { .. } => vec![
      "\\Countable",
      "\\ArrayAccess",
      "\\IteratorAggregate",
      "\\JsonSerializable",
    ],
    _ if def.serializer.is_some() => vec!["\\JsonSerializable"],
    _ => vec![],
  }
}

fn class_header(def: &ClassDef) -> String {
  let mut out = doc_block(&def.docs.0, "");

  let implements = interfaces(def);
  if implements.is_empty() {
    out.push_str(&format!("final class {}\n{{\n", def.name));
  } else {
    out.push_str(&format!("final class {} implements {}\n{{\n", def.name, implements.join(", ")));
  }
  out
}

fn render_plain_class(def: &ClassDef, config: &GeneratorConfig) -> Result<String, TransformError> {
  let mut out = class_header(def);

  out.push_str(&render_constructor(&def.properties));

  if let Some(plan) = &def.serializer {
    out.push('\n');
    out.push_str(&serializers::render_serializer(def, plan, config)?);
  }

  out.push_str("}\n");
  Ok(out)
}

/// Constructor property promotion. PHP requires defaulted parameters after
/// required ones, so parameters partition required-first while keeping the
/// declared order within each group.
fn render_constructor(properties: &[PropertyDef]) -> String {
  if properties.is_empty() {
    return String::new();
  }

  let ordered: Vec<&PropertyDef> = properties
    .iter()
    .filter(|p| !p.has_null_default())
    .chain(properties.iter().filter(|p| p.has_null_default()))
    .collect();

  let indent = INDENT.repeat(2);
  let mut out = format!("{INDENT}public function __construct(\n");
  for property in ordered {
    let mut doc_lines = property.docs.0.clone();
    if let Some(doc_type) = &property.type_ref.doc_type {
      doc_lines.push(format!("@var {doc_type}"));
    }
    out.push_str(&doc_block(&doc_lines, &indent));

    let default = if property.has_null_default() { " = null" } else { "" };
    out.push_str(&format!(
      "{indent}public readonly {} ${}{default},\n",
      property.type_ref.to_php_type(),
      property.name
    ));
  }
  out.push_str(&format!("{INDENT}) {{\n{INDENT}}}\n"));
  out
}

fn render_dictionary_class(def: &ClassDef, entry_class: &str, config: &GeneratorConfig) -> Result<String, TransformError> {
  let mut out = class_header(def);

  out.push_str(&doc_block(&[format!("@var {entry_class}[]")], INDENT));
  out.push_str(&format!("{INDENT}private readonly array $items;\n\n"));
  out.push_str(&format!(
    "{INDENT}public function __construct({entry_class} ...$items)\n{INDENT}{{\n{}$this->items = $items;\n{INDENT}}}\n",
    INDENT.repeat(2)
  ));

  if let Some(plan) = &def.serializer {
    out.push('\n');
    out.push_str(&serializers::render_serializer(def, plan, config)?);
  }

  out.push_str("}\n");
  Ok(out)
}

fn render_array_wrapper(def: &ClassDef, item: &TypeRef, config: &GeneratorConfig) -> Result<String, TransformError> {
  let inner = INDENT.repeat(2);
  let item_type = item.to_php_type();
  let mut out = class_header(def);

  out.push_str(&doc_block(&[format!("@var {}[]", item.base.doc_name())], INDENT));
  out.push_str(&format!("{INDENT}private readonly array $items;\n\n"));
  out.push_str(&format!(
    "{INDENT}public function __construct({item_type} ...$items)\n{INDENT}{{\n{inner}$this->items = $items;\n{INDENT}}}\n\n"
  ));

  out.push_str(&format!(
    "{INDENT}public function count(): int\n{INDENT}{{\n{inner}return \\count($this->items);\n{INDENT}}}\n\n"
  ));
  out.push_str(&format!(
    "{INDENT}public function offsetExists(mixed $offset): bool\n{INDENT}{{\n{inner}return isset($this->items[$offset]);\n{INDENT}}}\n\n"
  ));
  out.push_str(&format!(
    "{INDENT}public function offsetGet(mixed $offset): mixed\n{INDENT}{{\n{inner}return $this->items[$offset];\n{INDENT}}}\n\n"
  ));
  out.push_str(&format!(
    "{INDENT}public function offsetSet(mixed $offset, mixed $value): void\n{INDENT}{{\n{inner}throw new \\LogicException('{} is read-only');\n{INDENT}}}\n\n",
    def.name
  ));
  out.push_str(&format!(
    "{INDENT}public function offsetUnset(mixed $offset): void\n{INDENT}{{\n{inner}throw new \\LogicException('{} is read-only');\n{INDENT}}}\n\n",
    def.name
  ));
  out.push_str(&format!(
    "{INDENT}public function getIterator(): \\ArrayIterator\n{INDENT}{{\n{inner}return new \\ArrayIterator($this->items);\n{INDENT}}}\n"
  ));

  if let Some(plan) = &def.serializer {
    out.push('\n');
    out.push_str(&serializers::render_serializer(def, plan, config)?);
  }

  out.push_str("}\n");
  Ok(out)
}
