use std::{
  collections::{BTreeSet, HashSet},
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

/// Words that cannot be used as PHP class or enum names (case-insensitive).
static RESERVED_CLASS_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class", "clone", "const",
    "continue", "declare", "default", "do", "echo", "else", "elseif", "empty", "enum", "exit", "extends", "false",
    "final", "finally", "float", "fn", "for", "foreach", "function", "global", "goto", "if", "implements", "include",
    "instanceof", "insteadof", "int", "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never",
    "new", "null", "object", "or", "parent", "print", "private", "protected", "public", "readonly", "require",
    "return", "self", "static", "string", "switch", "throw", "trait", "true", "try", "unset", "use", "var", "void",
    "while", "xor", "yield",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Base sanitization shared by every identifier kind: transliterates to
/// ASCII, replaces invalid characters with underscores, collapses runs of
/// underscores and trims them from both ends.
pub fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Converts a schema or property name into a valid PHP class name.
///
/// Reserved words (PHP treats them case-insensitively) get a `Model` suffix;
/// a leading digit is prefixed with `T`; an empty result becomes `Unnamed`.
pub fn to_php_class_name(name: &str) -> String {
  let mut ident: String = sanitize(name).to_pascal_case();

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  if RESERVED_CLASS_NAMES.contains(ident.to_ascii_lowercase().as_str()) {
    ident.push_str("Model");
  }

  ident
}

/// Converts a schema property name into a PHP property/parameter name
/// (`camelCase`). A leading digit is prefixed with `_`; an empty result
/// becomes `_`.
pub fn to_php_property_name(name: &str) -> String {
  let mut ident = sanitize(name).to_camel_case();

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Converts an enum literal into a PHP enum case name (`PascalCase`).
pub fn to_php_case_name(value: &str) -> String {
  let mut ident = sanitize(value).to_pascal_case();

  if ident.is_empty() {
    return "Empty".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Names an inline class synthesized for an anonymous property schema:
/// `ParentName + Capitalize(PropertyName)`.
pub fn inline_class_name(parent: &str, property: &str) -> String {
  format!("{parent}{}", to_php_class_name(property))
}

/// Names the companion entry class of a dictionary schema.
pub fn dictionary_class_name(name: &str) -> String {
  format!("{}Dictionary", to_php_class_name(name))
}

/// Names an inline class synthesized for a union branch. The ordinal is the
/// 1-based branch position, always appended so branches of the same union
/// stay distinguishable.
pub fn union_branch_class_name(parent: &str, property: &str, ordinal: usize) -> String {
  format!("{}{ordinal}", inline_class_name(parent, property))
}

/// Names an inline class synthesized for array items: the singularized
/// property name concatenated onto the parent.
pub fn array_item_class_name(parent: &str, property: &str) -> String {
  inline_class_name(parent, &cruet::to_singular(property))
}

/// Names the item class of a top-level array schema: the singularized schema
/// name, or `Name + Item` when singularization is a no-op.
pub fn collection_item_class_name(name: &str) -> String {
  let class_name = to_php_class_name(name);
  let singular = to_php_class_name(&cruet::to_singular(name));
  if singular == class_name {
    format!("{class_name}Item")
  } else {
    singular
  }
}

/// Ensures a name is unique within a set of used names, appending a numeric
/// suffix on collision.
pub fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}
