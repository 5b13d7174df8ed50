use std::fmt;

/// PHP value types a property or array element can carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhpValueType {
  Int,
  Float,
  Bool,
  #[default]
  String,
  Mixed,
  Null,
  /// `format: date`, rendered as `\DateTimeInterface`.
  Date,
  /// `format: date-time`, rendered as `\DateTimeInterface`.
  DateTime,
  /// A generated class or enum, by unqualified name.
  Object(String),
  /// A typed list. Declares as native `array`; the element type surfaces in
  /// doc-type strings.
  ArrayOf(Box<PhpValueType>),
  /// A native union type, e.g. `TestReference1|Test2`.
  Union(Vec<PhpValueType>),
}

impl PhpValueType {
  #[must_use]
  pub fn is_date_like(&self) -> bool {
    matches!(self, Self::Date | Self::DateTime)
  }

  /// The PHP type declaration for this value type.
  #[must_use]
  pub fn php_name(&self) -> String {
    match self {
      Self::Int => "int".to_string(),
      Self::Float => "float".to_string(),
      Self::Bool => "bool".to_string(),
      Self::String => "string".to_string(),
      Self::Mixed => "mixed".to_string(),
      Self::Null => "null".to_string(),
      Self::Date | Self::DateTime => "\\DateTimeInterface".to_string(),
      Self::Object(name) => name.clone(),
      Self::ArrayOf(_) => "array".to_string(),
      Self::Union(parts) => {
        let mut names: Vec<String> = vec![];
        for part in parts {
          let name = part.php_name();
          if !names.contains(&name) {
            names.push(name);
          }
        }
        names.join("|")
      }
    }
  }

  /// The doc-comment spelling: arrays keep their element type, unions list
  /// every member.
  #[must_use]
  pub fn doc_name(&self) -> String {
    match self {
      Self::ArrayOf(element) => match element.as_ref() {
        Self::Union(_) => format!("({})[]", element.doc_name()),
        _ => format!("{}[]", element.doc_name()),
      },
      Self::Union(parts) => parts.iter().map(Self::doc_name).collect::<Vec<_>>().join("|"),
      _ => self.php_name(),
    }
  }

  /// The first date-like member of a union, if any.
  #[must_use]
  pub fn union_date_part(&self) -> Option<&PhpValueType> {
    match self {
      Self::Union(parts) => parts.iter().find(|p| p.is_date_like()),
      _ => None,
    }
  }
}

impl fmt::Display for PhpValueType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.php_name())
  }
}

/// Type reference with nullability, array wrapping and a doc-type annotation.
///
/// Arrays render as the native `array` declaration; the element type is kept
/// for serializer decisions and surfaces in the doc-type string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeRef {
  pub base: PhpValueType,
  pub nullable: bool,
  pub element: Option<PhpValueType>,
  pub doc_type: Option<String>,
}

impl TypeRef {
  #[must_use]
  pub fn new(base: PhpValueType) -> Self {
    Self {
      base,
      nullable: false,
      element: None,
      doc_type: None,
    }
  }

  #[must_use]
  pub fn array_of(element: PhpValueType) -> Self {
    let doc = PhpValueType::ArrayOf(Box::new(element.clone())).doc_name();
    Self {
      base: PhpValueType::Mixed,
      nullable: false,
      element: Some(element),
      doc_type: Some(doc),
    }
  }

  #[must_use]
  pub fn with_nullable(mut self) -> Self {
    self.nullable = true;
    self
  }

  #[must_use]
  pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
    self.doc_type = Some(doc_type.into());
    self
  }

  #[must_use]
  pub fn is_array(&self) -> bool {
    self.element.is_some()
  }

  /// True when this type holds a date value directly or as array elements.
  #[must_use]
  pub fn contains_date(&self) -> bool {
    match &self.element {
      Some(element) => element.is_date_like(),
      None => self.base.is_date_like(),
    }
  }

  /// The full PHP type declaration, nullable-prefixed where PHP allows it.
  /// Union and `mixed`/`null` bases spell nullability as a `|null` member
  /// instead of the `?` shorthand.
  #[must_use]
  pub fn to_php_type(&self) -> String {
    let rendered = if self.is_array() {
      "array".to_string()
    } else {
      self.base.php_name()
    };

    if !self.nullable {
      return rendered;
    }

    if self.is_array() {
      return format!("?{rendered}");
    }

    match &self.base {
      PhpValueType::Mixed | PhpValueType::Null => rendered,
      PhpValueType::Union(_) => format!("{rendered}|null"),
      _ => format!("?{rendered}"),
    }
  }
}

impl From<PhpValueType> for TypeRef {
  fn from(base: PhpValueType) -> Self {
    TypeRef::new(base)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scalar_names_render_to_php_declarations() {
    assert_eq!(PhpValueType::Int.php_name(), "int");
    assert_eq!(PhpValueType::Float.php_name(), "float");
    assert_eq!(PhpValueType::Bool.php_name(), "bool");
    assert_eq!(PhpValueType::String.php_name(), "string");
    assert_eq!(PhpValueType::Date.php_name(), "\\DateTimeInterface");
    assert_eq!(PhpValueType::DateTime.php_name(), "\\DateTimeInterface");
  }

  #[test]
  fn nullable_scalars_use_the_question_mark_shorthand() {
    let type_ref = TypeRef::new(PhpValueType::String).with_nullable();
    assert_eq!(type_ref.to_php_type(), "?string");
  }

  #[test]
  fn nullable_unions_spell_null_as_a_member() {
    let type_ref = TypeRef::new(PhpValueType::Union(vec![
      PhpValueType::Object("A".to_string()),
      PhpValueType::Object("B".to_string()),
    ]))
    .with_nullable();
    assert_eq!(type_ref.to_php_type(), "A|B|null");
  }

  #[test]
  fn nullable_mixed_stays_bare() {
    let type_ref = TypeRef::new(PhpValueType::Mixed).with_nullable();
    assert_eq!(type_ref.to_php_type(), "mixed");
  }

  #[test]
  fn arrays_declare_as_native_arrays_with_doc_elements() {
    let type_ref = TypeRef::array_of(PhpValueType::Object("User".to_string()));
    assert_eq!(type_ref.to_php_type(), "array");
    assert_eq!(type_ref.doc_type.as_deref(), Some("User[]"));
    assert!(type_ref.is_array());
  }

  #[test]
  fn union_doc_names_parenthesize_array_members_only_when_nested() {
    let union = PhpValueType::Union(vec![
      PhpValueType::String,
      PhpValueType::ArrayOf(Box::new(PhpValueType::Int)),
    ]);
    assert_eq!(union.doc_name(), "string|int[]");
    assert_eq!(union.php_name(), "string|array");

    let array_of_union = TypeRef::array_of(PhpValueType::Union(vec![PhpValueType::String, PhpValueType::Int]));
    assert_eq!(array_of_union.doc_type.as_deref(), Some("(string|int)[]"));
  }

  #[test]
  fn duplicate_native_names_in_unions_collapse_when_rendering() {
    let union = PhpValueType::Union(vec![
      PhpValueType::ArrayOf(Box::new(PhpValueType::Int)),
      PhpValueType::ArrayOf(Box::new(PhpValueType::String)),
    ]);
    assert_eq!(union.php_name(), "array");
  }

  #[test]
  fn date_detection_covers_scalars_elements_and_union_branches() {
    assert!(TypeRef::new(PhpValueType::Date).contains_date());
    assert!(TypeRef::array_of(PhpValueType::DateTime).contains_date());
    assert!(!TypeRef::new(PhpValueType::String).contains_date());

    let union = PhpValueType::Union(vec![PhpValueType::Int, PhpValueType::Date]);
    assert_eq!(union.union_date_part(), Some(&PhpValueType::Date));
  }
}
