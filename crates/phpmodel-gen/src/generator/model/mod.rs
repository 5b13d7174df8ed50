//! The class model produced by the transform pass.
//!
//! Everything here is an immutable construction-time result: a model is
//! created once per named schema (or per inline type discovered during
//! property resolution) and consumed unchanged by the printer and writer.

pub mod imports;
pub mod serialization;
pub mod types;

use std::collections::BTreeSet;

pub use imports::NamespaceImports;
pub use serialization::{DateKind, SerializerOp, SerializerPlan, SerializerShape};
pub use types::{PhpValueType, TypeRef};

use crate::generator::namespace::Namespace;

/// Doc-comment lines attached to a generated type or property.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Documentation(pub Vec<String>);

impl Documentation {
  #[must_use]
  pub fn from_optional(description: Option<&String>) -> Self {
    Self(
      description
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default(),
    )
  }
}

/// One synthesized output type.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpType {
  Class(ClassDef),
  Enum(EnumDef),
}

impl PhpType {
  #[must_use]
  pub fn name(&self) -> &str {
    match self {
      Self::Class(def) => &def.name,
      Self::Enum(def) => &def.name,
    }
  }

  #[must_use]
  pub fn namespace(&self) -> &Namespace {
    match self {
      Self::Class(def) => &def.namespace,
      Self::Enum(def) => &def.namespace,
    }
  }
}

/// What role a generated class plays, beyond a plain property bag.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassKind {
  Plain,
  /// Parent of a dictionary: accepts a variadic list of entry objects.
  Dictionary { entry_class: String, value: TypeRef },
  /// The `key`/`value` companion of a dictionary parent.
  DictionaryEntry,
  /// Read-only collection wrapper for a top-level array schema.
  ArrayWrapper { item: TypeRef },
}

impl ClassKind {
  #[must_use]
  pub fn is_dictionary(&self) -> bool {
    matches!(self, Self::Dictionary { .. })
  }

  #[must_use]
  pub fn is_array_wrapper(&self) -> bool {
    matches!(self, Self::ArrayWrapper { .. })
  }
}

/// One constructor-promoted property of a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
  /// PHP parameter/property name.
  pub name: String,
  /// Original JSON key.
  pub wire_name: String,
  pub type_ref: TypeRef,
  pub required: bool,
  pub nullable: bool,
  pub docs: Documentation,
}

impl PropertyDef {
  /// Not-required properties default to null so callers may omit them.
  #[must_use]
  pub fn has_null_default(&self) -> bool {
    !self.required
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
  pub name: String,
  pub namespace: Namespace,
  pub docs: Documentation,
  pub kind: ClassKind,
  pub properties: Vec<PropertyDef>,
  pub serializer: Option<SerializerPlan>,
  /// Fully-qualified names the rendered file must import.
  pub uses: BTreeSet<String>,
}

impl ClassDef {
  #[must_use]
  pub fn property(&self, name: &str) -> Option<&PropertyDef> {
    self.properties.iter().find(|p| p.name == name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumBacking {
  String,
  Int,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCaseValue {
  Str(String),
  Int(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseDef {
  pub name: String,
  pub value: EnumCaseValue,
  pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
  pub name: String,
  pub namespace: Namespace,
  pub docs: Documentation,
  pub backing: EnumBacking,
  pub cases: Vec<EnumCaseDef>,
}
