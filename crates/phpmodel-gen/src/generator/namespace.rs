use std::fmt;

use crate::generator::registry::ComponentCategory;

/// A fully-qualified PHP namespace, backslash-separated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace(String);

impl Namespace {
  #[must_use]
  pub fn new(raw: impl Into<String>) -> Self {
    Self(raw.into())
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn segments(&self) -> impl Iterator<Item = &str> {
    self.0.split('\\').filter(|s| !s.is_empty())
  }

  /// Relative filesystem path for this namespace (one directory per segment).
  #[must_use]
  pub fn to_dir_path(&self) -> std::path::PathBuf {
    self.segments().collect()
  }

  /// Fully-qualified class name of a class inside this namespace.
  #[must_use]
  pub fn qualify(&self, class_name: &str) -> String {
    format!("{}\\{class_name}", self.0)
  }
}

impl fmt::Display for Namespace {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Maps component categories and per-schema hints to output namespaces.
#[derive(Debug, Clone)]
pub struct NamespaceResolver {
  prefix: String,
}

impl NamespaceResolver {
  #[must_use]
  pub fn new(prefix: impl Into<String>) -> Self {
    let prefix = prefix.into();
    Self {
      prefix: prefix.trim_matches('\\').to_string(),
    }
  }

  /// Resolves the namespace for a component. A per-schema hint replaces the
  /// category segment; the configured prefix always applies.
  #[must_use]
  pub fn resolve(&self, category: ComponentCategory, hint: Option<&str>) -> Namespace {
    let segment = match hint {
      Some(hint) => hint.trim_matches('\\').to_string(),
      None => Self::category_segment(category).to_string(),
    };

    if self.prefix.is_empty() {
      Namespace::new(segment)
    } else {
      Namespace::new(format!("{}\\{segment}", self.prefix))
    }
  }

  fn category_segment(category: ComponentCategory) -> &'static str {
    match category {
      ComponentCategory::Schemas => "Schemas",
      ComponentCategory::RequestBodies => "RequestBodies",
      ComponentCategory::Responses => "Responses",
    }
  }
}
