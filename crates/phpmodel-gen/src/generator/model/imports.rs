use std::collections::{BTreeMap, BTreeSet};

use crate::generator::{model::PhpType, namespace::Namespace};

/// Per-namespace union of fully-qualified names required by emitted code.
///
/// Each class model carries its own `uses` set; the emission stage flushes
/// them here once the model is finalized. Append-only and deduplicating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceImports {
  map: BTreeMap<Namespace, BTreeSet<String>>,
}

impl NamespaceImports {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Copies a finalized model's imports into its namespace bucket.
  pub fn absorb(&mut self, php_type: &PhpType) {
    let bucket = self.map.entry(php_type.namespace().clone()).or_default();
    if let PhpType::Class(def) = php_type {
      bucket.extend(def.uses.iter().cloned());
    }
  }

  #[must_use]
  pub fn for_namespace(&self, namespace: &Namespace) -> Option<&BTreeSet<String>> {
    self.map.get(namespace)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Namespace, &BTreeSet<String>)> {
    self.map.iter()
  }
}
