use strum::Display;

use crate::{
  document::{Document, ObjectOrReference, RequestBody, Response, Schema, SchemaOrRef},
  generator::errors::TransformError,
};

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// The three component categories the generator walks, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ComponentCategory {
  #[strum(to_string = "schemas")]
  Schemas,
  #[strum(to_string = "requestBodies")]
  RequestBodies,
  #[strum(to_string = "responses")]
  Responses,
}

/// Lookup surface over the parsed document's component tables.
///
/// Owns no data beyond a borrow of the document; the document is never
/// mutated during a run.
#[derive(Debug, Clone, Copy)]
pub struct DocumentIndex<'a> {
  document: &'a Document,
}

impl<'a> DocumentIndex<'a> {
  #[must_use]
  pub fn new(document: &'a Document) -> Self {
    Self { document }
  }

  #[must_use]
  pub fn document(&self) -> &'a Document {
    self.document
  }

  /// Extracts the schema name from a `$ref` string.
  ///
  /// Accepts an optional external filename before the `#`, which is ignored
  /// (multi-file specs are merged upstream, so the fragment is authoritative).
  pub fn parse_schema_ref(ref_path: &str) -> Result<String, TransformError> {
    let fragment_start = ref_path.find('#').ok_or_else(|| TransformError::InvalidReference {
      reference: ref_path.to_string(),
    })?;
    let fragment = &ref_path[fragment_start..];

    let name = fragment
      .strip_prefix(SCHEMA_REF_PREFIX)
      .filter(|name| !name.is_empty() && !name.contains('/'))
      .ok_or_else(|| TransformError::InvalidReference {
        reference: ref_path.to_string(),
      })?;

    Ok(name.to_string())
  }

  /// Resolves a `$ref` string to its named schema.
  pub fn resolve_ref(&self, ref_path: &str) -> Result<(String, &'a Schema), TransformError> {
    let name = Self::parse_schema_ref(ref_path)?;
    let schema = self.named_schema(&name).ok_or_else(|| TransformError::InvalidReference {
      reference: ref_path.to_string(),
    })?;
    Ok((name, schema))
  }

  /// Looks up a named schema, following alias entries that are themselves
  /// references. The depth guard keeps a pathological ref-to-ref cycle from
  /// looping forever; such a cycle is a dangling reference.
  #[must_use]
  pub fn named_schema(&self, name: &str) -> Option<&'a Schema> {
    let mut current = self.document.components.schemas.get(name)?;
    for _ in 0..16 {
      match current {
        SchemaOrRef::Schema(schema) => return Some(schema),
        SchemaOrRef::Ref { ref_path } => {
          let target = Self::parse_schema_ref(ref_path).ok()?;
          current = self.document.components.schemas.get(&target)?;
        }
      }
    }
    None
  }

  /// Resolves a schema node to its concrete schema, returning the resolved
  /// name when the node was a reference. The node may outlive the document
  /// borrow or not; the result lives as long as the shorter of the two.
  pub fn resolve_node<'n>(&self, node: &'n SchemaOrRef) -> Result<(Option<String>, &'n Schema), TransformError>
  where
    'a: 'n,
  {
    match node {
      SchemaOrRef::Schema(schema) => Ok((None, schema)),
      SchemaOrRef::Ref { ref_path } => {
        let (name, schema) = self.resolve_ref(ref_path)?;
        Ok((Some(name), schema))
      }
    }
  }

  pub fn resolve_request_body(
    &self,
    name: &str,
    entry: &'a ObjectOrReference<RequestBody>,
  ) -> Result<&'a RequestBody, TransformError> {
    match entry {
      ObjectOrReference::Object(body) => Ok(body),
      ObjectOrReference::Ref { ref_path } => {
        let target = Self::parse_component_ref(ref_path, ComponentCategory::RequestBodies)?;
        match self.document.components.request_bodies.get(&target) {
          Some(ObjectOrReference::Object(body)) => Ok(body),
          _ => Err(TransformError::InvalidReference {
            reference: format!("{ref_path} (from requestBody '{name}')"),
          }),
        }
      }
    }
  }

  pub fn resolve_response(
    &self,
    name: &str,
    entry: &'a ObjectOrReference<Response>,
  ) -> Result<&'a Response, TransformError> {
    match entry {
      ObjectOrReference::Object(response) => Ok(response),
      ObjectOrReference::Ref { ref_path } => {
        let target = Self::parse_component_ref(ref_path, ComponentCategory::Responses)?;
        match self.document.components.responses.get(&target) {
          Some(ObjectOrReference::Object(response)) => Ok(response),
          _ => Err(TransformError::InvalidReference {
            reference: format!("{ref_path} (from response '{name}')"),
          }),
        }
      }
    }
  }

  fn parse_component_ref(ref_path: &str, category: ComponentCategory) -> Result<String, TransformError> {
    let prefix = format!("#/components/{category}/");
    let fragment_start = ref_path.find('#').ok_or_else(|| TransformError::InvalidReference {
      reference: ref_path.to_string(),
    })?;

    ref_path[fragment_start..]
      .strip_prefix(prefix.as_str())
      .filter(|name| !name.is_empty() && !name.contains('/'))
      .map(ToString::to_string)
      .ok_or_else(|| TransformError::InvalidReference {
        reference: ref_path.to_string(),
      })
  }
}
