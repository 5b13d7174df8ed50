pub(crate) mod all_of;
pub(crate) mod arrays;
pub(crate) mod classes;
pub(crate) mod dictionary;
pub(crate) mod enums;
pub(crate) mod serialization;
pub(crate) mod type_resolver;
pub(crate) mod unions;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::{
  document::{Document, Schema},
  generator::{
    config::GeneratorConfig,
    converter::{
      classes::ObjectConverter, serialization::SerializationResolver, type_resolver::TypeResolver,
    },
    errors::TransformError,
    model::PhpType,
    namespace::{Namespace, NamespaceResolver},
    registry::{ComponentCategory, DocumentIndex},
  },
  utils::SchemaExt,
};

/// Wraps a conversion result with the inline types it spawned and the
/// imports its rendered form will need.
///
/// Inline types are emitted as siblings of the primary type, never nested;
/// imports are unioned per namespace by the emission stage.
#[derive(Debug, Clone)]
pub(crate) struct ConversionOutput<T> {
  pub result: T,
  pub inline_types: Vec<PhpType>,
  pub uses: BTreeSet<String>,
}

impl<T> ConversionOutput<T> {
  pub(crate) fn new(result: T) -> Self {
    Self {
      result,
      inline_types: vec![],
      uses: BTreeSet::new(),
    }
  }

  pub(crate) fn with_inline_types(result: T, inline_types: Vec<PhpType>) -> Self {
    Self {
      result,
      inline_types,
      uses: BTreeSet::new(),
    }
  }

  /// Rewraps the payload, keeping inline types and imports.
  pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> ConversionOutput<U> {
    ConversionOutput {
      result: f(self.result),
      inline_types: self.inline_types,
      uses: self.uses,
    }
  }

  /// Moves another output's inline types and imports into this one,
  /// returning its payload.
  pub(crate) fn absorb<U>(&mut self, other: ConversionOutput<U>) -> U {
    self.inline_types.extend(other.inline_types);
    self.uses.extend(other.uses);
    other.result
  }
}

/// Per-schema resolution context threaded through the converter recursion:
/// the document index, the run configuration and the namespace the current
/// component lands in.
pub(crate) struct TransformContext<'a> {
  pub index: DocumentIndex<'a>,
  pub config: &'a GeneratorConfig,
  pub namespaces: &'a NamespaceResolver,
  pub namespace: Namespace,
}

impl<'a> TransformContext<'a> {
  pub(crate) fn type_resolver(&self) -> TypeResolver<'a> {
    TypeResolver::new(self.index)
  }

  /// Namespace a referenced named schema will be generated into, honoring
  /// its own namespace hint.
  pub(crate) fn referenced_namespace(&self, target: &Schema) -> Namespace {
    self
      .namespaces
      .resolve(ComponentCategory::Schemas, target.php_namespace.as_deref())
  }
}

/// The orchestrating transformer: turns one named schema into a class model
/// plus the inline types discovered along the way.
pub struct ClassTransformer<'a> {
  index: DocumentIndex<'a>,
  config: &'a GeneratorConfig,
  namespaces: &'a NamespaceResolver,
}

/// Outcome of transforming one named schema.
#[derive(Debug)]
pub struct TransformedSchema {
  /// The primary type followed by its flattened inline children.
  pub types: Vec<PhpType>,
}

impl<'a> ClassTransformer<'a> {
  #[must_use]
  pub fn new(document: &'a Document, config: &'a GeneratorConfig, namespaces: &'a NamespaceResolver) -> Self {
    Self {
      index: DocumentIndex::new(document),
      config,
      namespaces,
    }
  }

  /// Transforms a named schema into its class model and inline children.
  ///
  /// Returns `Ok(None)` when the schema needs no class of its own: a bare
  /// scalar, or a named `oneOf` whose branches materialize at reference
  /// sites.
  pub fn transform(
    &self,
    category: ComponentCategory,
    name: &str,
    schema: &Schema,
  ) -> Result<Option<TransformedSchema>, TransformError> {
    let namespace = self.namespaces.resolve(category, schema.php_namespace.as_deref());
    let ctx = TransformContext {
      index: self.index,
      config: self.config,
      namespaces: self.namespaces,
      namespace,
    };
    let converter = ObjectConverter::new(&ctx);

    let output = if schema.has_intersection() {
      converter.convert_intersection_schema(name, schema)?
    } else if schema.has_union() {
      None
    } else if schema.has_enum_values() {
      Some(converter.convert_enum_schema(name, schema)?)
    } else if schema.is_array() {
      Some(converter.convert_collection_schema(name, schema)?)
    } else if schema.is_dictionary() {
      Some(converter.convert_dictionary_schema(name, schema)?)
    } else if schema.is_plain_object() {
      Some(converter.convert_object_schema(name, schema)?)
    } else {
      None
    };

    let Some(output) = output else {
      return Ok(None);
    };

    let mut types = Vec::with_capacity(1 + output.inline_types.len());
    types.push(output.result);
    types.extend(output.inline_types);

    let serializers = SerializationResolver::new();
    for php_type in &mut types {
      if let PhpType::Class(def) = php_type {
        def.serializer = serializers.resolve_class(def)?;
      }
    }

    Ok(Some(TransformedSchema { types }))
  }
}
