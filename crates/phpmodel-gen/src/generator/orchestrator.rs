//! Boundary orchestration: walks the document's component categories in
//! fixed order and collects every produced class model.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use mediatype::{MediaType, names};

use crate::{
  document::{Document, MediaTypeObject, Schema, SchemaOrRef},
  generator::{
    config::GeneratorConfig,
    converter::ClassTransformer,
    errors::TransformError,
    metrics::{GenerationStats, GenerationWarning},
    model::{NamespaceImports, PhpType},
    namespace::NamespaceResolver,
    registry::{ComponentCategory, DocumentIndex},
  },
  utils::SchemaExt,
};

/// Everything one run produces: the flattened model list, the per-namespace
/// import union and generation statistics.
#[derive(Debug)]
pub struct GeneratedOutput {
  pub types: Vec<PhpType>,
  pub imports: NamespaceImports,
  pub stats: GenerationStats,
}

/// Iterates schemas, then request bodies, then responses, and resolves
/// each component into class models. A run either fully succeeds or
/// fails on the first fatal error in traversal order.
pub struct ClassGenerator<'a> {
  document: &'a Document,
  config: &'a GeneratorConfig,
}

impl<'a> ClassGenerator<'a> {
  #[must_use]
  pub fn new(document: &'a Document, config: &'a GeneratorConfig) -> Self {
    Self { document, config }
  }

  pub fn generate(&self) -> Result<GeneratedOutput, TransformError> {
    let namespaces = NamespaceResolver::new(&self.config.namespace);
    let transformer = ClassTransformer::new(self.document, self.config, &namespaces);
    let index = DocumentIndex::new(self.document);

    let mut output = GeneratedOutput {
      types: vec![],
      imports: NamespaceImports::new(),
      stats: GenerationStats::default(),
    };
    let mut emitted_names: BTreeSet<String> = BTreeSet::new();

    for (name, entry) in &self.document.components.schemas {
      let (_, schema) = index.resolve_node(entry)?;
      self.emit(&transformer, ComponentCategory::Schemas, name, schema, &mut output, &mut emitted_names)?;
    }

    for (name, entry) in &self.document.components.request_bodies {
      let body = index.resolve_request_body(name, entry)?;
      let Some(node) = Self::json_content_schema(name, &body.content)? else {
        output.stats.record_skipped_component();
        output.stats.record_warning(GenerationWarning::EmptyContentSkipped {
          component_name: name.clone(),
        });
        continue;
      };
      let (_, schema) = index.resolve_node(node)?;
      self.emit(
        &transformer,
        ComponentCategory::RequestBodies,
        name,
        schema,
        &mut output,
        &mut emitted_names,
      )?;
    }

    for (name, entry) in &self.document.components.responses {
      let response = index.resolve_response(name, entry)?;
      let Some(node) = Self::json_content_schema(name, &response.content)? else {
        output.stats.record_skipped_component();
        output.stats.record_warning(GenerationWarning::EmptyContentSkipped {
          component_name: name.clone(),
        });
        continue;
      };
      let (_, schema) = index.resolve_node(node)?;
      self.emit(
        &transformer,
        ComponentCategory::Responses,
        name,
        schema,
        &mut output,
        &mut emitted_names,
      )?;
    }

    Ok(output)
  }

  fn emit(
    &self,
    transformer: &ClassTransformer<'_>,
    category: ComponentCategory,
    name: &str,
    schema: &Schema,
    output: &mut GeneratedOutput,
    emitted_names: &mut BTreeSet<String>,
  ) -> Result<(), TransformError> {
    let Some(transformed) = transformer.transform(category, name, schema)? else {
      output.stats.record_skipped_component();
      let warning = if schema.has_union() {
        GenerationWarning::UnionSchemaSkipped {
          schema_name: name.to_string(),
        }
      } else {
        GenerationWarning::ScalarSchemaSkipped {
          schema_name: name.to_string(),
        }
      };
      output.stats.record_warning(warning);
      return Ok(());
    };

    output.stats.record_types(&transformed.types);
    output.stats.record_inline_types(transformed.types.len().saturating_sub(1));

    for php_type in transformed.types {
      let qualified = php_type.namespace().qualify(php_type.name());
      if !emitted_names.insert(qualified) {
        output.stats.record_warning(GenerationWarning::DuplicateClassName {
          class_name: php_type.name().to_string(),
          namespace: php_type.namespace().to_string(),
        });
      }
      output.imports.absorb(&php_type);
      output.types.push(php_type);
    }

    Ok(())
  }

  /// Picks the `application/json` schema out of a component's content map.
  ///
  /// Zero content entries skip the component; any other media type set with
  /// no JSON entry fails the whole run, naming the offending types.
  fn json_content_schema<'c>(
    component: &str,
    content: &'c IndexMap<String, MediaTypeObject>,
  ) -> Result<Option<&'c SchemaOrRef>, TransformError> {
    if content.is_empty() {
      return Ok(None);
    }

    let json_entry = content.iter().find(|(media_type, _)| {
      MediaType::parse(media_type).is_ok_and(|mt| mt.ty == names::APPLICATION && mt.subty == names::JSON)
    });

    match json_entry {
      Some((_, media)) => Ok(media.schema.as_ref()),
      None => Err(TransformError::OnlyJsonContentTypeSupported {
        component: component.to_string(),
        media_types: content.keys().cloned().collect::<Vec<_>>().join(", "),
      }),
    }
  }
}
