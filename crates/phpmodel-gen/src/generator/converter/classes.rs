use std::collections::BTreeSet;

use crate::{
  document::{Schema, SchemaOrRef},
  generator::{
    converter::{
      ConversionOutput, TransformContext, all_of::AllOfResolver, arrays, dictionary, enums::EnumConverter,
      type_resolver::{ClassReference, ResolvedType},
      unions,
    },
    errors::TransformError,
    model::{ClassDef, ClassKind, Documentation, PhpType, PhpValueType, PropertyDef, TypeRef},
    naming::identifiers::{ensure_unique, inline_class_name, to_php_class_name, to_php_property_name},
  },
  utils::SchemaExt,
};

/// Converter for object schemas and the property recursion every other
/// converter funnels through.
pub(crate) struct ObjectConverter<'a, 'b> {
  pub(crate) ctx: &'b TransformContext<'a>,
}

impl<'a, 'b> ObjectConverter<'a, 'b> {
  pub(crate) fn new(ctx: &'b TransformContext<'a>) -> Self {
    Self { ctx }
  }

  /// Entry for named plain-object schemas.
  pub(crate) fn convert_object_schema(
    &self,
    name: &str,
    schema: &Schema,
  ) -> Result<ConversionOutput<PhpType>, TransformError> {
    let class_name = to_php_class_name(name);
    Ok(self.convert_object(&class_name, schema)?.map(PhpType::Class))
  }

  /// Entry for named enum schemas.
  pub(crate) fn convert_enum_schema(
    &self,
    name: &str,
    schema: &Schema,
  ) -> Result<ConversionOutput<PhpType>, TransformError> {
    let enum_def = EnumConverter::new(self.ctx).convert(&to_php_class_name(name), schema)?;
    Ok(ConversionOutput::new(PhpType::Enum(enum_def)))
  }

  /// Entry for named top-level array schemas.
  pub(crate) fn convert_collection_schema(
    &self,
    name: &str,
    schema: &Schema,
  ) -> Result<ConversionOutput<PhpType>, TransformError> {
    let class_name = to_php_class_name(name);
    Ok(arrays::convert_collection(self, &class_name, schema)?.map(PhpType::Class))
  }

  /// Entry for named dictionary (additionalProperties-only) schemas.
  pub(crate) fn convert_dictionary_schema(
    &self,
    name: &str,
    schema: &Schema,
  ) -> Result<ConversionOutput<PhpType>, TransformError> {
    let class_name = to_php_class_name(name);
    Ok(dictionary::convert_dictionary(self, &class_name, schema)?.map(PhpType::Class))
  }

  /// Entry for named `allOf` schemas: collapse, then treat the result as if
  /// it were the declared type. Bare scalars and null collapse to nothing.
  pub(crate) fn convert_intersection_schema(
    &self,
    name: &str,
    schema: &Schema,
  ) -> Result<Option<ConversionOutput<PhpType>>, TransformError> {
    let collapsed = AllOfResolver::new(self.ctx.index).resolve(schema, name)?;

    match collapsed.resolved {
      ResolvedType::Object => {
        if collapsed.schema.is_dictionary() {
          return Ok(Some(self.convert_dictionary_schema(name, &collapsed.schema)?));
        }
        if collapsed.schema.properties.is_empty() {
          return Ok(None);
        }
        Ok(Some(self.convert_object_schema(name, &collapsed.schema)?))
      }
      ResolvedType::Array => Ok(Some(self.convert_collection_schema(name, &collapsed.schema)?)),
      ResolvedType::Enum => Ok(Some(self.convert_enum_schema(name, &collapsed.schema)?)),
      _ => Ok(None),
    }
  }

  /// Builds a class model for an object schema, recursing into inline
  /// property schemas. Properties materialize in declared order.
  pub(crate) fn convert_object(
    &self,
    class_name: &str,
    schema: &Schema,
  ) -> Result<ConversionOutput<ClassDef>, TransformError> {
    let mut properties: Vec<PropertyDef> = Vec::with_capacity(schema.properties.len());
    let mut used_names: BTreeSet<String> = BTreeSet::new();
    let mut collected = ConversionOutput::new(());

    for (wire_name, prop_node) in &schema.properties {
      let required = schema.required.iter().any(|r| r == wire_name);

      let resolved = self.resolve_property(class_name, wire_name, prop_node)?;
      let type_ref = collected.absorb(resolved);

      let (_, prop_schema) = self.ctx.index.resolve_node(prop_node)?;
      let nullable = !required || prop_schema.is_explicitly_nullable() || type_ref.nullable;

      let php_name = ensure_unique(&to_php_property_name(wire_name), &used_names);
      used_names.insert(php_name.clone());

      let mut type_ref = type_ref;
      type_ref.nullable = nullable;

      properties.push(PropertyDef {
        name: php_name,
        wire_name: wire_name.clone(),
        type_ref,
        required,
        nullable,
        docs: Documentation::from_optional(prop_schema.description.as_ref()),
      });
    }

    let def = ClassDef {
      name: class_name.to_string(),
      namespace: self.ctx.namespace.clone(),
      docs: Documentation::from_optional(schema.description.as_ref()),
      kind: ClassKind::Plain,
      properties,
      serializer: None,
      uses: collected.uses.clone(),
    };

    Ok(ConversionOutput {
      result: def,
      inline_types: collected.inline_types,
      uses: BTreeSet::new(),
    })
  }

  /// Resolves one property node to its type reference, synthesizing inline
  /// classes, enums, dictionaries and union branches as needed.
  pub(crate) fn resolve_property(
    &self,
    parent: &str,
    prop_name: &str,
    node: &SchemaOrRef,
  ) -> Result<ConversionOutput<TypeRef>, TransformError> {
    let resolved = self.ctx.type_resolver().resolve_node(node)?;
    let (_, node_schema) = self.ctx.index.resolve_node(node)?;
    self.resolve_classified(parent, prop_name, resolved, node_schema)
  }

  /// Shared dispatch over a classified node. `allOf` collapses re-enter here
  /// with the collapsed schema, so every path funnels through one place.
  pub(crate) fn resolve_classified(
    &self,
    parent: &str,
    prop_name: &str,
    resolved: ResolvedType,
    schema: &Schema,
  ) -> Result<ConversionOutput<TypeRef>, TransformError> {
    match resolved {
      ResolvedType::Scalar(scalar) => Ok(ConversionOutput::new(TypeRef::new(scalar.value))),
      ResolvedType::Date => Ok(ConversionOutput::new(TypeRef::new(self.date_value(PhpValueType::Date)))),
      ResolvedType::DateTime => Ok(ConversionOutput::new(TypeRef::new(
        self.date_value(PhpValueType::DateTime),
      ))),
      ResolvedType::Null => {
        let mut type_ref = TypeRef::new(PhpValueType::Null);
        type_ref.nullable = true;
        Ok(ConversionOutput::new(type_ref))
      }
      ResolvedType::Enum => {
        let enum_name = inline_class_name(parent, prop_name);
        let enum_def = EnumConverter::new(self.ctx).convert(&enum_name, schema)?;
        Ok(ConversionOutput::with_inline_types(
          TypeRef::new(PhpValueType::Object(enum_name)),
          vec![PhpType::Enum(enum_def)],
        ))
      }
      ResolvedType::Object => self.resolve_inline_object(parent, prop_name, schema),
      ResolvedType::Array => arrays::resolve_array_property(self, parent, prop_name, schema),
      ResolvedType::OneOf => unions::resolve_union(self, parent, prop_name, &schema.one_of),
      ResolvedType::OneOfReference { schema: target, .. } => {
        // Branches materialize relative to the referencing property.
        unions::resolve_union(self, parent, prop_name, &target.one_of)
      }
      ResolvedType::AllOf => {
        let collapsed = AllOfResolver::new(self.ctx.index).resolve(schema, prop_name)?;
        self.resolve_classified(parent, prop_name, collapsed.resolved, &collapsed.schema)
      }
      ResolvedType::Reference(class_ref) => Ok(ConversionOutput {
        result: TypeRef::new(PhpValueType::Object(to_php_class_name(&class_ref.name))),
        inline_types: vec![],
        uses: self.reference_uses(&class_ref)?,
      }),
    }
  }

  fn resolve_inline_object(
    &self,
    parent: &str,
    prop_name: &str,
    schema: &Schema,
  ) -> Result<ConversionOutput<TypeRef>, TransformError> {
    if schema.is_dictionary() {
      let dict_name = inline_class_name(parent, prop_name);
      let converted = dictionary::convert_dictionary(self, &dict_name, schema)?;
      let mut output = ConversionOutput::new(TypeRef::new(PhpValueType::Object(dict_name)));
      let dict_class = output.absorb(converted);
      output.inline_types.insert(0, PhpType::Class(dict_class));
      return Ok(output);
    }

    if schema.properties.is_empty() {
      // Unconstrained object; nothing to synthesize.
      return Ok(ConversionOutput::new(
        TypeRef::new(PhpValueType::Mixed).with_doc_type("object"),
      ));
    }

    let class_name = inline_class_name(parent, prop_name);
    if class_name == parent {
      return Err(TransformError::InvalidInlineObject {
        name: format!("{parent}.{prop_name}"),
      });
    }

    let converted = self.convert_object(&class_name, schema)?;
    let mut output = ConversionOutput::new(TypeRef::new(PhpValueType::Object(class_name)));
    let inline_class = output.absorb(converted);
    output.inline_types.insert(0, PhpType::Class(inline_class));
    Ok(output)
  }

  /// Imports needed when a property references a class generated into
  /// another namespace.
  pub(crate) fn reference_uses(&self, class_ref: &ClassReference) -> Result<BTreeSet<String>, TransformError> {
    let target = self
      .ctx
      .index
      .named_schema(&class_ref.name)
      .ok_or_else(|| TransformError::InvalidReference {
        reference: class_ref.name.clone(),
      })?;

    let target_namespace = self.ctx.referenced_namespace(target);
    let mut uses = BTreeSet::new();
    if target_namespace != self.ctx.namespace {
      uses.insert(target_namespace.qualify(&to_php_class_name(&class_ref.name)));
    }
    Ok(uses)
  }

  fn date_value(&self, value: PhpValueType) -> PhpValueType {
    if self.ctx.config.date_time_as_object {
      value
    } else {
      PhpValueType::String
    }
  }
}
