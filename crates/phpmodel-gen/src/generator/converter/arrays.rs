use crate::{
  document::{Schema, SchemaOrRef},
  generator::{
    converter::{ConversionOutput, classes::ObjectConverter, enums::EnumConverter, type_resolver::ResolvedType, unions},
    errors::TransformError,
    model::{ClassDef, ClassKind, Documentation, PhpType, PhpValueType, PropertyDef, TypeRef},
    naming::identifiers::{array_item_class_name, collection_item_class_name, to_php_class_name},
  },
};

/// Resolves an array-typed property into a typed list, synthesizing an item
/// class when the element schema needs one.
pub(crate) fn resolve_array_property(
  cv: &ObjectConverter<'_, '_>,
  parent: &str,
  prop_name: &str,
  schema: &Schema,
) -> Result<ConversionOutput<TypeRef>, TransformError> {
  let item_class = array_item_class_name(parent, prop_name);
  let element = resolve_items(cv, parent, prop_name, &item_class, schema)?;
  Ok(element.map(TypeRef::array_of))
}

/// Specializes a named top-level `type: array` schema into a read-only
/// collection wrapper class.
pub(crate) fn convert_collection(
  cv: &ObjectConverter<'_, '_>,
  class_name: &str,
  schema: &Schema,
) -> Result<ConversionOutput<ClassDef>, TransformError> {
  let item_class = collection_item_class_name(class_name);
  let mut output = ConversionOutput::new(());
  let element = output.absorb(resolve_items(cv, class_name, "items", &item_class, schema)?);

  let item = TypeRef::new(element.clone());
  let items_property = PropertyDef {
    name: "items".to_string(),
    wire_name: "items".to_string(),
    type_ref: TypeRef::array_of(element),
    required: true,
    nullable: false,
    docs: Documentation::default(),
  };

  let def = ClassDef {
    name: class_name.to_string(),
    namespace: cv.ctx.namespace.clone(),
    docs: Documentation::from_optional(schema.description.as_ref()),
    kind: ClassKind::ArrayWrapper { item },
    properties: vec![items_property],
    serializer: None,
    uses: output.uses.clone(),
  };

  Ok(ConversionOutput::with_inline_types(def, output.inline_types))
}

/// Resolves an array schema's `items` into the element value type.
///
/// Object, enum and union items synthesize an inline class named from the
/// singularized property context; shapes an array cannot represent fail
/// here.
fn resolve_items(
  cv: &ObjectConverter<'_, '_>,
  parent: &str,
  prop_name: &str,
  item_class: &str,
  schema: &Schema,
) -> Result<ConversionOutput<PhpValueType>, TransformError> {
  let Some(items) = schema.items.as_deref() else {
    return Err(TransformError::UnresolvedArrayType {
      property: prop_name.to_string(),
    });
  };

  let resolved = cv.ctx.type_resolver().resolve_node(items)?;
  match resolved {
    ResolvedType::Scalar(scalar) => Ok(ConversionOutput::new(scalar.value)),
    ResolvedType::Date => Ok(ConversionOutput::new(date_element(cv, PhpValueType::Date))),
    ResolvedType::DateTime => Ok(ConversionOutput::new(date_element(cv, PhpValueType::DateTime))),
    ResolvedType::Reference(class_ref) => Ok(ConversionOutput {
      result: PhpValueType::Object(to_php_class_name(&class_ref.name)),
      inline_types: vec![],
      uses: cv.reference_uses(&class_ref)?,
    }),
    ResolvedType::Enum => {
      let item_schema = resolve_item_schema(cv, items)?;
      let enum_def = EnumConverter::new(cv.ctx).convert(item_class, &item_schema)?;
      Ok(ConversionOutput::with_inline_types(
        PhpValueType::Object(item_class.to_string()),
        vec![PhpType::Enum(enum_def)],
      ))
    }
    ResolvedType::Object => {
      let item_schema = resolve_item_schema(cv, items)?;
      if item_schema.properties.is_empty() {
        return Ok(ConversionOutput::new(PhpValueType::Mixed));
      }
      let converted = cv.convert_object(item_class, &item_schema)?;
      let mut output = ConversionOutput::new(PhpValueType::Object(item_class.to_string()));
      let inline_class = output.absorb(converted);
      output.inline_types.insert(0, PhpType::Class(inline_class));
      Ok(output)
    }
    ResolvedType::OneOf | ResolvedType::OneOfReference { .. } => {
      let item_schema = resolve_item_schema(cv, items)?;
      let singular = cruet::to_singular(prop_name);
      let union = unions::resolve_union(cv, parent, &singular, &item_schema.one_of)?;
      Ok(union.map(|type_ref| type_ref.base))
    }
    ResolvedType::AllOf => Err(TransformError::UnsupportedTypeForArray {
      property: prop_name.to_string(),
      type_name: "allOf".to_string(),
    }),
    ResolvedType::Array => Err(TransformError::UnsupportedTypeForArray {
      property: prop_name.to_string(),
      type_name: "array".to_string(),
    }),
    ResolvedType::Null => Err(TransformError::UnsupportedTypeForArray {
      property: prop_name.to_string(),
      type_name: "null".to_string(),
    }),
  }
}

fn resolve_item_schema(cv: &ObjectConverter<'_, '_>, items: &SchemaOrRef) -> Result<Schema, TransformError> {
  let (_, schema) = cv.ctx.index.resolve_node(items)?;
  Ok(schema.clone())
}

fn date_element(cv: &ObjectConverter<'_, '_>, value: PhpValueType) -> PhpValueType {
  if cv.ctx.config.date_time_as_object {
    value
  } else {
    PhpValueType::String
  }
}
