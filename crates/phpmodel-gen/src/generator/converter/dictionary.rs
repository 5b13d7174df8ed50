use crate::{
  document::{AdditionalProperties, Schema},
  generator::{
    converter::{ConversionOutput, classes::ObjectConverter},
    errors::TransformError,
    model::{ClassDef, ClassKind, Documentation, PhpType, PhpValueType, PropertyDef, TypeRef},
    naming::identifiers::dictionary_class_name,
  },
};

/// Specializes an `additionalProperties`-only schema into a key/value
/// dictionary: a companion `<Name>Dictionary` entry class plus a parent
/// whose constructor takes a variadic list of entries instead of named
/// properties.
pub(crate) fn convert_dictionary(
  cv: &ObjectConverter<'_, '_>,
  class_name: &str,
  schema: &Schema,
) -> Result<ConversionOutput<ClassDef>, TransformError> {
  let entry_name = dictionary_class_name(class_name);

  let mut output = ConversionOutput::new(());
  let value_type = output.absorb(resolve_value_type(cv, &entry_name, schema)?);

  let entry_class = ClassDef {
    name: entry_name.clone(),
    namespace: cv.ctx.namespace.clone(),
    docs: Documentation::default(),
    kind: ClassKind::DictionaryEntry,
    properties: vec![
      PropertyDef {
        name: "key".to_string(),
        wire_name: "key".to_string(),
        type_ref: TypeRef::new(PhpValueType::String),
        required: true,
        nullable: false,
        docs: Documentation::default(),
      },
      PropertyDef {
        name: "value".to_string(),
        wire_name: "value".to_string(),
        type_ref: value_type.clone(),
        required: true,
        nullable: value_type.nullable,
        docs: Documentation::default(),
      },
    ],
    serializer: None,
    uses: output.uses.clone(),
  };

  let items_property = PropertyDef {
    name: "items".to_string(),
    wire_name: "items".to_string(),
    type_ref: TypeRef::array_of(PhpValueType::Object(entry_name.clone())),
    required: true,
    nullable: false,
    docs: Documentation::default(),
  };

  let parent = ClassDef {
    name: class_name.to_string(),
    namespace: cv.ctx.namespace.clone(),
    docs: Documentation::from_optional(schema.description.as_ref()),
    kind: ClassKind::Dictionary {
      entry_class: entry_name,
      value: value_type,
    },
    properties: vec![items_property],
    serializer: None,
    uses: Default::default(),
  };

  let mut inline_types = vec![PhpType::Class(entry_class)];
  inline_types.extend(output.inline_types);

  Ok(ConversionOutput::with_inline_types(parent, inline_types))
}

/// The dictionary's value type: `true` means unconstrained values, a schema
/// resolves like any property with the entry class as naming parent.
fn resolve_value_type(
  cv: &ObjectConverter<'_, '_>,
  entry_name: &str,
  schema: &Schema,
) -> Result<ConversionOutput<TypeRef>, TransformError> {
  match &schema.additional_properties {
    Some(AdditionalProperties::Bool(_)) | None => Ok(ConversionOutput::new(TypeRef::new(PhpValueType::Mixed))),
    Some(AdditionalProperties::Schema(node)) => cv.resolve_property(entry_name, "value", node),
  }
}
