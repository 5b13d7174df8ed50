use crate::{
  document::SchemaOrRef,
  generator::{
    converter::{ConversionOutput, classes::ObjectConverter, enums::EnumConverter, type_resolver::ResolvedType},
    errors::TransformError,
    model::{PhpType, PhpValueType, TypeRef},
    naming::identifiers::{to_php_class_name, union_branch_class_name},
  },
};

/// Resolves a `oneOf` property into a native union type.
///
/// Members resolve individually: scalars, dates, enums, class references and
/// typed arrays are permitted; inline object branches synthesize classes
/// named by their 1-based branch position. A null member marks the union
/// nullable instead of contributing a part. Duplicate branch types collapse.
pub(crate) fn resolve_union(
  cv: &ObjectConverter<'_, '_>,
  parent: &str,
  prop_name: &str,
  variants: &[SchemaOrRef],
) -> Result<ConversionOutput<TypeRef>, TransformError> {
  let mut output = ConversionOutput::new(());
  let mut parts: Vec<PhpValueType> = vec![];
  let mut nullable = false;

  for (index, node) in variants.iter().enumerate() {
    let resolved = cv.ctx.type_resolver().resolve_node(node)?;
    let part = match resolved {
      ResolvedType::Scalar(scalar) => match scalar.value {
        PhpValueType::Mixed => {
          return Err(TransformError::UnsupportedTypeForOneOf {
            type_name: "untyped schema".to_string(),
          });
        }
        value => Some(value),
      },
      ResolvedType::Date => Some(date_part(cv, PhpValueType::Date)),
      ResolvedType::DateTime => Some(date_part(cv, PhpValueType::DateTime)),
      ResolvedType::Null => {
        nullable = true;
        None
      }
      ResolvedType::Reference(class_ref) => {
        output.uses.extend(cv.reference_uses(&class_ref)?);
        Some(PhpValueType::Object(to_php_class_name(&class_ref.name)))
      }
      ResolvedType::Enum => {
        let branch_name = union_branch_class_name(parent, prop_name, index + 1);
        let (_, branch_schema) = cv.ctx.index.resolve_node(node)?;
        let enum_def = EnumConverter::new(cv.ctx).convert(&branch_name, branch_schema)?;
        output.inline_types.push(PhpType::Enum(enum_def));
        Some(PhpValueType::Object(branch_name))
      }
      ResolvedType::Object => {
        let (_, branch_schema) = cv.ctx.index.resolve_node(node)?;
        if branch_schema.properties.is_empty() {
          return Err(TransformError::UnsupportedTypeForOneOf {
            type_name: "object".to_string(),
          });
        }
        let branch_name = union_branch_class_name(parent, prop_name, index + 1);
        let converted = cv.convert_object(&branch_name, branch_schema)?;
        let branch_class = output.absorb(converted);
        output.inline_types.push(PhpType::Class(branch_class));
        Some(PhpValueType::Object(branch_name))
      }
      ResolvedType::Array => Some(resolve_array_branch(cv, node, &mut output)?),
      ResolvedType::OneOf | ResolvedType::OneOfReference { .. } => {
        return Err(TransformError::UnsupportedTypeForOneOf {
          type_name: "oneOf".to_string(),
        });
      }
      ResolvedType::AllOf => {
        return Err(TransformError::UnsupportedTypeForOneOf {
          type_name: "allOf".to_string(),
        });
      }
    };

    if let Some(part) = part
      && !parts.contains(&part)
    {
      parts.push(part);
    }
  }

  let type_ref = match parts.len() {
    0 => {
      // Only null branches: the property can hold nothing else.
      let mut type_ref = TypeRef::new(PhpValueType::Null);
      type_ref.nullable = true;
      type_ref
    }
    1 => match parts.remove(0) {
      PhpValueType::ArrayOf(element) => TypeRef::array_of(*element),
      part => TypeRef::new(part),
    },
    _ => {
      let doc = PhpValueType::Union(parts.clone()).doc_name();
      TypeRef::new(PhpValueType::Union(parts)).with_doc_type(doc)
    }
  };

  let mut type_ref = type_ref;
  type_ref.nullable = type_ref.nullable || nullable;

  Ok(output.map(|()| type_ref))
}

/// An array branch is representable when its items resolve to a scalar,
/// date or class reference. Anything else (including a bare array with no
/// items) is not.
fn resolve_array_branch(
  cv: &ObjectConverter<'_, '_>,
  node: &SchemaOrRef,
  output: &mut ConversionOutput<()>,
) -> Result<PhpValueType, TransformError> {
  let (_, array_schema) = cv.ctx.index.resolve_node(node)?;
  let Some(items) = array_schema.items.as_deref() else {
    return Err(TransformError::UnsupportedTypeForOneOf {
      type_name: "array".to_string(),
    });
  };

  let element = match cv.ctx.type_resolver().resolve_node(items)? {
    ResolvedType::Scalar(scalar) => scalar.value,
    ResolvedType::Date => date_part(cv, PhpValueType::Date),
    ResolvedType::DateTime => date_part(cv, PhpValueType::DateTime),
    ResolvedType::Reference(class_ref) => {
      output.uses.extend(cv.reference_uses(&class_ref)?);
      PhpValueType::Object(to_php_class_name(&class_ref.name))
    }
    other => {
      return Err(TransformError::UnsupportedTypeForOneOf {
        type_name: format!("array of {}", other.label()),
      });
    }
  };

  Ok(PhpValueType::ArrayOf(Box::new(element)))
}

fn date_part(cv: &ObjectConverter<'_, '_>, value: PhpValueType) -> PhpValueType {
  if cv.ctx.config.date_time_as_object {
    value
  } else {
    PhpValueType::String
  }
}
