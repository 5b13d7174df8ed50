use crate::{
  document::{Schema, SchemaOrRef, SchemaType},
  generator::{
    errors::TransformError,
    model::PhpValueType,
    registry::{ComponentCategory, DocumentIndex},
  },
  utils::SchemaExt,
};

/// A scalar classification carrying the schema it came from, so scalar
/// references keep their format and constraints without a class indirection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScalarType {
  pub value: PhpValueType,
  pub schema: Schema,
}

/// A reference to a named component class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassReference {
  pub category: ComponentCategory,
  pub name: String,
}

/// Semantic classification of a schema node.
///
/// Produced once per node and never mutated; every consumer dispatches over
/// this closed set so unhandled kinds fail at compile time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResolvedType {
  Scalar(ScalarType),
  Enum,
  Date,
  DateTime,
  Array,
  Object,
  OneOf,
  AllOf,
  Null,
  Reference(ClassReference),
  /// A reference to a named `oneOf` schema. Callers materialize its branches
  /// relative to the referencing property.
  OneOfReference { name: String, schema: Schema },
}

impl ResolvedType {
  /// Short label used in error messages.
  pub(crate) fn label(&self) -> &str {
    match self {
      Self::Scalar(scalar) => match scalar.value {
        PhpValueType::Int => "int",
        PhpValueType::Float => "float",
        PhpValueType::Bool => "bool",
        PhpValueType::String => "string",
        _ => "scalar",
      },
      Self::Enum => "enum",
      Self::Date => "date",
      Self::DateTime => "date-time",
      Self::Array => "array",
      Self::Object => "object",
      Self::OneOf | Self::OneOfReference { .. } => "oneOf",
      Self::AllOf => "allOf",
      Self::Null => "null",
      Self::Reference(_) => "reference",
    }
  }
}

/// Classifies schema nodes into [`ResolvedType`] tags without building any
/// class. Resolution order is fixed: reference, then `oneOf`, then `allOf`,
/// then `enum`, then the primitive switch. A schema can legally carry
/// several of these keys at once, so classification must be deterministic.
#[derive(Clone, Copy)]
pub(crate) struct TypeResolver<'a> {
  index: DocumentIndex<'a>,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(index: DocumentIndex<'a>) -> Self {
    Self { index }
  }

  pub(crate) fn resolve_node(&self, node: &SchemaOrRef) -> Result<ResolvedType, TransformError> {
    match node {
      SchemaOrRef::Ref { ref_path } => self.resolve_reference(ref_path),
      SchemaOrRef::Schema(schema) => self.resolve_schema(schema),
    }
  }

  fn resolve_reference(&self, ref_path: &str) -> Result<ResolvedType, TransformError> {
    let (name, target) = self.index.resolve_ref(ref_path)?;

    if target.is_scalar_like() {
      return self.resolve_schema(target);
    }

    if target.has_union() {
      return Ok(ResolvedType::OneOfReference {
        name,
        schema: target.clone(),
      });
    }

    Ok(ResolvedType::Reference(ClassReference {
      category: ComponentCategory::Schemas,
      name,
    }))
  }

  pub(crate) fn resolve_schema(&self, schema: &Schema) -> Result<ResolvedType, TransformError> {
    if schema.has_union() {
      return Ok(ResolvedType::OneOf);
    }

    if schema.has_intersection() {
      return Ok(ResolvedType::AllOf);
    }

    if schema.has_enum_values() && Self::enum_backing_supported(schema) {
      return Ok(ResolvedType::Enum);
    }

    match &schema.schema_type {
      Some(SchemaType::String) => Ok(match schema.format.as_deref() {
        Some("date") => ResolvedType::Date,
        Some("date-time") => ResolvedType::DateTime,
        _ => Self::scalar(PhpValueType::String, schema),
      }),
      Some(SchemaType::Number) => Ok(match schema.format.as_deref() {
        Some("double" | "float") => Self::scalar(PhpValueType::Float, schema),
        _ => Self::scalar(PhpValueType::Int, schema),
      }),
      Some(SchemaType::Integer) => Ok(Self::scalar(PhpValueType::Int, schema)),
      Some(SchemaType::Boolean) => Ok(Self::scalar(PhpValueType::Bool, schema)),
      Some(SchemaType::Array) => Ok(ResolvedType::Array),
      Some(SchemaType::Object) => Ok(ResolvedType::Object),
      Some(SchemaType::Null) => Ok(ResolvedType::Null),
      Some(SchemaType::Other(raw)) => Err(TransformError::UnresolvedType {
        type_name: raw.clone(),
      }),
      None => {
        if !schema.properties.is_empty() || schema.additional_properties.is_some() {
          Ok(ResolvedType::Object)
        } else {
          Ok(Self::scalar(PhpValueType::Mixed, schema))
        }
      }
    }
  }

  fn scalar(value: PhpValueType, schema: &Schema) -> ResolvedType {
    ResolvedType::Scalar(ScalarType {
      value,
      schema: schema.clone(),
    })
  }

  /// Enum classification applies to string- and integer-valued bases; other
  /// bases fall through to the primitive switch.
  fn enum_backing_supported(schema: &Schema) -> bool {
    matches!(
      schema.schema_type,
      Some(SchemaType::String | SchemaType::Number | SchemaType::Integer) | None
    )
  }
}
