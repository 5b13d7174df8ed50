use indexmap::IndexMap;

use crate::{
  document::{Schema, SchemaOrRef, SchemaType},
  generator::{
    converter::type_resolver::{ResolvedType, TypeResolver},
    errors::TransformError,
    registry::DocumentIndex,
  },
  utils::SchemaExt,
};

/// The collapsed result of an `allOf` composition: one effective type tag
/// plus the schema it should be treated as.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AllOfType {
  pub resolved: ResolvedType,
  pub schema: Schema,
}

/// Collapses an `allOf` composition into a single effective type, enforcing
/// the combination rules. Members are evaluated in declaration order and the
/// first violation aborts with a reason naming the rule.
pub(crate) struct AllOfResolver<'a> {
  index: DocumentIndex<'a>,
  type_resolver: TypeResolver<'a>,
}

impl<'a> AllOfResolver<'a> {
  pub(crate) fn new(index: DocumentIndex<'a>) -> Self {
    Self {
      index,
      type_resolver: TypeResolver::new(index),
    }
  }

  pub(crate) fn resolve(&self, schema: &Schema, property_name: &str) -> Result<AllOfType, TransformError> {
    let mut found_null = false;
    let mut single: Option<(ResolvedType, Schema)> = None;
    let mut merged_properties: IndexMap<String, SchemaOrRef> = IndexMap::new();
    let mut merged_required: Vec<String> = vec![];
    let mut has_object = false;

    for member in &schema.all_of {
      if single.is_some() {
        return Err(TransformError::invalid_all_of(
          property_name,
          "a single type cannot be structurally combined with another member",
        ));
      }

      let resolved = self.type_resolver.resolve_node(member)?;
      match resolved {
        ResolvedType::OneOf | ResolvedType::OneOfReference { .. } => {
          return Err(TransformError::invalid_all_of(
            property_name,
            "a oneOf member cannot be merged structurally",
          ));
        }
        ResolvedType::AllOf => {
          return Err(TransformError::invalid_all_of(
            property_name,
            "nested allOf composition cannot be expanded",
          ));
        }
        ResolvedType::Null => {
          if found_null {
            return Err(TransformError::invalid_all_of(
              property_name,
              "at most one null member is allowed",
            ));
          }
          found_null = true;
        }
        ResolvedType::Scalar(_)
        | ResolvedType::Enum
        | ResolvedType::Date
        | ResolvedType::DateTime
        | ResolvedType::Array => {
          if found_null {
            return Err(TransformError::invalid_all_of(
              property_name,
              "a null member cannot coexist with a non-null single type",
            ));
          }
          if has_object {
            return Err(TransformError::invalid_all_of(
              property_name,
              "a single type cannot be structurally combined with another member",
            ));
          }
          // Scalars already carry their resolved schema, sparing a second
          // lookup for reference members.
          let member_schema = match &resolved {
            ResolvedType::Scalar(scalar) => scalar.schema.clone(),
            _ => self.member_schema(member)?,
          };
          single = Some((resolved, member_schema));
        }
        ResolvedType::Object => {
          let member_schema = self.member_schema(member)?;
          Self::accumulate_object(&member_schema, &mut merged_properties, &mut merged_required);
          has_object = true;
        }
        ResolvedType::Reference(class_ref) => {
          // Not directly scalar (those resolve to Scalar above): expand the
          // target, rejecting any further composition level.
          let target = self
            .index
            .named_schema(&class_ref.name)
            .ok_or_else(|| TransformError::InvalidReference {
              reference: class_ref.name.clone(),
            })?;
          if target.has_intersection() || target.has_union() || !target.any_of.is_empty() {
            return Err(TransformError::invalid_all_of(
              property_name,
              format!("reference '{}' expands to a nested composition", class_ref.name),
            ));
          }
          Self::accumulate_object(target, &mut merged_properties, &mut merged_required);
          has_object = true;
        }
      }
    }

    // Nullability wins and short-circuits: any object accumulation is
    // discarded once a null member was seen.
    if found_null {
      return Ok(AllOfType {
        resolved: ResolvedType::Null,
        schema: Schema::of_type(SchemaType::Null),
      });
    }

    if let Some((resolved, member_schema)) = single {
      return Ok(AllOfType {
        resolved,
        schema: member_schema,
      });
    }

    if has_object {
      let merged = Schema {
        schema_type: Some(SchemaType::Object),
        properties: merged_properties,
        required: merged_required,
        description: schema.description.clone(),
        php_namespace: schema.php_namespace.clone(),
        ..Schema::default()
      };
      return Ok(AllOfType {
        resolved: ResolvedType::Object,
        schema: merged,
      });
    }

    Err(TransformError::invalid_all_of(property_name, "no types found"))
  }

  /// Last-writer-wins per property key; required names concatenate and
  /// dedupe, preserving first-seen order.
  fn accumulate_object(source: &Schema, properties: &mut IndexMap<String, SchemaOrRef>, required: &mut Vec<String>) {
    for (name, prop) in &source.properties {
      properties.insert(name.clone(), prop.clone());
    }
    for name in &source.required {
      if !required.contains(name) {
        required.push(name.clone());
      }
    }
  }

  fn member_schema(&self, member: &SchemaOrRef) -> Result<Schema, TransformError> {
    let (_, schema) = self.index.resolve_node(member)?;
    Ok(schema.clone())
  }
}
