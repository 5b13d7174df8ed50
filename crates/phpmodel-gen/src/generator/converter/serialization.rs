use crate::generator::{
  errors::TransformError,
  model::{ClassDef, ClassKind, DateKind, PropertyDef, SerializerOp, SerializerPlan, SerializerShape},
};

/// Decides per finished class whether custom JSON emission is required and
/// derives the plan when it is.
///
/// A plain class needs one only when a constructor parameter carries a date
/// value (directly, as array elements, or as a union branch). Dictionary and
/// collection wrappers always need one: their JSON shape differs from their
/// constructor shape.
pub(crate) struct SerializationResolver;

impl SerializationResolver {
  pub(crate) fn new() -> Self {
    Self
  }

  pub(crate) fn resolve_class(&self, class: &ClassDef) -> Result<Option<SerializerPlan>, TransformError> {
    match &class.kind {
      ClassKind::ArrayWrapper { item } => {
        let item_dates = DateKind::of(&item.base);
        Ok(Some(SerializerPlan {
          shape: SerializerShape::Collection { item_dates },
          ops: vec![],
          filter_optional: false,
        }))
      }
      ClassKind::Dictionary { value, .. } => {
        if value.base.union_date_part().is_some() {
          return Err(TransformError::DictionarySerialize {
            class: class.name.clone(),
          });
        }
        let value_dates = if value.is_array() {
          value.element.as_ref().and_then(DateKind::of)
        } else {
          DateKind::of(&value.base)
        };
        Ok(Some(SerializerPlan {
          shape: SerializerShape::Dictionary { value_dates },
          ops: vec![],
          filter_optional: false,
        }))
      }
      ClassKind::DictionaryEntry => Ok(None),
      ClassKind::Plain => Ok(Self::resolve_plain(class)),
    }
  }

  fn resolve_plain(class: &ClassDef) -> Option<SerializerPlan> {
    let needs_custom = class
      .properties
      .iter()
      .any(|p| p.type_ref.contains_date() || p.type_ref.base.union_date_part().is_some());
    if !needs_custom {
      return None;
    }

    let ops: Vec<SerializerOp> = class.properties.iter().map(Self::op_for_property).collect();

    // Optional fields must not emit null for values that were never
    // provided; required-but-nullable nulls stay.
    let filter_optional = class.properties.iter().any(|p| !p.required);

    Some(SerializerPlan {
      shape: SerializerShape::Object,
      ops,
      filter_optional,
    })
  }

  fn op_for_property(property: &PropertyDef) -> SerializerOp {
    let type_ref = &property.type_ref;

    if let Some(kind) = DateKind::of(&type_ref.base) {
      return SerializerOp::DateScalar {
        property: property.name.clone(),
        wire_name: property.wire_name.clone(),
        kind,
        nullable: property.nullable,
      };
    }

    if let Some(kind) = type_ref.element.as_ref().and_then(DateKind::of) {
      return SerializerOp::DateArray {
        property: property.name.clone(),
        wire_name: property.wire_name.clone(),
        kind,
        nullable: property.nullable,
      };
    }

    if let Some(kind) = type_ref.base.union_date_part().and_then(DateKind::of) {
      return SerializerOp::OneOfDate {
        property: property.name.clone(),
        wire_name: property.wire_name.clone(),
        kind,
      };
    }

    SerializerOp::Verbatim {
      property: property.name.clone(),
      wire_name: property.wire_name.clone(),
    }
  }
}
