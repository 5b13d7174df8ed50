use thiserror::Error;

/// Failures raised while transforming schemas into class models.
///
/// Every variant is fatal for the schema being processed; nothing here is
/// caught and downgraded internally. The run boundary reports the message
/// and exits non-zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
  #[error("invalid reference '{reference}'")]
  InvalidReference { reference: String },

  #[error("unresolved type '{type_name}'")]
  UnresolvedType { type_name: String },

  #[error("invalid allOf in property '{property}': {reason}")]
  InvalidAllOf { property: String, reason: String },

  #[error("unresolved array item type for property '{property}'")]
  UnresolvedArrayType { property: String },

  #[error("unsupported type '{type_name}' for array property '{property}'")]
  UnsupportedTypeForArray { property: String, type_name: String },

  #[error("unsupported type '{type_name}' in oneOf")]
  UnsupportedTypeForOneOf { type_name: String },

  #[error("inline object '{name}' could not be transformed")]
  InvalidInlineObject { name: String },

  #[error("property '{name}' not found on class '{class}'")]
  PropertyNotFound { name: String, class: String },

  #[error("cannot serialize dictionary '{class}': value type is not statically known")]
  DictionarySerialize { class: String },

  #[error("only the application/json content type is supported for '{component}', found: {media_types}")]
  OnlyJsonContentTypeSupported { component: String, media_types: String },
}

impl TransformError {
  pub(crate) fn invalid_all_of(property: &str, reason: impl Into<String>) -> Self {
    Self::InvalidAllOf {
      property: property.to_string(),
      reason: reason.into(),
    }
  }
}
