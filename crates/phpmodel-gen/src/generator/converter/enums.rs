use std::collections::BTreeSet;

use crate::{
  document::Schema,
  generator::{
    converter::TransformContext,
    errors::TransformError,
    model::{Documentation, EnumBacking, EnumCaseDef, EnumCaseValue, EnumDef},
    naming::identifiers::{ensure_unique, to_php_case_name},
  },
};

/// Builds backed-enum models from `enum` schemas.
///
/// Case names come from an `x-enum-varnames` hint when present, otherwise
/// they are derived from the literal values. `x-enum-descriptions` entries
/// attach positionally as case doc-comments.
pub(crate) struct EnumConverter<'a, 'b> {
  ctx: &'b TransformContext<'a>,
}

impl<'a, 'b> EnumConverter<'a, 'b> {
  pub(crate) fn new(ctx: &'b TransformContext<'a>) -> Self {
    Self { ctx }
  }

  pub(crate) fn convert(&self, name: &str, schema: &Schema) -> Result<EnumDef, TransformError> {
    let backing = Self::detect_backing(schema)?;

    let mut cases: Vec<EnumCaseDef> = vec![];
    let mut seen_names = BTreeSet::new();

    for (index, value) in schema.enum_values.iter().enumerate() {
      let Some(case_value) = Self::case_value(value, backing) else {
        continue;
      };

      let base_name = schema
        .enum_var_names
        .get(index)
        .map(|hint| to_php_case_name(hint))
        .unwrap_or_else(|| Self::derived_case_name(&case_value));

      let case_name = ensure_unique(&base_name, &seen_names);
      seen_names.insert(case_name.clone());

      cases.push(EnumCaseDef {
        name: case_name,
        value: case_value,
        docs: schema.enum_descriptions.get(index).cloned(),
      });
    }

    if cases.is_empty() {
      return Err(TransformError::UnresolvedType {
        type_name: format!("enum '{name}' with no representable values"),
      });
    }

    Ok(EnumDef {
      name: name.to_string(),
      namespace: self.ctx.namespace.clone(),
      docs: Documentation::from_optional(schema.description.as_ref()),
      backing,
      cases,
    })
  }

  /// PHP enums back onto `string` or `int`. All-integer value lists become
  /// int-backed; everything else is treated as string-backed, skipping
  /// values that are not strings.
  fn detect_backing(schema: &Schema) -> Result<EnumBacking, TransformError> {
    let all_integers = !schema.enum_values.is_empty() && schema.enum_values.iter().all(serde_json::Value::is_i64);
    if all_integers {
      return Ok(EnumBacking::Int);
    }

    if schema.enum_values.iter().any(serde_json::Value::is_string) {
      return Ok(EnumBacking::String);
    }

    Err(TransformError::UnresolvedType {
      type_name: "enum without string or integer values".to_string(),
    })
  }

  fn case_value(value: &serde_json::Value, backing: EnumBacking) -> Option<EnumCaseValue> {
    match backing {
      EnumBacking::Int => value.as_i64().map(EnumCaseValue::Int),
      EnumBacking::String => value.as_str().map(|s| EnumCaseValue::Str(s.to_string())),
    }
  }

  fn derived_case_name(value: &EnumCaseValue) -> String {
    match value {
      EnumCaseValue::Str(text) => to_php_case_name(text),
      EnumCaseValue::Int(number) => to_php_case_name(&number.to_string()),
    }
  }
}
