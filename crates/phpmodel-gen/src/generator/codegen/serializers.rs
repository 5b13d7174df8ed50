use itertools::Itertools;

use super::INDENT;
use crate::generator::{
  config::GeneratorConfig,
  errors::TransformError,
  model::{ClassDef, DateKind, SerializerOp, SerializerPlan, SerializerShape},
};

fn format_string(kind: DateKind, config: &GeneratorConfig) -> &str {
  match kind {
    DateKind::Date => &config.date_format,
    DateKind::DateTime => &config.date_time_format,
  }
}

fn php_string(value: &str) -> String {
  format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

pub(super) fn render_serializer(
  def: &ClassDef,
  plan: &SerializerPlan,
  config: &GeneratorConfig,
) -> Result<String, TransformError> {
  let body = match &plan.shape {
    SerializerShape::Object => render_object_body(def, plan, config)?,
    SerializerShape::Dictionary { value_dates } => render_dictionary_body(*value_dates, config),
    SerializerShape::Collection { item_dates } => render_collection_body(*item_dates, config),
  };

  Ok(format!(
    "{INDENT}public function jsonSerialize(): mixed\n{INDENT}{{\n{body}{INDENT}}}\n"
  ))
}

fn render_object_body(def: &ClassDef, plan: &SerializerPlan, config: &GeneratorConfig) -> Result<String, TransformError> {
  let indent = INDENT.repeat(2);
  let entry_indent = INDENT.repeat(3);
  let mut out = format!("{indent}$data = [\n");

  for op in &plan.ops {
    // Every op was derived from this class's constructor, so a missing
    // property means the model and plan went out of sync.
    let property = def
      .property(op.property())
      .ok_or_else(|| TransformError::PropertyNotFound {
        name: op.property().to_string(),
        class: def.name.clone(),
      })?;

    let expr = match op {
      SerializerOp::Verbatim { property, .. } => format!("$this->{property}"),
      SerializerOp::DateScalar {
        property,
        kind,
        nullable,
        ..
      } => {
        let fmt = php_string(format_string(*kind, config));
        if *nullable {
          format!("$this->{property}?->format({fmt})")
        } else {
          format!("$this->{property}->format({fmt})")
        }
      }
      SerializerOp::DateArray {
        property,
        kind,
        nullable,
        ..
      } => {
        let fmt = php_string(format_string(*kind, config));
        let mapped =
          format!("array_map(fn (\\DateTimeInterface $item): string => $item->format({fmt}), $this->{property})");
        if *nullable {
          format!("$this->{property} === null ? null : {mapped}")
        } else {
          mapped
        }
      }
      SerializerOp::OneOfDate { property, kind, .. } => {
        let fmt = php_string(format_string(*kind, config));
        format!("$this->{property} instanceof \\DateTimeInterface ? $this->{property}->format({fmt}) : $this->{property}")
      }
    };

    out.push_str(&format!("{entry_indent}{} => {expr},\n", php_string(&property.wire_name)));
  }

  out.push_str(&format!("{indent}];\n"));

  if plan.filter_optional {
    let required_keys = def
      .properties
      .iter()
      .filter(|p| p.required)
      .map(|p| php_string(&p.wire_name))
      .join(", ");
    out.push('\n');
    out.push_str(&format!(
      "{indent}return array_filter(\n{entry_indent}$data,\n{entry_indent}fn (mixed $value, string $key): bool => $value !== null || \\in_array($key, [{required_keys}], true),\n{entry_indent}ARRAY_FILTER_USE_BOTH,\n{indent});\n"
    ));
  } else {
    out.push('\n');
    out.push_str(&format!("{indent}return $data;\n"));
  }

  Ok(out)
}

fn render_dictionary_body(value_dates: Option<DateKind>, config: &GeneratorConfig) -> String {
  let indent = INDENT.repeat(2);
  let inner = INDENT.repeat(3);

  let value_expr = match value_dates {
    Some(kind) => {
      let fmt = php_string(format_string(kind, config));
      format!("$item->value instanceof \\DateTimeInterface ? $item->value->format({fmt}) : $item->value")
    }
    None => "$item->value".to_string(),
  };

  format!(
    "{indent}$data = [];\n{indent}foreach ($this->items as $item) {{\n{inner}$data[$item->key] = {value_expr};\n{indent}}}\n\n{indent}return $data;\n"
  )
}

fn render_collection_body(item_dates: Option<DateKind>, config: &GeneratorConfig) -> String {
  let indent = INDENT.repeat(2);
  match item_dates {
    Some(kind) => {
      let fmt = php_string(format_string(kind, config));
      format!(
        "{indent}return array_map(fn (\\DateTimeInterface $item): string => $item->format({fmt}), $this->items);\n"
      )
    }
    None => format!("{indent}return $this->items;\n"),
  }
}
