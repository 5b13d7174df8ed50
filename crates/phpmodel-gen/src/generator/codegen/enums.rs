use super::{INDENT, doc_block};
use crate::generator::model::{EnumBacking, EnumCaseValue, EnumDef};

pub(super) fn render_enum(def: &EnumDef) -> String {
  let backing = match def.backing {
    EnumBacking::String => "string",
    EnumBacking::Int => "int",
  };

  let mut out = doc_block(&def.docs.0, "");
  out.push_str(&format!("enum {}: {backing}\n{{\n", def.name));

  for case in &def.cases {
    if let Some(docs) = &case.docs {
      out.push_str(&doc_block(std::slice::from_ref(docs), INDENT));
    }
    let value = match &case.value {
      EnumCaseValue::Str(text) => format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'")),
      EnumCaseValue::Int(number) => number.to_string(),
    };
    out.push_str(&format!("{INDENT}case {} = {value};\n", case.name));
  }

  out.push_str("}\n");
  out
}
