//! Renders finished class models into PHP source files.
//!
//! One file per type, PSR-12 flavored: `declare(strict_types=1)`, one
//! namespace per file, deduped `use` block, constructor property promotion.

mod classes;
mod enums;
mod serializers;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::generator::{
  config::GeneratorConfig,
  errors::TransformError,
  model::PhpType,
};

pub(crate) const INDENT: &str = "    ";

/// A rendered PHP source file plus its output-relative location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
  pub relative_path: PathBuf,
  pub contents: String,
}

/// Renders one model into a complete PHP file.
pub struct Printer<'a> {
  config: &'a GeneratorConfig,
}

impl<'a> Printer<'a> {
  #[must_use]
  pub fn new(config: &'a GeneratorConfig) -> Self {
    Self { config }
  }

  pub fn render(&self, php_type: &PhpType) -> Result<RenderedFile, TransformError> {
    let body = match php_type {
      PhpType::Class(def) => classes::render_class(def, self.config)?,
      PhpType::Enum(def) => enums::render_enum(def),
    };

    let mut out = String::new();
    out.push_str("<?php\n\ndeclare(strict_types=1);\n\n");
    out.push_str(&format!("namespace {};\n\n", php_type.namespace()));

    if let PhpType::Class(def) = php_type
      && !def.uses.is_empty()
    {
      for import in &def.uses {
        out.push_str(&format!("use {import};\n"));
      }
      out.push('\n');
    }

    out.push_str(&body);

    let mut relative_path = php_type.namespace().to_dir_path();
    relative_path.push(format!("{}.php", php_type.name()));

    Ok(RenderedFile {
      relative_path,
      contents: out,
    })
  }
}

/// Emits a `/** ... */` doc block at the given indentation, or nothing for
/// empty content.
pub(crate) fn doc_block(lines: &[String], indent: &str) -> String {
  match lines {
    [] => String::new(),
    [single] => format!("{indent}/** {single} */\n"),
    many => {
      let mut out = format!("{indent}/**\n");
      for line in many {
        out.push_str(&format!("{indent} * {line}\n"));
      }
      out.push_str(&format!("{indent} */\n"));
      out
    }
  }
}
