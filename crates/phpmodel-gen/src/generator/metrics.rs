use strum::Display;

use crate::generator::model::PhpType;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub classes_generated: usize,
  pub enums_generated: usize,
  pub dictionaries_generated: usize,
  pub array_wrappers_generated: usize,
  pub serializers_generated: usize,
  pub inline_types_generated: usize,
  pub components_skipped: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_type(&mut self, php_type: &PhpType) {
    self.types_generated += 1;
    match php_type {
      PhpType::Class(def) => {
        self.classes_generated += 1;
        if def.kind.is_dictionary() {
          self.dictionaries_generated += 1;
        }
        if def.kind.is_array_wrapper() {
          self.array_wrappers_generated += 1;
        }
        if def.serializer.is_some() {
          self.serializers_generated += 1;
        }
      }
      PhpType::Enum(_) => self.enums_generated += 1,
    }
  }

  pub fn record_types(&mut self, types: &[PhpType]) {
    for php_type in types {
      self.record_type(php_type);
    }
  }

  pub fn record_inline_types(&mut self, count: usize) {
    self.inline_types_generated += count;
  }

  pub fn record_skipped_component(&mut self) {
    self.components_skipped += 1;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}' resolves to a bare scalar; no class emitted")]
  ScalarSchemaSkipped { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}' is a named oneOf; branches materialize at reference sites")]
  UnionSchemaSkipped { schema_name: String },
  #[strum(to_string = "Component '{component_name}' has no content entries")]
  EmptyContentSkipped { component_name: String },
  #[strum(to_string = "Duplicate class name '{class_name}' in namespace '{namespace}'")]
  DuplicateClassName { class_name: String, namespace: String },
}
