use std::path::PathBuf;

pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d";
pub const DEFAULT_DATE_TIME_FORMAT: &str = r"Y-m-d\TH:i:sP";

/// Read-only per-run configuration for the generator core.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
  /// Root namespace prefix applied to every generated namespace.
  pub namespace: String,
  /// PHP date() format string for `format: date` values.
  pub date_format: String,
  /// PHP date() format string for `format: date-time` values.
  pub date_time_format: String,
  /// When true, date and date-time properties are typed `\DateTimeInterface`
  /// and serializers format them; when false they stay plain strings.
  pub date_time_as_object: bool,
  /// Remove the output directory before writing.
  pub clear_output: bool,
  /// Input spec path. Unused by the core; carried for the run boundary.
  pub input: PathBuf,
  /// Output directory. Unused by the core; carried for the run boundary.
  pub output: PathBuf,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      namespace: "App\\Models".to_string(),
      date_format: DEFAULT_DATE_FORMAT.to_string(),
      date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
      date_time_as_object: true,
      clear_output: false,
      input: PathBuf::new(),
      output: PathBuf::new(),
    }
  }
}
