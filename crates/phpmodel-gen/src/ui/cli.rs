use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};
use crate::generator::config::{DEFAULT_DATE_FORMAT, DEFAULT_DATE_TIME_FORMAT};

#[derive(Parser, Debug)]
#[command(name = "phpmodel-gen")]
#[command(author, version, about = "OpenAPI to PHP model class generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate PHP model classes from an OpenAPI specification
  Generate(GenerateCommand),
  /// List information from an OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the merged OpenAPI JSON or YAML specification file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated PHP files are written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Root namespace prefix for all generated classes
  #[arg(short, long, value_name = "NAMESPACE", default_value = "App\\Models")]
  pub namespace: String,

  /// PHP date() format for `format: date` values
  #[arg(long, value_name = "FORMAT", default_value = DEFAULT_DATE_FORMAT)]
  pub date_format: String,

  /// PHP date() format for `format: date-time` values
  #[arg(long, value_name = "FORMAT", default_value = DEFAULT_DATE_TIME_FORMAT)]
  pub date_time_format: String,

  /// Keep date and date-time properties as plain strings instead of
  /// \DateTimeInterface objects
  #[arg(long, default_value_t = false)]
  pub dates_as_string: bool,

  /// Remove the output directory before writing
  #[arg(long, default_value_t = false)]
  pub clear_output: bool,

  /// Enable verbose output with per-class progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the component schemas the generator would process
  Schemas {
    /// Path to the merged OpenAPI JSON or YAML specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
