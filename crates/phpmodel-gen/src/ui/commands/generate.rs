use anyhow::Context as _;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use num_format::{Locale, ToFormattedString};

use crate::{
  generator::{
    codegen::Printer,
    config::GeneratorConfig,
    orchestrator::{ClassGenerator, GeneratedOutput},
  },
  ui::{Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub generator: GeneratorConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  #[must_use]
  pub fn from_command(command: GenerateCommand) -> Self {
    Self {
      generator: GeneratorConfig {
        namespace: command.namespace,
        date_format: command.date_format,
        date_time_format: command.date_time_format,
        date_time_as_object: !command.dates_as_string,
        clear_output: command.clear_output,
        input: command.input,
        output: command.output,
      },
      verbose: command.verbose,
      quiet: command.quiet,
    }
  }

  fn status(&self, colors: &Colors, message: &str) {
    if !self.quiet {
      println!("{} {message}", format_timestamp().with(colors.timestamp()));
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let started = std::time::Instant::now();

  config.status(colors, &format!("Loading spec from {}", config.generator.input.display()));
  let document = SpecLoader::open(&config.generator.input)
    .await
    .context("Opening spec file")?
    .parse()
    .context("Parsing spec file")?;

  let generator = ClassGenerator::new(&document, &config.generator);
  let output = generator.generate()?;

  if config.generator.clear_output && tokio::fs::try_exists(&config.generator.output).await? {
    tokio::fs::remove_dir_all(&config.generator.output)
      .await
      .context("Clearing output directory")?;
  }

  write_files(&config, colors, &output).await?;
  print_summary(&config, colors, &output, started.elapsed());

  Ok(())
}

async fn write_files(config: &GenerateConfig, colors: &Colors, output: &GeneratedOutput) -> anyhow::Result<()> {
  let printer = Printer::new(&config.generator);

  for php_type in &output.types {
    let file = printer.render(php_type)?;
    let path = config.generator.output.join(&file.relative_path);

    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &file.contents)
      .await
      .with_context(|| format!("Writing {}", path.display()))?;

    if config.verbose {
      config.status(
        colors,
        &format!("Wrote {}", file.relative_path.display().to_string().with(colors.primary())),
      );
    }
  }

  Ok(())
}

fn print_summary(
  config: &GenerateConfig,
  colors: &Colors,
  output: &GeneratedOutput,
  elapsed: std::time::Duration,
) {
  if config.quiet {
    return;
  }

  let stats = &output.stats;
  let line = format!(
    "Generated {} types ({} classes, {} enums, {} dictionaries, {} collections, {} serializers) in {:.2?}",
    stats.types_generated.to_formatted_string(&Locale::en),
    stats.classes_generated.to_formatted_string(&Locale::en),
    stats.enums_generated.to_formatted_string(&Locale::en),
    stats.dictionaries_generated.to_formatted_string(&Locale::en),
    stats.array_wrappers_generated.to_formatted_string(&Locale::en),
    stats.serializers_generated.to_formatted_string(&Locale::en),
    elapsed,
  );
  println!(
    "{} {}",
    format_timestamp().with(colors.timestamp()),
    line.with(colors.success())
  );

  for warning in &stats.warnings {
    println!(
      "{} {}",
      format_timestamp().with(colors.timestamp()),
      format!("warning: {warning}").with(colors.warning())
    );
  }
}
