use std::io::IsTerminal;

use clap::ValueEnum;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

pub enum Theme {
  Dark,
  Light,
}

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  pub const fn timestamp(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 118, g: 166, b: 166 },
      Theme::Light => Color::Rgb { r: 92, g: 62, b: 38 },
    }
  }

  pub const fn primary(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 130, g: 170, b: 255 },
      Theme::Light => Color::Rgb { r: 32, g: 80, b: 170 },
    }
  }

  pub const fn success(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 140, g: 200, b: 120 },
      Theme::Light => Color::Rgb { r: 30, g: 120, b: 40 },
    }
  }

  pub const fn warning(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 230, g: 190, b: 100 },
      Theme::Light => Color::Rgb { r: 160, g: 110, b: 10 },
    }
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

/// Resolves the theme, falling back to dark when the terminal gives no
/// background hint (the `COLORFGBG` convention: last field is background).
pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => match std::env::var("COLORFGBG") {
      Ok(value) => {
        let background = value.rsplit(';').next().and_then(|v| v.parse::<u8>().ok());
        match background {
          Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
          _ => Theme::Dark,
        }
      }
      Err(_) => Theme::Dark,
    },
  }
}
