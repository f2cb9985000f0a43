//! Colors for the run summary printed to stderr.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self {
            color: color_mode_from_env(
                env::var("NO_COLOR").ok().as_deref(),
                env::var("CLICOLOR").ok().as_deref(),
                env::var("CLICOLOR_FORCE").ok().as_deref(),
            ),
        }
    }

    /// No colors, regardless of terminal or environment.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

// NO_COLOR per no-color.org; CLICOLOR_FORCE=1 beats both
fn color_mode_from_env(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
) -> ColorMode {
    if clicolor_force == Some("1") {
        ColorMode::Always
    } else if no_color.is_some() || clicolor == Some("0") {
        ColorMode::Never
    } else {
        ColorMode::Auto
    }
}

/// Styles for the words that lead each summary line.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }
}

// Human-facing output goes to stderr; stdout carries generated data.
fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_color_mode() {
        assert_eq!(color_mode_from_env(None, None, None), ColorMode::Auto);
        assert_eq!(color_mode_from_env(Some(""), None, None), ColorMode::Never);
        assert_eq!(color_mode_from_env(None, Some("0"), None), ColorMode::Never);
        assert_eq!(color_mode_from_env(Some("1"), None, Some("1")), ColorMode::Always);
    }

    #[test]
    fn test_plain_palette_passthrough() {
        let palette = Palette::plain();
        assert_eq!(palette.success("Generated"), "Generated");
        assert_eq!(palette.warning("Skipped"), "Skipped");
        assert_eq!(palette.error("Failed"), "Failed");
        assert_eq!(palette.bold("3"), "3");
    }

    #[test]
    fn test_plain_config() {
        assert_eq!(FormattingConfig::plain().color, ColorMode::Never);
        assert!(!ColorMode::Never.should_use_color());
        assert!(ColorMode::Always.should_use_color());
    }
}
