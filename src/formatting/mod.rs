use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
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
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("NO_COLOR").ok(),
            env::var("CLICOLOR").ok(),
            env::var("CLICOLOR_FORCE").ok(),
        )
    }

    fn from_vars(
        no_color: Option<String>,
        clicolor: Option<String>,
        clicolor_force: Option<String>,
    ) -> Self {
        let mut config = Self::default();

        // NO_COLOR disables color whatever its value (no-color.org)
        if no_color.is_some() {
            config.color = ColorMode::Never;
        }
        if clicolor.as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }
        if clicolor_force.as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Plain output (no colors), used for `--plain` and file output
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Apply to the global `colored` switch.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}
