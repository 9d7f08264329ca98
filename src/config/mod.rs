pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};

pub const DEFAULT_FORMAT: &str = "text";
pub const DEFAULT_PROMPT: &str = "recurrence> ";

/// Effective configuration after merging defaults, the optional TOML file
/// and CLI flags (highest precedence).
#[derive(Debug, Clone)]
pub struct SolverSettings {
    pub format: String,
    pub prompt: String,
    pub banner: bool,
    pub verbose: bool,
}

impl SolverSettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let output = file.output.unwrap_or_default();
        let repl = file.repl.unwrap_or_default();

        let settings = Self {
            format: cli
                .format
                .clone()
                .or(output.format)
                .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            prompt: repl.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            banner: repl.banner.unwrap_or(true),
            verbose: cli.verbose,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Result<()> {
        validate_one_of("output.format", &self.format, &["text", "json"])?;
        validate_non_empty_string("repl.prompt", &self.prompt)?;
        Ok(())
    }
}

impl ConfigProvider for SolverSettings {
    fn output_format(&self) -> &str {
        &self.format
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn banner(&self) -> bool {
        self.banner
    }
}
