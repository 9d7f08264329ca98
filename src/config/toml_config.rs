use crate::utils::error::{Result, SolverError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file for the CLI. Every field has a default, so an
/// empty file (or no file at all) is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub repl: Option<ReplConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplConfig {
    pub prompt: Option<String>,
    pub banner: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolverError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SolverError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` references with the value of the environment
/// variable; unset variables are left verbatim.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_content = r#"
[output]
format = "json"

[repl]
prompt = ">> "
banner = false
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.unwrap().format.as_deref(), Some("json"));
        let repl = config.repl.unwrap();
        assert_eq!(repl.prompt.as_deref(), Some(">> "));
        assert_eq!(repl.banner, Some(false));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.output.is_none());
        assert!(config.repl.is_none());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let result = TomlConfig::from_toml_str("[output\nformat = ");
        assert!(matches!(result, Err(SolverError::ConfigError { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RECUR_SOLVE_TEST_FORMAT", "json");
        let config = TomlConfig::from_toml_str(
            "[output]\nformat = \"${RECUR_SOLVE_TEST_FORMAT}\"\n",
        )
        .unwrap();
        assert_eq!(config.output.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            "[repl]\nprompt = \"${RECUR_SOLVE_TEST_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.repl.unwrap().prompt.as_deref(),
            Some("${RECUR_SOLVE_TEST_UNSET_VAR}")
        );
    }
}
