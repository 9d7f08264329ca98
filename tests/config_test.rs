use recur_solve::{CliConfig, SolverSettings, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn cli_with(config: Option<std::path::PathBuf>, format: Option<String>) -> CliConfig {
    CliConfig {
        equation: None,
        config,
        format,
        verbose: false,
    }
}

#[test]
fn test_defaults_without_config_file() {
    let settings = SolverSettings::resolve(&cli_with(None, None)).unwrap();
    assert_eq!(settings.format, "text");
    assert_eq!(settings.prompt, "recurrence> ");
    assert!(settings.banner);
}

#[test]
fn test_settings_loaded_from_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nformat = \"json\"\n\n[repl]\nprompt = \"$ \"\nbanner = false").unwrap();

    let settings =
        SolverSettings::resolve(&cli_with(Some(file.path().to_path_buf()), None)).unwrap();
    assert_eq!(settings.format, "json");
    assert_eq!(settings.prompt, "$ ");
    assert!(!settings.banner);
}

#[test]
fn test_cli_flag_overrides_file_value() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nformat = \"json\"").unwrap();

    let cli = cli_with(Some(file.path().to_path_buf()), Some("text".to_string()));
    let settings = SolverSettings::resolve(&cli).unwrap();
    assert_eq!(settings.format, "text");
}

#[test]
fn test_invalid_format_rejected() {
    let cli = cli_with(None, Some("xml".to_string()));
    assert!(SolverSettings::resolve(&cli).is_err());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = cli_with(Some("/nonexistent/recur-solve.toml".into()), None);
    assert!(SolverSettings::resolve(&cli).is_err());
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let config = TomlConfig::from_toml_str("[repl]\nprompt = \"eq> \"\n").unwrap();
    assert!(config.output.is_none());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[repl]\nprompt = \"eq> \"").unwrap();
    let settings =
        SolverSettings::resolve(&cli_with(Some(file.path().to_path_buf()), None)).unwrap();
    assert_eq!(settings.prompt, "eq> ");
    assert_eq!(settings.format, "text");
    assert!(settings.banner);
}
