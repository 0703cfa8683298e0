//! `platform config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &global, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Effective value of `key`; `templates.dir` includes the `--templates-dir`
/// flag.
fn get_config_value(config: &AppConfig, global: &GlobalArgs, key: &str) -> CliResult<String> {
    match key {
        "defaults.workflow_type" => Ok(config.defaults.workflow_type.clone()),
        "templates.dir" => Ok(config
            .templates_dir(global.templates_dir.as_deref())
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::PathBuf;

    fn global(templates_dir: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            templates_dir: templates_dir.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, &global(None), "defaults.workflow_type").unwrap(),
            "go"
        );
        assert_eq!(
            get_config_value(&cfg, &global(None), "output.no_color").unwrap(),
            "false"
        );
    }

    #[test]
    fn templates_dir_reflects_flag() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, &global(None), "templates.dir").unwrap(),
            ""
        );
        assert_eq!(
            get_config_value(&cfg, &global(Some("/tpl")), "templates.dir").unwrap(),
            "/tpl"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, &global(None), "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
