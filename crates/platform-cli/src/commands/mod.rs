//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod eject;
pub mod generate;
pub mod list;

use std::path::Path;

use platform_adapters::{LayeredTemplateSource, MiniJinjaRenderer};
use platform_core::application::ScaffoldService;
use tracing::debug;

use crate::{cli::global::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Build the service used by `generate` and `list`: override directory from
/// `--templates-dir` or config, built-ins otherwise.
pub(crate) fn scaffold_service(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ScaffoldService> {
    let source = match config.templates_dir(global.templates_dir.as_deref()) {
        Some(dir) => {
            warn_if_missing(dir, output)?;
            debug!(dir = %dir.display(), "Using template override directory");
            LayeredTemplateSource::with_override_dir(dir)
        }
        None => LayeredTemplateSource::builtin(),
    };

    Ok(ScaffoldService::new(
        Box::new(source),
        Box::new(MiniJinjaRenderer::new()),
    ))
}

fn warn_if_missing(dir: &Path, output: &OutputManager) -> CliResult<()> {
    if !dir.is_dir() {
        output.warning(&format!(
            "Template directory {} does not exist; using built-in templates",
            dir.display()
        ))?;
    }
    Ok(())
}
