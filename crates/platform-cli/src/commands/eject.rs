//! Implementation of the `platform eject` command.

use tracing::{info, instrument};

use platform_adapters::{LocalFilesystem, builtin_templates};

use crate::{cli::EjectArgs, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: EjectArgs, output: OutputManager) -> CliResult<()> {
    let written = builtin_templates::eject(&LocalFilesystem::new(), &args.dir, args.force)?;

    info!(files = written.len(), "Eject completed");

    for path in &written {
        output.print(&format!("  {}", output.path(&path.display().to_string())))?;
    }
    output.success(&format!(
        "Copied {} built-in files to {}",
        written.len(),
        args.dir.display()
    ))?;
    output.info(&format!(
        "Use them with: platform generate --templates-dir {}",
        args.dir.display()
    ))?;

    Ok(())
}
