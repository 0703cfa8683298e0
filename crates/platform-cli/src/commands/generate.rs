//! Implementation of the `platform generate` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call the
//! core scaffold service, and deliver the rendered files. No generation logic
//! lives here.

use std::io::{self, IsTerminal};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use platform_adapters::LocalFilesystem;
use platform_core::{
    application::{ApplicationError, OutputWriter, WriteOutcome},
    domain::{RenderedFile, ScaffoldConfig, ScaffoldRequest},
    error::{PlatformError, PlatformResult},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `platform generate` command.
///
/// Dispatch sequence:
/// 1. Resolve project name and workflow type (flags, then defaults)
/// 2. Generate all enabled features in memory
/// 3. Deliver: `--stdout` prints text blocks, `--dry-run` lists paths,
///    otherwise write below `--output`
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build the request
    let request = build_request(&args, &config)?;
    debug!(
        project = %request.project_name,
        workflow_type = %request.workflow_type,
        actions = request.with_actions,
        docker = request.with_docker || request.use_docker,
        flux = request.with_flux,
        "Request resolved"
    );
    let scaffold = ScaffoldConfig::from(request);

    // 2. Generate
    let service = super::scaffold_service(&global, &config, &output)?;
    let files = service.generate(&scaffold)?;

    if files.is_empty() {
        output.warning(
            "No features enabled; pass --with-actions, --with-docker or --with-flux",
        )?;
        return Ok(());
    }

    // 3. Deliver
    if args.stdout {
        return print_files(&files, &output);
    }

    if args.dry_run {
        output.info(&format!(
            "Dry run: would write {} file(s) to {}",
            files.len(),
            args.output.display()
        ))?;
        for file in &files {
            let path = args.output.join(file.path());
            let marker = if path.exists() { " (exists)" } else { "" };
            output.data(&format!(
                "  {}{marker} ({} bytes)",
                path.display(),
                file.size()
            ))?;
        }
        return Ok(());
    }

    let interactive = !args.force
        && !output.is_quiet()
        && io::stdin().is_terminal()
        && io::stderr().is_terminal();
    let writer = OutputWriter::new(Box::new(LocalFilesystem::new()));
    let outcomes = writer.write_all(&args.output, &files, |path| {
        overwrite_decision(path, args.force, interactive)
    })?;

    report(&outcomes, &output)?;
    info!(project = %scaffold.project_name(), "Generation completed");

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &GenerateArgs, config: &AppConfig) -> CliResult<ScaffoldRequest> {
    let project_name = match &args.project_name {
        Some(name) => name.clone(),
        None => current_dir_name()?,
    };

    let workflow_type = args
        .workflow_type
        .clone()
        .unwrap_or_else(|| config.defaults.workflow_type.clone());

    Ok(ScaffoldRequest {
        project_name,
        workflow_type,
        with_actions: args.with_actions,
        with_docker: args.with_docker,
        with_flux: args.with_flux,
        use_docker: args.docker,
    })
}

/// Base name of the working directory. Validation happens in core, so an
/// unusable name is reported there.
fn current_dir_name() -> CliResult<String> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to read the current directory".into(),
        source: e,
    })?;

    cwd.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "cannot derive a project name from {}; pass --project-name",
                cwd.display()
            ),
            source: None,
        })
}

// ── Delivery ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FileJson<'a> {
    path: String,
    content: &'a str,
}

fn print_files(files: &[RenderedFile], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json: Vec<FileJson<'_>> = files
            .iter()
            .map(|f| FileJson {
                path: f.path().to_slash_string(),
                content: f.content(),
            })
            .collect();
        let text = serde_json::to_string_pretty(&json).map_err(io::Error::from)?;
        output.data(&text)?;
        return Ok(());
    }

    for file in files {
        output.data(file.to_text_block().trim_end_matches('\n'))?;
    }
    Ok(())
}

fn report(outcomes: &[WriteOutcome], output: &OutputManager) -> CliResult<()> {
    let mut written = 0;
    for outcome in outcomes {
        match outcome {
            WriteOutcome::Written(path) => {
                written += 1;
                output.print(&format!("  created {}", output.path(&path.display().to_string())))?;
            }
            WriteOutcome::Skipped(path) => {
                output.warning(&format!("skipped {} (already exists)", path.display()))?;
            }
        }
    }
    output.success(&format!("Generated {written} file(s)"))?;
    Ok(())
}

// ── Overwrite policy ──────────────────────────────────────────────────────────

/// Whether to replace an existing file.
///
/// `--force` always overwrites; an interactive session asks; anything else
/// refuses with `FileExists`.
fn overwrite_decision(path: &Path, force: bool, interactive: bool) -> PlatformResult<bool> {
    if force {
        return Ok(true);
    }
    if !interactive {
        return Err(file_exists(path));
    }
    confirm_overwrite(path).map_err(|_| file_exists(path))
}

fn file_exists(path: &Path) -> PlatformError {
    ApplicationError::FileExists {
        path: path.to_path_buf(),
    }
    .into()
}

#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> Result<bool, dialoguer::Error> {
    dialoguer::Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    use std::io::Write;

    eprint!("{} exists. Overwrite? [y/N] ", path.display());
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
