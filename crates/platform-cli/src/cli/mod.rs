//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "platform",
    bin_name = "platform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate CI workflows, Dockerfiles and Flux manifests",
    long_about = "platform renders a manifest-driven template set into GitHub \
                  Actions workflows, Docker build files and FluxCD manifests.",
    after_help = "EXAMPLES:\n\
        \x20 platform generate -p acme --with-actions\n\
        \x20 platform generate -p acme -t node --with-actions --with-docker\n\
        \x20 platform generate --with-flux --stdout\n\
        \x20 platform eject ./my-templates",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the enabled features into the output directory.
    #[command(
        visible_alias = "gen",
        about = "Generate scaffolding files",
        after_help = "EXAMPLES:\n\
            \x20 platform generate -p acme --with-actions\n\
            \x20 platform generate -p acme --with-docker -o ./service\n\
            \x20 platform generate -p acme --with-actions --with-flux --dry-run\n\
            \x20 platform generate -p acme --with-docker --templates-dir ./my-templates"
    )]
    Generate(GenerateArgs),

    /// List the effective manifest.
    #[command(
        visible_alias = "ls",
        about = "List manifest entries",
        after_help = "EXAMPLES:\n\
            \x20 platform list\n\
            \x20 platform list --format json\n\
            \x20 platform list --templates-dir ./my-templates"
    )]
    List(ListArgs),

    /// Copy the built-in templates into a directory for customisation.
    #[command(
        about = "Export built-in templates",
        after_help = "EXAMPLES:\n\
            \x20 platform eject ./my-templates\n\
            \x20 platform generate -p acme --with-actions --templates-dir ./my-templates"
    )]
    Eject(EjectArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 platform completions bash > ~/.local/share/bash-completion/completions/platform\n\
            \x20 platform completions zsh  > ~/.zfunc/_platform\n\
            \x20 platform completions fish > ~/.config/fish/completions/platform.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 platform config get defaults.workflow_type\n\
            \x20 platform config list\n\
            \x20 platform config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `platform generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name; defaults to the current directory's name.
    #[arg(
        short = 'p',
        long = "project-name",
        value_name = "NAME",
        help = "Project name (default: current directory name)"
    )]
    pub project_name: Option<String>,

    /// Workflow flavor for the Actions feature.
    #[arg(
        short = 't',
        long = "workflow-type",
        value_name = "TYPE",
        help = "Workflow type: go, typescript (or node), python"
    )]
    pub workflow_type: Option<String>,

    /// Generate a GitHub Actions workflow.
    #[arg(long = "with-actions", help = "Generate a GitHub Actions workflow")]
    pub with_actions: bool,

    /// Generate a Dockerfile and its build workflow.
    #[arg(long = "with-docker", help = "Generate Dockerfile and docker-build.yaml")]
    pub with_docker: bool,

    /// Generate FluxCD manifests.
    #[arg(long = "with-flux", help = "Generate FluxCD manifests")]
    pub with_flux: bool,

    /// Older spelling of `--with-docker`.
    #[arg(short = 'd', long = "docker", help = "Same as --with-docker")]
    pub docker: bool,

    /// Directory the files are written below.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// Preview what would be written.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Overwrite existing files without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Print the files instead of writing them.
    #[arg(
        long = "stdout",
        conflicts_with = "dry_run",
        help = "Print files to stdout instead of writing them"
    )]
    pub stdout: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `platform list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── eject ─────────────────────────────────────────────────────────────────────

/// Arguments for `platform eject`.
#[derive(Debug, Args)]
pub struct EjectArgs {
    /// Destination directory.
    #[arg(value_name = "DIR", help = "Directory to copy the templates into")]
    pub dir: PathBuf,

    /// Overwrite files already in the directory.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `platform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `platform config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.workflow_type`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "platform",
            "generate",
            "-p",
            "acme",
            "-t",
            "node",
            "--with-actions",
            "-d",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.project_name.as_deref(), Some("acme"));
        assert_eq!(args.workflow_type.as_deref(), Some("node"));
        assert!(args.with_actions);
        assert!(args.docker);
        assert!(!args.with_docker);
        assert_eq!(args.output, PathBuf::from("."));
    }

    #[test]
    fn gen_alias() {
        let cli = Cli::parse_from(["platform", "gen", "--with-flux"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn templates_dir_is_global() {
        let cli = Cli::parse_from(["platform", "list", "--templates-dir", "/tmp/tpl"]);
        assert_eq!(cli.global.templates_dir, Some(PathBuf::from("/tmp/tpl")));
    }

    #[test]
    fn stdout_conflicts_with_dry_run() {
        let result = Cli::try_parse_from(["platform", "generate", "--stdout", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["platform", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
