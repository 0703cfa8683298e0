//! Implementation of the `platform list` command.

use std::io;

use platform_core::application::MappingInfo;

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::scaffold_service(&global, &config, &output)?;
    let mappings = service.list_mappings()?;

    let format = match (args.format, output.format()) {
        (ListFormat::Table, OutputFormat::Json) => ListFormat::Json,
        (format, _) => format,
    };

    match format {
        ListFormat::Table => {
            output.header("Manifest entries:")?;
            for line in table(&mappings) {
                output.data(&line)?;
            }
        }

        // Machine-readable formats bypass quiet mode.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&mappings).map_err(io::Error::from)?;
            output.data(&json)?;
        }

        ListFormat::List => {
            for m in &mappings {
                output.data(&m.name)?;
            }
        }

        ListFormat::Csv => {
            output.data("name,condition,feature,source,target")?;
            for m in &mappings {
                output.data(&format!(
                    "{},{},{},{},{}",
                    m.name, m.condition, m.feature, m.source, m.target
                ))?;
            }
        }
    }

    Ok(())
}

/// Column-aligned rows with a header line.
fn table(mappings: &[MappingInfo]) -> Vec<String> {
    let headers = ["NAME", "CONDITION", "FEATURE", "TARGET"];
    let rows: Vec<[&str; 4]> = mappings
        .iter()
        .map(|m| [&*m.name, &*m.condition, &*m.feature, &*m.target])
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    std::iter::once(headers)
        .chain(rows)
        .map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ");
            format!("  {}", line.trim_end())
        })
        .collect()
}
