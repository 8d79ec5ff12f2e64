use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::domain::models::InspectReport;
use crate::services::classify::classify;
use crate::services::merge::{merge_lines, read_line_sets};
use crate::services::output::{export_lines, print_out};
use crate::services::policy::compliant_masks;

pub fn handle_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check {
            files,
            merge,
            bounds,
        } => {
            let sets = read_line_sets(files)?;
            let merged = merge_lines(sets, merge.mode(), merge.sort)?;
            let policy = bounds.to_policy();
            let compliant: Vec<String> = compliant_masks(&policy, merged).collect();
            emit(cli.json, &compliant, merge.out_file.as_deref())
        }
        Commands::Merge { files, merge } => {
            let sets = read_line_sets(files)?;
            let merged = merge_lines(sets, merge.mode(), merge.sort)?;
            emit(cli.json, &merged, merge.out_file.as_deref())
        }
        Commands::Inspect { masks } => {
            let reports: Vec<InspectReport> = masks
                .iter()
                .map(|m| InspectReport {
                    mask: m.clone(),
                    counts: classify(m),
                })
                .collect();
            print_out(cli.json, &reports, |r| {
                format!(
                    "{}\tlower={}\tupper={}\tdigit={}\tspecial={}\tlength={}",
                    r.mask,
                    r.counts.lower,
                    r.counts.upper,
                    r.counts.digit,
                    r.counts.special,
                    r.counts.length
                )
            })
        }
    }
}

fn emit(json: bool, lines: &[String], out_file: Option<&Path>) -> anyhow::Result<()> {
    if out_file.is_some() {
        export_lines(lines, out_file)
    } else {
        print_out(json, lines, |line| line.clone())
    }
}
