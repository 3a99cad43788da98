//! Run report output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::provision::RunReport;

/// Output the run report in the specified format
pub fn output_report(report: &RunReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", report_table(report));
            for line in summary_lines(report) {
                println!("{}", line);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(report),
        OutputFormat::Yaml => print_yaml(report),
    }
}

/// One row per processed record, in stage then input order
pub fn report_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["STAGE", "SUBJECT", "RESULT", "DETAIL"]);

    for stage in &report.stages {
        for result in &stage.results {
            table.add_row(vec![
                stage.stage.to_string().as_str(),
                result.subject.as_str(),
                result.outcome.label(),
                result.outcome.detail(),
            ]);
        }
    }

    table
}

fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.stages.len() + 1);
    if report.dry_run {
        lines.push(format!("Dry run against {}: nothing was changed", report.organization));
    }
    for stage in &report.stages {
        lines.push(format!("{}: {}", stage.stage, stage.summary()));
    }
    lines
}
