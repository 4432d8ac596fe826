use std::path::Path;

use crate::cli::parser::Commands;
use crate::core::pipeline;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Check { file } = cmd {
        let report = pipeline::inspect(Path::new(file))?;

        info(format!("Columns: {}", report.columns.join(", ")));
        info(format!("Rows: {}", report.total_rows));

        if !report.failures.is_empty() {
            warning(format!(
                "{} date cells could not be parsed",
                report.failures.len()
            ));
        }
        success(format!(
            "{} of {} rows carry two valid dates",
            report.valid_rows, report.total_rows
        ));
    }
    Ok(())
}
