use std::fs;
use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline;
use crate::errors::AppResult;
use crate::render::colors::ColorMap;
use crate::render::{self, ChartOptions, html};
use crate::ui::messages::{info, success};
use crate::utils::datetime::format_hours;
use crate::utils::fs::ensure_writable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        file,
        from,
        to,
        output,
        prefix,
        title,
        color_seed,
        force,
    } = cmd
    {
        let prefix = prefix.as_deref().unwrap_or(&cfg.default_prefix);
        let output = output.as_deref().unwrap_or(&cfg.output_file);
        let title = title.as_deref().unwrap_or(&cfg.chart_title);
        let seed = color_seed.unwrap_or(cfg.color_seed);

        let out_path = Path::new(output);
        ensure_writable(out_path, *force)?;

        info(format!("Reading schedule: {file}"));
        info(format!("Date window: {from} to {to}"));

        let report = pipeline::process(Path::new(file), from, to, prefix)?;
        let dataset = &report.dataset;

        success(format!("Tasks selected: {}", dataset.len()));
        if let (Some(lo), Some(hi)) = (dataset.earliest_start(), dataset.latest_end()) {
            info(format!("Earliest start: {lo}"));
            info(format!("Latest end: {hi}"));
        }

        let records = render::chart_records(dataset);
        let colors = ColorMap::assign(&dataset.resources(), seed);
        let options = ChartOptions {
            title: title.to_string(),
        };

        let page = html::render(&records, &colors, &options)?;
        fs::write(out_path, page)?;
        success(format!("Gantt chart written to {}", out_path.display()));

        let mut summary = Table::new(&["Task", "Activity", "Responsible", "Hours"]);
        for row in &dataset.rows {
            summary.add_row(vec![
                row.activity_id.clone().unwrap_or_default(),
                row.activity.clone(),
                row.responsible.clone(),
                format_hours(row.duration_hours),
            ]);
        }
        println!("{}", summary.render());
    }
    Ok(())
}
