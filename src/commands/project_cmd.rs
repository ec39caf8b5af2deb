use std::path::Path;

use chrono::Local;
use log::info;

use crate::commands::CommandError;
use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::report_format::{format_labor_report, format_projection_report};
use crate::domain::scenario::Scenario;
use crate::services::model::{ModelRun, run_scenario};
use crate::services::profit_plot::write_profit_plot_png;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::spreadsheet_export::{SPREADSHEET_MIME_TYPE, export_spreadsheet};

pub fn project_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Project {
        input,
        output,
        format,
        chart,
        export_dir,
        overrides,
    } = cmd
    {
        let mut scenario = load_scenario(input.as_deref())?;
        overrides.apply(&mut scenario);

        let run = run_scenario(&scenario)?;
        println!("{}", format_labor_report(run.labor.contract, &run.labor.cost));
        println!();
        println!("{}", format_projection_report(&run));

        if let Some(output) = output {
            write_run(&output, format, &run)?;
            println!("Projection result written to {output}");
        }

        if let Some(chart) = chart {
            write_profit_plot_png(&chart, &run.projection.monthly)?;
            println!("Profit chart written to {chart}");
        }

        if let Some(export_dir) = export_dir {
            let today = Local::now().date_naive();
            let path = export_spreadsheet(
                Path::new(&export_dir),
                today,
                &run.projection.monthly,
                &run.projection.summary,
            )?;
            println!(
                "Spreadsheet written to {} ({SPREADSHEET_MIME_TYPE})",
                path.display()
            );
        }
    }
    Ok(())
}

pub(crate) fn load_scenario(input: Option<&str>) -> Result<Scenario, CommandError> {
    match input {
        Some(path) => {
            info!("loading scenario from {path}");
            Ok(load_scenario_from_yaml_file(path)?)
        }
        None => Ok(Scenario::default()),
    }
}

fn write_run(output: &str, format: OutputFormat, run: &ModelRun) -> Result<(), CommandError> {
    let contents = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(run).map_err(|e| CommandError::Serialize(e.to_string()))?
        }
        OutputFormat::Json => serde_json::to_string_pretty(run)
            .map_err(|e| CommandError::Serialize(e.to_string()))?,
    };
    std::fs::write(output, contents).map_err(|source| CommandError::Write {
        path: output.to_string(),
        source,
    })
}
