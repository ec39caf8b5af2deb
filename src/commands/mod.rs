pub mod base_commands;
pub mod init_cmd;
pub mod labor_cost_cmd;
pub mod project_cmd;
pub mod report_format;

use thiserror::Error;

use crate::services::labor_cost::LaborCostError;
use crate::services::model::ModelError;
use crate::services::profit_plot::ProfitPlotError;
use crate::services::scenario_yaml::ScenarioYamlError;
use crate::services::spreadsheet_export::ExportError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to load scenario: {0}")]
    Scenario(#[from] ScenarioYamlError),
    #[error("Failed to run model: {0}")]
    Model(#[from] ModelError),
    #[error("Failed to compute labor cost: {0}")]
    LaborCost(#[from] LaborCostError),
    #[error("Failed to serialize output: {0}")]
    Serialize(String),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to write profit chart: {0}")]
    Plot(#[from] ProfitPlotError),
    #[error("{0}")]
    Export(#[from] ExportError),
}
