use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::domain::contributions::{ContractType, ContributionTable};
use crate::domain::scenario::Scenario;
use crate::domain::simulation::SimulationParameters;
use crate::services::labor_cost::{LaborCost, LaborCostError, compute_labor_cost};
use crate::services::projection::{Projection, ProjectionError, project};

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("labor cost: {0}")]
    LaborCost(#[from] LaborCostError),
    #[error("projection: {0}")]
    Projection(#[from] ProjectionError),
}

#[derive(Serialize, Debug, Clone)]
pub struct LaborReport {
    pub contract: ContractType,
    pub contributions: ContributionTable,
    #[serde(flatten)]
    pub cost: LaborCost,
}

#[derive(Serialize, Debug, Clone)]
pub struct ModelRun {
    pub parameters: SimulationParameters,
    pub labor: LaborReport,
    #[serde(flatten)]
    pub projection: Projection,
}

/// Runs the labor cost calculation for the scenario's consultants and feeds
/// the result into the projection as the monthly operating cost.
pub fn run_scenario(scenario: &Scenario) -> Result<ModelRun, ModelError> {
    let labor = &scenario.labor;
    let cost = compute_labor_cost(labor.gross_salary, &labor.contributions, scenario.consultants)?;
    let parameters = scenario.parameters(cost.total_cost);
    if scenario.monthly_operating_cost.is_some() {
        info!(
            "monthly operating cost pinned to {:.2}, labor cost {:.2} not used",
            parameters.monthly_operating_cost, cost.total_cost
        );
    }

    let projection = project(&parameters)?;
    info!(
        "{} months projected, total profit {:.2}",
        parameters.months, projection.summary.total_profit
    );

    Ok(ModelRun {
        parameters,
        labor: LaborReport {
            contract: labor.contract,
            contributions: labor.contributions,
            cost,
        },
        projection,
    })
}
