use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::contributions::{ContractType, ContributionKind, ContributionTable};
use crate::domain::scenario::{LaborSettings, Scenario};
use crate::domain::simulation::PolicyRounding;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid contract type: {0} (expected employment, mandate or specific-work)")]
    InvalidContract(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    #[serde(default)]
    simulation: Option<SimulationRecord>,
    #[serde(default)]
    labor: Option<LaborRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationRecord {
    working_days: Option<u32>,
    consultants: Option<u32>,
    appointments_per_consultant_per_day: Option<f64>,
    show_up_rate: Option<f64>,
    conversion_rate: Option<f64>,
    revenue_per_policy: Option<f64>,
    startup_cost: Option<f64>,
    months: Option<u32>,
    tolerance: Option<f64>,
    round_policies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monthly_operating_cost: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LaborRecord {
    contract: Option<String>,
    gross_salary: Option<f64>,
    contributions: Option<ContributionsRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContributionsRecord {
    pension: Option<f64>,
    disability: Option<f64>,
    accident: Option<f64>,
    labor_fund: Option<f64>,
    guaranteed_benefits_fund: Option<f64>,
    capital_plan: Option<f64>,
}

/// Loads a scenario file. Missing sections and fields fall back to
/// [`Scenario::default`]; missing contribution rates fall back to the
/// defaults of the selected contract type.
pub fn load_scenario_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ScenarioYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, ScenarioYamlError> {
    // An empty document deserializes to unit, not to an empty mapping.
    let record: ScenarioRecord = if input.trim().is_empty() {
        ScenarioRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };

    let defaults = Scenario::default();
    let simulation = record.simulation.unwrap_or_default();
    let labor = labor_from_record(record.labor.unwrap_or_default(), &defaults.labor)?;

    Ok(Scenario {
        working_days: simulation.working_days.unwrap_or(defaults.working_days),
        consultants: simulation.consultants.unwrap_or(defaults.consultants),
        appointments_per_consultant_per_day: simulation
            .appointments_per_consultant_per_day
            .unwrap_or(defaults.appointments_per_consultant_per_day),
        show_up_rate: simulation.show_up_rate.unwrap_or(defaults.show_up_rate),
        conversion_rate: simulation.conversion_rate.unwrap_or(defaults.conversion_rate),
        revenue_per_policy: simulation
            .revenue_per_policy
            .unwrap_or(defaults.revenue_per_policy),
        startup_cost: simulation.startup_cost.unwrap_or(defaults.startup_cost),
        months: simulation.months.unwrap_or(defaults.months),
        tolerance: simulation.tolerance.unwrap_or(defaults.tolerance),
        policy_rounding: simulation
            .round_policies
            .map(PolicyRounding::from_flag)
            .unwrap_or(defaults.policy_rounding),
        monthly_operating_cost: simulation.monthly_operating_cost,
        labor,
    })
}

fn labor_from_record(
    record: LaborRecord,
    defaults: &LaborSettings,
) -> Result<LaborSettings, ScenarioYamlError> {
    let contract = match record.contract {
        Some(value) => {
            ContractType::parse(&value).ok_or(ScenarioYamlError::InvalidContract(value))?
        }
        None => defaults.contract,
    };
    let mut contributions = contract.default_contributions();
    if let Some(overrides) = record.contributions {
        apply_contribution_overrides(&mut contributions, &overrides);
    }

    Ok(LaborSettings {
        contract,
        gross_salary: record.gross_salary.unwrap_or(defaults.gross_salary),
        contributions,
    })
}

fn apply_contribution_overrides(table: &mut ContributionTable, overrides: &ContributionsRecord) {
    let pairs = [
        (ContributionKind::Pension, overrides.pension),
        (ContributionKind::Disability, overrides.disability),
        (ContributionKind::Accident, overrides.accident),
        (ContributionKind::LaborFund, overrides.labor_fund),
        (
            ContributionKind::GuaranteedBenefitsFund,
            overrides.guaranteed_benefits_fund,
        ),
        (ContributionKind::CapitalPlan, overrides.capital_plan),
    ];
    for (kind, rate) in pairs {
        if let Some(rate) = rate {
            table.set(kind, rate);
        }
    }
}

pub fn serialize_scenario_to_yaml<W: Write>(writer: &mut W, scenario: &Scenario) -> io::Result<()> {
    let contributions = &scenario.labor.contributions;
    let record = ScenarioRecord {
        simulation: Some(SimulationRecord {
            working_days: Some(scenario.working_days),
            consultants: Some(scenario.consultants),
            appointments_per_consultant_per_day: Some(scenario.appointments_per_consultant_per_day),
            show_up_rate: Some(scenario.show_up_rate),
            conversion_rate: Some(scenario.conversion_rate),
            revenue_per_policy: Some(scenario.revenue_per_policy),
            startup_cost: Some(scenario.startup_cost),
            months: Some(scenario.months),
            tolerance: Some(scenario.tolerance),
            round_policies: Some(scenario.policy_rounding.is_whole()),
            monthly_operating_cost: scenario.monthly_operating_cost,
        }),
        labor: Some(LaborRecord {
            contract: Some(scenario.labor.contract.key().to_string()),
            gross_salary: Some(scenario.labor.gross_salary),
            contributions: Some(ContributionsRecord {
                pension: Some(contributions.pension),
                disability: Some(contributions.disability),
                accident: Some(contributions.accident),
                labor_fund: Some(contributions.labor_fund),
                guaranteed_benefits_fund: Some(contributions.guaranteed_benefits_fund),
                capital_plan: Some(contributions.capital_plan),
            }),
        }),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
