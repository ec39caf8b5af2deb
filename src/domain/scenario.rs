use crate::domain::contributions::{ContractType, ContributionTable};
use crate::domain::simulation::{PolicyRounding, SimulationParameters};

/// How consultants are employed and paid.
#[derive(Debug, Clone, PartialEq)]
pub struct LaborSettings {
    pub contract: ContractType,
    pub gross_salary: f64,
    pub contributions: ContributionTable,
}

impl LaborSettings {
    pub fn for_contract(contract: ContractType, gross_salary: f64) -> Self {
        Self {
            contract,
            gross_salary,
            contributions: contract.default_contributions(),
        }
    }
}

impl Default for LaborSettings {
    fn default() -> Self {
        Self::for_contract(ContractType::Employment, 5000.0)
    }
}

/// Everything needed for one model run.
///
/// The monthly operating cost is derived from the labor settings unless
/// `monthly_operating_cost` pins it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub working_days: u32,
    pub consultants: u32,
    pub appointments_per_consultant_per_day: f64,
    pub show_up_rate: f64,
    pub conversion_rate: f64,
    pub revenue_per_policy: f64,
    pub startup_cost: f64,
    pub months: u32,
    pub tolerance: f64,
    pub policy_rounding: PolicyRounding,
    pub monthly_operating_cost: Option<f64>,
    pub labor: LaborSettings,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            working_days: 22,
            consultants: 3,
            appointments_per_consultant_per_day: 6.0,
            show_up_rate: 1.0 / 3.0,
            conversion_rate: 1.0 / 8.0,
            revenue_per_policy: 1875.0,
            startup_cost: 3900.0,
            months: 3,
            tolerance: 0.20,
            policy_rounding: PolicyRounding::Whole,
            monthly_operating_cost: None,
            labor: LaborSettings::default(),
        }
    }
}

impl Scenario {
    /// Builds projection inputs, using `labor_cost` unless the scenario
    /// overrides the monthly operating cost.
    pub fn parameters(&self, labor_cost: f64) -> SimulationParameters {
        SimulationParameters {
            working_days: self.working_days,
            consultants: self.consultants,
            appointments_per_consultant_per_day: self.appointments_per_consultant_per_day,
            show_up_rate: self.show_up_rate,
            conversion_rate: self.conversion_rate,
            revenue_per_policy: self.revenue_per_policy,
            monthly_operating_cost: self.monthly_operating_cost.unwrap_or(labor_cost),
            startup_cost: self.startup_cost,
            months: self.months,
            tolerance: self.tolerance,
            policy_rounding: self.policy_rounding,
        }
    }
}
