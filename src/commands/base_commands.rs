use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::contributions::{ContractType, ContributionKind};
use crate::domain::scenario::Scenario;
use crate::domain::simulation::PolicyRounding;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project monthly appointments, policies, revenue and profit
    Project {
        /// Scenario YAML file (built-in defaults when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the projection result
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Output PNG file with the monthly profit trend
        #[arg(short, long)]
        chart: Option<String>,
        /// Directory for a dated spreadsheet export
        #[arg(short, long)]
        export_dir: Option<String>,
        #[command(flatten)]
        overrides: ScenarioOverrides,
    },
    /// Compute employer labor cost for a contract type
    LaborCost {
        /// Scenario YAML file (built-in defaults when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Number of employees (defaults to the scenario's consultants)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(0..=20))]
        headcount: Option<u32>,
        #[command(flatten)]
        labor: LaborOverrides,
    },
    /// Write a scenario YAML file with the default parameters
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Contract type whose default contributions are written
        #[arg(short, long, value_enum)]
        contract: Option<ContractType>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Flags that override single scenario values. Ranges follow the input
/// limits of the model form; scenario files are only checked by the model.
#[derive(Args, Debug, Default)]
pub struct ScenarioOverrides {
    /// Working days per month
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=31))]
    pub working_days: Option<u32>,
    /// Number of consultants
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
    pub consultants: Option<u32>,
    /// Appointments booked per consultant per day
    #[arg(long, value_parser = appointments_in_range)]
    pub appointments: Option<f64>,
    /// Share of booked appointments that take place
    #[arg(long, value_parser = rate_in_range)]
    pub show_up_rate: Option<f64>,
    /// Share of completed appointments that end with a sold policy
    #[arg(long, value_parser = rate_in_range)]
    pub conversion_rate: Option<f64>,
    /// Revenue per sold policy
    #[arg(long, value_parser = revenue_in_range)]
    pub revenue_per_policy: Option<f64>,
    /// One-time startup cost
    #[arg(long, value_parser = startup_cost_in_range)]
    pub startup_cost: Option<f64>,
    /// Number of months to project
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=24))]
    pub months: Option<u32>,
    /// Tolerance of the reported profit range
    #[arg(long, value_parser = tolerance_in_range)]
    pub tolerance: Option<f64>,
    /// Keep fractional policy counts instead of whole policies
    #[arg(long)]
    pub fractional_policies: bool,
    /// Fixed monthly operating cost instead of the computed labor cost
    #[arg(long, value_parser = non_negative_amount)]
    pub monthly_cost: Option<f64>,
    #[command(flatten)]
    pub labor: LaborOverrides,
}

#[derive(Args, Debug, Default)]
pub struct LaborOverrides {
    /// Contract type, resets contributions to its defaults
    #[arg(long, value_enum)]
    pub contract: Option<ContractType>,
    /// Monthly gross salary of one consultant
    #[arg(long, value_parser = non_negative_amount)]
    pub gross_salary: Option<f64>,
    /// Pension contribution (%)
    #[arg(long, value_parser = contribution_in_range)]
    pub pension: Option<f64>,
    /// Disability contribution (%)
    #[arg(long, value_parser = contribution_in_range)]
    pub disability: Option<f64>,
    /// Accident contribution (%)
    #[arg(long, value_parser = contribution_in_range)]
    pub accident: Option<f64>,
    /// Labor fund contribution (%)
    #[arg(long, value_parser = contribution_in_range)]
    pub labor_fund: Option<f64>,
    /// Guaranteed benefits fund contribution (%)
    #[arg(long, value_parser = contribution_in_range)]
    pub guaranteed_benefits_fund: Option<f64>,
    /// Employee capital plan contribution (%)
    #[arg(long, value_parser = contribution_in_range)]
    pub capital_plan: Option<f64>,
}

impl ScenarioOverrides {
    pub fn apply(&self, scenario: &mut Scenario) {
        if let Some(value) = self.working_days {
            scenario.working_days = value;
        }
        if let Some(value) = self.consultants {
            scenario.consultants = value;
        }
        if let Some(value) = self.appointments {
            scenario.appointments_per_consultant_per_day = value;
        }
        if let Some(value) = self.show_up_rate {
            scenario.show_up_rate = value;
        }
        if let Some(value) = self.conversion_rate {
            scenario.conversion_rate = value;
        }
        if let Some(value) = self.revenue_per_policy {
            scenario.revenue_per_policy = value;
        }
        if let Some(value) = self.startup_cost {
            scenario.startup_cost = value;
        }
        if let Some(value) = self.months {
            scenario.months = value;
        }
        if let Some(value) = self.tolerance {
            scenario.tolerance = value;
        }
        if self.fractional_policies {
            scenario.policy_rounding = PolicyRounding::Fractional;
        }
        if self.monthly_cost.is_some() {
            scenario.monthly_operating_cost = self.monthly_cost;
        }
        self.labor.apply(scenario);
    }
}

impl LaborOverrides {
    pub fn apply(&self, scenario: &mut Scenario) {
        let labor = &mut scenario.labor;
        if let Some(contract) = self.contract {
            labor.contract = contract;
            labor.contributions = contract.default_contributions();
        }
        if let Some(value) = self.gross_salary {
            labor.gross_salary = value;
        }
        let rates = [
            (ContributionKind::Pension, self.pension),
            (ContributionKind::Disability, self.disability),
            (ContributionKind::Accident, self.accident),
            (ContributionKind::LaborFund, self.labor_fund),
            (ContributionKind::GuaranteedBenefitsFund, self.guaranteed_benefits_fund),
            (ContributionKind::CapitalPlan, self.capital_plan),
        ];
        for (kind, rate) in rates {
            if let Some(rate) = rate {
                labor.contributions.set(kind, rate);
            }
        }
    }
}

fn parse_in_range(value: &str, min: f64, max: f64) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !(min..=max).contains(&parsed) {
        return Err(format!("{parsed} is not in {min}..={max}"));
    }
    Ok(parsed)
}

fn appointments_in_range(value: &str) -> Result<f64, String> {
    parse_in_range(value, 1.0, 20.0)
}

fn rate_in_range(value: &str) -> Result<f64, String> {
    parse_in_range(value, 0.05, 1.0)
}

fn revenue_in_range(value: &str) -> Result<f64, String> {
    parse_in_range(value, 500.0, 10000.0)
}

fn startup_cost_in_range(value: &str) -> Result<f64, String> {
    parse_in_range(value, 0.0, 100000.0)
}

fn tolerance_in_range(value: &str) -> Result<f64, String> {
    parse_in_range(value, 0.0, 0.5)
}

fn contribution_in_range(value: &str) -> Result<f64, String> {
    parse_in_range(value, 0.0, 20.0)
}

fn non_negative_amount(value: &str) -> Result<f64, String> {
    parse_in_range(value, 0.0, f64::MAX)
}
