use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::domain::contributions::ContributionTable;

#[derive(Error, Debug, PartialEq)]
pub enum LaborCostError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaborCost {
    pub gross_salary: f64,
    pub contribution_rate_sum: f64,
    pub headcount: u32,
    pub per_employee_cost: f64,
    pub total_cost: f64,
}

/// Employer cost of `headcount` employees paid `gross_salary` each, with the
/// contribution rates added on top.
///
/// Rates are not capped: a table summing to more than 100% simply more than
/// doubles the cost.
pub fn compute_labor_cost(
    gross_salary: f64,
    contributions: &ContributionTable,
    headcount: u32,
) -> Result<LaborCost, LaborCostError> {
    if !gross_salary.is_finite() || gross_salary < 0.0 {
        return Err(LaborCostError::InvalidParameter {
            name: "gross_salary",
            reason: format!("must be a non-negative number, got {gross_salary}"),
        });
    }
    for (kind, rate) in contributions.iter() {
        if !rate.is_finite() || rate < 0.0 {
            return Err(LaborCostError::InvalidParameter {
                name: kind.name(),
                reason: format!("must be a non-negative percentage, got {rate}"),
            });
        }
    }

    let contribution_rate_sum = contributions.rate_sum();
    let per_employee_cost = gross_salary * (1.0 + contribution_rate_sum / 100.0);
    let total_cost = per_employee_cost * f64::from(headcount);
    debug!(
        "labor cost: {headcount} x {per_employee_cost:.2} ({contribution_rate_sum:.2}% contributions)"
    );

    Ok(LaborCost {
        gross_salary,
        contribution_rate_sum,
        headcount,
        per_employee_cost,
        total_cost,
    })
}
