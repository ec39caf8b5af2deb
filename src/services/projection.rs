use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::domain::simulation::{MonthlyRecord, SimulationParameters};
use crate::domain::summary::{BreakEven, Percentage, ProfitRange, SummaryRecord};

#[derive(Error, Debug, PartialEq)]
pub enum ProjectionError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub monthly: Vec<MonthlyRecord>,
    pub summary: SummaryRecord,
}

/// Projects monthly figures over `params.months` and aggregates them.
///
/// Months do not carry state between each other: every month repeats the
/// same staffing arithmetic, only the break-even scan looks at the running
/// total.
pub fn project(params: &SimulationParameters) -> Result<Projection, ProjectionError> {
    validate(params)?;

    let monthly: Vec<MonthlyRecord> = (1..=params.months)
        .map(|month| project_month(params, month))
        .collect();
    let summary = summarize(&monthly, params.startup_cost, params.tolerance);

    debug!(
        "projected {} months, total profit {:.2}, break-even {}",
        monthly.len(),
        summary.total_profit,
        summary.break_even_month
    );
    Ok(Projection { monthly, summary })
}

fn project_month(params: &SimulationParameters, month: u32) -> MonthlyRecord {
    let booked = f64::from(params.consultants)
        * f64::from(params.working_days)
        * params.appointments_per_consultant_per_day;
    let completed = booked * params.show_up_rate;
    let policies = params.policy_rounding.apply(completed * params.conversion_rate);

    let revenue = policies.as_f64() * params.revenue_per_policy;
    let cost = params.monthly_operating_cost;

    MonthlyRecord {
        month,
        booked_appointments: booked.trunc() as u64,
        completed_appointments: completed.round() as u64,
        policies,
        revenue,
        cost,
        profit: revenue - cost,
    }
}

fn summarize(monthly: &[MonthlyRecord], startup_cost: f64, tolerance: f64) -> SummaryRecord {
    let total_revenue: f64 = monthly.iter().map(|record| record.revenue).sum();
    let total_cost = monthly.iter().map(|record| record.cost).sum::<f64>() + startup_cost;
    let total_profit = total_revenue - total_cost;

    SummaryRecord {
        total_revenue,
        total_cost,
        total_profit,
        profit_range: ProfitRange::around(total_profit, tolerance),
        profit_margin: Percentage::ratio(total_profit, total_revenue),
        roi_vs_startup: Percentage::ratio(total_profit, startup_cost),
        roi_vs_total_cost: Percentage::ratio(total_profit, total_cost),
        break_even_month: break_even_month(monthly, startup_cost),
    }
}

/// First month whose cumulative profit covers the startup cost.
pub fn break_even_month(monthly: &[MonthlyRecord], startup_cost: f64) -> BreakEven {
    let mut cumulative = 0.0;
    for record in monthly {
        cumulative += record.profit;
        if cumulative - startup_cost >= 0.0 {
            return BreakEven::Month(record.month);
        }
    }
    BreakEven::NotReached
}

fn validate(params: &SimulationParameters) -> Result<(), ProjectionError> {
    if params.months < 1 {
        return Err(invalid("months", "must be at least 1"));
    }
    if params.consultants < 1 {
        return Err(invalid("consultants", "must be at least 1"));
    }
    if params.working_days < 1 {
        return Err(invalid("working_days", "must be at least 1"));
    }
    positive(
        "appointments_per_consultant_per_day",
        params.appointments_per_consultant_per_day,
    )?;
    non_negative("show_up_rate", params.show_up_rate)?;
    non_negative("conversion_rate", params.conversion_rate)?;
    non_negative("tolerance", params.tolerance)?;
    non_negative("revenue_per_policy", params.revenue_per_policy)?;
    non_negative("monthly_operating_cost", params.monthly_operating_cost)?;
    non_negative("startup_cost", params.startup_cost)?;
    Ok(())
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(invalid(name, format!("must be a finite number, got {value}")));
    }
    if value < 0.0 {
        return Err(invalid(name, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ProjectionError> {
    non_negative(name, value)?;
    if value == 0.0 {
        return Err(invalid(name, "must be greater than 0"));
    }
    Ok(())
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ProjectionError {
    ProjectionError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::{PolicyCount, PolicyRounding};
    use crate::test_support::reference_parameters;
    use approx::assert_relative_eq;

    #[test]
    fn reference_scenario_matches_expected_monthly_figures() {
        let projection = project(&reference_parameters()).unwrap();

        assert_eq!(projection.monthly.len(), 3);
        for record in &projection.monthly {
            assert_eq!(record.booked_appointments, 396);
            assert_eq!(record.completed_appointments, 132);
            assert_eq!(record.policies, PolicyCount::Whole(17));
            assert_eq!(record.revenue, 31875.0);
            assert_eq!(record.cost, 24200.0);
            assert_eq!(record.profit, 7675.0);
        }
    }

    #[test]
    fn reference_scenario_matches_expected_summary() {
        let summary = project(&reference_parameters()).unwrap().summary;

        assert_eq!(summary.total_revenue, 95625.0);
        assert_eq!(summary.total_cost, 76500.0);
        assert_eq!(summary.total_profit, 19125.0);
        assert_eq!(summary.break_even_month, BreakEven::Month(1));
        assert_relative_eq!(summary.profit_range.low, 15300.0, epsilon = 1e-6);
        assert_relative_eq!(summary.profit_range.high, 22950.0, epsilon = 1e-6);
        assert_relative_eq!(summary.profit_margin.value().unwrap(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(
            summary.roi_vs_startup.value().unwrap(),
            19125.0 / 3900.0 * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(summary.roi_vs_total_cost.value().unwrap(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn month_indices_are_contiguous_from_one() {
        let mut params = reference_parameters();
        params.months = 24;
        let projection = project(&params).unwrap();

        let months: Vec<u32> = projection.monthly.iter().map(|r| r.month).collect();
        assert_eq!(months, (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn total_revenue_is_sum_of_monthly_revenue() {
        let mut params = reference_parameters();
        params.policy_rounding = PolicyRounding::Fractional;
        params.show_up_rate = 0.37;
        params.conversion_rate = 0.11;
        params.months = 17;
        let projection = project(&params).unwrap();

        let sum: f64 = projection.monthly.iter().map(|r| r.revenue).sum();
        assert_relative_eq!(projection.summary.total_revenue, sum, epsilon = 1e-9);
    }

    #[test]
    fn fractional_policies_are_not_rounded() {
        let mut params = reference_parameters();
        params.policy_rounding = PolicyRounding::Fractional;
        let projection = project(&params).unwrap();

        let first = &projection.monthly[0];
        match first.policies {
            PolicyCount::Fractional(value) => assert_relative_eq!(value, 16.5, epsilon = 1e-9),
            other => panic!("expected fractional policies, got {other:?}"),
        }
        assert_relative_eq!(first.revenue, 16.5 * 1875.0, epsilon = 1e-6);
    }

    fn single_consultant(appointments: f64, show_up_rate: f64, conversion_rate: f64) -> MonthlyRecord {
        let mut params = reference_parameters();
        params.consultants = 1;
        params.working_days = 22;
        params.months = 1;
        params.appointments_per_consultant_per_day = appointments;
        params.show_up_rate = show_up_rate;
        params.conversion_rate = conversion_rate;
        project(&params).unwrap().monthly.remove(0)
    }

    #[test]
    fn booked_appointments_are_truncated() {
        // 22 * 1.55 = 34.1
        assert_eq!(single_consultant(1.55, 0.5, 0.1).booked_appointments, 34);
        // 22 * 1.525 = 33.55, rounding would give 34
        assert_eq!(single_consultant(1.525, 0.5, 0.1).booked_appointments, 33);
    }

    #[test]
    fn completed_appointments_round_half_away_from_zero() {
        // 34.1 * 0.5 = 17.05
        assert_eq!(single_consultant(1.55, 0.5, 0.1).completed_appointments, 17);
        // 33 * 0.5 = 16.5
        let record = single_consultant(1.5, 0.5, 0.1);
        assert_eq!(record.booked_appointments, 33);
        assert_eq!(record.completed_appointments, 17);
    }

    #[test]
    fn policies_use_unrounded_completed_appointments() {
        // 16.5 * 0.15 = 2.475 -> 2, while the displayed 17 * 0.15 = 2.55 would give 3
        let record = single_consultant(1.5, 0.5, 0.15);
        assert_eq!(record.completed_appointments, 17);
        assert_eq!(record.policies, PolicyCount::Whole(2));
        assert_eq!(record.revenue, 2.0 * 1875.0);
    }

    #[test]
    fn zero_tolerance_collapses_profit_range() {
        let mut params = reference_parameters();
        params.tolerance = 0.0;
        let summary = project(&params).unwrap().summary;

        assert_eq!(summary.profit_range.low, summary.total_profit);
        assert_eq!(summary.profit_range.high, summary.total_profit);
    }

    #[test]
    fn zero_startup_cost_makes_startup_roi_undefined() {
        let mut params = reference_parameters();
        params.startup_cost = 0.0;
        let summary = project(&params).unwrap().summary;

        assert_eq!(summary.roi_vs_startup, Percentage::Undefined);
        assert!(matches!(summary.roi_vs_total_cost, Percentage::Value(_)));
    }

    #[test]
    fn zero_revenue_and_zero_cost_leave_ratios_undefined() {
        let mut params = reference_parameters();
        params.revenue_per_policy = 0.0;
        params.monthly_operating_cost = 0.0;
        params.startup_cost = 0.0;
        let summary = project(&params).unwrap().summary;

        assert_eq!(summary.profit_margin, Percentage::Undefined);
        assert_eq!(summary.roi_vs_startup, Percentage::Undefined);
        assert_eq!(summary.roi_vs_total_cost, Percentage::Undefined);
        assert_eq!(summary.break_even_month, BreakEven::Month(1));
    }

    #[test]
    fn break_even_is_first_month_covering_startup_cost() {
        let mut params = reference_parameters();
        params.startup_cost = 20000.0;
        params.months = 6;
        let summary = project(&params).unwrap().summary;

        // 7675 per month: 15350 after two months, 23025 after three
        assert_eq!(summary.break_even_month, BreakEven::Month(3));
    }

    #[test]
    fn break_even_not_reached_when_losing_money() {
        let mut params = reference_parameters();
        params.monthly_operating_cost = 40000.0;
        params.months = 12;
        let summary = project(&params).unwrap().summary;

        assert_eq!(summary.break_even_month, BreakEven::NotReached);
        assert!(summary.total_profit < 0.0);
        assert!(summary.profit_range.low > summary.profit_range.high);
    }

    #[test]
    fn break_even_matches_brute_force_prefix_sums() {
        let mut params = reference_parameters();
        params.months = 24;
        for startup in [0.0, 3900.0, 50000.0, 100000.0, 1_000_000.0] {
            params.startup_cost = startup;
            let projection = project(&params).unwrap();
            let expected = (1..=projection.monthly.len())
                .find(|m| {
                    projection.monthly[..*m].iter().map(|r| r.profit).sum::<f64>() - startup >= 0.0
                })
                .map(|m| BreakEven::Month(m as u32))
                .unwrap_or(BreakEven::NotReached);
            assert_eq!(projection.summary.break_even_month, expected);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let params = reference_parameters();
        assert_eq!(project(&params).unwrap(), project(&params).unwrap());
    }

    #[test]
    fn rejects_invalid_parameters() {
        let cases: [(&str, fn(&mut SimulationParameters)); 9] = [
            ("months", |p: &mut SimulationParameters| p.months = 0),
            ("appointments_per_consultant_per_day", |p: &mut SimulationParameters| {
                p.appointments_per_consultant_per_day = 0.0
            }),
            ("consultants", |p: &mut SimulationParameters| p.consultants = 0),
            ("working_days", |p: &mut SimulationParameters| p.working_days = 0),
            ("show_up_rate", |p: &mut SimulationParameters| p.show_up_rate = -0.1),
            ("conversion_rate", |p: &mut SimulationParameters| p.conversion_rate = f64::NAN),
            ("tolerance", |p: &mut SimulationParameters| p.tolerance = -0.2),
            ("startup_cost", |p: &mut SimulationParameters| p.startup_cost = -1.0),
            ("monthly_operating_cost", |p: &mut SimulationParameters| p.monthly_operating_cost = -5.0),
        ];

        for (expected_name, mutate) in cases {
            let mut params = reference_parameters();
            mutate(&mut params);
            let err = project(&params).unwrap_err();
            assert!(
                matches!(err, ProjectionError::InvalidParameter { name, .. } if name == expected_name),
                "expected {expected_name} to be rejected"
            );
        }
    }
}
