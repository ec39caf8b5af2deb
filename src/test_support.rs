use crate::domain::simulation::{PolicyRounding, SimulationParameters};

pub fn on_date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Three months, three consultants, 24200 monthly cost: 7675 profit a month.
pub fn reference_parameters() -> SimulationParameters {
    SimulationParameters {
        working_days: 22,
        consultants: 3,
        appointments_per_consultant_per_day: 6.0,
        show_up_rate: 1.0 / 3.0,
        conversion_rate: 1.0 / 8.0,
        revenue_per_policy: 1875.0,
        monthly_operating_cost: 24200.0,
        startup_cost: 3900.0,
        months: 3,
        tolerance: 0.20,
        policy_rounding: PolicyRounding::Whole,
    }
}
