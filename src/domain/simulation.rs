use serde::{Serialize, Serializer};

/// Whether sold policies are counted in whole units or kept fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyRounding {
    #[default]
    Whole,
    Fractional,
}

impl PolicyRounding {
    pub fn from_flag(round_policies: bool) -> Self {
        if round_policies {
            PolicyRounding::Whole
        } else {
            PolicyRounding::Fractional
        }
    }

    pub fn is_whole(&self) -> bool {
        matches!(self, PolicyRounding::Whole)
    }

    /// Resolves a raw policy count into the representation selected by `self`.
    pub fn apply(&self, policies: f64) -> PolicyCount {
        match self {
            PolicyRounding::Whole => PolicyCount::Whole(policies.round().max(0.0) as u64),
            PolicyRounding::Fractional => PolicyCount::Fractional(policies),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolicyCount {
    Whole(u64),
    Fractional(f64),
}

impl PolicyCount {
    pub fn as_f64(&self) -> f64 {
        match self {
            PolicyCount::Whole(count) => *count as f64,
            PolicyCount::Fractional(count) => *count,
        }
    }
}

impl std::fmt::Display for PolicyCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyCount::Whole(count) => write!(f, "{count}"),
            PolicyCount::Fractional(count) => write!(f, "{count:.2}"),
        }
    }
}

impl Serialize for PolicyCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PolicyCount::Whole(count) => serializer.serialize_u64(*count),
            PolicyCount::Fractional(count) => serializer.serialize_f64(*count),
        }
    }
}

/// Inputs of a single projection run.
///
/// Rates are fractions (`0.25` means 25%), money amounts are in the single
/// currency the model works in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationParameters {
    pub working_days: u32,
    pub consultants: u32,
    pub appointments_per_consultant_per_day: f64,
    pub show_up_rate: f64,
    pub conversion_rate: f64,
    pub revenue_per_policy: f64,
    pub monthly_operating_cost: f64,
    pub startup_cost: f64,
    pub months: u32,
    pub tolerance: f64,
    #[serde(serialize_with = "serialize_rounding")]
    pub policy_rounding: PolicyRounding,
}

fn serialize_rounding<S: Serializer>(value: &PolicyRounding, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(value.is_whole())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRecord {
    pub month: u32,
    pub booked_appointments: u64,
    pub completed_appointments: u64,
    pub policies: PolicyCount,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}
