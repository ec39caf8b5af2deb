use serde::{Serialize, Serializer};

/// A percentage that is undefined when its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentage {
    Value(f64),
    Undefined,
}

impl Percentage {
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Percentage::Undefined
        } else {
            Percentage::Value(numerator / denominator * 100.0)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Percentage::Value(value) => Some(*value),
            Percentage::Undefined => None,
        }
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Percentage::Value(value) => write!(f, "{value:.2}"),
            Percentage::Undefined => write!(f, "undefined"),
        }
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Percentage::Value(value) => serializer.serialize_f64(*value),
            Percentage::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    Month(u32),
    NotReached,
}

impl std::fmt::Display for BreakEven {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakEven::Month(month) => write!(f, "{month}"),
            BreakEven::NotReached => write!(f, "not reached"),
        }
    }
}

impl Serialize for BreakEven {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BreakEven::Month(month) => serializer.serialize_u32(*month),
            BreakEven::NotReached => serializer.serialize_str("not reached"),
        }
    }
}

/// Total profit scaled by `1 - tolerance` and `1 + tolerance`.
///
/// `low` and `high` are kept as computed, so for a loss `low` is greater than
/// `high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitRange {
    pub tolerance: f64,
    pub low: f64,
    pub high: f64,
}

impl ProfitRange {
    pub fn around(total_profit: f64, tolerance: f64) -> Self {
        Self {
            tolerance,
            low: total_profit * (1.0 - tolerance),
            high: total_profit * (1.0 + tolerance),
        }
    }

    pub fn label(&self) -> String {
        // two decimals at most, without trailing zeros
        let percent = (self.tolerance * 10_000.0).round() / 100.0;
        format!("Profit range (±{percent}%)")
    }
}

impl std::fmt::Display for ProfitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} – {:.2}", self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub profit_range: ProfitRange,
    pub profit_margin: Percentage,
    pub roi_vs_startup: Percentage,
    pub roi_vs_total_cost: Percentage,
    pub break_even_month: BreakEven,
}
