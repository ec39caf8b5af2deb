use serde::Serialize;

/// Employment variant that decides which employer contributions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    #[default]
    Employment,
    Mandate,
    SpecificWork,
}

impl ContractType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "employment" | "employment-contract" => Some(ContractType::Employment),
            "mandate" | "contract-of-mandate" => Some(ContractType::Mandate),
            "specific-work" | "contract-for-specific-work" => Some(ContractType::SpecificWork),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ContractType::Employment => "employment",
            ContractType::Mandate => "mandate",
            ContractType::SpecificWork => "specific-work",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContractType::Employment => "employment contract",
            ContractType::Mandate => "contract of mandate",
            ContractType::SpecificWork => "contract for specific work",
        }
    }

    pub fn default_contributions(&self) -> ContributionTable {
        match self {
            ContractType::Employment => ContributionTable {
                pension: 9.76,
                disability: 6.50,
                accident: 1.67,
                labor_fund: 2.45,
                guaranteed_benefits_fund: 0.10,
                capital_plan: 1.50,
            },
            ContractType::Mandate => ContributionTable {
                pension: 9.76,
                disability: 6.50,
                accident: 1.67,
                labor_fund: 0.0,
                guaranteed_benefits_fund: 0.0,
                capital_plan: 0.0,
            },
            ContractType::SpecificWork => ContributionTable::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    Pension,
    Disability,
    Accident,
    LaborFund,
    GuaranteedBenefitsFund,
    CapitalPlan,
}

impl ContributionKind {
    pub const ALL: [ContributionKind; 6] = [
        ContributionKind::Pension,
        ContributionKind::Disability,
        ContributionKind::Accident,
        ContributionKind::LaborFund,
        ContributionKind::GuaranteedBenefitsFund,
        ContributionKind::CapitalPlan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContributionKind::Pension => "pension",
            ContributionKind::Disability => "disability",
            ContributionKind::Accident => "accident",
            ContributionKind::LaborFund => "labor_fund",
            ContributionKind::GuaranteedBenefitsFund => "guaranteed_benefits_fund",
            ContributionKind::CapitalPlan => "capital_plan",
        }
    }
}

/// Employer contribution rates in percentage points.
///
/// Every kind always has a rate, so a table can never be partial.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ContributionTable {
    pub pension: f64,
    pub disability: f64,
    pub accident: f64,
    pub labor_fund: f64,
    pub guaranteed_benefits_fund: f64,
    pub capital_plan: f64,
}

impl ContributionTable {
    pub fn get(&self, kind: ContributionKind) -> f64 {
        match kind {
            ContributionKind::Pension => self.pension,
            ContributionKind::Disability => self.disability,
            ContributionKind::Accident => self.accident,
            ContributionKind::LaborFund => self.labor_fund,
            ContributionKind::GuaranteedBenefitsFund => self.guaranteed_benefits_fund,
            ContributionKind::CapitalPlan => self.capital_plan,
        }
    }

    pub fn set(&mut self, kind: ContributionKind, rate: f64) {
        let slot = match kind {
            ContributionKind::Pension => &mut self.pension,
            ContributionKind::Disability => &mut self.disability,
            ContributionKind::Accident => &mut self.accident,
            ContributionKind::LaborFund => &mut self.labor_fund,
            ContributionKind::GuaranteedBenefitsFund => &mut self.guaranteed_benefits_fund,
            ContributionKind::CapitalPlan => &mut self.capital_plan,
        };
        *slot = rate;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContributionKind, f64)> + '_ {
        ContributionKind::ALL.iter().map(|kind| (*kind, self.get(*kind)))
    }

    pub fn rate_sum(&self) -> f64 {
        self.iter().map(|(_, rate)| rate).sum()
    }
}
