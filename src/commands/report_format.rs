use crate::domain::contributions::ContractType;
use crate::domain::simulation::MonthlyRecord;
use crate::domain::summary::SummaryRecord;
use crate::services::labor_cost::LaborCost;
use crate::services::model::ModelRun;

pub fn format_projection_report(run: &ModelRun) -> String {
    let mut lines = Vec::new();
    lines.push("Projection Report".to_string());
    lines.push(format!("Months: {}", run.parameters.months));
    lines.push(format!(
        "Monthly operating cost: {:.2}",
        run.parameters.monthly_operating_cost
    ));
    lines.push(format!("Startup cost: {:.2}", run.parameters.startup_cost));
    lines.push(String::new());
    lines.push("Month | Booked | Completed | Policies | Revenue | Cost | Profit".to_string());
    lines.push("------|--------|-----------|----------|---------|------|-------".to_string());
    lines.extend(run.projection.monthly.iter().map(format_monthly_row));
    lines.push(String::new());
    lines.extend(format_summary(&run.projection.summary));

    lines.join("\n")
}

fn format_monthly_row(record: &MonthlyRecord) -> String {
    format!(
        "{} | {} | {} | {} | {:.2} | {:.2} | {:.2}",
        record.month,
        record.booked_appointments,
        record.completed_appointments,
        record.policies,
        record.revenue,
        record.cost,
        record.profit
    )
}

fn format_summary(summary: &SummaryRecord) -> Vec<String> {
    vec![
        "Summary:".to_string(),
        format!("Total revenue: {:.2}", summary.total_revenue),
        format!("Total cost incl. startup: {:.2}", summary.total_cost),
        format!("Total profit: {:.2}", summary.total_profit),
        format!("{}: {}", summary.profit_range.label(), summary.profit_range),
        format!("Profit margin (%): {}", summary.profit_margin),
        format!("ROI vs startup cost (%): {}", summary.roi_vs_startup),
        format!("ROI vs total cost (%): {}", summary.roi_vs_total_cost),
        format!("Break-even month: {}", summary.break_even_month),
    ]
}

pub fn format_labor_report(contract: ContractType, cost: &LaborCost) -> String {
    let lines = [
        format!("Labor Cost ({})", contract.display_name()),
        "Item | Value".to_string(),
        "-----|------".to_string(),
        format!("Gross salary | {:.2}", cost.gross_salary),
        format!("Employer contributions | {:.2}%", cost.contribution_rate_sum),
        format!("Cost per employee | {:.2}", cost.per_employee_cost),
        format!("Cost of all employees ({}) | {:.2}", cost.headcount, cost.total_cost),
    ];
    lines.join("\n")
}
