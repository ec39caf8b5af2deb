use crate::commands::CommandError;
use crate::commands::base_commands::Commands;
use crate::commands::project_cmd::load_scenario;
use crate::commands::report_format::format_labor_report;
use crate::services::labor_cost::compute_labor_cost;

pub fn labor_cost_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::LaborCost {
        input,
        headcount,
        labor,
    } = cmd
    {
        let mut scenario = load_scenario(input.as_deref())?;
        labor.apply(&mut scenario);

        let headcount = headcount.unwrap_or(scenario.consultants);
        let settings = &scenario.labor;
        let cost = compute_labor_cost(settings.gross_salary, &settings.contributions, headcount)?;
        println!("{}", format_labor_report(settings.contract, &cost));
    }
    Ok(())
}
