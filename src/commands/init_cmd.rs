use crate::commands::CommandError;
use crate::commands::base_commands::Commands;
use crate::domain::scenario::{LaborSettings, Scenario};
use crate::services::scenario_yaml::serialize_scenario_to_yaml;

pub fn init_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Init { output, contract } = cmd {
        let mut scenario = Scenario::default();
        if let Some(contract) = contract {
            scenario.labor = LaborSettings::for_contract(contract, scenario.labor.gross_salary);
        }

        let mut buffer = Vec::new();
        serialize_scenario_to_yaml(&mut buffer, &scenario)
            .map_err(|e| CommandError::Serialize(e.to_string()))?;
        std::fs::write(&output, buffer).map_err(|source| CommandError::Write {
            path: output.clone(),
            source,
        })?;
        println!("Scenario written to {output}");
    }
    Ok(())
}
