pub mod labor_cost;
pub mod model;
pub mod profit_plot;
pub mod projection;
pub mod scenario_yaml;
pub mod spreadsheet_export;
