use log::debug;
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::simulation::MonthlyRecord;

#[derive(Error, Debug)]
pub enum ProfitPlotError {
    #[error("projection has no months to plot")]
    EmptyProjection,
    #[error("failed to render profit plot: {0}")]
    Plot(String),
}

/// Renders monthly profit as a line chart indexed by month.
pub fn write_profit_plot_png(
    output_path: &str,
    monthly: &[MonthlyRecord],
) -> Result<(), ProfitPlotError> {
    if monthly.is_empty() {
        return Err(ProfitPlotError::EmptyProjection);
    }
    render_plot_png(output_path, monthly)?;
    debug!("profit plot written to {output_path}");
    Ok(())
}

fn render_plot_png(output_path: &str, monthly: &[MonthlyRecord]) -> Result<(), ProfitPlotError> {
    let (min_profit, max_profit) = monthly.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), record| {
        (lo.min(record.profit), hi.max(record.profit))
    });
    let padding = ((max_profit - min_profit) * 0.1).max(1.0);
    let y_range = (min_profit - padding)..(max_profit + padding);
    let max_x = monthly.len() as i32 + 1;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Profit Trend", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(0..max_x, y_range)
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Profit")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(monthly.len().min(24) + 2)
        .x_label_formatter(&|month| {
            if *month < 1 || *month as usize > monthly.len() {
                String::new()
            } else {
                month.to_string()
            }
        })
        .y_label_formatter(&|profit| format!("{profit:.0}"))
        .draw()
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    // break-even axis
    chart
        .draw_series(LineSeries::new([(0, 0.0), (max_x, 0.0)], &BLACK.mix(0.3)))
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    let points: Vec<(i32, f64)> = monthly
        .iter()
        .map(|record| (record.month as i32, record.profit))
        .collect();
    chart
        .draw_series(LineSeries::new(points.iter().copied(), line_color.stroke_width(2)))
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 4, line_color.filled())),
        )
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;
    Ok(())
}
