use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::domain::simulation::MonthlyRecord;
use crate::domain::summary::{Percentage, SummaryRecord};

pub const SPREADSHEET_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const MONTHLY_SHEET: &str = "monthly";
pub const SUMMARY_SHEET: &str = "summary";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("export failed: could not build workbook: {0}")]
    Render(#[from] XlsxError),
    #[error("export failed: could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("callcenter_model_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Writes the monthly table and the summary into `output_dir`, naming the
/// workbook after `date`. Returns the path of the written file.
///
/// The workbook is built in memory and written to a temporary sibling first,
/// so an existing file at the target path is only replaced by a complete one.
pub fn export_spreadsheet(
    output_dir: &Path,
    date: NaiveDate,
    monthly: &[MonthlyRecord],
    summary: &SummaryRecord,
) -> Result<PathBuf, ExportError> {
    let path = output_dir.join(export_file_name(date));
    let buffer = build_workbook(monthly, summary)?;
    write_replacing(&path, &buffer)?;
    debug!("spreadsheet written to {}", path.display());
    Ok(path)
}

fn build_workbook(monthly: &[MonthlyRecord], summary: &SummaryRecord) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(MONTHLY_SHEET)?;
    write_monthly_sheet(sheet, &header, monthly)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    write_summary_sheet(sheet, &header, summary)?;

    workbook.save_to_buffer()
}

fn write_monthly_sheet(
    sheet: &mut Worksheet,
    header: &Format,
    monthly: &[MonthlyRecord],
) -> Result<(), XlsxError> {
    let columns = ["Month", "Booked", "Completed", "Policies", "Revenue", "Cost", "Profit"];
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    for (index, record) in monthly.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, f64::from(record.month))?;
        sheet.write_number(row, 1, record.booked_appointments as f64)?;
        sheet.write_number(row, 2, record.completed_appointments as f64)?;
        sheet.write_number(row, 3, record.policies.as_f64())?;
        sheet.write_number(row, 4, record.revenue)?;
        sheet.write_number(row, 5, record.cost)?;
        sheet.write_number(row, 6, record.profit)?;
    }
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    header: &Format,
    summary: &SummaryRecord,
) -> Result<(), XlsxError> {
    let range_label = summary.profit_range.label();
    let columns = [
        "Total revenue",
        "Total cost incl. startup",
        "Total profit",
        range_label.as_str(),
        "Profit margin (%)",
        "ROI vs startup cost (%)",
        "ROI vs total cost (%)",
        "Break-even month",
    ];
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    sheet.write_number(1, 0, summary.total_revenue)?;
    sheet.write_number(1, 1, summary.total_cost)?;
    sheet.write_number(1, 2, summary.total_profit)?;
    sheet.write_string(1, 3, summary.profit_range.to_string())?;
    write_percentage(sheet, 4, summary.profit_margin)?;
    write_percentage(sheet, 5, summary.roi_vs_startup)?;
    write_percentage(sheet, 6, summary.roi_vs_total_cost)?;
    sheet.write_string(1, 7, summary.break_even_month.to_string())?;
    Ok(())
}

fn write_percentage(sheet: &mut Worksheet, col: u16, value: Percentage) -> Result<(), XlsxError> {
    match value {
        Percentage::Value(value) => sheet.write_number(1, col, value)?,
        Percentage::Undefined => sheet.write_string(1, col, "undefined")?,
    };
    Ok(())
}

fn write_replacing(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let temp_path = path.with_extension("xlsx.partial");
    let result = write_file(&temp_path, contents).and_then(|()| std::fs::rename(&temp_path, path));
    result.map_err(|source| {
        if temp_path.exists() {
            if let Err(e) = std::fs::remove_file(&temp_path) {
                warn!("failed to remove {}: {e}", temp_path.display());
            }
        }
        ExportError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::projection::project;
    use crate::test_support::{on_date, reference_parameters};
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn file_name_contains_the_date() {
        assert_eq!(
            export_file_name(on_date(2026, 3, 9)),
            "callcenter_model_2026-03-09.xlsx"
        );
    }

    #[test]
    fn exports_workbook_into_directory() {
        let projection = project(&reference_parameters()).unwrap();
        let temp = assert_fs::TempDir::new().unwrap();

        let path = export_spreadsheet(
            temp.path(),
            on_date(2026, 10, 18),
            &projection.monthly,
            &projection.summary,
        )
        .unwrap();

        assert_eq!(path, temp.path().join("callcenter_model_2026-10-18.xlsx"));
        temp.child("callcenter_model_2026-10-18.xlsx")
            .assert(predicate::path::exists());
        temp.child("callcenter_model_2026-10-18.xlsx.partial")
            .assert(predicate::path::missing());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn missing_directory_is_reported_as_export_failure() {
        let projection = project(&reference_parameters()).unwrap();
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = export_spreadsheet(
            &missing,
            on_date(2026, 10, 18),
            &projection.monthly,
            &projection.summary,
        )
        .unwrap_err();

        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().starts_with("export failed"));
    }
}
