//! Attendance log export.
//!
//! Emits the attendance log as CSV. The column order and the `"Yes"`/`""`
//! flag strings are a stable contract with downstream spreadsheet tooling;
//! rows are written exactly as stored.

use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

/// Export column headers, in contract order.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "S.NO",
    "Employee ID",
    "Employee Name",
    "Absentees",
    "Present",
    "Time",
];

/// Writes the attendance log as CSV to the given writer.
pub fn write_attendance_csv<W: Write>(records: &[AttendanceRecord], writer: W) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPORT_COLUMNS)
        .map_err(export_error)?;

    for record in records {
        csv_writer
            .write_record([
                record.sno.to_string().as_str(),
                record.employee_id.as_str(),
                record.employee_name.as_str(),
                record.absent.as_str(),
                record.present.as_str(),
                record.time.as_str(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(|e| EngineError::ExportFailed {
        message: e.to_string(),
    })
}

/// Renders the attendance log as a CSV string.
pub fn attendance_csv(records: &[AttendanceRecord]) -> EngineResult<String> {
    let mut buffer = Vec::new();
    write_attendance_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| EngineError::ExportFailed {
        message: e.to_string(),
    })
}

/// Default export filename for a given day, `Attendance_D-M-YYYY.csv`.
///
/// Day and month are unpadded, matching the filenames the original export
/// produced.
pub fn export_filename(today: NaiveDate) -> String {
    format!(
        "Attendance_{}-{}-{}.csv",
        today.day(),
        today.month(),
        today.year()
    )
}

fn export_error(error: csv::Error) -> EngineError {
    EngineError::ExportFailed {
        message: error.to_string(),
    }
}
