//! Presentation of schedules: localized labels, text tables and CSV export

mod labels;
mod table;
mod export;

pub use labels::{format_amount, Locale};
pub use table::{render_summary, render_table};
pub use export::{export_filename, write_csv, write_csv_file, write_csv_to_path};

use chrono::{Local, NaiveDate};

/// Presentation settings shared by table and CSV output
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub locale: Locale,

    /// Date the schedule starts; period `i` is dated `i` months or years later
    pub start_date: NaiveDate,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            start_date: Local::now().date_naive(),
        }
    }
}
