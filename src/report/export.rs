//! CSV serialization of a schedule

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Months, NaiveDate, TimeZone};
use csv::{QuoteStyle, WriterBuilder};
use log::info;

use super::ReportConfig;
use crate::error::Result;
use crate::projection::{PeriodUnit, Schedule};

/// Export filename stamped with the given time, e.g. `compound_schedule_20261018_142501.csv`
pub fn export_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("compound_schedule_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

fn period_date(start: NaiveDate, index: u32, unit: PeriodUnit) -> Option<NaiveDate> {
    let months = match unit {
        PeriodUnit::Month => index,
        PeriodUnit::Year => index.checked_mul(12)?,
    };
    start.checked_add_months(Months::new(months))
}

/// Write the schedule as CSV; every field is quoted and embedded quotes doubled
pub fn write_csv<W: Write>(schedule: &Schedule, config: &ReportConfig, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .from_writer(writer);

    csv.write_record(config.locale.csv_headings())?;

    for row in &schedule.periods {
        let date = period_date(config.start_date, row.index, schedule.period_unit)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        csv.write_record([
            row.index.to_string(),
            date,
            config.locale.period_label(row.index, schedule.period_unit),
            format!("{:.2}", row.display_closing_balance()),
            format!("{:.2}", row.display_interest()),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the schedule into `dir` under a timestamped filename and return the path
pub fn write_csv_file(schedule: &Schedule, config: &ReportConfig, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(&Local::now()));
    write_csv_to_path(schedule, config, &path)?;
    Ok(path)
}

/// Write the schedule to an explicit path
pub fn write_csv_to_path(schedule: &Schedule, config: &ReportConfig, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(schedule, config, file)?;
    info!("wrote {} periods to {}", schedule.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Compounding, ProjectionParams, RateBasis};
    use crate::projection::project;
    use crate::report::Locale;
    use chrono::{NaiveDateTime, Utc};

    fn config(locale: Locale) -> ReportConfig {
        ReportConfig {
            locale,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    fn export(params: &ProjectionParams, locale: Locale) -> String {
        let mut buffer = Vec::new();
        write_csv(&project(params), &config(locale), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_yearly_csv() {
        let params = ProjectionParams::without_contribution(1000.0, 2, 10.0, RateBasis::Annual, Compounding::Yearly).unwrap();
        let csv = export(&params, Locale::English);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], r##""#","Date","Period","Balance","Interest""##);
        assert_eq!(lines[1], r#""1","2025-01-31","1 - year","1100.00","100.00""#);
        assert_eq!(lines[2], r#""2","2026-01-31","2 - year","1210.00","110.00""#);
    }

    #[test]
    fn test_monthly_dates_clamp_to_month_end() {
        let params = ProjectionParams::without_contribution(1000.0, 1, 12.0, RateBasis::Annual, Compounding::Monthly).unwrap();
        let csv = export(&params, Locale::Uzbek);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with(r#""1","2024-02-29","1 - oy""#));
        assert!(lines[12].contains(r#""1126.83""#));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut buffer = Vec::new();
        {
            let mut csv = WriterBuilder::new()
                .quote_style(QuoteStyle::Always)
                .double_quote(true)
                .from_writer(&mut buffer);
            csv.write_record(["say \"hi\""]).unwrap();
            csv.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_empty_schedule_has_header_only() {
        let params = ProjectionParams::without_contribution(1000.0, 0, 10.0, RateBasis::Annual, Compounding::Yearly).unwrap();
        let csv = export(&params, Locale::English);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_export_filename() {
        let naive = NaiveDateTime::parse_from_str("2026-10-18 14:25:01", "%Y-%m-%d %H:%M:%S").unwrap();
        let stamp = Utc.from_utc_datetime(&naive);
        assert_eq!(export_filename(&stamp), "compound_schedule_20261018_142501.csv");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = std::env::temp_dir();
        let params = ProjectionParams::without_contribution(10.0, 1, 1.0, RateBasis::Annual, Compounding::Yearly).unwrap();
        let path = write_csv_file(&project(&params), &config(Locale::English), &dir).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        std::fs::remove_file(path).unwrap();
    }
}
