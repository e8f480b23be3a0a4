//! Plain-text rendering of a schedule

use std::fmt::Write;

use super::labels::{format_amount, Locale};
use crate::projection::Schedule;

/// Render the period table
pub fn render_table(schedule: &Schedule, locale: Locale) -> String {
    let [index, period, balance, interest] = locale.table_headings();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{:>5} {:>12} {:>18} {:>22}", index, period, balance, interest);
    let _ = writeln!(out, "{}", "-".repeat(60));

    if schedule.is_empty() {
        let _ = writeln!(out, "{:^60}", locale.no_periods());
        return out;
    }

    for row in &schedule.periods {
        let _ = writeln!(
            out,
            "{:>5} {:>12} {:>18} {:>22}",
            row.index,
            locale.period_label(row.index, schedule.period_unit),
            format_amount(row.closing_balance),
            format_amount(row.interest),
        );
    }

    out
}

/// Render final balance, total interest and compounding frequency
pub fn render_summary(schedule: &Schedule, locale: Locale) -> String {
    let [final_label, interest_label, frequency_label] = locale.summary_labels();
    format!(
        "{}: {}\n{}: {}\n{}: {}\n",
        final_label,
        format_amount(schedule.final_balance),
        interest_label,
        format_amount(schedule.total_interest),
        frequency_label,
        locale.frequency_label(schedule.period_unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Compounding, ProjectionParams, RateBasis};
    use crate::projection::project;

    #[test]
    fn test_render_table_rows() {
        let params = ProjectionParams::without_contribution(1000.0, 2, 10.0, RateBasis::Annual, Compounding::Yearly).unwrap();
        let table = render_table(&project(&params), Locale::English);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("1 - year"));
        assert!(lines[2].contains("1,100.00"));
        assert!(lines[3].contains("1,210.00"));
        assert!(lines[3].contains("110.00"));
    }

    #[test]
    fn test_render_empty_table() {
        let params = ProjectionParams::without_contribution(1000.0, 0, 10.0, RateBasis::Annual, Compounding::Monthly).unwrap();
        let table = render_table(&project(&params), Locale::Uzbek);
        assert!(table.contains("Hech qanday davr yo'q"));
    }

    #[test]
    fn test_render_summary() {
        let params = ProjectionParams::without_contribution(1000.0, 1, 12.0, RateBasis::Annual, Compounding::Monthly).unwrap();
        let summary = render_summary(&project(&params), Locale::English);
        assert!(summary.contains("Final balance: 1,126.83"));
        assert!(summary.contains("Total interest: 126.83"));
        assert!(summary.contains("Compounding: Monthly"));
    }
}
