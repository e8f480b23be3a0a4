//! Localized labels and amount formatting

use serde::{Deserialize, Serialize};

use crate::projection::PeriodUnit;
use crate::projection::rounding;

/// Language used for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Locale {
    #[default]
    English,
    Uzbek,
}

impl Locale {
    fn unit_word(self, unit: PeriodUnit) -> &'static str {
        match (self, unit) {
            (Locale::English, PeriodUnit::Month) => "month",
            (Locale::English, PeriodUnit::Year) => "year",
            (Locale::Uzbek, PeriodUnit::Month) => "oy",
            (Locale::Uzbek, PeriodUnit::Year) => "yil",
        }
    }

    /// Label for one period row, e.g. "3 - month"
    pub fn period_label(self, index: u32, unit: PeriodUnit) -> String {
        format!("{} - {}", index, self.unit_word(unit))
    }

    /// Label describing the compounding frequency as a whole
    pub fn frequency_label(self, unit: PeriodUnit) -> &'static str {
        match (self, unit) {
            (Locale::English, PeriodUnit::Month) => "Monthly",
            (Locale::English, PeriodUnit::Year) => "Yearly",
            (Locale::Uzbek, PeriodUnit::Month) => "Oyma-oy",
            (Locale::Uzbek, PeriodUnit::Year) => "Yillik",
        }
    }

    /// Column headings: index, period, balance, interest
    pub fn table_headings(self) -> [&'static str; 4] {
        match self {
            Locale::English => ["#", "Period", "Balance", "Interest this period"],
            Locale::Uzbek => ["#", "Davr", "Balans", "Ushbu davrdagi foiz"],
        }
    }

    /// Column headings for CSV export: index, date, period, balance, interest
    pub fn csv_headings(self) -> [&'static str; 5] {
        match self {
            Locale::English => ["#", "Date", "Period", "Balance", "Interest"],
            Locale::Uzbek => ["#", "Sana", "Davr", "Balans", "Foiz"],
        }
    }

    pub fn no_periods(self) -> &'static str {
        match self {
            Locale::English => "No periods (years = 0)",
            Locale::Uzbek => "Hech qanday davr yo'q (yillar=0)",
        }
    }

    /// Labels for the summary block: final balance, total interest, frequency
    pub fn summary_labels(self) -> [&'static str; 3] {
        match self {
            Locale::English => ["Final balance", "Total interest", "Compounding"],
            Locale::Uzbek => ["Yakuniy balans", "Jami foiz", "Hisoblash"],
        }
    }
}

/// Two decimals with comma thousands separators, e.g. `1,126.83`
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", rounding::display(value).abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && rounding::display(value) != 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1126.825030131), "1,126.83");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-10.0), "-10.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(Locale::English.period_label(3, PeriodUnit::Month), "3 - month");
        assert_eq!(Locale::Uzbek.period_label(2, PeriodUnit::Year), "2 - yil");
        assert_eq!(Locale::Uzbek.frequency_label(PeriodUnit::Month), "Oyma-oy");
        assert_eq!(Locale::English.frequency_label(PeriodUnit::Year), "Yearly");
    }
}
