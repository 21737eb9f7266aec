//! Schedule export and display helpers

use std::io::Write;

use crate::calculator::AmortizationResult;
use crate::error::Result;

/// Column header of an exported schedule
pub const SCHEDULE_HEADER: [&str; 5] = ["Month", "EMI", "Principal", "Interest", "Balance"];

/// Write one CSV row per emitted period, amounts rounded to 2 decimals
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &AmortizationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SCHEDULE_HEADER)?;

    let emi = format!("{:.2}", schedule.fixed_payment);
    for period in &schedule.periods {
        wtr.write_record([
            period.period_index.to_string(),
            emi.clone(),
            format!("{:.2}", period.principal_portion),
            format!("{:.2}", period.interest_portion),
            format!("{:.2}", period.ending_balance),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a month count as "2 years 3 months", "1 year 0 months" or "5 months"
pub fn format_months(months: u32) -> String {
    let years = months / 12;
    let remaining = months % 12;
    let month_label = if remaining != 1 { "months" } else { "month" };

    if years > 0 {
        let year_label = if years > 1 { "years" } else { "year" };
        format!("{} {} {} {}", years, year_label, remaining, month_label)
    } else {
        format!("{} {}", remaining, month_label)
    }
}

/// Render a real-valued month count (fractional tenures give fractional savings),
/// rounded to the nearest whole month
pub fn format_fractional_months(months: f64) -> String {
    let whole = if months.is_finite() { months.round().max(0.0) as u32 } else { 0 };
    format_months(whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{compute_monthly_payment, simulate, ScheduleConfig};
    use crate::loan::LoanTerms;

    #[test]
    fn test_schedule_csv_layout() {
        let terms = LoanTerms::new(120_000.0, 0.0, 1.0);
        let payment = compute_monthly_payment(120_000.0, 0.0, 1.0);
        let schedule = simulate(&terms, payment, ScheduleConfig::full());

        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &schedule).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month,EMI,Principal,Interest,Balance");
        assert_eq!(lines[1], "1,10000.00,10000.00,0.00,110000.00");
        assert_eq!(lines[12], "12,10000.00,10000.00,0.00,0.00");
    }

    #[test]
    fn test_schedule_csv_rounds_to_cents() {
        let terms = LoanTerms::new(500_000.0, 10.0, 20.0);
        let payment = compute_monthly_payment(500_000.0, 10.0, 20.0);
        let schedule = simulate(&terms, payment, ScheduleConfig { stride: 1, max_periods: Some(1) });

        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &schedule).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        // Interest in month 1 is 500000 / 120 = 4166.666...
        assert_eq!(text.lines().nth(1), Some("1,4825.11,658.44,4166.67,499341.56"));
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(0), "0 months");
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(11), "11 months");
        assert_eq!(format_months(12), "1 year 0 months");
        assert_eq!(format_months(13), "1 year 1 month");
        assert_eq!(format_months(149), "12 years 5 months");
    }

    #[test]
    fn test_format_fractional_months_rounds() {
        // 1.3 years is 15.6 months
        assert_eq!(format_fractional_months(15.6), "1 year 4 months");
        assert_eq!(format_fractional_months(15.4), "1 year 3 months");
        assert_eq!(format_fractional_months(0.0), "0 months");
        assert_eq!(format_fractional_months(f64::NAN), "0 months");
    }
}
