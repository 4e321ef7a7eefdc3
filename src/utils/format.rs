//! Display formatting for dates and kwacha amounts.

use chrono::NaiveDate;

/// Formats a date the way the site displays it, e.g. `04 Aug 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Formats an amount in Malawi kwacha with thousands grouping and two
/// decimals, e.g. `MK 1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let total_tambala = (amount.abs() * 100.0).round() as u64;
    let kwacha = total_tambala / 100;
    let tambala = total_tambala % 100;

    let mut grouped = String::new();
    for (i, digit) in kwacha.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}MK {}.{:02}", sign, grouped, tambala)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        assert_eq!(format_date(date), "04 Aug 2026");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "MK 0.00");
        assert_eq!(format_currency(950.0), "MK 950.00");
        assert_eq!(format_currency(1234.5), "MK 1,234.50");
        assert_eq!(format_currency(1_000_000.0), "MK 1,000,000.00");
    }

    #[test]
    fn test_format_currency_rounds_to_tambala() {
        assert_eq!(format_currency(19.999), "MK 20.00");
        assert_eq!(format_currency(-1234.56), "-MK 1,234.56");
    }
}
