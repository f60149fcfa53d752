//! pt-BR long date formatting for the "Última atualização" stamp

use chrono::{Datelike, NaiveDate};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// "6 de agosto de 2026"
pub fn format_long_pt_br(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_single_digit_day_without_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_long_pt_br(date), "6 de agosto de 2026");
    }

    #[test]
    fn test_formats_every_month_name() {
        let expected = [
            "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
            "setembro", "outubro", "novembro", "dezembro",
        ];
        for (month, name) in (1..=12).zip(expected) {
            let date = NaiveDate::from_ymd_opt(2025, month, 15).unwrap();
            assert_eq!(format_long_pt_br(date), format!("15 de {} de 2025", name));
        }
    }
}
