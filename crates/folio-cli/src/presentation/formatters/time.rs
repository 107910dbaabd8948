use chrono::NaiveDate;

/// Format an ISO date ("2025-05-20") as "May 20, 2025"
/// Unparseable input is shown as-is
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_is_humanized() {
        assert_eq!(format_display_date("2025-05-20"), "May 20, 2025");
        assert_eq!(format_display_date("2025-03-02"), "Mar 2, 2025");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(format_display_date("sometime"), "sometime");
        assert_eq!(format_display_date(""), "");
    }
}
