use chrono::{Duration, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Other(String),
}

// Serial 0 is 1899-12-30 in the 1900 date system, absorbing Excel's
// fictitious 1900-02-29.
fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap() // unwrap: constant is a valid date
        .and_hms_opt(0, 0, 0)
        .unwrap() // unwrap: midnight is a valid time
}

pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;
    excel_epoch()
        .checked_add_signed(Duration::days(days))?
        .checked_add_signed(Duration::seconds(seconds))
}

pub fn date_to_serial(date: NaiveDate) -> f64 {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap(); // unwrap: midnight is a valid time
    (midnight - excel_epoch()).num_days() as f64
}

// A numeric cell is a date when its number format says so. Quoted literals
// and [] sections carry no date meaning and are ignored.
pub fn is_date_format(code: &str) -> bool {
    let mut in_quotes = false;
    let mut in_brackets = false;
    for c in code.to_lowercase().chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            '[' if !in_quotes => in_brackets = true,
            ']' if !in_quotes => in_brackets = false,
            'y' | 'm' | 'd' | 'h' if !in_quotes && !in_brackets => return true,
            _ => {}
        }
    }
    false
}

pub fn classify(raw: &str, format_code: Option<&str>) -> CellValue {
    if raw.is_empty() {
        return CellValue::Empty;
    }
    if raw == "TRUE" || raw == "FALSE" || raw.starts_with('#') {
        return CellValue::Other(raw.to_string());
    }
    if let Ok(number) = raw.parse::<f64>() {
        if format_code.is_some_and(is_date_format)
            && let Some(stamp) = serial_to_datetime(number)
        {
            return CellValue::Date(stamp);
        }
        return CellValue::Number(number);
    }
    CellValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn serial_round_trip() {
        assert_eq!(date_to_serial(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 25569.0);
        assert_eq!(date_to_serial(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()), 45651.0);
        assert_eq!(serial_to_datetime(45651.0), Some(date(2024, 12, 25)));
        assert_eq!(serial_to_datetime(-1.0), None);
    }

    #[test]
    fn serial_keeps_time_of_day() {
        let stamp = serial_to_datetime(45651.5).unwrap();
        assert_eq!(stamp, date(2024, 12, 25) + Duration::hours(12));
    }

    #[test]
    fn date_formats() {
        assert!(is_date_format("mm-dd-yy"));
        assert!(is_date_format("yyyy-mm-dd;@"));
        assert!(is_date_format("[$-409]h:mm AM/PM")); // the literal m outside brackets
        assert!(!is_date_format("General"));
        assert!(!is_date_format("0.00"));
        assert!(!is_date_format("#,##0"));
        assert!(!is_date_format("\"dy\"0.0")); // quoted letters are literals
    }

    #[test]
    fn classify_tags_cells() {
        assert_eq!(classify("", None), CellValue::Empty);
        assert_eq!(classify("Smith", None), CellValue::Text("Smith".to_string()));
        assert_eq!(classify("101", None), CellValue::Number(101.0));
        assert_eq!(classify("101", Some("General")), CellValue::Number(101.0));
        assert_eq!(
            classify("45651", Some("mm-dd-yy")),
            CellValue::Date(date(2024, 12, 25))
        );
        assert_eq!(classify("TRUE", None), CellValue::Other("TRUE".to_string()));
        assert_eq!(classify("#DIV/0!", None), CellValue::Other("#DIV/0!".to_string()));
    }
}
