use crate::campcheck::CampCheck;
use crate::due_in::Lookups;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

const DUE_OUT_FORMAT: &str = "%m/%d/%Y";

// A site with no due-in entry is a normal miss; the row is skipped, not the
// rest of the scan.
pub fn merge_names(check: &mut CampCheck, lookups: &Lookups) -> usize {
    let layout = check.layout();
    let mut written = 0;
    for row in layout.rows() {
        let Some(site) = check.site_at(row) else {
            continue;
        };
        let Some(name) = lookups.names.get(&site) else {
            continue;
        };
        debug!("row {row}: site {site} checks in {name}");
        check.set_guest_name(row, name);
        written += 1;
    }
    info!("{written} guest name(s) entered");
    written
}

pub fn merge_due_out(check: &mut CampCheck, lookups: &Lookups) -> usize {
    let layout = check.layout();
    let mut written = 0;
    for row in layout.rows() {
        let Some(site) = check.site_at(row) else {
            continue;
        };
        let Some(raw) = lookups.due_out.get(&site) else {
            continue;
        };
        match NaiveDate::parse_from_str(raw, DUE_OUT_FORMAT) {
            Ok(date) => {
                debug!("row {row}: site {site} due out {date}");
                check.set_due_out(row, date);
                written += 1;
            }
            Err(e) => {
                warn!("row {row}: due-out {raw:?} for site {site} is not m/d/Y ({e}), skipping");
            }
        }
    }
    info!("{written} due-out date(s) entered");
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    fn check_with_sites(sites: &[(u32, &str)]) -> CampCheck {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.set_name("Camp Check");
        for (row, site) in sites {
            match site.parse::<f64>() {
                Ok(n) => sheet.get_cell_mut((1, *row)).set_value_number(n),
                Err(_) => sheet.get_cell_mut((1, *row)).set_value(*site),
            };
        }
        CampCheck::from_book(book).unwrap()
    }

    fn lookups(names: &[(&str, &str)], due_out: &[(&str, &str)]) -> Lookups {
        let mut lookups = Lookups::default();
        for (site, name) in names {
            lookups.names.insert(site.to_string(), name.to_string());
        }
        for (site, raw) in due_out {
            lookups.due_out.insert(site.to_string(), raw.to_string());
        }
        lookups
    }

    fn midnight(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn round_trip_writes_surname_and_parsed_date() {
        let mut check = check_with_sites(&[(10, "101")]);
        let lookups = lookups(&[("101", "Smith")], &[("101", "12/25/2024")]);

        assert_eq!(merge_names(&mut check, &lookups), 1);
        assert_eq!(merge_due_out(&mut check, &lookups), 1);

        assert_eq!(check.value_at(2, 10), CellValue::Text("Smith".to_string()));
        assert_eq!(check.value_at(3, 10), CellValue::Date(midnight(2024, 12, 25)));
    }

    #[test]
    fn single_digit_dates_parse_too() {
        let mut check = check_with_sites(&[(6, "7")]);
        let lookups = lookups(&[], &[("7", "1/5/2024")]);

        assert_eq!(merge_due_out(&mut check, &lookups), 1);
        assert_eq!(check.value_at(3, 6), CellValue::Date(midnight(2024, 1, 5)));
    }

    #[test]
    fn a_miss_skips_the_row_and_keeps_scanning() {
        let mut check = check_with_sites(&[(6, "101"), (7, "999"), (8, "103")]);
        let lookups = lookups(&[("101", "Smith"), ("103", "Doe")], &[]);

        assert_eq!(merge_names(&mut check, &lookups), 2);
        assert_eq!(check.value_at(2, 6), CellValue::Text("Smith".to_string()));
        assert_eq!(check.value_at(2, 7), CellValue::Empty);
        assert_eq!(check.value_at(2, 8), CellValue::Text("Doe".to_string()));
    }

    #[test]
    fn rows_without_a_site_are_untouched() {
        let mut check = check_with_sites(&[(6, "101")]);
        let lookups = lookups(&[("101", "Smith")], &[("101", "12/25/2024")]);

        merge_names(&mut check, &lookups);
        merge_due_out(&mut check, &lookups);

        // Row 7 has no site number at all.
        assert_eq!(check.value_at(2, 7), CellValue::Empty);
        assert_eq!(check.value_at(3, 7), CellValue::Empty);
    }

    #[test]
    fn malformed_dates_are_skipped_not_fatal() {
        let mut check = check_with_sites(&[(6, "101"), (7, "102")]);
        let lookups = lookups(&[], &[("101", "December 25"), ("102", "12/26/2024")]);

        assert_eq!(merge_due_out(&mut check, &lookups), 1);
        assert_eq!(check.value_at(3, 6), CellValue::Empty);
        assert_eq!(check.value_at(3, 7), CellValue::Date(midnight(2024, 12, 26)));
    }
}
