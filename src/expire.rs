use crate::campcheck::CampCheck;
use crate::cell::CellValue;
use chrono::NaiveDateTime;
use tracing::{debug, info};

// Blank rows and non-date cells in the window are normal, not errors.
pub fn remove_expired(check: &mut CampCheck, cutoff: NaiveDateTime) -> usize {
    let layout = check.layout();
    let mut cleared = 0;
    for row in layout.rows() {
        match check.value_at(layout.due_out_col, row) {
            CellValue::Date(stamp) if stamp <= cutoff => {
                check.clear_reservation(row);
                cleared += 1;
            }
            CellValue::Date(stamp) => {
                debug!("row {row}: due out {stamp}, still active");
            }
            _ => {}
        }
    }
    info!("{cleared} expired reservation(s) removed");
    cleared
}
