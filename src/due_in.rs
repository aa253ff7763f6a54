use crate::Result;
use crate::error::Error;
use crate::layout::DUE_IN;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct Lookups {
    pub names: BTreeMap<String, String>,
    pub due_out: BTreeMap<String, String>,
}

pub fn open_report(path: &Path) -> Result<Range<Data>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        Error::Workbook(format!("cannot open due-in report {}: {e}", path.display()))
    })?;
    if !workbook.sheet_names().iter().any(|name| name == DUE_IN.sheet) {
        return Err(Error::MissingSheet(DUE_IN.sheet.to_string()));
    }
    workbook
        .worksheet_range(DUE_IN.sheet)
        .map_err(|e| Error::Workbook(format!("cannot read {}: {e}", DUE_IN.sheet)))
}

pub fn build_lookups(range: &Range<Data>) -> Lookups {
    let layout = &DUE_IN;
    let mut lookups = Lookups::default();
    for row in layout.rows() {
        let r = row - 1;
        let guest = range.get_value((r, layout.guest_col - 1));
        let site = range.get_value((r, layout.site_col - 1));
        let due_out = range.get_value((r, layout.due_out_col - 1));

        if let Some(Data::String(full_name)) = guest
            && !full_name.trim().is_empty()
        {
            // "Last, First" on the check sheet becomes just the surname.
            let surname = full_name
                .split(", ")
                .next()
                .unwrap_or(full_name.as_str())
                .to_string();
            match text_of(site) {
                None => warn!("row {row}: guest {surname:?} has no site number, skipping"),
                Some(key) => {
                    info!("site {key}: {surname}");
                    if let Some(previous) = lookups.names.insert(key.clone(), surname) {
                        warn!("duplicate site {key} in due-in report, replacing {previous:?}");
                    }
                }
            }
        }

        // Due-out strings are keyed by the textual site number in the site
        // column; the raw date lives six columns to its right.
        if let Some(Data::String(site_number)) = site
            && !site_number.trim().is_empty()
        {
            match text_of(due_out) {
                None => warn!("row {row}: site {site_number} has no due-out date, skipping"),
                Some(raw) => {
                    info!("site {site_number} is due out on {raw}");
                    if lookups.due_out.insert(site_number.clone(), raw).is_some() {
                        warn!("duplicate site {site_number} in due-out column, keeping the later row");
                    }
                }
            }
        }
    }
    info!(
        "{} guest name(s), {} due-out date(s) collected",
        lookups.names.len(),
        lookups.due_out.len()
    );
    lookups
}

// String form of whatever occupies the cell, None when there is nothing.
fn text_of(value: Option<&Data>) -> Option<String> {
    match value {
        None | Some(Data::Empty) => None,
        Some(v) => {
            let text = v.to_string();
            if text.is_empty() { None } else { Some(text) }
        }
    }
}
