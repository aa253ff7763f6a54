use std::ops::RangeInclusive;

// Both documents have rigid layouts: the camp check comes from the park's
// template, the due-in report from the reservation system's export. Columns
// are 1-based, matching spreadsheet coordinates.

// Camp check, sheet "Camp Check":
//   A1   header date ("WEEKDAY MM/DD/YYYY")
//   A    site number
//   B    guest name
//   C    due-out date
//   B:G  reservation details, cleared as a unit when a row expires
pub struct CampCheckLayout {
    pub sheet: &'static str,
    pub header_cell: &'static str,
    pub first_row: u32,
    pub last_row: u32,
    pub site_col: u32,
    pub name_col: u32,
    pub due_out_col: u32,
    pub detail_first_col: u32,
    pub detail_last_col: u32,
}

pub const CAMP_CHECK: CampCheckLayout = CampCheckLayout {
    sheet: "Camp Check",
    header_cell: "A1",
    first_row: 6,
    last_row: 86,
    site_col: 1,
    name_col: 2,
    due_out_col: 3,
    detail_first_col: 2,
    detail_last_col: 7,
};

// Due-in report, sheet "DueInReport":
//   A    guest full name, "Last, First"
//   D    site number (name column + 3)
//   J    due-out date string, m/d/Y (site column + 6)
pub struct DueInLayout {
    pub sheet: &'static str,
    pub first_row: u32,
    pub last_row: u32,
    pub guest_col: u32,
    pub site_col: u32,
    pub due_out_col: u32,
}

pub const DUE_IN: DueInLayout = DueInLayout {
    sheet: "DueInReport",
    first_row: 3,
    last_row: 63,
    guest_col: 1,
    site_col: 4,
    due_out_col: 10,
};

impl CampCheckLayout {
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.first_row..=self.last_row
    }

    pub fn detail_cols(&self) -> RangeInclusive<u32> {
        self.detail_first_col..=self.detail_last_col
    }
}

impl DueInLayout {
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.first_row..=self.last_row
    }
}
