use crate::Result;
use crate::cell::{self, CellValue};
use crate::error::Error;
use crate::layout::{CAMP_CHECK, CampCheckLayout};
use chrono::NaiveDate;
use std::path::Path;
use tracing::info;
use umya_spreadsheet::{NumberingFormat, Spreadsheet, Worksheet};

pub struct CampCheck {
    book: Spreadsheet,
    layout: &'static CampCheckLayout,
}

impl CampCheck {
    pub fn open(path: &Path) -> Result<Self> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
            Error::Workbook(format!("cannot open camp check {}: {e}", path.display()))
        })?;
        Self::from_book(book)
    }

    pub fn from_book(book: Spreadsheet) -> Result<Self> {
        let layout = &CAMP_CHECK;
        if book.get_sheet_by_name(layout.sheet).is_none() {
            return Err(Error::MissingSheet(layout.sheet.to_string()));
        }
        Ok(Self { book, layout })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|e| {
            Error::Workbook(format!("cannot save camp check {}: {e}", path.display()))
        })
    }

    pub fn layout(&self) -> &'static CampCheckLayout {
        self.layout
    }

    fn sheet(&self) -> &Worksheet {
        self.book.get_sheet_by_name(self.layout.sheet).unwrap() // unwrap: presence checked in from_book
    }

    fn sheet_mut(&mut self) -> &mut Worksheet {
        let sheet = self.layout.sheet;
        self.book.get_sheet_by_name_mut(sheet).unwrap() // unwrap: presence checked in from_book
    }

    pub fn stamp_header(&mut self, today: NaiveDate) {
        let header = today.format("%A %m/%d/%Y").to_string().to_uppercase();
        let cell = self.layout.header_cell;
        self.sheet_mut().get_cell_mut(cell).set_value(header);
    }

    pub fn value_at(&self, col: u32, row: u32) -> CellValue {
        match self.sheet().get_cell((col, row)) {
            None => CellValue::Empty,
            Some(c) => {
                let format = c
                    .get_style()
                    .get_number_format()
                    .map(|nf| nf.get_format_code().to_string());
                cell::classify(c.get_value().as_ref(), format.as_deref())
            }
        }
    }

    // The join key, as the string form of whatever occupies the site cell.
    pub fn site_at(&self, row: u32) -> Option<String> {
        match self.value_at(self.layout.site_col, row) {
            CellValue::Text(s) => Some(s),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Empty | CellValue::Date(_) | CellValue::Other(_) => None,
        }
    }

    pub fn set_guest_name(&mut self, row: u32, name: &str) {
        let col = self.layout.name_col;
        self.sheet_mut().get_cell_mut((col, row)).set_value(name);
    }

    pub fn set_due_out(&mut self, row: u32, date: NaiveDate) {
        let col = self.layout.due_out_col;
        let serial = cell::date_to_serial(date);
        self.sheet_mut().get_cell_mut((col, row)).set_value_number(serial);
        self.sheet_mut()
            .get_style_mut((col, row))
            .get_number_format_mut()
            .set_format_code(NumberingFormat::FORMAT_DATE_XLSX14);
    }

    pub fn clear_reservation(&mut self, row: u32) {
        for col in self.layout.detail_cols() {
            self.sheet_mut().get_cell_mut((col, row)).set_value("");
            info!("cell {}{row} cleared", column_letter(col));
        }
    }
}

fn column_letter(col: u32) -> String {
    let mut letters = String::new();
    let mut n = col;
    while n > 0 {
        letters.insert(0, (b'A' + ((n - 1) % 26) as u8) as char);
        n = (n - 1) / 26;
    }
    letters
}
