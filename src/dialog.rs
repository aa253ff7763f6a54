use chrono::NaiveDate;
use rfd::FileDialog;
use std::path::PathBuf;

// None means the user closed the dialog without choosing; callers decide
// whether that cancels the run or falls back to the template.
pub fn pick_camp_check(yesterday: NaiveDate) -> Option<PathBuf> {
    FileDialog::new()
        .set_title(format!(
            "Select the camp sheet for {}",
            yesterday.format("%Y-%m-%d")
        ))
        .add_filter("Excel workbook", &["xlsx"])
        .pick_file()
}

pub fn pick_destination(today: NaiveDate) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save today's camp sheet")
        .set_file_name(format!("Camp Check {}.xlsx", today.format("%Y-%m-%d")))
        .add_filter("Excel workbook", &["xlsx"])
        .save_file()
}

pub fn pick_due_in_report() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select the due-in report")
        .add_filter("Spreadsheet", &["xls", "xlsx"])
        .pick_file()
}
