use crate::Result;
use crate::campcheck::CampCheck;
use crate::error::Error;
use crate::settings::Settings;
use crate::{convert, dialog, due_in, expire, merge};
use chrono::{Duration, Local};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(settings: &Settings) -> Result<()> {
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);

    info!("finding latest camp check");
    let source = dialog::pick_camp_check(yesterday);
    let destination = dialog::pick_destination(today)
        .ok_or(Error::Cancelled("no destination chosen for today's camp check"))?;
    prepare_destination(
        source.as_deref(),
        &destination,
        Path::new(&settings.template_path),
    )?;

    info!("opening camp check");
    let mut check = CampCheck::open(&destination)?;
    info!("updating header");
    check.stamp_header(today);

    info!("removing old reservations");
    let cutoff = today.and_hms_opt(0, 0, 0).unwrap(); // unwrap: midnight is a valid time
    expire::remove_expired(&mut check, cutoff);

    let report_path =
        dialog::pick_due_in_report().ok_or(Error::Cancelled("no due-in report chosen"))?;
    let report = convert::prepare_report(&report_path, &settings.soffice_path)?;

    let range = due_in::open_report(report.path())?;
    let lookups = due_in::build_lookups(&range);

    info!("entering guest names");
    merge::merge_names(&mut check, &lookups);
    info!("entering due-out dates");
    merge::merge_due_out(&mut check, &lookups);

    info!("saving camp check");
    check.save(&destination)?;
    info!("camp check saved as {}", destination.display());
    Ok(())
}

// Today's sheet starts as a copy of yesterday's, or of the template when no
// prior sheet was chosen. Re-picking today's own file would overwrite it, so
// that aborts before any workbook is opened.
pub fn prepare_destination(source: Option<&Path>, destination: &Path, template: &Path) -> Result<()> {
    match source {
        Some(source) if source == destination => {
            Err(Error::DestinationExists(destination.to_path_buf()))
        }
        Some(source) => {
            info!("copying last camp check to {}", destination.display());
            fs::copy(source, destination)?;
            Ok(())
        }
        None if template.exists() => {
            info!("no prior camp check chosen, seeding from template");
            fs::copy(template, destination)?;
            Ok(())
        }
        None => Err(Error::TemplateMissing(template.to_path_buf())),
    }
}
