//! Render a year and write it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::calendar::HolidaySource;
use crate::error::CalendarError;
use crate::grid::{build_grid, GridStyle, GridSummary};
use crate::render::TableDocument;

/// `<year>_Calendar.docx`
pub fn output_file_name(year: i32) -> String {
    format!("{year}_Calendar.docx")
}

/// Lay out `year` into a fresh in-memory document.
pub fn render_calendar<H>(
    year: i32,
    style: &GridStyle,
    holidays: &H,
) -> Result<(TableDocument, GridSummary), CalendarError>
where
    H: HolidaySource + ?Sized,
{
    let mut doc = TableDocument::new();
    let summary = build_grid(year, style, holidays, &mut doc)?;
    Ok((doc, summary))
}

/// Render `year` and write `<year>_Calendar.docx` into `dir`.
///
/// The document is packed completely before the file is created, so a failed
/// run leaves no partial file behind.
pub fn write_calendar<H>(
    year: i32,
    style: &GridStyle,
    holidays: &H,
    dir: &Path,
) -> Result<PathBuf, CalendarError>
where
    H: HolidaySource + ?Sized,
{
    let (doc, summary) = render_calendar(year, style, holidays)?;
    let bytes = doc.to_docx_bytes()?;
    let path = dir.join(output_file_name(year));
    fs::write(&path, &bytes)?;
    info!(
        path = %path.display(),
        rows = summary.rows_used,
        holidays = summary.holidays_marked,
        bytes = bytes.len(),
        "wrote calendar"
    );
    Ok(path)
}
