//! Year grid layout: one row per week, one column per weekday.
//!
//! Days are placed by a cursor that walks the whole year without breaking
//! rows at month boundaries, so a week shared by two months holds the tail of
//! one and the head of the next in different colors.
//!
//! The table is allocated with the row count a month-by-month calendar would
//! need, which over-counts whenever a month does not start on [`WEEK_START`].
//! The rows the walk never reaches are pruned afterwards.
//!
//! [`WEEK_START`]: crate::calendar::WEEK_START

use crate::calendar::{days_in_month, from_ymd, weekday_index, weeks_in_month, HolidaySource};
use crate::error::CalendarError;
use crate::palette::{Color, Palette};
use crate::render::Renderer;
use chrono::NaiveDate;
use tracing::{debug, trace};

/// Columns in a week row.
pub const COLUMNS: usize = 7;

/// Physical styling applied to each placed day, in renderer units.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub row_height_twips: u32,
    pub cell_padding_twips: u32,
    pub font_half_points: usize,
    pub holiday_text_color: Color,
    pub palette: Palette,
}

impl Default for GridStyle {
    fn default() -> Self {
        GridStyle {
            row_height_twips: 1275,
            cell_padding_twips: 45,
            font_half_points: 20,
            holiday_text_color: Color::RED,
            palette: Palette::default(),
        }
    }
}

/// Position of the next day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub row: usize,
    pub col: usize,
}

impl GridCursor {
    pub fn new(col: usize) -> Self {
        GridCursor { row: 0, col }
    }

    /// Step one column right, wrapping to the next row after the last column.
    /// Returns true when the step completed a row.
    pub fn advance(&mut self) -> bool {
        self.col += 1;
        if self.col >= COLUMNS {
            self.col = 0;
            self.row += 1;
            true
        } else {
            false
        }
    }
}

/// One placed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub month: u32,
    pub day: u32,
    pub is_holiday: bool,
    pub row: usize,
    pub col: usize,
}

/// Row accounting of a finished layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub year: i32,
    pub rows_allocated: usize,
    pub rows_used: usize,
    pub rows_pruned: usize,
    pub cells_placed: usize,
    pub holidays_marked: usize,
}

/// Week rows of all twelve months laid out one month at a time.
pub fn total_weeks(year: i32) -> Result<usize, CalendarError> {
    (1..=12).map(|month| weeks_in_month(year, month)).sum()
}

/// Lay out `year` into `renderer` and style every day.
///
/// Holidays only change the text color. When this returns an error the
/// renderer holds a partial grid and should be discarded.
pub fn build_grid<R, H>(
    year: i32,
    style: &GridStyle,
    holidays: &H,
    renderer: &mut R,
) -> Result<GridSummary, CalendarError>
where
    R: Renderer + ?Sized,
    H: HolidaySource + ?Sized,
{
    // both ends must exist before anything is drawn
    let first = from_ymd(year, 1, 1)?;
    from_ymd(year, 12, 31)?;

    let rows_allocated = total_weeks(year)?;
    renderer.add_table(rows_allocated, COLUMNS)?;

    let mut cursor = GridCursor::new(weekday_index(first));
    let mut cells_placed = 0;
    let mut holidays_marked = 0;

    for month in 1..=12 {
        let color = style.palette.for_month(month)?;
        for day in 1..=days_in_month(year, month)? {
            let date = from_ymd(year, month, day)?;
            let cell = DayCell {
                date,
                month,
                day,
                is_holiday: holidays.is_holiday(date),
                row: cursor.row,
                col: cursor.col,
            };
            place_day(renderer, style, &cell, color)?;
            cells_placed += 1;
            if cell.is_holiday {
                holidays_marked += 1;
            }

            if cursor.advance() {
                renderer.set_row_height(cell.row, style.row_height_twips)?;
            }
        }
    }

    let rows_pruned = prune_empty_rows(renderer)?;

    // the walk ended mid-week, so the last row was never finalized
    if cursor.col != 0 {
        renderer.set_row_height(cursor.row, style.row_height_twips)?;
    }

    let summary = GridSummary {
        year,
        rows_allocated,
        rows_used: renderer.row_count(),
        rows_pruned,
        cells_placed,
        holidays_marked,
    };
    debug!(
        year,
        rows_allocated,
        rows_used = summary.rows_used,
        rows_pruned,
        holidays_marked,
        "laid out calendar grid"
    );
    Ok(summary)
}

fn place_day<R>(
    renderer: &mut R,
    style: &GridStyle,
    cell: &DayCell,
    color: Color,
) -> Result<(), CalendarError>
where
    R: Renderer + ?Sized,
{
    let (row, col) = (cell.row, cell.col);
    trace!(date = %cell.date, row, col, holiday = cell.is_holiday, "placing day");
    renderer.set_cell_text(row, col, &cell.day.to_string())?;
    if cell.is_holiday {
        renderer.set_cell_text_color(row, col, style.holiday_text_color)?;
    }
    renderer.set_cell_font_size(row, col, style.font_half_points)?;
    renderer.set_cell_padding(row, col, style.cell_padding_twips)?;
    renderer.set_cell_background(row, col, color)
}

/// Delete every row without text. Walks bottom up so indices stay valid.
fn prune_empty_rows<R>(renderer: &mut R) -> Result<usize, CalendarError>
where
    R: Renderer + ?Sized,
{
    let mut pruned = 0;
    for row in (0..renderer.row_count()).rev() {
        if renderer.is_row_empty(row)? {
            renderer.delete_row(row)?;
            pruned += 1;
        }
    }
    Ok(pruned)
}
