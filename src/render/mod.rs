//! Document rendering.
//!
//! The grid layout talks to a [`Renderer`] only, so it does not know how the
//! document is represented. [`TableDocument`] keeps the table in memory and
//! writes it out as a `.docx` file.

mod docx;
mod table;

pub use table::{CellModel, RowModel, TableDocument, TableModel};

use crate::error::CalendarError;
use crate::palette::Color;

/// Table operations needed to draw a calendar grid.
///
/// Lengths are in twips (1/1440 inch) and font sizes in half points, the
/// units word processors store.
pub trait Renderer {
    /// Add a table with `rows` x `cols` blank cells. Later calls address it.
    fn add_table(&mut self, rows: usize, cols: usize) -> Result<(), CalendarError>;

    fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> Result<(), CalendarError>;

    fn set_cell_background(
        &mut self,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CalendarError>;

    fn set_cell_text_color(
        &mut self,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CalendarError>;

    fn set_cell_font_size(
        &mut self,
        row: usize,
        col: usize,
        half_points: usize,
    ) -> Result<(), CalendarError>;

    /// Same padding on all four sides of the cell.
    ///
    /// The `.docx` writer stores padding once as the table's default cell
    /// margin, taking the largest value set on any cell.
    fn set_cell_padding(&mut self, row: usize, col: usize, twips: u32)
        -> Result<(), CalendarError>;

    /// Fix the height of a row.
    fn set_row_height(&mut self, row: usize, twips: u32) -> Result<(), CalendarError>;

    /// Remove a row; the rows below move up by one.
    fn delete_row(&mut self, row: usize) -> Result<(), CalendarError>;

    fn row_count(&self) -> usize;

    /// True when no cell of the row has any text.
    fn is_row_empty(&self, row: usize) -> Result<bool, CalendarError>;
}
