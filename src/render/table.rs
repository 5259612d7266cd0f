use super::Renderer;
use crate::error::CalendarError;
use crate::palette::Color;

/// Content and styling of one table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellModel {
    pub text: String,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font_size: Option<usize>,
    pub padding: Option<u32>,
}

impl CellModel {
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowModel {
    /// Exact height in twips, unset until the row is finalized.
    pub height: Option<u32>,
    pub cells: Vec<CellModel>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    pub cols: usize,
    pub rows: Vec<RowModel>,
}

impl TableModel {
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellModel> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }
}

/// An in-memory document holding a single table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDocument {
    table: Option<TableModel>,
}

impl TableDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> Option<&TableModel> {
        self.table.as_ref()
    }

    fn table_mut(&mut self) -> Result<&mut TableModel, CalendarError> {
        self.table.as_mut().ok_or(CalendarError::NoTable)
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut CellModel, CalendarError> {
        let table = self.table_mut()?;
        let (rows, cols) = (table.rows.len(), table.cols);
        table
            .rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(col))
            .ok_or(CalendarError::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            })
    }

    fn row_mut(&mut self, row: usize) -> Result<&mut RowModel, CalendarError> {
        let table = self.table_mut()?;
        let rows = table.rows.len();
        table
            .rows
            .get_mut(row)
            .ok_or(CalendarError::RowOutOfBounds { row, rows })
    }
}

impl Renderer for TableDocument {
    fn add_table(&mut self, rows: usize, cols: usize) -> Result<(), CalendarError> {
        let row = RowModel {
            height: None,
            cells: vec![CellModel::default(); cols],
        };
        self.table = Some(TableModel {
            cols,
            rows: vec![row; rows],
        });
        Ok(())
    }

    fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> Result<(), CalendarError> {
        self.cell_mut(row, col)?.text = text.to_string();
        Ok(())
    }

    fn set_cell_background(
        &mut self,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CalendarError> {
        self.cell_mut(row, col)?.background = Some(color);
        Ok(())
    }

    fn set_cell_text_color(
        &mut self,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CalendarError> {
        self.cell_mut(row, col)?.text_color = Some(color);
        Ok(())
    }

    fn set_cell_font_size(
        &mut self,
        row: usize,
        col: usize,
        half_points: usize,
    ) -> Result<(), CalendarError> {
        self.cell_mut(row, col)?.font_size = Some(half_points);
        Ok(())
    }

    fn set_cell_padding(
        &mut self,
        row: usize,
        col: usize,
        twips: u32,
    ) -> Result<(), CalendarError> {
        self.cell_mut(row, col)?.padding = Some(twips);
        Ok(())
    }

    fn set_row_height(&mut self, row: usize, twips: u32) -> Result<(), CalendarError> {
        self.row_mut(row)?.height = Some(twips);
        Ok(())
    }

    fn delete_row(&mut self, row: usize) -> Result<(), CalendarError> {
        let table = self.table_mut()?;
        let rows = table.rows.len();
        if row >= rows {
            return Err(CalendarError::RowOutOfBounds { row, rows });
        }
        table.rows.remove(row);
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.table.as_ref().map_or(0, |t| t.rows.len())
    }

    fn is_row_empty(&self, row: usize) -> Result<bool, CalendarError> {
        let table = self.table.as_ref().ok_or(CalendarError::NoTable)?;
        let rows = table.rows.len();
        table
            .rows
            .get(row)
            .map(|r| r.cells.iter().all(CellModel::is_blank))
            .ok_or(CalendarError::RowOutOfBounds { row, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_before_add_table_fail() {
        let mut doc = TableDocument::new();
        assert_eq!(doc.row_count(), 0);
        assert!(matches!(
            doc.set_cell_text(0, 0, "1"),
            Err(CalendarError::NoTable)
        ));
    }

    #[test]
    fn set_and_read_cell() {
        let mut doc = TableDocument::new();
        doc.add_table(2, 7).unwrap();
        doc.set_cell_text(1, 6, "31").unwrap();
        doc.set_cell_background(1, 6, Color::rgb(0xE0C2CD)).unwrap();
        doc.set_cell_text_color(1, 6, Color::RED).unwrap();
        doc.set_cell_font_size(1, 6, 20).unwrap();
        doc.set_cell_padding(1, 6, 45).unwrap();
        doc.set_row_height(1, 1275).unwrap();

        let table = doc.table().unwrap();
        let cell = table.cell(1, 6).unwrap();
        assert_eq!(cell.text, "31");
        assert_eq!(cell.background, Some(Color::rgb(0xE0C2CD)));
        assert_eq!(cell.text_color, Some(Color::RED));
        assert_eq!(cell.font_size, Some(20));
        assert_eq!(cell.padding, Some(45));
        assert_eq!(table.rows[1].height, Some(1275));
        assert_eq!(table.rows[0].height, None);
    }

    #[test]
    fn out_of_bounds_cell() {
        let mut doc = TableDocument::new();
        doc.add_table(1, 7).unwrap();
        let err = doc.set_cell_text(0, 7, "x").unwrap_err();
        assert!(matches!(
            err,
            CalendarError::CellOutOfBounds {
                row: 0,
                col: 7,
                rows: 1,
                cols: 7
            }
        ));
        assert!(doc.set_row_height(1, 100).is_err());
    }

    #[test]
    fn delete_row_shifts_rows_up() {
        let mut doc = TableDocument::new();
        doc.add_table(3, 7).unwrap();
        doc.set_cell_text(2, 0, "last").unwrap();
        assert!(doc.is_row_empty(1).unwrap());
        doc.delete_row(1).unwrap();
        assert_eq!(doc.row_count(), 2);
        assert!(!doc.is_row_empty(1).unwrap());
        assert!(doc.delete_row(2).is_err());
    }
}
