use super::{CellModel, RowModel, TableDocument};
use crate::error::CalendarError;
use docx_rs::{
    Docx, HeightRule, Paragraph, Run, Shading, ShdType, Table, TableCell, TableCellMargins,
    TableRow, WidthType,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Width of one day column in twips; seven columns fill an A4 text block.
const COLUMN_WIDTH: usize = 1360;

impl TableDocument {
    /// Build the word processor document for this table.
    pub fn to_docx(&self) -> Docx {
        let docx = Docx::new();
        let table = match self.table() {
            Some(table) => table,
            None => return docx,
        };

        let rows = table.rows.iter().map(docx_row).collect();
        let mut out = Table::new(rows).set_grid(vec![COLUMN_WIDTH; table.cols]);
        // cell padding is uniform, so it is written once as the table default
        let padding = table
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter_map(|c| c.padding)
            .max();
        if let Some(p) = padding {
            let p = p as usize;
            out = out.margins(TableCellMargins::new().margin(p, p, p, p));
        }
        docx.add_table(out)
    }

    /// Pack the document into `.docx` bytes.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>, CalendarError> {
        let mut buf = Cursor::new(Vec::new());
        self.to_docx()
            .build()
            .pack(&mut buf)
            .map_err(|e| CalendarError::Docx(e.to_string()))?;
        Ok(buf.into_inner())
    }

    /// Pack and write the document. Nothing is written if packing fails.
    pub fn save(&self, path: &Path) -> Result<(), CalendarError> {
        let bytes = self.to_docx_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn docx_row(row: &RowModel) -> TableRow {
    let cells = row.cells.iter().map(docx_cell).collect();
    let out = TableRow::new(cells);
    match row.height {
        Some(h) => out.row_height(h as f32).height_rule(HeightRule::Exact),
        None => out,
    }
}

fn docx_cell(cell: &CellModel) -> TableCell {
    let mut paragraph = Paragraph::new();
    if !cell.is_blank() {
        let mut run = Run::new().add_text(cell.text.as_str());
        if let Some(size) = cell.font_size {
            run = run.size(size);
        }
        if let Some(color) = cell.text_color {
            run = run.color(color.hex());
        }
        paragraph = paragraph.add_run(run);
    }

    let mut out = TableCell::new()
        .add_paragraph(paragraph)
        .width(COLUMN_WIDTH, WidthType::Dxa);
    if let Some(color) = cell.background {
        out = out.shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(color.hex()),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;
    use crate::render::Renderer;

    #[test]
    fn packs_zip_archive() {
        let mut doc = TableDocument::new();
        doc.add_table(1, 7).unwrap();
        doc.set_cell_text(0, 2, "1").unwrap();
        doc.set_cell_background(0, 2, Color::rgb(0xDCE9F5)).unwrap();
        doc.set_cell_text_color(0, 2, Color::RED).unwrap();
        doc.set_cell_padding(0, 2, 45).unwrap();
        doc.set_row_height(0, 1275).unwrap();

        let bytes = doc.to_docx_bytes().unwrap();
        // local file header of a zip archive
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn empty_document_still_packs() {
        let bytes = TableDocument::new().to_docx_bytes().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
