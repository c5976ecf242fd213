//! Word-processor document (.docx)

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use super::{COLUMNS, ExportTable};
use crate::domain::DomainError;

/// Column widths in twentieths of a point, summing to an A4 text width
const GRID: [usize; 5] = [3600, 950, 2100, 1300, 1450];

pub(super) fn render(table: &ExportTable) -> Result<Vec<u8>, DomainError> {
    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    rows.push(TableRow::new(
        COLUMNS.iter().map(|name| cell(name, true)).collect(),
    ));
    rows.extend(
        table
            .rows
            .iter()
            .map(|row| TableRow::new(row.cells().iter().map(|c| cell(c, false)).collect())),
    );

    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(table.title.as_str()).size(32).bold()),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(table.count_line.as_str())))
        .add_table(Table::new(rows).set_grid(GRID.to_vec()));

    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).map_err(|e| {
        tracing::error!("DOCX packaging failed: {}", e);
        DomainError::Export(e.to_string())
    })?;

    Ok(buf.into_inner())
}

fn cell(text: &str, bold: bool) -> TableCell {
    let run = Run::new().add_text(text);
    let run = if bold { run.bold() } else { run };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}
