//! Paginated PDF table

use printpdf::path::PaintMode;
use printpdf::{
    Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Rect, Rgb,
};

use super::{COLUMNS, ExportOptions, ExportTable};
use crate::domain::DomainError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 8.0;
const CELL_PADDING: f32 = 1.5;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 9.0;

/// Fixed share of the printable width per column
const COLUMN_SHARES: [f32; 5] = [0.38, 0.10, 0.22, 0.14, 0.16];

const HEADER_FILL: (f32, f32, f32) = (0.20, 0.29, 0.45);
const STRIPE_FILL: (f32, f32, f32) = (0.92, 0.94, 0.97);

/// Default face, covers Latin and Cyrillic
const EMBEDDED_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

pub(super) fn render(table: &ExportTable, options: &ExportOptions) -> Result<Vec<u8>, DomainError> {
    let (doc, page, layer) = PdfDocument::new(
        table.title.clone(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = load_font(&doc, options)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    set_fill(&layer, (0.0, 0.0, 0.0));
    layer.use_text(table.title.clone(), TITLE_SIZE, Mm(MARGIN), Mm(y - 6.0), &font);
    y -= 12.0;
    layer.use_text(table.count_line.clone(), BODY_SIZE + 1.0, Mm(MARGIN), Mm(y - 4.0), &font);
    y -= 10.0;

    draw_header(&layer, &font, y);
    y -= ROW_HEIGHT;

    for (index, row) in table.rows.iter().enumerate() {
        if y - ROW_HEIGHT < MARGIN {
            let (page, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_index);
            y = PAGE_HEIGHT - MARGIN;
            draw_header(&layer, &font, y);
            y -= ROW_HEIGHT;
        }

        if index % 2 == 1 {
            fill_band(&layer, y, STRIPE_FILL);
        }
        set_fill(&layer, (0.0, 0.0, 0.0));
        draw_cells(&layer, &font, y, row.cells());
        y -= ROW_HEIGHT;
    }

    doc.save_to_bytes().map_err(|e| {
        tracing::error!("PDF rendering failed: {}", e);
        DomainError::Export(e.to_string())
    })
}

fn load_font(
    doc: &PdfDocumentReference,
    options: &ExportOptions,
) -> Result<IndirectFontRef, DomainError> {
    if let Some(path) = &options.font_path {
        let loaded = std::fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| doc.add_external_font(bytes.as_slice()).map_err(|e| e.to_string()));
        match loaded {
            Ok(font) => return Ok(font),
            Err(e) => tracing::warn!(
                "Export font {} unusable ({}), using the bundled font",
                path.display(),
                e
            ),
        }
    }

    doc.add_external_font(EMBEDDED_FONT)
        .map_err(|e| DomainError::Export(format!("bundled font: {}", e)))
}

fn column_widths() -> [f32; 5] {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    COLUMN_SHARES.map(|share| share * usable)
}

fn draw_header(layer: &PdfLayerReference, font: &IndirectFontRef, top: f32) {
    fill_band(layer, top, HEADER_FILL);
    set_fill(layer, (1.0, 1.0, 1.0));
    draw_cells(layer, font, top, COLUMNS);
}

fn draw_cells(layer: &PdfLayerReference, font: &IndirectFontRef, top: f32, cells: [&str; 5]) {
    let baseline = top - ROW_HEIGHT + 2.6;
    let mut x = MARGIN;

    for (cell, width) in cells.iter().zip(column_widths()) {
        let text = fit_to_width(cell, width - 2.0 * CELL_PADDING, BODY_SIZE);
        layer.use_text(text, BODY_SIZE, Mm(x + CELL_PADDING), Mm(baseline), font);
        x += width;
    }
}

fn fill_band(layer: &PdfLayerReference, top: f32, rgb: (f32, f32, f32)) {
    set_fill(layer, rgb);
    let rect = Rect::new(
        Mm(MARGIN),
        Mm(top - ROW_HEIGHT),
        Mm(PAGE_WIDTH - MARGIN),
        Mm(top),
    )
    .with_mode(PaintMode::Fill);
    layer.add_rect(rect);
}

fn set_fill(layer: &PdfLayerReference, (r, g, b): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

/// Truncates text to the column width using an average glyph width.
fn fit_to_width(text: &str, width_mm: f32, font_size: f32) -> String {
    // 1pt = 0.3528mm; average glyph is roughly half an em
    let glyph_mm = font_size * 0.3528 * 0.52;
    let max_chars = (width_mm / glyph_mm).floor().max(1.0) as usize;

    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
