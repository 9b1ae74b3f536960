use std::io::BufWriter;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rgb,
};

use crate::document::{Align, Block, Document, Edge, Table, TextStyle, LINE_BREAK};
use crate::error::{InvoiceError, Result};

// US Letter, in points
const PAGE_W: f32 = 612.0;
const PAGE_H: f32 = 792.0;
const MARGIN: f32 = 72.0;
const CELL_SIDE_PADDING: f32 = 6.0;
const LEADING_FACTOR: f32 = 1.2;
const MM_PER_PT: f32 = 25.4 / 72.0;

fn mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}

/// Average Helvetica advance is about half the font size
fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Split on explicit breaks, then wrap words to fit `max_width`.
pub(crate) fn wrap_text(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split(LINE_BREAK).flat_map(|s| s.split('\n')) {
        let mut current = String::new();
        for word in segment.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if !current.is_empty() && approx_text_width(&candidate, size) > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }

    lines
}

fn aligned_x(text: &str, size: f32, left: f32, width: f32, align: Align) -> f32 {
    match align {
        Align::Left => left,
        Align::Right => left + width - approx_text_width(text, size),
        Align::Center => left + (width - approx_text_width(text, size)) / 2.0,
    }
}

struct PdfWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    current_page: PdfPageIndex,
    current_layer: PdfLayerIndex,
    /// Distance from the top edge of the page
    y: f32,
    pages: usize,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, mm(PAGE_W), mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| InvoiceError::PdfGeneration(format!("{e:?}")))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| InvoiceError::PdfGeneration(format!("{e:?}")))?;
        Ok(Self {
            doc,
            font,
            font_bold,
            current_page: page,
            current_layer: layer,
            y: MARGIN,
            pages: 1,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        self.doc
            .get_page(self.current_page)
            .get_layer(self.current_layer)
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(mm(PAGE_W), mm(PAGE_H), "Layer 1");
        self.current_page = page;
        self.current_layer = layer;
        self.y = MARGIN;
        self.pages += 1;
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > PAGE_H - MARGIN && self.y > MARGIN {
            self.new_page();
        }
    }

    /// Draw one line of text whose baseline sits `baseline` points below the top edge.
    fn text(&self, s: &str, x: f32, baseline: f32, size: f32, bold: bool, gray: bool) {
        if s.is_empty() {
            return;
        }
        let font = if bold { &self.font_bold } else { &self.font };
        let layer = self.layer();
        if gray {
            layer.set_fill_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
        }
        layer.use_text(s, size, mm(x), mm(PAGE_H - baseline), font);
        if gray {
            layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        }
    }

    fn hline(&self, x1: f32, x2: f32, y: f32, width: f32) {
        let layer = self.layer();
        layer.set_outline_thickness(width);
        let line = Line {
            points: vec![
                (Point::new(mm(x1), mm(PAGE_H - y)), false),
                (Point::new(mm(x2), mm(PAGE_H - y)), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);
    }

    fn paragraph(&mut self, text: &str, style: TextStyle) {
        let style = style.paragraph_style();
        let content_width = PAGE_W - 2.0 * MARGIN;

        for line in wrap_text(text, content_width, style.font_size) {
            self.ensure_space(style.leading);
            let x = aligned_x(&line, style.font_size, MARGIN, content_width, style.align);
            self.text(
                &line,
                x,
                self.y + style.font_size,
                style.font_size,
                false,
                style.gray,
            );
            self.y += style.leading;
        }
        self.y += style.space_after;
    }

    fn spacer(&mut self, height: f32) {
        self.y += height;
    }

    fn table(&mut self, table: &Table) {
        // Tables are centred on the page even when wider than the text block
        let left = (PAGE_W - table.width()) / 2.0;
        let col_x: Vec<f32> = table
            .col_widths
            .iter()
            .scan(left, |x, w| {
                let start = *x;
                *x += w;
                Some(start)
            })
            .collect();

        for (r, row) in table.rows.iter().enumerate() {
            let cells: Vec<_> = row
                .iter()
                .enumerate()
                .take(table.num_cols())
                .map(|(c, text)| {
                    let style = table.cell_style(c, r);
                    let inner = table.col_widths[c] - 2.0 * CELL_SIDE_PADDING;
                    (c, style, wrap_text(text, inner, style.font_size))
                })
                .collect();

            let height = cells
                .iter()
                .map(|(_, style, lines)| {
                    style.top_padding
                        + lines.len() as f32 * style.font_size * LEADING_FACTOR
                        + style.bottom_padding
                })
                .fold(0.0_f32, f32::max);

            self.ensure_space(height);
            let top = self.y;
            self.rulings(table, &col_x, r, Edge::Above, top);

            for (c, style, lines) in &cells {
                let leading = style.font_size * LEADING_FACTOR;
                let inner = table.col_widths[*c] - 2.0 * CELL_SIDE_PADDING;
                for (i, line) in lines.iter().enumerate() {
                    let baseline = top + style.top_padding + i as f32 * leading + style.font_size;
                    let x = aligned_x(
                        line,
                        style.font_size,
                        col_x[*c] + CELL_SIDE_PADDING,
                        inner,
                        style.align,
                    );
                    self.text(line, x, baseline, style.font_size, style.bold, false);
                }
            }

            self.y += height;
            self.rulings(table, &col_x, r, Edge::Below, self.y);
        }
    }

    fn rulings(&self, table: &Table, col_x: &[f32], row: usize, edge: Edge, y: f32) {
        for ruling in table.rulings(row, edge) {
            let x1 = col_x[ruling.first_col];
            let x2 = col_x[ruling.last_col] + table.col_widths[ruling.last_col];
            self.hline(x1, x2, y, ruling.width);
        }
    }

    fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buf)
            .map_err(|e| InvoiceError::PdfGeneration(format!("{e:?}")))?;
        buf.into_inner()
            .map_err(|e| InvoiceError::PdfGeneration(e.to_string()))
    }
}

/// Flow a document onto US-letter pages and return the PDF bytes.
pub fn render_document(document: &Document) -> Result<Vec<u8>> {
    let mut pdf = PdfWriter::new(&document.title)?;

    for block in &document.blocks {
        match block {
            Block::Paragraph { text, style } => pdf.paragraph(text, *style),
            Block::Spacer { height } => pdf.spacer(*height),
            Block::Table(table) => pdf.table(table),
        }
    }

    log::debug!(
        "Rendered {} blocks onto {} page(s)",
        document.blocks.len(),
        pdf.pages
    );
    pdf.to_bytes()
}
