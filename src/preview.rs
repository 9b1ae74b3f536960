use tabled::{builder::Builder, settings::Style};

use crate::document::{Align, Block, Document, Table, TextStyle, LINE_BREAK};

/// Width of the text page that paragraphs are aligned within
const PREVIEW_WIDTH: usize = 80;

fn table_text(table: &Table) -> String {
    let mut builder = Builder::default();
    for row in &table.rows {
        builder.push_record(row.iter().map(|cell| cell.replace(LINE_BREAK, "\n")));
    }
    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

fn paragraph_text(text: &str, style: TextStyle) -> String {
    let align = style.paragraph_style().align;
    text.split(LINE_BREAK)
        .map(|line| match align {
            Align::Left => line.to_string(),
            Align::Right => format!("{line:>PREVIEW_WIDTH$}"),
            Align::Center => format!("{line:^PREVIEW_WIDTH$}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text rendering of a document for the terminal
pub fn render_preview(document: &Document) -> String {
    let mut out = Vec::new();

    for block in &document.blocks {
        match block {
            Block::Paragraph { text, style } => out.push(paragraph_text(text, *style)),
            Block::Spacer { .. } => out.push(String::new()),
            Block::Table(table) => out.push(table_text(table)),
        }
    }

    out.join("\n")
}
