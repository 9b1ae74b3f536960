//! Render instructions for a document, independent of the output format.

mod invoice;
mod table;

pub use invoice::build_invoice_document;
pub use table::{Align, CellRange, CellStyle, Edge, Ruling, StyleRule, Table, INCH};

use serde::Serialize;

/// Marker for a forced line break inside paragraph or cell text.
pub const LINE_BREAK: &str = "<br/>";

/// Named paragraph styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Normal,
    InvoiceTitle,
    InvoiceNumber,
}

/// Typographic settings behind a [`TextStyle`], in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub leading: f32,
    pub align: Align,
    pub gray: bool,
    pub space_after: f32,
}

impl TextStyle {
    pub fn paragraph_style(self) -> ParagraphStyle {
        match self {
            TextStyle::Normal => ParagraphStyle {
                font_size: 10.0,
                leading: 12.0,
                align: Align::Left,
                gray: false,
                space_after: 0.0,
            },
            TextStyle::InvoiceTitle => ParagraphStyle {
                font_size: 24.0,
                leading: 28.8,
                align: Align::Right,
                gray: false,
                space_after: 30.0,
            },
            TextStyle::InvoiceNumber => ParagraphStyle {
                font_size: 16.0,
                leading: 19.2,
                align: Align::Right,
                gray: true,
                space_after: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String, style: TextStyle },
    Spacer { height: f32 },
    Table(Table),
}

impl Block {
    pub fn paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Block::Paragraph {
            text: text.into(),
            style,
        }
    }

    pub fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }
}

/// An ordered sequence of blocks flowed top to bottom onto pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = (&str, TextStyle)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph { text, style } => Some((text.as_str(), *style)),
            _ => None,
        })
    }
}
