use serde::Serialize;

/// Points per inch, the unit table column widths are given in.
pub const INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A rectangle of cells given as (column, row) corners, inclusive.
/// Negative indices count back from the last column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRange {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

impl CellRange {
    pub const fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        Self { from, to }
    }

    /// Every cell of the table
    pub const fn all() -> Self {
        Self::new((0, 0), (-1, -1))
    }

    /// The whole of one row
    pub const fn row(row: i32) -> Self {
        Self::new((0, row), (-1, row))
    }

    fn resolve(index: i32, len: usize) -> Option<usize> {
        let len = i32::try_from(len).ok()?;
        let index = if index < 0 { len + index } else { index };
        (0..len).contains(&index).then_some(index as usize)
    }

    /// Resolved inclusive bounds as ((first_col, first_row), (last_col, last_row)).
    pub fn bounds(&self, cols: usize, rows: usize) -> Option<((usize, usize), (usize, usize))> {
        let c0 = Self::resolve(self.from.0, cols)?;
        let r0 = Self::resolve(self.from.1, rows)?;
        let c1 = Self::resolve(self.to.0, cols)?;
        let r1 = Self::resolve(self.to.1, rows)?;
        Some(((c0.min(c1), r0.min(r1)), (c0.max(c1), r0.max(r1))))
    }

    pub fn contains(&self, col: usize, row: usize, cols: usize, rows: usize) -> bool {
        match self.bounds(cols, rows) {
            Some(((c0, r0), (c1, r1))) => (c0..=c1).contains(&col) && (r0..=r1).contains(&row),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StyleRule {
    Align { range: CellRange, align: Align },
    Bold { range: CellRange },
    FontSize { range: CellRange, size: f32 },
    TopPadding { range: CellRange, padding: f32 },
    BottomPadding { range: CellRange, padding: f32 },
    LineAbove { range: CellRange, width: f32 },
    LineBelow { range: CellRange, width: f32 },
}

impl StyleRule {
    fn range(&self) -> &CellRange {
        match self {
            StyleRule::Align { range, .. }
            | StyleRule::Bold { range }
            | StyleRule::FontSize { range, .. }
            | StyleRule::TopPadding { range, .. }
            | StyleRule::BottomPadding { range, .. }
            | StyleRule::LineAbove { range, .. }
            | StyleRule::LineBelow { range, .. } => range,
        }
    }
}

/// Effective styling of a single cell after all rules are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub align: Align,
    pub bold: bool,
    pub font_size: f32,
    pub top_padding: f32,
    pub bottom_padding: f32,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            align: Align::Left,
            bold: false,
            font_size: 10.0,
            top_padding: 3.0,
            bottom_padding: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Above,
    Below,
}

/// A horizontal rule spanning columns `first_col..=last_col` of one row edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruling {
    pub first_col: usize,
    pub last_col: usize,
    pub width: f32,
}

/// A fixed grid of text cells with column widths in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub col_widths: Vec<f32>,
    pub rules: Vec<StyleRule>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>, col_widths: Vec<f32>) -> Self {
        Self {
            rows,
            col_widths,
            rules: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: Vec<StyleRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn num_cols(&self) -> usize {
        self.col_widths.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Fold every rule covering the cell, later rules overriding earlier ones.
    pub fn cell_style(&self, col: usize, row: usize) -> CellStyle {
        let (cols, rows) = (self.num_cols(), self.num_rows());

        self.rules
            .iter()
            .filter(|rule| rule.range().contains(col, row, cols, rows))
            .fold(CellStyle::default(), |mut style, rule| {
                match rule {
                    StyleRule::Align { align, .. } => style.align = *align,
                    StyleRule::Bold { .. } => style.bold = true,
                    StyleRule::FontSize { size, .. } => style.font_size = *size,
                    StyleRule::TopPadding { padding, .. } => style.top_padding = *padding,
                    StyleRule::BottomPadding { padding, .. } => style.bottom_padding = *padding,
                    StyleRule::LineAbove { .. } | StyleRule::LineBelow { .. } => {}
                }
                style
            })
    }

    /// Rules drawn along the top or bottom edge of a row.
    pub fn rulings(&self, row: usize, edge: Edge) -> Vec<Ruling> {
        let (cols, rows) = (self.num_cols(), self.num_rows());

        self.rules
            .iter()
            .filter_map(|rule| match (rule, edge) {
                (StyleRule::LineAbove { range, width }, Edge::Above)
                | (StyleRule::LineBelow { range, width }, Edge::Below) => {
                    let ((c0, r0), (c1, r1)) = range.bounds(cols, rows)?;
                    (r0..=r1).contains(&row).then_some(Ruling {
                        first_col: c0,
                        last_col: c1,
                        width: *width,
                    })
                }
                _ => None,
            })
            .collect()
    }
}
