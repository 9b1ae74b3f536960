use rust_decimal::Decimal;

use crate::document::{
    Align, Block, CellRange, Document, StyleRule, Table, TextStyle, INCH, LINE_BREAK,
};
use crate::invoice::format::format_currency;
use crate::invoice::{DerivedFields, InvoiceParams};

const SECTION_GAP: f32 = 20.0;

/// Lay out the header, billing-info table and line-item table of an invoice.
pub fn build_invoice_document(params: &InvoiceParams, fields: &DerivedFields) -> Document {
    let mut doc = Document::new(format!("{} #{}", fields.title, params.invoice_number));
    doc.extend(header(params, fields));
    doc.extend(billing_info(params, fields));
    doc.extend(line_items(params, fields));
    doc
}

fn header(params: &InvoiceParams, fields: &DerivedFields) -> Vec<Block> {
    vec![
        Block::paragraph(&params.biller_name, TextStyle::Normal),
        Block::paragraph(&params.biller_company, TextStyle::Normal),
        Block::spacer(SECTION_GAP),
        Block::paragraph(fields.title, TextStyle::InvoiceTitle),
        Block::paragraph(format!("#{}", params.invoice_number), TextStyle::InvoiceNumber),
        Block::spacer(SECTION_GAP),
    ]
}

/// Rules shared by both tables
fn base_rules() -> Vec<StyleRule> {
    vec![
        StyleRule::Align {
            range: CellRange::all(),
            align: Align::Left,
        },
        StyleRule::Bold {
            range: CellRange::row(0),
        },
        StyleRule::FontSize {
            range: CellRange::all(),
            size: 10.0,
        },
        StyleRule::TopPadding {
            range: CellRange::all(),
            padding: 5.0,
        },
        StyleRule::BottomPadding {
            range: CellRange::all(),
            padding: 5.0,
        },
    ]
}

fn row(cells: [&str; 4]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn billing_info(params: &InvoiceParams, fields: &DerivedFields) -> Vec<Block> {
    let rows = vec![
        row(["Bill To:", "Ship To:", "Date", &fields.formatted_today]),
        row([
            &params.bill_to,
            &fields.formatted_ship_to,
            "Payment Terms",
            &params.payment_terms,
        ]),
        row(["", "", "Due Date", &fields.formatted_due_date]),
        row(["", "", "Total Due", &fields.formatted_total]),
    ];

    let table = Table::new(rows, vec![2.0 * INCH, 2.5 * INCH, 1.5 * INCH, 1.5 * INCH])
        .with_rules(base_rules());

    vec![Block::Table(table), Block::spacer(SECTION_GAP)]
}

fn line_items(params: &InvoiceParams, fields: &DerivedFields) -> Vec<Block> {
    let item = format!(
        "{}{LINE_BREAK}{}",
        params.item_description, fields.billing_period_display
    );
    let zero = format_currency(Decimal::ZERO);

    let rows = vec![
        row(["ITEM", "QUANTITY", "RATE", "AMOUNT"]),
        row([
            &item,
            "1",
            &fields.formatted_total,
            &fields.formatted_total,
        ]),
        row(["", "", "Subtotal", &fields.formatted_subtotal]),
        row(["", "", "Tax (0%)", &zero]),
        row(["", "", "Total", &fields.formatted_total]),
    ];

    let mut rules = base_rules();
    rules.extend([
        StyleRule::Align {
            range: CellRange::new((1, 0), (-1, -1)),
            align: Align::Right,
        },
        StyleRule::LineAbove {
            range: CellRange::row(0),
            width: 1.0,
        },
        StyleRule::LineBelow {
            range: CellRange::row(0),
            width: 1.0,
        },
        StyleRule::LineAbove {
            range: CellRange::row(-3),
            width: 1.0,
        },
    ]);

    let table =
        Table::new(rows, vec![4.0 * INCH, 1.0 * INCH, 1.5 * INCH, 1.5 * INCH]).with_rules(rules);

    vec![Block::Table(table)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Edge;
    use crate::invoice::Language;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn params(language: Language) -> InvoiceParams {
        InvoiceParams {
            biller_name: "John Doe".to_string(),
            biller_company: "Test Company".to_string(),
            invoice_number: 1,
            language,
            due_date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            bill_to: "Client Corp".to_string(),
            ship_to: "123 Test St\\nTest City, TS\\n12345".to_string(),
            item_description: "Test Services".to_string(),
            payment_terms: "Month".to_string(),
            total_value: Decimal::new(100000, 2),
            output_path: PathBuf::from("invoice_1.pdf"),
        }
    }

    fn document(language: Language) -> Document {
        let params = params(language);
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let fields = DerivedFields::derive(&params, today).unwrap();
        build_invoice_document(&params, &fields)
    }

    #[test]
    fn header_carries_biller_and_localized_title() {
        let doc = document(Language::En);
        let paragraphs: Vec<_> = doc.paragraphs().collect();

        assert_eq!(
            paragraphs,
            vec![
                ("John Doe", TextStyle::Normal),
                ("Test Company", TextStyle::Normal),
                ("INVOICE", TextStyle::InvoiceTitle),
                ("#1", TextStyle::InvoiceNumber),
            ]
        );
        assert_eq!(doc.title, "INVOICE #1");

        let doc = document(Language::Pt);
        assert!(doc.paragraphs().any(|(text, _)| text.contains("FATURA")));
        assert!(!doc.paragraphs().any(|(text, _)| text.contains("INVOICE")));
    }

    #[test]
    fn block_order() {
        let doc = document(Language::En);
        let kinds: Vec<&str> = doc
            .blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph { .. } => "p",
                Block::Spacer { .. } => "s",
                Block::Table(_) => "t",
            })
            .collect();
        assert_eq!(kinds, vec!["p", "p", "s", "p", "p", "s", "t", "s", "t"]);
    }

    #[test]
    fn billing_info_table() {
        let doc = document(Language::En);
        let table = doc.tables().next().unwrap();

        assert_eq!((table.num_cols(), table.num_rows()), (4, 4));
        assert_eq!(
            table.rows[0],
            vec!["Bill To:", "Ship To:", "Date", "Feb 03, 2025"]
        );
        assert_eq!(
            table.rows[1],
            vec![
                "Client Corp",
                "123 Test St<br/>Test City, TS<br/>12345",
                "Payment Terms",
                "Month"
            ]
        );
        assert_eq!(table.rows[2], vec!["", "", "Due Date", "Feb 15, 2025"]);
        assert_eq!(table.rows[3], vec!["", "", "Total Due", "US$ 1,000.00"]);
        assert!(table.cell_style(0, 0).bold);
        assert!(!table.cell_style(0, 1).bold);
        assert_eq!(table.cell_style(3, 3).align, Align::Left);
        assert_eq!(table.width(), 7.5 * INCH);
    }

    #[test]
    fn line_item_totals_agree() {
        let doc = document(Language::En);
        let table = doc.tables().nth(1).unwrap();

        assert_eq!(table.rows[0], vec!["ITEM", "QUANTITY", "RATE", "AMOUNT"]);
        assert_eq!(
            table.cell(0, 1),
            Some("Test Services<br/>Jan 01, 2025 - Jan 31, 2025")
        );
        assert_eq!(table.cell(1, 1), Some("1"));
        assert_eq!(table.cell(2, 1), Some("US$ 1,000.00"));
        assert_eq!(table.cell(3, 1), Some("US$ 1,000.00"));

        assert_eq!(table.rows[2], vec!["", "", "Subtotal", "US$ 1,000.00"]);
        assert_eq!(table.rows[3], vec!["", "", "Tax (0%)", "US$ 0.00"]);
        assert_eq!(table.rows[4], vec!["", "", "Total", "US$ 1,000.00"]);
        assert_eq!(table.cell(3, 4), table.cell(3, 2));
    }

    #[test]
    fn line_item_styling() {
        let doc = document(Language::En);
        let table = doc.tables().nth(1).unwrap();

        assert_eq!(table.cell_style(0, 1).align, Align::Left);
        assert_eq!(table.cell_style(3, 1).align, Align::Right);
        assert_eq!(table.cell_style(1, 0).align, Align::Right);
        assert_eq!(table.rulings(0, Edge::Above).len(), 1);
        assert_eq!(table.rulings(0, Edge::Below).len(), 1);
        assert_eq!(table.rulings(2, Edge::Above).len(), 1);
        assert!(table.rulings(1, Edge::Above).is_empty());
    }
}
