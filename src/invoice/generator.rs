use chrono::NaiveDate;
use std::path::PathBuf;

use crate::document::{build_invoice_document, Document};
use crate::error::Result;
use crate::invoice::{DerivedFields, InvoiceParams};
use crate::pdf::{render_document, write_atomically};

/// Derive the display fields and assemble the invoice without rendering it
pub fn prepare_invoice(params: &InvoiceParams, today: NaiveDate) -> Result<Document> {
    let fields = DerivedFields::derive(params, today)?;
    Ok(build_invoice_document(params, &fields))
}

/// Render the invoice to PDF and write it to `params.output_path`
pub fn generate_invoice(params: &InvoiceParams, today: NaiveDate) -> Result<PathBuf> {
    let document = prepare_invoice(params, today)?;
    let bytes = render_document(&document)?;

    log::info!("Writing invoice #{} to {}", params.invoice_number, params.output_path.display());
    write_atomically(&params.output_path, &bytes)?;

    Ok(params.output_path.clone())
}
