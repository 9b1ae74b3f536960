use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::invoice::format::{format_address, format_currency, format_date};
use crate::invoice::period::BillingPeriod;
use crate::invoice::InvoiceParams;

/// Display values computed from the invoice parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFields {
    pub billing_period: BillingPeriod,
    pub billing_period_display: String,
    pub formatted_ship_to: String,
    pub formatted_due_date: String,
    pub formatted_today: String,
    pub formatted_total: String,
    pub formatted_subtotal: String,
    pub title: &'static str,
}

impl DerivedFields {
    pub fn derive(params: &InvoiceParams, today: NaiveDate) -> Result<Self> {
        let billing_period = BillingPeriod::for_due_date(params.due_date)?;
        // One line item and no tax: the subtotal is the total
        let formatted_total = format_currency(params.total_value);

        Ok(Self {
            billing_period,
            billing_period_display: billing_period.to_string(),
            formatted_ship_to: format_address(&params.ship_to),
            formatted_due_date: format_date(params.due_date),
            formatted_today: format_date(today),
            formatted_subtotal: formatted_total.clone(),
            formatted_total,
            title: params.language.title(),
        })
    }
}
