mod derived;
pub mod format;
mod generator;
mod params;
pub mod period;

pub use derived::DerivedFields;
pub use generator::{generate_invoice, prepare_invoice};
pub use params::{InvoiceParams, Language, ParamInput};
pub use period::BillingPeriod;
