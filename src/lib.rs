pub mod config;
pub mod document;
pub mod error;
pub mod invoice;
pub mod logger;
pub mod pdf;
pub mod preview;

pub use config::{load_defaults, Defaults};
pub use document::{Block, Document, Table, TextStyle};
pub use error::{InvoiceError, Result};
pub use invoice::{
    generate_invoice, prepare_invoice, BillingPeriod, DerivedFields, InvoiceParams, Language,
    ParamInput,
};
