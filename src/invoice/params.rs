use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{resolve_output_dir, Defaults};
use crate::error::{InvoiceError, Result};
use crate::invoice::period::parse_due_date;

/// Language of the invoice title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
}

impl Language {
    pub fn title(self) -> &'static str {
        match self {
            Language::En => "INVOICE",
            Language::Pt => "FATURA",
        }
    }
}

/// Fully resolved input for one invoice.
#[derive(Debug, Clone)]
pub struct InvoiceParams {
    pub biller_name: String,
    pub biller_company: String,
    pub invoice_number: u32,
    pub language: Language,
    pub due_date: NaiveDate,
    pub bill_to: String,
    /// Address with literal `\n` escapes between lines
    pub ship_to: String,
    pub item_description: String,
    pub payment_terms: String,
    /// Amount of the single line item, which is also the subtotal and total
    pub total_value: Decimal,
    pub output_path: PathBuf,
}

/// Values supplied on the command line, before config defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct ParamInput {
    pub name: Option<String>,
    pub company: Option<String>,
    pub invoice_number: u32,
    pub language: Option<Language>,
    pub due_date: String,
    pub bill_to: Option<String>,
    pub ship_to: Option<String>,
    pub item: Option<String>,
    pub payment_terms: Option<String>,
    pub total_value: Decimal,
    pub output: Option<String>,
    pub output_dir: Option<String>,
}

impl ParamInput {
    /// Merge with config defaults and validate. Command-line values win.
    pub fn resolve(self, defaults: &Defaults, project_root: &Path) -> Result<InvoiceParams> {
        let name = self.name.or_else(|| defaults.name.clone());
        let company = self.company.or_else(|| defaults.company.clone());
        let language = self.language.or(defaults.language);
        let bill_to = self.bill_to.or_else(|| defaults.bill_to.clone());
        let ship_to = self.ship_to.or_else(|| defaults.ship_to.clone());
        let item = self.item.or_else(|| defaults.item.clone());
        let payment_terms = self.payment_terms.or_else(|| defaults.payment_terms.clone());

        let missing: Vec<String> = [
            ("name", name.is_none()),
            ("company", company.is_none()),
            ("language", language.is_none()),
            ("bill_to", bill_to.is_none()),
            ("ship_to", ship_to.is_none()),
            ("item", item.is_none()),
            ("payment_terms", payment_terms.is_none()),
        ]
        .into_iter()
        .filter(|(_, unset)| *unset)
        .map(|(field, _)| field.to_string())
        .collect();

        let (
            Some(biller_name),
            Some(biller_company),
            Some(language),
            Some(bill_to),
            Some(ship_to),
            Some(item_description),
            Some(payment_terms),
        ) = (name, company, language, bill_to, ship_to, item, payment_terms)
        else {
            return Err(InvoiceError::MissingRequiredFields(missing));
        };

        let due_date = parse_due_date(&self.due_date)?;

        if self.total_value.is_sign_negative() && !self.total_value.is_zero() {
            return Err(InvoiceError::NegativeTotal(self.total_value));
        }

        let output_dir = self.output_dir.or_else(|| defaults.output_dir.clone());
        let output_dir = resolve_output_dir(output_dir.as_deref(), project_root);
        let file_name = self
            .output
            .unwrap_or_else(|| format!("invoice_{}.pdf", self.invoice_number));

        Ok(InvoiceParams {
            biller_name,
            biller_company,
            invoice_number: self.invoice_number,
            language,
            due_date,
            bill_to,
            ship_to,
            item_description,
            payment_terms,
            total_value: self.total_value,
            output_path: output_dir.join(file_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> ParamInput {
        ParamInput {
            name: Some("John Doe".to_string()),
            company: Some("Test Company".to_string()),
            invoice_number: 1,
            language: Some(Language::En),
            due_date: "20250215".to_string(),
            bill_to: Some("Client Corp".to_string()),
            ship_to: Some("123 Test St\\nTest City, TS\\n12345".to_string()),
            item: Some("Test Services".to_string()),
            payment_terms: Some("Month".to_string()),
            total_value: Decimal::new(100000, 2),
            output: None,
            output_dir: None,
        }
    }

    #[test]
    fn language_titles() {
        assert_eq!(Language::En.title(), "INVOICE");
        assert_eq!(Language::Pt.title(), "FATURA");
    }

    #[test]
    fn resolves_complete_input() {
        let params = full_input()
            .resolve(&Defaults::default(), Path::new("/project"))
            .unwrap();

        assert_eq!(params.biller_name, "John Doe");
        assert_eq!(params.due_date, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
        assert_eq!(
            params.output_path,
            PathBuf::from("/project/invoices/invoice_1.pdf")
        );
    }

    #[test]
    fn config_defaults_fill_gaps_but_never_override() {
        let input = ParamInput {
            bill_to: None,
            company: Some("Cli Company".to_string()),
            ..full_input()
        };
        let defaults = Defaults {
            bill_to: Some("Config Client".to_string()),
            company: Some("Config Company".to_string()),
            ..Defaults::default()
        };

        let params = input.resolve(&defaults, Path::new("/project")).unwrap();
        assert_eq!(params.bill_to, "Config Client");
        assert_eq!(params.biller_company, "Cli Company");
    }

    #[test]
    fn reports_every_missing_field_at_once() {
        let input = ParamInput {
            name: None,
            bill_to: None,
            payment_terms: None,
            ..full_input()
        };

        match input.resolve(&Defaults::default(), Path::new("/project")) {
            Err(InvoiceError::MissingRequiredFields(fields)) => {
                assert_eq!(fields, vec!["name", "bill_to", "payment_terms"]);
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
    }

    #[test]
    fn missing_fields_are_reported_before_a_bad_date() {
        let input = ParamInput {
            bill_to: None,
            due_date: "not-a-date".to_string(),
            ..full_input()
        };

        assert!(matches!(
            input.resolve(&Defaults::default(), Path::new("/project")),
            Err(InvoiceError::MissingRequiredFields(_))
        ));
    }

    #[test]
    fn rejects_invalid_due_date() {
        let input = ParamInput {
            due_date: "20250231".to_string(),
            ..full_input()
        };

        assert!(matches!(
            input.resolve(&Defaults::default(), Path::new("/project")),
            Err(InvoiceError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn rejects_negative_total() {
        let input = ParamInput {
            total_value: Decimal::new(-1, 2),
            ..full_input()
        };

        assert!(matches!(
            input.resolve(&Defaults::default(), Path::new("/project")),
            Err(InvoiceError::NegativeTotal(_))
        ));
    }

    #[test]
    fn output_file_and_directory_overrides() {
        let input = ParamInput {
            output: Some("march.pdf".to_string()),
            output_dir: Some("billing/2025".to_string()),
            ..full_input()
        };
        let params = input
            .resolve(&Defaults::default(), Path::new("/project"))
            .unwrap();
        assert_eq!(
            params.output_path,
            PathBuf::from("/project/billing/2025/march.pdf")
        );

        let defaults = Defaults {
            output_dir: Some("/srv/invoices".to_string()),
            ..Defaults::default()
        };
        let params = full_input()
            .resolve(&defaults, Path::new("/project"))
            .unwrap();
        assert_eq!(
            params.output_path,
            PathBuf::from("/srv/invoices/invoice_1.pdf")
        );
    }
}
