use serde::{Deserialize, Serialize};

use crate::invoice::Language;

/// Top-level layout of `config.toml`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Fallback values for any command-line flag that was not given.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Defaults {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub bill_to: Option<String>,
    #[serde(default)]
    pub ship_to: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
}
