use anyhow::Result;
use serde::Serialize;

use crate::rate_table::RateTable;

#[derive(Debug, Serialize, PartialEq)]
pub struct Valute {
    #[serde(rename = "CharCode")]
    pub char_code: String,
    #[serde(rename = "VunitRate")]
    pub vunit_rate: String,
}

/// Rate table laid out like a central-bank daily sheet.
#[derive(Debug, Serialize, PartialEq)]
pub struct RateSheet {
    #[serde(rename = "@Base")]
    pub base: String,
    #[serde(rename = "Valute")]
    pub valute: Vec<Valute>,
}

impl RateSheet {
    pub fn from_table(table: &RateTable) -> Self {
        let valute = table
            .entries()
            .map(|entry| Valute {
                char_code: entry.code,
                vunit_rate: entry.rate.to_string(),
            })
            .collect();

        Self {
            base: table.base_currency().to_string(),
            valute,
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        Ok(quick_xml::se::to_string_with_root("ValCurs", self)?)
    }
}
