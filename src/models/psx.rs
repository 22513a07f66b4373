// Import path for Pakistan Stock Exchange holdings: the backend parses a
// pasted CDC/broker custody statement and merges the positions into a
// portfolio.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PsxSymbol {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PsxImportRequest {
    pub portfolio_id: i64,
    pub account_number: String,
    pub statement_text: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PsxHolding {
    pub symbol: String,
    pub quantity: f64,
    pub avg_cost: f64,
    #[serde(default)]
    pub market_value: Option<f64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PsxImportResponse {
    pub imported: usize,
    pub skipped: usize,
    pub holdings: Vec<PsxHolding>,
}
