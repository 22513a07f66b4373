use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Portfolio {
    pub id: i64,
    pub name: String,
    pub base_currency: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Holding {
    pub id: i64,
    pub symbol: String,
    pub quantity: f64,
    pub avg_cost: f64,
    #[serde(default)]
    pub market_value: Option<f64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatePortfolioRequest {
    pub name: String,
    pub base_currency: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateHoldingRequest {
    pub quantity: Option<f64>,
    pub avg_cost: Option<f64>,
}
