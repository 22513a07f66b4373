use crate::models::{CreatePortfolioRequest, Holding, Portfolio, UpdateHoldingRequest};
use crate::services::api_client::{ApiClient, RequestOptions};
use crate::utils::errors::ApiError;

pub async fn load_portfolios() -> Result<Vec<Portfolio>, ApiError> {
    let client = ApiClient::new();
    let portfolios: Vec<Portfolio> = client.get("/portfolios", &RequestOptions::default()).await?;
    log::info!("📋 Loaded {} portfolios", portfolios.len());
    Ok(portfolios)
}

pub async fn create_portfolio(name: &str, base_currency: &str) -> Result<Portfolio, ApiError> {
    let client = ApiClient::new();
    let request = CreatePortfolioRequest {
        name: name.to_string(),
        base_currency: base_currency.to_string(),
    };
    let portfolio: Portfolio = client
        .post("/portfolios", Some(&request), &RequestOptions::default())
        .await?;
    log::info!("✅ Portfolio created: {}", portfolio.name);
    Ok(portfolio)
}

pub async fn load_holdings(portfolio_id: i64) -> Result<Vec<Holding>, ApiError> {
    let client = ApiClient::new();
    client
        .get(
            &format!("/portfolios/{}/holdings", portfolio_id),
            &RequestOptions::default(),
        )
        .await
}

pub async fn update_holding(
    portfolio_id: i64,
    holding_id: i64,
    changes: &UpdateHoldingRequest,
) -> Result<Holding, ApiError> {
    let client = ApiClient::new();
    client
        .put(
            &format!("/portfolios/{}/holdings/{}", portfolio_id, holding_id),
            Some(changes),
            &RequestOptions::default(),
        )
        .await
}

pub async fn delete_portfolio(portfolio_id: i64) -> Result<(), ApiError> {
    let client = ApiClient::new();
    // Backend replies 204 No Content; the helper absorbs the empty body.
    client
        .delete(
            &format!("/portfolios/{}", portfolio_id),
            &RequestOptions::default(),
        )
        .await?;
    log::info!("🗑️ Portfolio {} deleted", portfolio_id);
    Ok(())
}
