// PSX import path: the backend parses a pasted broker/CDC custody
// statement and merges the resulting positions into a portfolio.

use crate::models::{PsxImportRequest, PsxImportResponse, PsxSymbol};
use crate::services::api_client::{ApiClient, RequestOptions};
use crate::utils::errors::ApiError;

/// Symbol directory is public market reference data, served without auth.
pub async fn load_psx_symbols() -> Result<Vec<PsxSymbol>, ApiError> {
    let client = ApiClient::new();
    let symbols: Vec<PsxSymbol> = client
        .get("/psx/symbols", &RequestOptions::unauthenticated())
        .await?;
    log::info!("📈 PSX symbol directory: {} entries", symbols.len());
    Ok(symbols)
}

pub async fn import_psx_holdings(request: &PsxImportRequest) -> Result<PsxImportResponse, ApiError> {
    log::info!(
        "📥 Importing PSX statement for account {} into portfolio {}",
        request.account_number,
        request.portfolio_id
    );
    let client = ApiClient::new();
    let response: PsxImportResponse = client
        .post("/psx/import", Some(request), &RequestOptions::default())
        .await?;
    log::info!(
        "✅ PSX import: {} imported, {} skipped",
        response.imported,
        response.skipped
    );
    Ok(response)
}
