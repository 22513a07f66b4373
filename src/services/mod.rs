pub mod api_client;
pub mod auth_service;
pub mod portfolio_service;
pub mod psx_service;

pub use api_client::{ApiClient, RequestOptions};
pub use auth_service::{cached_profile, fetch_current_user, load_registered_users, login};
pub use portfolio_service::{
    create_portfolio, delete_portfolio, load_holdings, load_portfolios, update_holding,
};
pub use psx_service::{import_psx_holdings, load_psx_symbols};
