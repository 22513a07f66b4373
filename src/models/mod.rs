pub mod auth;
pub mod portfolio;
pub mod psx;

pub use auth::{CachedProfile, LoginRequest, TokenResponse, UserProfile};
pub use portfolio::{CreatePortfolioRequest, Holding, Portfolio, UpdateHoldingRequest};
pub use psx::{PsxHolding, PsxImportRequest, PsxImportResponse, PsxSymbol};
