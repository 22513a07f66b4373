pub mod admin_panel;
pub mod app;
pub mod dashboard;
pub mod loading_indicator;
pub mod login_screen;
pub mod psx_import;
pub mod route_guard;

pub use admin_panel::AdminPanel;
pub use app::App;
pub use dashboard::Dashboard;
pub use loading_indicator::LoadingIndicator;
pub use login_screen::LoginScreen;
pub use psx_import::PsxImport;
pub use route_guard::{evaluate_route, GuardDecision, RouteAccess, RouteGuard};
