// Utils compartidos

pub mod constants;
pub mod errors;
pub mod navigation;
pub mod storage;

pub use constants::*;
pub use errors::{parse_error, ApiError};
pub use navigation::{current_path, login_redirect_url, navigate_to, post_login_target};
pub use storage::{clear_session, get_token, load_from_storage, remove_from_storage, save_to_storage, set_token};
