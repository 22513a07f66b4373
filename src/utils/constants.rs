/// Backend API base URL, resolved at compile time:
/// - Development: http://localhost:8000/api/v1 (default)
/// - Production: baked in via the BACKEND_URL env var (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api/v1",
};

/// Primary storage key for the bearer token.
pub const STORAGE_KEY_TOKEN: &str = "folio_access_token";

/// Token key from before the folio_ prefix rename. Still read so existing
/// sessions survive the migration, never written.
pub const STORAGE_KEY_TOKEN_LEGACY: &str = "access_token";

/// Cached user profile (JSON envelope with a fetch timestamp).
pub const STORAGE_KEY_USER: &str = "folio_user";

/// Refresh token issued alongside the access token.
pub const STORAGE_KEY_REFRESH: &str = "folio_refresh_token";

/// Token lookup order: primary first, then legacy.
pub const TOKEN_KEYS: [&str; 2] = [STORAGE_KEY_TOKEN, STORAGE_KEY_TOKEN_LEGACY];

/// Keys removed on logout or session teardown.
pub const SESSION_KEYS: [&str; 4] = [
    STORAGE_KEY_TOKEN,
    STORAGE_KEY_TOKEN_LEGACY,
    STORAGE_KEY_USER,
    STORAGE_KEY_REFRESH,
];

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Role value that unlocks admin screens. Compared case-insensitively.
pub const ADMIN_ROLE: &str = "admin";

/// How long a cached profile is trusted before /users/me is consulted again.
pub const PROFILE_CACHE_MAX_AGE_MINUTES: i64 = 15;
