use chrono::{DateTime, Utc};

use crate::models::{CachedProfile, LoginRequest, TokenResponse, UserProfile};
use crate::services::api_client::{ApiClient, RequestOptions};
use crate::utils::constants::{
    PROFILE_CACHE_MAX_AGE_MINUTES, STORAGE_KEY_REFRESH, STORAGE_KEY_USER,
};
use crate::utils::errors::ApiError;
use crate::utils::storage::{get_local_storage, load_from_storage, save_to_storage, set_token};

/// Exchange credentials for a token pair, persist it, and resolve the
/// signed-in profile. The login call itself runs without auth headers.
pub async fn login(email: &str, password: &str) -> Result<UserProfile, ApiError> {
    log::info!("🔐 Signing in {}", email);
    let client = ApiClient::new();
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let tokens: TokenResponse = client
        .post("/auth/login", Some(&request), &RequestOptions::unauthenticated())
        .await?;

    set_token(&tokens.access_token);
    if let Some(refresh) = &tokens.refresh_token {
        // Raw string, same as the access token
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(STORAGE_KEY_REFRESH, refresh);
        }
    }

    let user = fetch_current_user().await?;
    log::info!("✅ Signed in as {}", user.email);
    Ok(user)
}

/// GET /users/me with the stored token, refreshing the cached profile.
pub async fn fetch_current_user() -> Result<UserProfile, ApiError> {
    let client = ApiClient::new();
    // Revalidation must reach the backend, not an intermediary cache
    let options = RequestOptions::default().with_header("Cache-Control", "no-cache");
    let user: UserProfile = client.get("/users/me", &options).await?;

    let cache = CachedProfile {
        user: user.clone(),
        cached_at: Utc::now().to_rfc3339(),
    };
    if let Err(e) = save_to_storage(STORAGE_KEY_USER, &cache) {
        log::warn!("⚠️ Could not cache profile: {}", e);
    }

    Ok(user)
}

/// Session-restore fast path: the cached profile, when still fresh. The
/// caller is expected to revalidate against /users/me afterwards.
pub fn cached_profile() -> Option<UserProfile> {
    let cache = load_from_storage::<CachedProfile>(STORAGE_KEY_USER)?;
    let cached_at = DateTime::parse_from_rfc3339(&cache.cached_at).ok()?;

    if is_cache_fresh(cached_at.with_timezone(&Utc), Utc::now()) {
        log::info!("📋 Using cached profile for {}", cache.user.email);
        Some(cache.user)
    } else {
        log::info!("📋 Cached profile expired, refetching");
        None
    }
}

/// Admin surface: every registered user.
pub async fn load_registered_users() -> Result<Vec<UserProfile>, ApiError> {
    let client = ApiClient::new();
    let users: Vec<UserProfile> = client.get("/admin/users", &RequestOptions::default()).await?;
    log::info!("👥 Loaded {} registered users", users.len());
    Ok(users)
}

fn is_cache_fresh(cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(cached_at).num_minutes() < PROFILE_CACHE_MAX_AGE_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn cache_freshness_window() {
        let now = Utc::now();
        assert!(is_cache_fresh(now - Duration::minutes(5), now));
        assert!(is_cache_fresh(now - Duration::minutes(14), now));
        assert!(!is_cache_fresh(now - Duration::minutes(15), now));
        assert!(!is_cache_fresh(now - Duration::hours(3), now));
    }
}
