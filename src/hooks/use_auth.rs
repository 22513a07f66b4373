// ============================================================================
// USE AUTH - Global session state
// ============================================================================
// Owns the {user, is_authenticated, is_initialized} triple the rest of the
// app reads. Guards must not trust anything until is_initialized is true.
// ============================================================================

use yew::prelude::*;

use crate::models::UserProfile;
use crate::services::auth_service;
use crate::utils::constants::LOGIN_PATH;
use crate::utils::errors::ApiError;
use crate::utils::navigation::navigate_to;
use crate::utils::storage::{clear_session, get_token};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthSession {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_initialized: bool,
}

impl AuthSession {
    /// Storage not consulted yet; guards render a loading state.
    pub fn initializing() -> Self {
        Self::default()
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_initialized: true,
        }
    }

    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_initialized: true,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub session: AuthSession,
    /// Install the profile of a user who just signed in.
    pub apply_user: Callback<UserProfile>,
    /// Tear down the stored session and return to the login screen.
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let session = use_state(AuthSession::initializing);

    // Restore the session once on mount
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            restore_session(session);
            || ()
        });
    }

    let apply_user = {
        let session = session.clone();
        Callback::from(move |user: UserProfile| {
            session.set(AuthSession::authenticated(user));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            clear_session();
            session.set(AuthSession::anonymous());
            navigate_to(LOGIN_PATH);
        })
    };

    UseAuthHandle {
        session: (*session).clone(),
        apply_user,
        logout,
    }
}

fn restore_session(session: UseStateHandle<AuthSession>) {
    if get_token().is_none() {
        session.set(AuthSession::anonymous());
        return;
    }

    // Fast path: trust a fresh cached profile immediately, then revalidate
    // against the backend.
    let had_cached = match auth_service::cached_profile() {
        Some(cached) => {
            session.set(AuthSession::authenticated(cached));
            true
        }
        None => false,
    };

    wasm_bindgen_futures::spawn_local(async move {
        match auth_service::fetch_current_user().await {
            Ok(user) => session.set(AuthSession::authenticated(user)),
            Err(ApiError::AuthenticationRequired) => {
                // The dispatcher already cleared storage and started the
                // login redirect
                session.set(AuthSession::anonymous());
            }
            Err(e) => {
                log::error!("❌ Session restore failed: {}", e);
                // Token stays put: a transient failure must not force a
                // re-login. Without a cached profile there is nothing to
                // render as signed-in, so resolve to anonymous.
                if !had_cached {
                    session.set(AuthSession::anonymous());
                }
            }
        }
    });
}
