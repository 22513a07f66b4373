// ============================================================================
// NAVIGATION - Location reads + redirect helpers
// ============================================================================

use web_sys::window;

use crate::utils::constants::{HOME_PATH, LOGIN_PATH};

pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| HOME_PATH.to_string())
}

pub fn current_search() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Full-page navigation. The browser aborts whatever is in flight; this
/// layer makes no cancellation promises beyond that.
pub fn navigate_to(target: &str) {
    if let Some(win) = window() {
        if win.location().set_href(target).is_err() {
            log::error!("❌ Navigation to {} failed", target);
        }
    }
}

/// Login URL carrying the origin page as a `redirect` query parameter, so
/// the user lands back where they were after signing in. Home and empty
/// paths produce a bare login URL.
pub fn login_redirect_url(return_path: &str) -> String {
    if return_path.is_empty() || return_path == HOME_PATH {
        return LOGIN_PATH.to_string();
    }
    format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(return_path))
}

/// Where to go after a successful login: the sanitized `redirect` query
/// parameter when present, the home screen otherwise.
pub fn post_login_target() -> String {
    redirect_param(&current_search())
        .filter(|target| is_same_origin_path(target))
        .unwrap_or_else(|| HOME_PATH.to_string())
}

fn redirect_param(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("redirect=") {
            return urlencoding::decode(value).ok().map(|v| v.into_owned());
        }
    }
    None
}

// Absolute URLs and protocol-relative targets are rejected; the parameter
// is user-visible and must stay on this origin.
fn is_same_origin_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_encodes_the_return_path() {
        assert_eq!(login_redirect_url("/admin"), "/login?redirect=%2Fadmin");
        assert_eq!(
            login_redirect_url("/import/psx"),
            "/login?redirect=%2Fimport%2Fpsx"
        );
    }

    #[test]
    fn home_and_empty_paths_get_a_bare_login_url() {
        assert_eq!(login_redirect_url("/"), "/login");
        assert_eq!(login_redirect_url(""), "/login");
    }

    #[test]
    fn redirect_param_round_trips() {
        assert_eq!(
            redirect_param("?redirect=%2Fimport%2Fpsx").as_deref(),
            Some("/import/psx")
        );
        assert_eq!(redirect_param("?foo=bar"), None);
        assert_eq!(redirect_param(""), None);
    }

    #[test]
    fn offsite_targets_are_rejected() {
        assert!(is_same_origin_path("/admin"));
        assert!(!is_same_origin_path("//evil.example"));
        assert!(!is_same_origin_path("https://evil.example/"));
    }
}
