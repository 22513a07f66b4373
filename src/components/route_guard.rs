// ============================================================================
// ROUTE GUARD - Per-page authorization gate
// ============================================================================
// evaluate_route() is the pure state machine:
//   Initializing -> Unauthenticated | Unauthorized | Authorized
// The RouteGuard component hosts it: it renders a loading indicator while
// auth state resolves, executes redirects, and only mounts children for an
// authorized session. Re-evaluated on every auth context change.
// ============================================================================

use yew::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::hooks::{use_auth_context, AuthSession};
use crate::utils::constants::HOME_PATH;
use crate::utils::navigation::{current_path, login_redirect_url, navigate_to};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RouteAccess {
    /// Any signed-in user.
    Authenticated,
    /// Signed-in user carrying the admin role.
    AdminOnly,
}

#[derive(Clone, PartialEq, Debug)]
pub enum GuardDecision {
    /// Auth state not resolved yet: show a loading indicator, never a
    /// redirect.
    Wait,
    /// Leave the page; render nothing while navigation starts.
    Redirect(String),
    /// Render the protected content.
    Render,
}

/// Decide what a protected page may do for the given session. Pure; the
/// hosting component executes any redirect.
pub fn evaluate_route(
    session: &AuthSession,
    access: RouteAccess,
    current_path: &str,
) -> GuardDecision {
    if !session.is_initialized {
        return GuardDecision::Wait;
    }

    let Some(user) = &session.user else {
        return GuardDecision::Redirect(login_redirect_url(current_path));
    };

    match access {
        RouteAccess::Authenticated => GuardDecision::Render,
        RouteAccess::AdminOnly if user.is_admin() => GuardDecision::Render,
        // Under-privileged users go home, silently
        RouteAccess::AdminOnly => GuardDecision::Redirect(HOME_PATH.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub access: RouteAccess,
    pub children: Children,
}

#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth_context();
    let decision = evaluate_route(&auth.session, props.access, &current_path());

    // One navigation per decision change; the effect re-runs only when the
    // session flips the decision.
    {
        let decision = decision.clone();
        use_effect_with(decision, |decision| {
            if let GuardDecision::Redirect(target) = decision {
                log::info!("🔀 Route guard redirecting to {}", target);
                navigate_to(target);
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Wait => html! { <LoadingIndicator /> },
        GuardDecision::Redirect(_) => html! {},
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn user_with_role(role: &str) -> UserProfile {
        UserProfile {
            id: 7,
            email: "bilal@example.com".to_string(),
            full_name: None,
            role: role.to_string(),
        }
    }

    #[test]
    fn uninitialized_session_always_waits() {
        let session = AuthSession::initializing();
        assert_eq!(
            evaluate_route(&session, RouteAccess::Authenticated, "/"),
            GuardDecision::Wait
        );
        assert_eq!(
            evaluate_route(&session, RouteAccess::AdminOnly, "/admin"),
            GuardDecision::Wait
        );
    }

    #[test]
    fn anonymous_session_redirects_to_login_with_return_path() {
        let session = AuthSession::anonymous();
        assert_eq!(
            evaluate_route(&session, RouteAccess::Authenticated, "/admin"),
            GuardDecision::Redirect("/login?redirect=%2Fadmin".to_string())
        );
    }

    #[test]
    fn admin_role_matches_case_insensitively() {
        let session = AuthSession::authenticated(user_with_role("Admin"));
        assert_eq!(
            evaluate_route(&session, RouteAccess::AdminOnly, "/admin"),
            GuardDecision::Render
        );
    }

    #[test]
    fn under_privileged_user_goes_home_silently() {
        let session = AuthSession::authenticated(user_with_role("member"));
        assert_eq!(
            evaluate_route(&session, RouteAccess::AdminOnly, "/admin"),
            GuardDecision::Redirect(HOME_PATH.to_string())
        );
    }

    #[test]
    fn signed_in_user_reaches_plain_protected_pages() {
        let session = AuthSession::authenticated(user_with_role("member"));
        assert_eq!(
            evaluate_route(&session, RouteAccess::Authenticated, "/import/psx"),
            GuardDecision::Render
        );
    }

    // Initializing -> anonymous produces one decision change (Wait ->
    // Redirect); a repeated evaluation of the same session compares equal,
    // which is what keeps the hosting effect from navigating twice.
    #[test]
    fn repeated_evaluation_is_stable() {
        let session = AuthSession::anonymous();
        let first = evaluate_route(&session, RouteAccess::Authenticated, "/admin");
        let second = evaluate_route(&session, RouteAccess::Authenticated, "/admin");
        assert_eq!(first, second);

        let admin = AuthSession::authenticated(user_with_role("ADMIN"));
        assert_eq!(
            evaluate_route(&admin, RouteAccess::AdminOnly, "/admin"),
            GuardDecision::Render
        );
    }
}
