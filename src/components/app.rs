// ============================================================================
// APP - Shell: auth context + path-dispatched screens
// ============================================================================

use yew::prelude::*;

use crate::components::route_guard::RouteAccess;
use crate::components::{AdminPanel, Dashboard, LoginScreen, PsxImport, RouteGuard};
use crate::hooks::AuthContextProvider;
use crate::utils::constants::{HOME_PATH, LOGIN_PATH};
use crate::utils::navigation::current_path;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Route {
    Dashboard,
    Login,
    Admin,
    PsxImport,
    NotFound,
}

impl Route {
    fn from_path(path: &str) -> Self {
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            HOME_PATH => Route::Dashboard,
            LOGIN_PATH => Route::Login,
            "/admin" => Route::Admin,
            "/import/psx" => Route::PsxImport,
            _ => Route::NotFound,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <RouterOutlet />
        </AuthContextProvider>
    }
}

#[function_component(RouterOutlet)]
fn router_outlet() -> Html {
    match Route::from_path(&current_path()) {
        Route::Login => html! { <LoginScreen /> },
        Route::Dashboard => html! {
            <RouteGuard access={RouteAccess::Authenticated}>
                <Dashboard />
            </RouteGuard>
        },
        Route::Admin => html! {
            <RouteGuard access={RouteAccess::AdminOnly}>
                <AdminPanel />
            </RouteGuard>
        },
        Route::PsxImport => html! {
            <RouteGuard access={RouteAccess::Authenticated}>
                <PsxImport />
            </RouteGuard>
        },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"Page not found"}</p>
                <a href={HOME_PATH}>{"Back to dashboard"}</a>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/admin"), Route::Admin);
        assert_eq!(Route::from_path("/import/psx"), Route::PsxImport);
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        assert_eq!(Route::from_path("/admin/"), Route::Admin);
        assert_eq!(Route::from_path("/import/psx/"), Route::PsxImport);
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
    }
}
