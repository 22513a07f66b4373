// Admin-only screen; mounted behind RouteGuard with RouteAccess::AdminOnly.

use yew::prelude::*;

use crate::models::UserProfile;
use crate::services::auth_service;
use crate::utils::errors::{parse_error, ApiError};

#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let users = use_state(Vec::<UserProfile>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let users = users.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::load_registered_users().await {
                    Ok(loaded) => users.set(loaded),
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => {
                        log::error!("❌ Could not load users: {}", e);
                        error.set(Some(parse_error(&e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="admin-panel">
            <header class="admin-header">
                <h1>{"User administration"}</h1>
                <a href="/">{"Back to dashboard"}</a>
            </header>

            if let Some(message) = (*error).clone() {
                <div class="error-banner">{ message }</div>
            }

            if *loading {
                <p>{"Loading users..."}</p>
            } else {
                <table class="admin-user-table">
                    <thead>
                        <tr>
                            <th>{"Email"}</th>
                            <th>{"Name"}</th>
                            <th>{"Role"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for users.iter().map(|user| html! {
                            <tr key={user.id}>
                                <td>{ &user.email }</td>
                                <td>{ user.full_name.clone().unwrap_or_default() }</td>
                                <td>{ &user.role }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
