use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::services::auth_service;
use crate::utils::errors::parse_error;
use crate::utils::navigation::{navigate_to, post_login_target};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Already signed in? Straight back to where the user was headed.
    {
        let session = auth.session.clone();
        use_effect_with(session, |session| {
            if session.is_initialized && session.is_authenticated {
                navigate_to(&post_login_target());
            }
            || ()
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let busy = busy.clone();
        let apply_user = auth.apply_user.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please enter your email and password.".to_string()));
                return;
            }

            busy.set(true);
            let error = error.clone();
            let busy = busy.clone();
            let apply_user = apply_user.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&email, &password).await {
                    Ok(user) => {
                        apply_user.emit(user);
                        navigate_to(&post_login_target());
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(Some(parse_error(&e)));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"📊"}</div>
                    </div>
                    <h1>{"Folio"}</h1>
                    <p>{"Track your portfolio across markets"}</p>
                </div>

                // Validation payloads arrive one line per field
                if let Some(message) = (*error).clone() {
                    <div class="login-error">
                        { for message.lines().map(|line| html! { <p>{ line.to_string() }</p> }) }
                    </div>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="login-button" disabled={*busy}>
                        { if *busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
