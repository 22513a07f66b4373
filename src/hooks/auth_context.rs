// ============================================================================
// AUTH CONTEXT - Share the session state across components
// ============================================================================
// Yew Context API; the provider wraps the app once, guards and screens read
// the handle through use_auth_context().
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// The injected auth handle. Only valid under an [`AuthContextProvider`].
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("AuthContextProvider missing from the component tree")
}
