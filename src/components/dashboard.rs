use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::{Holding, Portfolio, UpdateHoldingRequest};
use crate::services::portfolio_service;
use crate::utils::errors::{parse_error, ApiError};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth_context();
    let portfolios = use_state(Vec::<Portfolio>::new);
    let selected = use_state(|| None::<i64>);
    let holdings = use_state(Vec::<Holding>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    let name_ref = use_node_ref();
    let currency_ref = use_node_ref();

    {
        let portfolios = portfolios.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portfolio_service::load_portfolios().await {
                    Ok(loaded) => portfolios.set(loaded),
                    // A 401 already kicked off the login redirect; a banner
                    // on a page we are leaving is just noise
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => {
                        log::error!("❌ Could not load portfolios: {}", e);
                        error.set(Some(parse_error(&e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        let holdings = holdings.clone();
        let error = error.clone();
        Callback::from(move |portfolio_id: i64| {
            selected.set(Some(portfolio_id));
            let holdings = holdings.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match portfolio_service::load_holdings(portfolio_id).await {
                    Ok(loaded) => holdings.set(loaded),
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => error.set(Some(parse_error(&e))),
                }
            });
        })
    };

    let on_create = {
        let portfolios = portfolios.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();
        let currency_ref = currency_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(currency_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                currency_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            let currency = currency_input.value();
            if name.is_empty() || currency.is_empty() {
                error.set(Some("A name and a base currency are required.".to_string()));
                return;
            }

            let portfolios = portfolios.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match portfolio_service::create_portfolio(&name, &currency).await {
                    Ok(created) => {
                        let mut list = (*portfolios).clone();
                        list.push(created);
                        portfolios.set(list);
                        name_input.set_value("");
                    }
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => error.set(Some(parse_error(&e))),
                }
            });
        })
    };

    let on_delete = {
        let portfolios = portfolios.clone();
        let selected = selected.clone();
        let holdings = holdings.clone();
        let error = error.clone();
        Callback::from(move |portfolio_id: i64| {
            let confirmed = window()
                .and_then(|win| win.confirm_with_message("Delete this portfolio?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let portfolios = portfolios.clone();
            let selected = selected.clone();
            let holdings = holdings.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match portfolio_service::delete_portfolio(portfolio_id).await {
                    Ok(()) => {
                        let list: Vec<Portfolio> = portfolios
                            .iter()
                            .filter(|p| p.id != portfolio_id)
                            .cloned()
                            .collect();
                        portfolios.set(list);
                        if *selected == Some(portfolio_id) {
                            selected.set(None);
                            holdings.set(Vec::new());
                        }
                    }
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => error.set(Some(parse_error(&e))),
                }
            });
        })
    };

    let on_edit_quantity = {
        let selected = selected.clone();
        let holdings = holdings.clone();
        let error = error.clone();
        Callback::from(move |holding_id: i64| {
            let Some(portfolio_id) = *selected else {
                return;
            };
            let input = window()
                .and_then(|win| win.prompt_with_message("New quantity:").ok())
                .flatten();
            let Some(raw) = input else {
                return;
            };
            let Ok(quantity) = raw.trim().parse::<f64>() else {
                error.set(Some("Quantity must be a number.".to_string()));
                return;
            };

            let changes = UpdateHoldingRequest {
                quantity: Some(quantity),
                avg_cost: None,
            };
            let holdings = holdings.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match portfolio_service::update_holding(portfolio_id, holding_id, &changes).await {
                    Ok(updated) => {
                        let list: Vec<Holding> = holdings
                            .iter()
                            .map(|h| if h.id == updated.id { updated.clone() } else { h.clone() })
                            .collect();
                        holdings.set(list);
                    }
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => error.set(Some(parse_error(&e))),
                }
            });
        })
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let is_admin = auth
        .session
        .user
        .as_ref()
        .map(|user| user.is_admin())
        .unwrap_or(false);
    let greeting = auth
        .session
        .user
        .as_ref()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{"Folio"}</h1>
                <nav>
                    <a href="/import/psx">{"Import PSX holdings"}</a>
                    if is_admin {
                        <a href="/admin">{"Admin"}</a>
                    }
                </nav>
                <div class="dashboard-user">
                    <span>{ greeting }</span>
                    <button class="logout-button" onclick={on_logout}>{"Sign out"}</button>
                </div>
            </header>

            if let Some(message) = (*error).clone() {
                <div class="error-banner">{ message }</div>
            }

            <form class="portfolio-create" onsubmit={on_create}>
                <input type="text" placeholder="Portfolio name" ref={name_ref} required=true />
                <input type="text" placeholder="Base currency (e.g. PKR)" ref={currency_ref} required=true />
                <button type="submit">{"Create"}</button>
            </form>

            if *loading {
                <p class="dashboard-loading">{"Loading portfolios..."}</p>
            } else if portfolios.is_empty() {
                <div class="empty-state">
                    <p>{"No portfolios yet. Create one above or import your PSX holdings."}</p>
                </div>
            } else {
                <ul class="portfolio-list">
                    { for portfolios.iter().map(|portfolio| {
                        let id = portfolio.id;
                        let select = {
                            let on_select = on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(id))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                on_delete.emit(id);
                            })
                        };
                        let is_selected = *selected == Some(id);
                        html! {
                            <li
                                class={if is_selected { "portfolio-card selected" } else { "portfolio-card" }}
                                key={id}
                                onclick={select}
                            >
                                <h2>{ portfolio.name.clone() }</h2>
                                <span class="portfolio-currency">{ portfolio.base_currency.clone() }</span>
                                if let Some(description) = portfolio.description.clone() {
                                    <p>{ description }</p>
                                }
                                <button class="delete-button" onclick={delete}>{"Delete"}</button>
                            </li>
                        }
                    }) }
                </ul>
            }

            if selected.is_some() {
                <section class="holdings">
                    <h2>{"Holdings"}</h2>
                    if holdings.is_empty() {
                        <p>{"No holdings in this portfolio."}</p>
                    } else {
                        <table class="holdings-table">
                            <thead>
                                <tr>
                                    <th>{"Symbol"}</th>
                                    <th>{"Quantity"}</th>
                                    <th>{"Avg cost"}</th>
                                    <th>{"Market value"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for holdings.iter().map(|holding| {
                                    let holding_id = holding.id;
                                    let edit = {
                                        let on_edit_quantity = on_edit_quantity.clone();
                                        Callback::from(move |_: MouseEvent| on_edit_quantity.emit(holding_id))
                                    };
                                    html! {
                                        <tr key={holding_id}>
                                            <td>{ holding.symbol.clone() }</td>
                                            <td>{ format!("{:.0}", holding.quantity) }</td>
                                            <td>{ format!("{:.2}", holding.avg_cost) }</td>
                                            <td>
                                                { holding.market_value
                                                    .map(|v| format!("{:.2}", v))
                                                    .unwrap_or_else(|| "—".to_string()) }
                                            </td>
                                            <td><button onclick={edit}>{"Edit qty"}</button></td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    }
                </section>
            }
        </div>
    }
}
