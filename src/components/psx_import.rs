// PSX statement import: paste a CDC/broker custody statement, pick the
// destination portfolio, and let the backend merge the positions.

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{Portfolio, PsxImportRequest, PsxImportResponse};
use crate::services::{portfolio_service, psx_service};
use crate::utils::errors::{parse_error, ApiError};

#[function_component(PsxImport)]
pub fn psx_import() -> Html {
    let portfolios = use_state(Vec::<Portfolio>::new);
    let symbol_count = use_state(|| None::<usize>);
    let result = use_state(|| None::<PsxImportResponse>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let portfolio_ref = use_node_ref();
    let account_ref = use_node_ref();
    let statement_ref = use_node_ref();

    {
        let portfolios = portfolios.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portfolio_service::load_portfolios().await {
                    Ok(loaded) => portfolios.set(loaded),
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => error.set(Some(parse_error(&e))),
                }
            });
            || ()
        });
    }

    // Symbol directory is public reference data; failures here only cost
    // us the count badge.
    {
        let symbol_count = symbol_count.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match psx_service::load_psx_symbols().await {
                    Ok(symbols) => symbol_count.set(Some(symbols.len())),
                    Err(e) => log::warn!("⚠️ PSX symbol directory unavailable: {}", e),
                }
            });
            || ()
        });
    }

    let on_submit = {
        let portfolio_ref = portfolio_ref.clone();
        let account_ref = account_ref.clone();
        let statement_ref = statement_ref.clone();
        let result = result.clone();
        let error = error.clone();
        let busy = busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(portfolio_select), Some(account_input), Some(statement_area)) = (
                portfolio_ref.cast::<HtmlSelectElement>(),
                account_ref.cast::<HtmlInputElement>(),
                statement_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };

            let Ok(portfolio_id) = portfolio_select.value().parse::<i64>() else {
                error.set(Some("Pick a destination portfolio first.".to_string()));
                return;
            };
            let account_number = account_input.value();
            let statement_text = statement_area.value();

            if account_number.is_empty() || statement_text.trim().is_empty() {
                error.set(Some(
                    "Both the account number and the statement text are required.".to_string(),
                ));
                return;
            }

            busy.set(true);
            error.set(None);
            let request = PsxImportRequest {
                portfolio_id,
                account_number,
                statement_text,
            };

            let result = result.clone();
            let error = error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match psx_service::import_psx_holdings(&request).await {
                    Ok(response) => {
                        result.set(Some(response));
                        // The summary banner clears itself after a while
                        let result = result.clone();
                        Timeout::new(6_000, move || result.set(None)).forget();
                    }
                    Err(ApiError::AuthenticationRequired) => {}
                    Err(e) => {
                        log::error!("❌ PSX import failed: {}", e);
                        error.set(Some(parse_error(&e)));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="psx-import">
            <header class="psx-import-header">
                <h1>{"Import PSX holdings"}</h1>
                <a href="/">{"Back to dashboard"}</a>
            </header>

            if let Some(count) = *symbol_count {
                <p class="psx-symbol-count">{ format!("{} PSX symbols recognized", count) }</p>
            }

            if let Some(message) = (*error).clone() {
                <div class="error-banner">
                    { for message.lines().map(|line| html! { <p>{ line.to_string() }</p> }) }
                </div>
            }

            if let Some(summary) = (*result).clone() {
                <div class="import-summary">
                    <p>{ format!("Imported {} positions, skipped {}.", summary.imported, summary.skipped) }</p>
                    <ul>
                        { for summary.holdings.iter().map(|holding| html! {
                            <li key={holding.symbol.clone()}>
                                { format!("{} × {:.0} @ {:.2}", holding.symbol, holding.quantity, holding.avg_cost) }
                            </li>
                        }) }
                    </ul>
                </div>
            }

            <form class="psx-import-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="portfolio">{"Portfolio"}</label>
                    <select id="portfolio" ref={portfolio_ref}>
                        { for portfolios.iter().map(|portfolio| html! {
                            <option value={portfolio.id.to_string()} key={portfolio.id}>
                                { &portfolio.name }
                            </option>
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="account">{"CDC account number"}</label>
                    <input
                        type="text"
                        id="account"
                        placeholder="e.g. 01234-56789"
                        ref={account_ref}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="statement">{"Statement text"}</label>
                    <textarea
                        id="statement"
                        rows="12"
                        placeholder="Paste your custody statement here"
                        ref={statement_ref}
                        required=true
                    />
                </div>

                <button type="submit" class="import-button" disabled={*busy}>
                    { if *busy { "Importing..." } else { "Import" } }
                </button>
            </form>
        </div>
    }
}
