use shared::{to_text, CellRange, Route, SheetId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::nav_link::{HomeButton, NavLink};
use crate::hooks::use_notifications::Notifier;
use crate::hooks::use_sheet_range::use_sheet_range;
use crate::services::api::ApiClient;
use crate::services::clipboard::copy_text;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct WhatsappExportProps {
    pub api_client: ApiClient,
    pub sheet: SheetId,
    pub navigate: Callback<Route>,
    pub notifier: Notifier,
}

/// The sheet's summary block flattened to plain text, ready to paste into a
/// chat message.
#[function_component(WhatsappExport)]
pub fn whatsapp_export(props: &WhatsappExportProps) -> Html {
    let range = use_memo((), |_| CellRange::export());
    let state = use_sheet_range(&props.api_client, &props.sheet, &range);
    let message = use_memo(state.values.clone(), |values| to_text(values));

    let on_copy = {
        let message = message.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |_: MouseEvent| {
            let message = message.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                match copy_text(&message).await {
                    Ok(()) => notifier.success("Copied to clipboard."),
                    Err(e) => {
                        Logger::warn_with_component("whatsapp_export", &format!("Copy failed: {}", e));
                        notifier.error("Could not copy to clipboard.");
                    }
                }
            });
        })
    };

    let content = if state.loading {
        html! { <p class="status">{"Loading..."}</p> }
    } else if let Some(error) = &state.error {
        html! { <p class="status error">{ format!("Error: {}", error.load_notice()) }</p> }
    } else if message.is_empty() {
        html! { <pre class="export-text placeholder">{"No data"}</pre> }
    } else {
        html! { <pre class="export-text">{ message.as_str() }</pre> }
    };

    let can_copy = !state.loading && state.error.is_none() && !message.is_empty();

    html! {
        <div class="page whatsapp-export">
            <div class="page-header">
                <HomeButton navigate={props.navigate.clone()} />
                <h1>{"WhatsApp Report"}</h1>
            </div>
            <div class="toolbar">
                <span class="sheet-label">{ format!("Sheet: {} • Range: {}", props.sheet, range) }</span>
                <NavLink to={Route::eod_report(&props.sheet)} navigate={props.navigate.clone()} class="button">
                    {"EOD Report"}
                </NavLink>
                <button class="primary" onclick={on_copy} disabled={!can_copy}>{"Copy"}</button>
            </div>
            { content }
        </div>
    }
}
