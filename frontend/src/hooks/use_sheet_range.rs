use shared::{ApiError, CellRange, LoadGeneration, LoadTicket, RangeResponse, RawTable, SheetId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetRangeState {
    pub values: RawTable,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// Settled state for a finished load, or `None` when the load was overtaken
/// by a newer one or by unmount.
pub fn on_range_loaded(
    result: Result<RangeResponse, ApiError>,
    ticket: &LoadTicket,
) -> Option<SheetRangeState> {
    if !ticket.is_current() {
        return None;
    }
    Some(match result {
        Ok(response) => SheetRangeState {
            values: response.values,
            loading: false,
            error: None,
        },
        Err(error) => SheetRangeState {
            values: RawTable::default(),
            loading: false,
            error: Some(error),
        },
    })
}

/// Fetch `range` of `sheet`, refetching whenever either changes. Responses
/// that arrive after the sheet changed or the view unmounted are dropped.
#[hook]
pub fn use_sheet_range(api_client: &ApiClient, sheet: &SheetId, range: &CellRange) -> SheetRangeState {
    let state = use_state(|| SheetRangeState {
        loading: true,
        ..Default::default()
    });
    let generation = use_memo((), |_| LoadGeneration::new());

    {
        let state = state.clone();
        let api_client = api_client.clone();

        use_effect_with((sheet.clone(), range.clone()), move |(sheet, range)| {
            let ticket = generation.begin();
            state.set(SheetRangeState {
                loading: true,
                ..Default::default()
            });

            let sheet = sheet.clone();
            let range = range.clone();
            spawn_local(async move {
                let result = api_client.fetch_range(&sheet, &range).await;
                let Some(settled) = on_range_loaded(result, &ticket) else {
                    return;
                };

                if let Some(e) = &settled.error {
                    Logger::error_with_component(
                        "use_sheet_range",
                        &format!("Failed to load {} of sheet {}: {}", range, sheet, e),
                    );
                }
                state.set(settled);
            });

            move || generation.cancel()
        });
    }

    (*state).clone()
}
