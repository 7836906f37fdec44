use shared::report::{self, ReportTable};
use shared::{CellRange, Route, SheetId};
use yew::prelude::*;

use super::nav_link::{HomeButton, NavLink};
use crate::hooks::use_sheet_range::use_sheet_range;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct EodReportProps {
    pub api_client: ApiClient,
    pub sheet: SheetId,
    pub navigate: Callback<Route>,
}

#[function_component(EodReport)]
pub fn eod_report(props: &EodReportProps) -> Html {
    let range = use_memo((), |_| CellRange::report());
    let state = use_sheet_range(&props.api_client, &props.sheet, &range);
    let table = use_memo(state.values.clone(), |values| report::render(values));

    let content = if state.loading {
        html! { <p class="status">{"Loading..."}</p> }
    } else if let Some(error) = &state.error {
        html! { <p class="status error">{ format!("Error: {}", error.load_notice()) }</p> }
    } else if table.is_empty() {
        html! { <p class="status">{"No data"}</p> }
    } else {
        render_table(&table)
    };

    html! {
        <div class="page eod-report">
            <div class="page-header">
                <HomeButton navigate={props.navigate.clone()} />
                <h1>{"EOD Report"}</h1>
            </div>
            <div class="toolbar">
                <span class="sheet-label">{ format!("Sheet: {} • Range: {}", props.sheet, range) }</span>
                <NavLink to={Route::daily_sales(&props.sheet)} navigate={props.navigate.clone()} class="button">
                    {"Edit Sales"}
                </NavLink>
            </div>
            { content }
        </div>
    }
}

fn render_table(table: &ReportTable) -> Html {
    html! {
        <table class="report-table">
            <thead>
                <tr>
                    { for table.headers.iter().map(|header| html! { <th>{ header }</th> }) }
                </tr>
            </thead>
            <tbody>
                { for table.rows.iter().map(|row| html! {
                    <tr class={row.style.css_class()}>
                        { for row.cells.iter().map(|cell| html! { <td>{ cell }</td> }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
