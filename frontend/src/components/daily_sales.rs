use chrono::NaiveDate;
use shared::{Route, SheetId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::entry_row::EntryRow;
use super::nav_link::{HomeButton, NavLink};
use crate::hooks::use_entry_grid::use_entry_grid;
use crate::hooks::use_notifications::Notifier;
use crate::services::api::ApiClient;

const SKELETON_ROWS: usize = 10;

#[derive(Properties, PartialEq)]
pub struct DailySalesProps {
    pub api_client: ApiClient,
    pub sheet: SheetId,
    pub navigate: Callback<Route>,
    pub notifier: Notifier,
}

/// Order entry for one day. Shows every filled row plus one blank row, with
/// the Clear/Save actions sitting right under the last filled row.
#[function_component(DailySales)]
pub fn daily_sales(props: &DailySalesProps) -> Html {
    let entry = use_entry_grid(&props.api_client, &props.sheet, &props.notifier);
    let show_ord = use_state(|| true);

    let on_date_change = {
        let navigate = props.navigate.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                navigate.emit(Route::daily_sales(&SheetId::from_date(date)));
            }
        })
    };

    let toggle_ord = {
        let show_ord = show_ord.clone();
        Callback::from(move |_: MouseEvent| show_ord.set(!*show_ord))
    };

    let on_clear = {
        let clear = entry.actions.clear.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };
    let on_save = {
        let save = entry.actions.save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };

    let column_count = if *show_ord { 5 } else { 4 };
    let action_row = html! {
        <tr class="action-row" key="actions">
            <td colspan={column_count.to_string()}>
                <div class="button-row">
                    <button onclick={on_clear} disabled={entry.saving}>{"Clear"}</button>
                    <button class="primary" onclick={on_save} disabled={entry.saving || entry.loading}>
                        { if entry.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </td>
        </tr>
    };

    let body = if entry.loading {
        (0..SKELETON_ROWS)
            .map(|i| html! {
                <tr class="skeleton-row" key={format!("skeleton-{}", i)}>
                    { for (0..column_count).map(|_| html! { <td><div class="skeleton" /></td> }) }
                </tr>
            })
            .collect::<Html>()
    } else {
        let visible = entry.grid.visible_count();
        let action_at = entry.grid.action_row_index();
        let mut rows: Vec<Html> = Vec::with_capacity(visible + 1);
        for (index, row) in entry.grid.rows().iter().take(visible).enumerate() {
            if index == action_at {
                rows.push(action_row.clone());
            }
            rows.push(html! {
                <EntryRow
                    key={index}
                    {index}
                    row={row.clone()}
                    show_ord={*show_ord}
                    on_edit={entry.actions.edit.clone()}
                />
            });
        }
        // A full grid has no blank row left to sit above
        if action_at >= visible {
            rows.push(action_row);
        }
        rows.into_iter().collect::<Html>()
    };

    html! {
        <div class="page daily-sales">
            <div class="page-header">
                <HomeButton navigate={props.navigate.clone()} />
                <h1>{"Daily Sales"}</h1>
            </div>

            <div class="toolbar">
                <label for="sheet-date">{"Date:"}</label>
                <input
                    id="sheet-date"
                    type="date"
                    value={props.sheet.input_value()}
                    onchange={on_date_change}
                />
                <span class="sheet-label">{ props.sheet.display_date() }</span>
                <NavLink to={Route::eod_report(&props.sheet)} navigate={props.navigate.clone()} class="button">
                    {"View EOD Report"}
                </NavLink>
                <NavLink to={Route::whatsapp(&props.sheet)} navigate={props.navigate.clone()} class="button">
                    {"WhatsApp"}
                </NavLink>
                <button onclick={toggle_ord}>
                    { if *show_ord { "Hide Ord #" } else { "Show Ord #" } }
                </button>
            </div>

            <table class="entry-grid">
                <thead>
                    <tr>
                        if *show_ord {
                            <th>{"Ord #"}</th>
                        }
                        <th>{"Time"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Payment"}</th>
                        <th>{"Covers"}</th>
                    </tr>
                </thead>
                <tbody>
                    { body }
                </tbody>
            </table>
        </div>
    }
}
