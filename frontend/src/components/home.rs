use chrono::{Local, NaiveDate};
use shared::{Route, SheetId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub navigate: Callback<Route>,
}

/// Landing page: pick a day and open its entry grid.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let today = Local::now().date_naive();
    let selected = use_state(|| today);

    let on_date_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                selected.set(date);
            }
        })
    };

    let open_selected = {
        let selected = selected.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            navigate.emit(Route::daily_sales(&SheetId::from_date(*selected)));
        })
    };

    let open_today = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            navigate.emit(Route::daily_sales(&SheetId::from_date(today)));
        })
    };

    let sheet = SheetId::from_date(*selected);

    html! {
        <div class="page home">
            <h1>{"Daily Sales"}</h1>
            <div class="card">
                <label for="home-date">{"Select date"}</label>
                <input
                    id="home-date"
                    type="date"
                    value={sheet.input_value()}
                    onchange={on_date_change}
                />
                <p class="hint">{format!("Sheet {} ({})", sheet, sheet.display_date())}</p>
                <div class="button-row">
                    <button class="primary" onclick={open_selected}>{"Open Daily Sales"}</button>
                    <button onclick={open_today}>{"Today"}</button>
                </div>
            </div>
        </div>
    }
}
