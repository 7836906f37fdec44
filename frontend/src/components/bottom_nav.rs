use shared::{Route, SheetId};
use yew::prelude::*;

use super::nav_link::NavLink;

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub current: Route,
    pub default_sheet: SheetId,
    pub navigate: Callback<Route>,
}

/// Fixed footer linking the three sheet views. Links keep the sheet the
/// current view is on.
#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    let sheet = props.current.nav_sheet(&props.default_sheet);
    let sheet_in_path = props
        .current
        .sheet_segment()
        .and_then(|s| SheetId::parse(s).ok());

    let daily_sales = match &sheet_in_path {
        Some(sheet) => Route::daily_sales(sheet),
        None => Route::DailySales(None),
    };

    let links = [
        (Route::eod_report(&sheet), "EOD Report"),
        (daily_sales, "Daily Sales"),
        (Route::whatsapp(&sheet), "WhatsApp"),
    ];

    html! {
        <nav class="bottom-nav">
            { for links.into_iter().map(|(route, label)| {
                let class = if same_view(&route, &props.current) {
                    classes!("nav-item", "active")
                } else {
                    classes!("nav-item")
                };
                html! {
                    <NavLink to={route} navigate={props.navigate.clone()} {class}>
                        { label }
                    </NavLink>
                }
            }) }
        </nav>
    }
}

fn same_view(a: &Route, b: &Route) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
