use shared::Route;
use yew::prelude::*;

use super::nav_link::NavLink;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub navigate: Callback<Route>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="page not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <NavLink to={Route::Home} navigate={props.navigate.clone()}>
                {"Return to Home"}
            </NavLink>
        </div>
    }
}
