use shared::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Route,
    pub navigate: Callback<Route>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor that changes view in place. Modified clicks (new tab, new window)
/// are left to the browser.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
                return;
            }
            e.prevent_default();
            navigate.emit(to.clone());
        })
    };

    html! {
        <a href={props.to.path()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeButtonProps {
    pub navigate: Callback<Route>,
}

#[function_component(HomeButton)]
pub fn home_button(props: &HomeButtonProps) -> Html {
    html! {
        <NavLink to={Route::Home} navigate={props.navigate.clone()} class="home-button">
            {"Home"}
        </NavLink>
    }
}
