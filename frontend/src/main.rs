use chrono::Local;
use gloo::events::EventListener;
use shared::{sheet::default_sheet, Route, SheetId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::bottom_nav::BottomNav;
use components::daily_sales::DailySales;
use components::eod_report::EodReport;
use components::home::Home;
use components::not_found::NotFound;
use components::toaster::Toaster;
use components::whatsapp_export::WhatsappExport;
use hooks::use_notifications::use_notifications;
use services::api::ApiClient;
use services::logging::Logger;
use services::router::{current_route, push_route};

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let route = use_state(current_route);
    // None until the server's configuration has been read
    let configured_sheet = use_state(|| Option::<SheetId>::None);
    let notifications = use_notifications();

    // Load client configuration once
    {
        let api_client = api_client.clone();
        let configured_sheet = configured_sheet.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_config().await {
                    Ok(config) => {
                        configured_sheet.set(Some(default_sheet(Some(&config.default_sheet))));
                    }
                    Err(e) => {
                        Logger::warn_with_component(
                            "App",
                            &format!("Failed to load config, using built-in default sheet: {}", e),
                        );
                        configured_sheet.set(Some(default_sheet(None)));
                    }
                }
            });
        });
    }

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| route.set(current_route()))
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            push_route(&next);
            route.set(next);
        })
    };

    let today = Local::now().date_naive();
    let fallback = default_sheet(None);
    let configured = (*configured_sheet).clone();
    let api_client = (*api_client).clone();
    let notifier = notifications.notifier.clone();

    // The report and export views wait for the configured default when the
    // path names no usable sheet
    let needs_default = matches!(&*route, Route::EodReport(_) | Route::Whatsapp(_))
        && route
            .sheet_segment()
            .and_then(|s| SheetId::parse(s).ok())
            .is_none();

    let page = if needs_default && configured.is_none() {
        html! { <div class="page"><p class="status">{"Loading..."}</p></div> }
    } else {
        let resolved = route.resolve_sheet(today, configured.as_ref().unwrap_or(&fallback));
        match (&*route, resolved) {
            (Route::Home, _) => html! { <Home navigate={navigate.clone()} /> },
            (Route::DailySales(_), Some(sheet)) => html! {
                <DailySales
                    api_client={api_client.clone()}
                    {sheet}
                    navigate={navigate.clone()}
                    notifier={notifier.clone()}
                />
            },
            (Route::EodReport(_), Some(sheet)) => html! {
                <EodReport api_client={api_client.clone()} {sheet} navigate={navigate.clone()} />
            },
            (Route::Whatsapp(_), Some(sheet)) => html! {
                <WhatsappExport
                    api_client={api_client.clone()}
                    {sheet}
                    navigate={navigate.clone()}
                    notifier={notifier.clone()}
                />
            },
            _ => html! { <NotFound navigate={navigate.clone()} /> },
        }
    };

    html! {
        <div class="app">
            <main class="content">
                { page }
            </main>
            if !matches!(&*route, Route::Home | Route::NotFound) {
                <BottomNav
                    current={(*route).clone()}
                    default_sheet={configured.unwrap_or(fallback)}
                    {navigate}
                />
            }
            <Toaster notices={notifications.notices} notifier={notifications.notifier} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
