use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_notifications::{Notice, Notifier};

const NOTICE_TTL_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub notices: Vec<Notice>,
    pub notifier: Notifier,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" role="status" aria-live="polite">
            { for props.notices.iter().map(|notice| html! {
                <Toast key={notice.id} notice={notice.clone()} notifier={props.notifier.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notice: Notice,
    notifier: Notifier,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    // Auto-dismiss; dropping the timeout on unmount cancels it
    {
        let notifier = props.notifier.clone();
        use_effect_with(props.notice.id, move |&id| {
            let timeout = Timeout::new(NOTICE_TTL_MS, move || notifier.dismiss(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let notifier = props.notifier.clone();
        let id = props.notice.id;
        Callback::from(move |_: MouseEvent| notifier.dismiss(id))
    };

    html! {
        <div class={props.notice.kind.css_class()}>
            <span class="toast-message">{ &props.notice.message }</span>
            <button class="toast-close" onclick={on_close} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
