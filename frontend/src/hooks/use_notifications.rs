use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Info => "toast toast-info",
            NoticeKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    next_id: u32,
    pub items: Vec<Notice>,
}

const MAX_VISIBLE: usize = 4;

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(kind, message) => {
                next.items.push(Notice {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.items.len() > MAX_VISIBLE {
                    let excess = next.items.len() - MAX_VISIBLE;
                    next.items.drain(..excess);
                }
            }
            NoticeAction::Dismiss(id) => next.items.retain(|notice| notice.id != id),
        }
        next.into()
    }
}

/// Handle for raising toasts from any view.
#[derive(Clone, PartialEq)]
pub struct Notifier(UseReducerDispatcher<Notices>);

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.0.dispatch(NoticeAction::Push(NoticeKind::Success, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.0.dispatch(NoticeAction::Push(NoticeKind::Info, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.0.dispatch(NoticeAction::Push(NoticeKind::Error, message.into()));
    }

    pub fn dismiss(&self, id: u32) {
        self.0.dispatch(NoticeAction::Dismiss(id));
    }
}

pub struct UseNotificationsResult {
    pub notices: Vec<Notice>,
    pub notifier: Notifier,
}

#[hook]
pub fn use_notifications() -> UseNotificationsResult {
    let notices = use_reducer(Notices::default);

    UseNotificationsResult {
        notices: notices.items.clone(),
        notifier: Notifier(notices.dispatcher()),
    }
}
