use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Message,
}

/// What a component wants to tell the user. Becomes a [`Toast`] once queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn message(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Message,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u64),
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn items(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn apply(&self, action: ToastAction) -> Self {
        let mut next = self.clone();
        match action {
            ToastAction::Push(notice) => {
                let id = next.next_id;
                next.next_id += 1;
                debug!("Showing toast {}: {}", id, notice.title);
                next.items.push_back(Toast { id, notice });
                while next.items.len() > config::MAX_VISIBLE_TOASTS {
                    next.items.pop_front();
                }
            }
            ToastAction::Dismiss(id) => {
                next.items.retain(|toast| toast.id != id);
            }
        }
        next
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Fire-and-forget handle for raising toasts from any component.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    push: Callback<Notice>,
}

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        self.push.emit(notice);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self {
            push: Callback::from(|notice: Notice| {
                warn!("No toast provider mounted, dropping '{}'", notice.title);
            }),
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);

    let notifier = {
        let dispatcher = toasts.dispatcher();
        use_memo(
            move |_| Notifier {
                push: Callback::from(move |notice: Notice| {
                    dispatcher.dispatch(ToastAction::Push(notice));
                }),
            },
            (),
        )
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| {
            debug!("Dismissing toast {}", id);
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <ol class="toaster" role="status" aria-live="polite">
                { for toasts.items().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </ol>
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    width: min(360px, calc(100vw - 3rem));
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 0.9rem 1rem;
                    border-radius: 14px;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: var(--shadow-elev);
                    animation: toastIn 0.25s ease-out;
                }
                .toast--success { border-left: 4px solid var(--primary); }
                .toast__body { flex: 1; min-width: 0; }
                .toast__title { font-size: 0.9rem; font-weight: 600; color: var(--foreground); }
                .toast__description { margin-top: 0.2rem; font-size: 0.8rem; color: var(--muted-foreground); }
                .toast__close {
                    border: none;
                    background: transparent;
                    color: var(--muted-foreground);
                    cursor: pointer;
                    font-size: 1rem;
                    line-height: 1;
                }
                @keyframes toastIn {
                    from { transform: translateY(12px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    // The timer lives as long as the toast is on screen.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let notice = &props.toast.notice;
    let kind_class = match notice.kind {
        ToastKind::Success => "toast--success",
        ToastKind::Message => "toast--message",
    };

    html! {
        <li class={classes!("toast", kind_class)}>
            <div class="toast__body">
                <div class="toast__title">{ notice.title.clone() }</div>
                if let Some(description) = &notice.description {
                    <div class="toast__description">{ description.clone() }</div>
                }
            </div>
            <button type="button" class="toast__close" aria-label="Dismiss notification" onclick={close}>
                {"×"}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(toasts: &Toasts, title: &str) -> Toasts {
        toasts.apply(ToastAction::Push(Notice::message(title)))
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let toasts = push(&push(&Toasts::default(), "first"), "second");
        let ids: Vec<u64> = toasts.items().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let toasts = push(&push(&Toasts::default(), "first"), "second");
        let toasts = toasts.apply(ToastAction::Dismiss(0));
        let titles: Vec<&str> = toasts.items().map(|t| t.notice.title.as_str()).collect();
        assert_eq!(titles, vec!["second"]);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let toasts = push(&Toasts::default(), "only");
        assert_eq!(toasts.apply(ToastAction::Dismiss(42)), toasts);
    }

    #[test]
    fn oldest_toast_is_dropped_past_capacity() {
        let mut toasts = Toasts::default();
        for i in 0..=config::MAX_VISIBLE_TOASTS {
            toasts = push(&toasts, &format!("toast {}", i));
        }
        assert_eq!(toasts.items().count(), config::MAX_VISIBLE_TOASTS);
        assert_eq!(toasts.items().next().map(|t| t.id), Some(1));
    }

    #[test]
    fn notice_builder_keeps_kind_and_description() {
        let notice = Notice::success("Saved").with_description("details");
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(notice.description.as_deref(), Some("details"));
    }
}
