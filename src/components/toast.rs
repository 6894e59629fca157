use std::rc::Rc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.toasts.push(Toast { id: next.next_id, kind, message });
                next.next_id = next.next_id.wrapping_add(1);
                if next.toasts.len() > config::MAX_VISIBLE_TOASTS {
                    let overflow = next.toasts.len() - config::MAX_VISIBLE_TOASTS;
                    next.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle handed out by [`use_toaster`].
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    queue: UseReducerDispatcher<ToastQueue>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toaster() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toaster called outside <Toaster>")
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides toasts to its children and renders them at the top center.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle { queue: queue.dispatcher() };

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <div class="toaster" aria-live="polite">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    z-index: 1000;
                    pointer-events: none;
                }
                .toast {
                    pointer-events: auto;
                    min-width: 280px;
                    max-width: 90vw;
                    padding: 0.85rem 1.1rem;
                    border-radius: 10px;
                    background: #ffffff;
                    box-shadow: 0 10px 30px rgba(17, 24, 39, 0.15);
                    border: 1px solid #e5e7eb;
                    font-size: 0.95rem;
                    cursor: pointer;
                    animation: toastIn 0.25s ease-out;
                }
                .toast--success { border-left: 4px solid #16a34a; color: #14532d; }
                .toast--error { border-left: 4px solid #dc2626; color: #7f1d1d; }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(-8px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

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

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    html! {
        <div {class} role="status" {onclick}>
            { &props.toast.message }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(ToastKind::Success, message.to_string()))
    }

    #[test]
    fn pushed_toasts_get_distinct_ids() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        assert_eq!(queue.toasts.len(), 2);
        assert_ne!(queue.toasts[0].id, queue.toasts[1].id);
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_cap() {
        let mut queue = Rc::new(ToastQueue::default());
        for i in 0..config::MAX_VISIBLE_TOASTS + 2 {
            queue = push(queue, &format!("toast {}", i));
        }
        assert_eq!(queue.toasts.len(), config::MAX_VISIBLE_TOASTS);
        assert_eq!(queue.toasts[0].message, "toast 2");
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let first = queue.toasts[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(first));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "b");

        let unchanged = queue.clone().reduce(ToastAction::Dismiss(first));
        assert!(Rc::ptr_eq(&queue, &unchanged));
    }
}
