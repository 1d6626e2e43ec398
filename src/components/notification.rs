use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A transient user-facing notification.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Auto-dismiss; replacing the notice rearms the timer, unmount cancels it.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice
                    .as_ref()
                    .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let toast_css = r#"
        .toast {
            position: fixed;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 100;
            max-width: 90vw;
            padding: 0.9rem 1.5rem;
            border-radius: 10px;
            font-size: 0.95rem;
            backdrop-filter: blur(10px);
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
            animation: toast-in 0.25s ease-out;
        }
        @keyframes toast-in {
            from {
                opacity: 0;
                transform: translate(-50%, 10px);
            }
            to {
                opacity: 1;
                transform: translate(-50%, 0);
            }
        }
        .toast-success {
            background: rgba(34, 84, 44, 0.9);
            border: 1px solid rgba(96, 200, 120, 0.4);
            color: #c8f0d0;
        }
        .toast-info {
            background: rgba(26, 23, 19, 0.95);
            border: 1px solid rgba(212, 168, 75, 0.4);
            color: #e8d9b0;
        }
        .toast-error {
            background: rgba(96, 28, 28, 0.9);
            border: 1px solid rgba(230, 100, 100, 0.4);
            color: #f5c6c6;
        }
    "#;

    match &props.notice {
        Some(notice) => {
            let kind_class = match notice.kind {
                NoticeKind::Success => "toast-success",
                NoticeKind::Info => "toast-info",
                NoticeKind::Error => "toast-error",
            };
            html! {
                <div class={classes!("toast", kind_class)} role="status">
                    { &notice.message }
                    <style>{toast_css}</style>
                </div>
            }
        }
        None => html! {},
    }
}
