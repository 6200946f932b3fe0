use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-emerald-600 border-emerald-700",
            ToastType::Error => "bg-red-600 border-red-700",
            ToastType::Info => "bg-sky-600 border-sky-700",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    /// Milliseconds until auto-dismiss
    pub duration: u32,
}

impl Toast {
    fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: 5_000,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::new);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;

            toasts.set({
                let mut current = (*toasts).clone();
                current.push(toast);
                current
            });

            let toasts = toasts.clone();
            let timeout = Timeout::new(duration, move || {
                toasts.set({
                    let mut current = (*toasts).clone();
                    current.retain(|t| t.id != toast_id);
                    current
                });
            });
            timeout.forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| {
            toasts.set({
                let mut current = (*toasts).clone();
                current.retain(|t| t.id != id);
                current
            });
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastStack />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                let on_close = {
                    let remove = toast_context.remove_toast.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| remove.emit(id))
                };
                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!(
                            "flex", "items-center", "gap-3", "p-4", "rounded-lg", "shadow-lg",
                            "border-l-4", "text-white", "min-w-80", "max-w-md",
                            toast.toast_type.classes()
                        )}
                    >
                        <span class="text-lg font-bold">{toast.toast_type.icon()}</span>
                        <p class="flex-1 text-sm font-medium">{&toast.message}</p>
                        <button
                            onclick={on_close}
                            class="text-white hover:text-gray-200 focus:outline-none"
                        >
                            <span class="text-lg">{"×"}</span>
                        </button>
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
