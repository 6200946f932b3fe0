use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
    /// Wider layout for dialogs hosting charts or tables
    #[prop_or_default]
    pub wide: bool,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_body_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let width = if props.wide { "max-w-3xl" } else { "max-w-md" };

    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class={classes!(
                    "relative", "bg-white", "rounded-lg", "shadow-xl", "p-6",
                    "w-full", "mx-4", "max-h-[90vh]", "overflow-y-auto", width
                )}
                onclick={on_body_click}
            >
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{&props.title}</h3>
                    <button
                        onclick={on_close_click}
                        class="text-gray-400 hover:text-gray-600 focus:outline-none"
                    >
                        <span class="text-xl">{"×"}</span>
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
