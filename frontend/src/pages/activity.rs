use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::activities::fetch_activities;
use crate::components::activity_graph::ActivityGraphPanel;
use crate::components::activity_table::ActivityTable;
use crate::components::common_modal::Modal;
use shared::UserActivity;

#[function_component(Activity)]
pub fn activity() -> Html {
    let activities = use_state(Vec::<UserActivity>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);
    let selected_user = use_state(|| Option::<String>::None);

    {
        let activities = activities.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_activities().await {
                    Ok(list) => activities.set(list),
                    Err(message) => load_error.set(Some(message)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_row_click = {
        let selected_user = selected_user.clone();
        Callback::from(move |email: String| selected_user.set(Some(email)))
    };

    let on_close = {
        let selected_user = selected_user.clone();
        Callback::from(move |_| selected_user.set(None))
    };

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{"User Activity"}</h1>
            if let Some(message) = (*load_error).clone() {
                <p class="text-red-500">{message}</p>
            } else if *loading {
                <p>{"Loading activities..."}</p>
            } else {
                <ActivityTable activities={(*activities).clone()} on_row_click={on_row_click} />
            }
            if let Some(email) = (*selected_user).clone() {
                <Modal open=true title={email.clone()} on_close={on_close} wide=true>
                    <ActivityGraphPanel email={email} />
                </Modal>
            }
        </div>
    }
}
