use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::navigation::fetch_all_histories;
use crate::Route;
use shared::UserHistory;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let histories = use_state(Vec::<UserHistory>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let histories = histories.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_all_histories().await {
                    Ok(groups) => histories.set(groups),
                    Err(message) => error.set(Some(message)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="p-6">
            <h1 class="text-3xl font-bold mb-6">{"User Navigations"}</h1>
            if let Some(message) = (*error).clone() {
                <p class="text-red-500">{message}</p>
            } else if *loading {
                <p>{"Loading users..."}</p>
            } else if histories.is_empty() {
                <p>{"No tracked users yet."}</p>
            } else {
                <ul class="space-y-2">
                    { for histories.iter().map(|history| {
                        let email = history.user.email.clone();
                        html! {
                            <li key={email.clone()}>
                                <Link<Route>
                                    to={Route::UserNavigation { email: email.clone() }}
                                    classes="block p-4 bg-gray-800 rounded-lg hover:bg-gray-700"
                                >
                                    <span class="font-medium">{email}</span>
                                    <span class="text-sm text-gray-400 ml-2">
                                        {format!("{} pages visited", history.entries.len())}
                                    </span>
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
