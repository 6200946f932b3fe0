use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::feedback::fetch_feedback;
use shared::analytics::average_rating;
use shared::{Feedback, UserIdentity};

fn feedback_card(item: &Feedback) -> Html {
    let email = UserIdentity::from_raw_email(&item.email).email;
    let submitted = item
        .created_at
        .map(|instant| instant.format("%b %-d, %Y").to_string())
        .unwrap_or_default();

    html! {
        <div key={item.id.clone()} class="bg-white p-6 rounded-2xl shadow-lg border border-gray-100">
            <div class="flex justify-between items-center mb-4">
                <span class="text-sm font-semibold text-gray-800 truncate bg-gray-100 px-2 py-1 rounded-full">
                    {email}
                </span>
                <div class="flex items-center gap-1">
                    <span class="text-lg font-bold text-yellow-500">{"★"}</span>
                    <span class="text-sm font-medium text-gray-700">
                        {format!("{}/5", item.rating)}
                    </span>
                </div>
            </div>
            <p class="text-gray-600 text-sm leading-relaxed">{item.comment.clone()}</p>
            <div class="text-right text-xs text-gray-400 mt-4">{submitted}</div>
        </div>
    }
}

#[function_component(FeedbackPage)]
pub fn feedback_page() -> Html {
    let feedback = use_state(Vec::<Feedback>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let feedback = feedback.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_feedback().await {
                    Ok(items) => feedback.set(items),
                    Err(message) => error.set(Some(message)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="flex justify-center items-center min-h-screen">
                <div class="animate-spin rounded-full h-12 w-12 border-4 border-indigo-500 border-t-transparent"></div>
            </div>
        };
    }

    if let Some(message) = (*error).clone() {
        return html! {
            <div class="mx-auto p-6 text-center text-red-500 bg-red-50 rounded-xl max-w-md my-10">
                <p class="text-lg font-semibold">{format!("Error: {}", message)}</p>
                <p class="text-sm mt-2">{"Please check the server or try again later."}</p>
            </div>
        };
    }

    let average = average_rating(&feedback);

    html! {
        <div class="mx-auto p-6 min-h-screen">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-extrabold text-gray-800 mb-4">{"User Feedback"}</h2>
                if let Some(average) = average {
                    <div class="flex justify-center items-center gap-2">
                        <span class="text-2xl font-semibold text-indigo-600">
                            {format!("{:.1} / 5", average)}
                        </span>
                        <div class="flex">
                            { for (0..5).map(|i| {
                                let lit = (i as f64) < average.round();
                                html! {
                                    <span class={if lit { "text-2xl text-yellow-400" } else { "text-2xl text-gray-300" }}>
                                        {"★"}
                                    </span>
                                }
                            }) }
                        </div>
                        <p class="text-sm text-gray-500">{format!("({} reviews)", feedback.len())}</p>
                    </div>
                }
            </div>
            if feedback.is_empty() {
                <p class="text-center text-gray-500 text-lg">{"No feedback available yet."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for feedback.iter().map(feedback_card) }
                </div>
            }
        </div>
    }
}
