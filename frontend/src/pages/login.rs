use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let password = use_state(String::new);
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().unwrap();

    // Redirect when a session is already persisted
    {
        let navigator = navigator.clone();
        let authenticated = session.state.authenticated;
        use_effect_with((), move |_| {
            if authenticated {
                debug!("Already authenticated, redirecting to the users page");
                navigator.push(&Route::Users);
            }
            || ()
        });
    }

    let onsubmit = {
        let password = password.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.login.emit((*password).clone()) {
                navigator.push(&Route::Users);
            }
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 py-12 px-4">
            <div class="max-w-md w-full bg-gray-800 rounded-lg shadow-lg p-8 space-y-6">
                <h1 class="text-center text-3xl font-extrabold text-white">
                    {"Admin Login"}
                </h1>
                <form class="space-y-6" onsubmit={onsubmit}>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required=true
                        class="w-full px-3 py-2 border border-gray-600 rounded-md bg-gray-700 text-white placeholder-gray-400 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                        placeholder="Enter admin password"
                        value={(*password).clone()}
                        onchange={onpasswordchange}
                    />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none"
                    >
                        {"Login"}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-400">
                    {"For authorized admins only"}
                </p>
            </div>
        </div>
    }
}
