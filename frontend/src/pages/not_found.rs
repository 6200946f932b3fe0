use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center text-center p-8">
            <h1 class="text-5xl font-extrabold mb-4">{"404"}</h1>
            <p class="text-xl mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Users} classes="text-indigo-400 hover:text-indigo-300 underline">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
