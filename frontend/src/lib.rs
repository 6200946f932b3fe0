use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_toast::ToastProvider;
use crate::components::sidebar::Sidebar;
use crate::session::{persisted_session, SessionProvider};

pub mod api;
pub mod components;
pub mod config;
pub mod session;
pub mod pages {
    pub mod activity;
    pub mod companies;
    pub mod feedback;
    pub mod login;
    pub mod navigation;
    pub mod not_found;
    pub mod onboard;
    pub mod overview;
    pub mod user_navigation;
    pub mod users;
}

use pages::{
    activity::Activity, companies::Companies, feedback::FeedbackPage, login::Login,
    navigation::Navigation, not_found::NotFound, onboard::Onboard, overview::Overview,
    user_navigation::UserNavigation, users::Users,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/overview")]
    Overview,
    #[at("/users")]
    Users,
    #[at("/activity")]
    Activity,
    #[at("/companies")]
    Companies,
    #[at("/navigation")]
    Navigation,
    #[at("/navigation/:email")]
    UserNavigation { email: String },
    #[at("/feedback")]
    Feedback,
    #[at("/onboard")]
    Onboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <div class="flex min-h-screen bg-gray-900 text-white">
                        <Sidebar />
                        <main class="flex-1 overflow-y-auto">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub children: Children,
}

/// Renders its children only while an admin session is persisted, bouncing
/// to the login page otherwise. The flag is re-read on every route change,
/// so a cleared storage key locks the console again on the next navigation.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator().unwrap();
    let authenticated = persisted_session();

    {
        let navigator = navigator.clone();
        use_effect_with((route, authenticated), move |(_, authenticated)| {
            if !*authenticated {
                debug!("No persisted session, redirecting to login");
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if authenticated {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Login => {
            debug!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Overview => {
            debug!("Rendering Overview page (guarded)");
            html! {
                <Guarded>
                    <Overview />
                </Guarded>
            }
        }
        Route::Users => {
            debug!("Rendering Users page (guarded)");
            html! {
                <Guarded>
                    <Users />
                </Guarded>
            }
        }
        Route::Activity => {
            debug!("Rendering Activity page (guarded)");
            html! {
                <Guarded>
                    <Activity />
                </Guarded>
            }
        }
        Route::Companies => {
            debug!("Rendering Companies page (guarded)");
            html! {
                <Guarded>
                    <Companies />
                </Guarded>
            }
        }
        Route::Navigation => {
            debug!("Rendering Navigation page (guarded)");
            html! {
                <Guarded>
                    <Navigation />
                </Guarded>
            }
        }
        Route::UserNavigation { email } => {
            debug!("Rendering UserNavigation page (guarded) for {}", email);
            html! {
                <Guarded>
                    <UserNavigation email={email} />
                </Guarded>
            }
        }
        Route::Feedback => {
            debug!("Rendering Feedback page (guarded)");
            html! {
                <Guarded>
                    <FeedbackPage />
                </Guarded>
            }
        }
        Route::Onboard => {
            debug!("Rendering Onboard page (guarded)");
            html! {
                <Guarded>
                    <Onboard />
                </Guarded>
            }
        }
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Mount the app
    info!("Mounting application to the document body");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
