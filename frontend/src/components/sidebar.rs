use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;

const NAV_ITEMS: &[(Route, &str, &str)] = &[
    (Route::Overview, "🏠", "Overview"),
    (Route::Users, "👥", "Manage Users"),
    (Route::Activity, "📋", "Users Activity"),
    (Route::Companies, "🏢", "Companies"),
    (Route::Navigation, "🗺️", "Navigations"),
    (Route::Feedback, "💬", "Feedbacks"),
    (Route::Onboard, "➕", "Onboard User"),
];

/// Collapsible left sidebar. Renders nothing until the admin session is
/// unlocked, so the login screen stays full width.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().unwrap();
    let current_route = use_route::<Route>().unwrap_or(Route::Login);
    let is_open = use_state(|| false);

    let toggle_sidebar = {
        let is_open = is_open.clone();
        Callback::from(move |_| {
            is_open.set(!*is_open);
        })
    };

    let on_logout_click = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    if !session.state.authenticated {
        return html! {};
    }

    let expanded = *is_open;

    html! {
        <aside class={classes!(
            "h-screen", "sticky", "top-0", "bg-gray-800", "flex", "flex-col",
            "transition-all", "duration-300",
            if expanded { classes!("w-64") } else { classes!("w-16") }
        )}>
            <div class={classes!("p-4", "flex", "items-center", "justify-between")}>
                if expanded {
                    <h2 class={classes!("text-xl", "font-bold", "text-white")}>{"VERSUS™ Admin"}</h2>
                }
                <button
                    onclick={toggle_sidebar}
                    class={classes!(
                        "p-2", "rounded-md", "text-white", "hover:bg-gray-700/50",
                        "transition-colors", "duration-200"
                    )}
                    aria-label="Toggle sidebar"
                >
                    {"☰"}
                </button>
            </div>

            <div class={classes!("px-3", "py-2", "flex-1")}>
                if expanded {
                    <p class={classes!("text-xs", "uppercase", "text-gray-400", "mb-2")}>{"Navigation"}</p>
                }
                <nav class={classes!("space-y-1")}>
                    { for NAV_ITEMS.iter().map(|(route, icon, label)| {
                        let active = current_route == *route;
                        html! {
                            <Link<Route>
                                to={route.clone()}
                                classes={classes!(
                                    "flex", "items-center", "px-3", "py-2", "text-sm", "rounded-md",
                                    "transition-colors", "duration-200",
                                    if expanded { classes!() } else { classes!("justify-center") },
                                    if active {
                                        classes!("bg-indigo-600", "text-white")
                                    } else {
                                        classes!("text-white/90", "hover:bg-gray-700/50", "hover:text-white")
                                    }
                                )}
                            >
                                <span class={classes!("text-lg")} title={*label}>{*icon}</span>
                                if expanded {
                                    <span class={classes!("ml-3")}>{*label}</span>
                                }
                            </Link<Route>>
                        }
                    }) }
                </nav>
            </div>

            <div class={classes!("mt-auto", "px-3", "py-4")}>
                <button
                    onclick={on_logout_click}
                    class={classes!(
                        "w-full", "flex", "items-center", "px-3", "py-2", "text-sm", "rounded-md",
                        "text-white/90", "hover:bg-gray-700/50", "hover:text-white",
                        "transition-colors", "duration-200",
                        if expanded { classes!() } else { classes!("justify-center") }
                    )}
                >
                    <span class={classes!("text-lg")}>{"↪"}</span>
                    if expanded {
                        <span class={classes!("ml-3")}>{"Logout"}</span>
                    }
                </button>
            </div>
        </aside>
    }
}
