use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::navigation::fetch_user_history;
use crate::components::chart::{ChartPoint, LineChart};
use shared::analytics;
use shared::{DateRange, NavigationEntry, PageStat};

#[derive(Properties, Clone, PartialEq)]
pub struct UserNavigationProps {
    pub email: String,
}

fn stat_row(stat: &PageStat, tint: &'static str) -> Html {
    html! {
        <div key={stat.page.clone()} class={format!("flex justify-between py-2 px-4 rounded-md mb-2 {}", tint)}>
            <span class="capitalize">{stat.page.clone()}</span>
            <span>{format!("{} visits ({}s)", stat.visits, stat.total_time)}</span>
        </div>
    }
}

#[function_component(UserNavigation)]
pub fn user_navigation(props: &UserNavigationProps) -> Html {
    let email = urlencoding::decode(&props.email)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| props.email.clone());

    let history = use_state(Vec::<NavigationEntry>::new);
    let load_error = use_state(|| Option::<String>::None);
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let search = use_state(String::new);
    let show_all = use_state(|| false);

    {
        let history = history.clone();
        let load_error = load_error.clone();
        use_effect_with(email.clone(), move |email| {
            let email = email.clone();
            spawn_local(async move {
                match fetch_user_history(&email).await {
                    Ok(entries) => history.set(entries),
                    Err(message) => load_error.set(Some(message)),
                }
            });
            || ()
        });
    }

    let on_start_change = {
        let start_date = start_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            start_date.set(input.value());
        })
    };

    let on_end_change = {
        let end_date = end_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            end_date.set(input.value());
        })
    };

    let on_all_time = {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        Callback::from(move |_: MouseEvent| {
            start_date.set(String::new());
            end_date.set(String::new());
        })
    };

    let on_search_change = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_toggle_all = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(!*show_all))
    };

    let (range, range_error) = match DateRange::from_inputs(&start_date, &end_date) {
        Ok(range) => (range, None),
        Err(e) => (None, Some(e.to_string())),
    };
    let filtered = analytics::clean_entries(&history, range.as_ref());
    let stats = analytics::page_stats(&filtered);
    let top = analytics::top_pages(&stats, 3);
    let least = analytics::least_pages(&stats, 3);
    let trend = analytics::daily_trend(&filtered);
    let points: Vec<ChartPoint> = trend
        .iter()
        .map(|point| ChartPoint::new(point.date.format("%Y-%m-%d").to_string(), point.total_time))
        .collect();
    let table_rows = analytics::search_entries(&filtered, &search);

    const TOP_TINTS: [&str; 3] = ["bg-indigo-500/20", "bg-purple-500/20", "bg-blue-500/20"];

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-indigo-900 to-purple-900 p-6 text-white">
            <h1 class="text-4xl font-bold mb-6 text-center bg-clip-text text-transparent bg-gradient-to-r from-indigo-400 to-purple-400 tracking-wide">
                {format!("Company Analytic - Company Performance for {}", email)}
            </h1>

            if let Some(message) = (*load_error).clone() {
                <p class="text-center text-red-400 mb-4">{message}</p>
            }

            <div class="flex justify-center items-center gap-4 mb-8">
                <input
                    type="date"
                    value={(*start_date).clone()}
                    onchange={on_start_change}
                    class="bg-white/10 text-white rounded-md border border-white/20 p-2"
                />
                <input
                    type="date"
                    value={(*end_date).clone()}
                    onchange={on_end_change}
                    class="bg-white/10 text-white rounded-md border border-white/20 p-2"
                />
                <button
                    onclick={on_all_time}
                    class="bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-2 px-4 rounded-md"
                >
                    {"All Time"}
                </button>
            </div>
            if let Some(message) = range_error {
                <p class="text-center text-red-400 mb-4">{message}</p>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8">
                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Top 3 Most Visited Pages"}</h2>
                    if top.is_empty() {
                        <p class="text-gray-400">{"No meaningful data available"}</p>
                    } else {
                        { for top.iter().enumerate().map(|(index, stat)| stat_row(stat, TOP_TINTS[index.min(2)])) }
                    }
                </div>
                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Least Visited Pages"}</h2>
                    if least.is_empty() {
                        <p class="text-gray-400">{"No meaningful data available"}</p>
                    } else {
                        { for least.iter().map(|stat| stat_row(stat, "bg-gray-500/20")) }
                    }
                </div>
            </div>

            if points.is_empty() {
                <div class="text-center text-gray-400 mb-8">{"No time spent data available"}</div>
            } else {
                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg mb-8">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Time Spent Trend"}</h2>
                    <LineChart points={points} />
                </div>
            }

            <div class="flex justify-center mb-6">
                <button
                    onclick={on_toggle_all}
                    class="bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-700 hover:to-purple-700 text-white font-semibold py-2 px-6 rounded-full"
                >
                    {if *show_all { "Hide Navigations" } else { "View All Navigations" }}
                </button>
            </div>

            if *show_all {
                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <input
                        placeholder="Search navigations..."
                        value={(*search).clone()}
                        oninput={on_search_change}
                        class="mb-4 w-full max-w-sm bg-white/10 text-white border border-white/20 rounded-md p-2"
                    />
                    <div class="overflow-x-auto">
                        <table class="w-full text-left">
                            <thead>
                                <tr class="border-b border-white/10">
                                    <th class="text-indigo-300 py-2 px-4">{"Page"}</th>
                                    <th class="text-indigo-300 py-2 px-4">{"Timestamp"}</th>
                                    <th class="text-indigo-300 py-2 px-4">{"Time Spent (s)"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                if table_rows.is_empty() {
                                    <tr>
                                        <td colspan="3" class="text-center py-4 text-gray-400">
                                            {"No navigation data available"}
                                        </td>
                                    </tr>
                                } else {
                                    { for table_rows.iter().map(|entry| html! {
                                        <tr class="hover:bg-white/10 border-b border-white/10">
                                            <td class="py-2 px-4">{entry.page.clone()}</td>
                                            <td class="py-2 px-4">{entry.timestamp_label()}</td>
                                            <td class="py-2 px-4">{entry.time_spent}</td>
                                        </tr>
                                    }) }
                                }
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        </div>
    }
}

