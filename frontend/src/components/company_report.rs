use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::companies::fetch_company_times;
use shared::analytics::format_duration;
use shared::{CompanyTime, DateRange};

/// Turns the two date inputs into a fetch range. Both fields must be filled
/// and ordered before the backend is asked anything.
fn requested_range(start: &str, end: &str) -> Result<DateRange, String> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err("Please provide both start and end dates".to_string());
    }
    let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
        .map_err(|_| "Please provide both start and end dates".to_string())?;
    let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
        .map_err(|_| "Please provide both start and end dates".to_string())?;
    DateRange::new(start, end).map_err(|_| "End date cannot be before start date".to_string())
}

fn date_list(dates: &[String]) -> String {
    if dates.is_empty() {
        "None".to_string()
    } else {
        dates.join(", ")
    }
}

#[function_component(CompanyTimeReport)]
pub fn company_time_report() -> Html {
    let companies = use_state(Vec::<CompanyTime>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let expanded = use_state(|| Option::<String>::None);

    let load = {
        let companies = companies.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |range: Option<DateRange>| {
            let companies = companies.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match fetch_company_times(range.as_ref()).await {
                    Ok(list) => companies.set(list),
                    Err(message) => error.set(Some(message)),
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(None);
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

    let on_search = {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let error = error.clone();
        let load = load.clone();
        Callback::from(move |_: MouseEvent| {
            match requested_range(&start_date, &end_date) {
                Ok(range) => load.emit(Some(range)),
                Err(message) => error.set(Some(message)),
            }
        })
    };

    let on_clear = {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let load = load.clone();
        Callback::from(move |_: MouseEvent| {
            start_date.set(String::new());
            end_date.set(String::new());
            load.emit(None);
        })
    };

    let toggle_expand = |company: String| {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            if expanded.as_deref() == Some(company.as_str()) {
                expanded.set(None);
            } else {
                expanded.set(Some(company.clone()));
            }
        })
    };

    html! {
        <div class={classes!("p-4")}>
            <h2 class={classes!("text-2xl", "font-bold", "mb-4")}>{"Company Time Report"}</h2>
            <div class={classes!("flex", "items-center", "gap-2", "mb-4")}>
                <input
                    type="date"
                    value={(*start_date).clone()}
                    onchange={on_start_change}
                    class={classes!("border", "p-2", "rounded", "text-gray-800")}
                />
                <input
                    type="date"
                    value={(*end_date).clone()}
                    onchange={on_end_change}
                    class={classes!("border", "p-2", "rounded", "text-gray-800")}
                />
                <button
                    onclick={on_search}
                    disabled={*loading}
                    class={classes!("bg-blue-500", "hover:bg-blue-600", "text-white", "py-2", "px-4", "rounded")}
                >
                    {if *loading { "Loading..." } else { "Search" }}
                </button>
                <button
                    onclick={on_clear}
                    class={classes!("bg-gray-500", "hover:bg-gray-600", "text-white", "py-2", "px-4", "rounded")}
                >
                    {"Clear"}
                </button>
            </div>
            if let Some(message) = (*error).clone() {
                <p class={classes!("text-red-500", "mb-4")}>{message}</p>
            }
            if *loading {
                <p>{"Loading company data..."}</p>
            } else if companies.is_empty() {
                <p>{"No company data available"}</p>
            } else {
                <table class={classes!("w-full", "text-left")}>
                    <thead>
                        <tr class={classes!("border-b", "border-gray-300")}>
                            <th class={classes!("py-2", "px-4")}>{"Company"}</th>
                            <th class={classes!("py-2", "px-4")}>{"Total Time"}</th>
                            <th class={classes!("py-2", "px-4")}>{"Users"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for companies.iter().map(|company| {
                            let is_expanded = expanded.as_deref() == Some(company.company.as_str());
                            html! {
                                <>
                                    <tr
                                        key={company.company.clone()}
                                        onclick={toggle_expand(company.company.clone())}
                                        class={classes!(
                                            "cursor-pointer", "hover:bg-gray-100", "hover:text-gray-800",
                                            "border-b", "border-gray-300"
                                        )}
                                    >
                                        <td class={classes!("py-2", "px-4")}>
                                            {format!("{} {}", if is_expanded { "▼" } else { "▶" }, company.company)}
                                        </td>
                                        <td class={classes!("py-2", "px-4")}>{format_duration(company.total_time)}</td>
                                        <td class={classes!("py-2", "px-4")}>{company.user_count}</td>
                                    </tr>
                                    if is_expanded {
                                        <tr>
                                            <td colspan="3" class={classes!("p-4", "bg-gray-50", "text-gray-800")}>
                                                <table class={classes!("w-full", "text-left", "text-sm")}>
                                                    <thead>
                                                        <tr class={classes!("border-b", "border-gray-300")}>
                                                            <th class={classes!("py-1", "px-2")}>{"Email"}</th>
                                                            <th class={classes!("py-1", "px-2")}>{"Total Time"}</th>
                                                            <th class={classes!("py-1", "px-2")}>{"Active Dates"}</th>
                                                            <th class={classes!("py-1", "px-2")}>{"Idle Dates"}</th>
                                                        </tr>
                                                    </thead>
                                                    <tbody>
                                                        { for company.users.iter().map(|user| html! {
                                                            <tr key={user.email.clone()} class={classes!("border-b", "border-gray-200")}>
                                                                <td class={classes!("py-1", "px-2")}>{user.email.clone()}</td>
                                                                <td class={classes!("py-1", "px-2")}>{format_duration(user.total_time)}</td>
                                                                <td class={classes!("py-1", "px-2", "text-green-600")}>
                                                                    {date_list(&user.active_dates)}
                                                                </td>
                                                                <td class={classes!("py-1", "px-2", "text-yellow-600")}>
                                                                    {date_list(&user.idle_dates)}
                                                                </td>
                                                            </tr>
                                                        }) }
                                                    </tbody>
                                                </table>
                                            </td>
                                        </tr>
                                    }
                                </>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
