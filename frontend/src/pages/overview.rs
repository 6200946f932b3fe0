use std::collections::hash_map::Entry;
use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::companies::fetch_company_times;
use crate::api::users::fetch_users;
use shared::analytics;
use shared::{CompanyTime, DateRange, NavigationEntry, User};

/// The longest-tracked user inside one company
#[derive(Debug, Clone, PartialEq)]
struct CompanyLeader {
    company: String,
    email: String,
    seconds: f64,
}

fn hours_label(seconds: f64) -> String {
    format!("{:.2}h", seconds / 3600.0)
}

/// Users ranked by accumulated time, largest first
fn top_users(users: &[User], count: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = users
        .iter()
        .map(|user| (user.identity().email, user.accumulated_seconds))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(count);
    ranked
}

/// Picks each company's top user. Companies keep the order in which they
/// first appear in the user list; within a company only a strictly larger
/// accumulated time displaces the current leader.
fn top_user_per_company(users: &[User]) -> Vec<CompanyLeader> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, (String, f64)> = HashMap::new();
    for user in users {
        let identity = user.identity();
        let company = identity.company_label();
        match best.entry(company.clone()) {
            Entry::Occupied(mut slot) => {
                if user.accumulated_seconds > slot.get().1 {
                    slot.insert((identity.email, user.accumulated_seconds));
                }
            }
            Entry::Vacant(slot) => {
                order.push(company);
                slot.insert((identity.email, user.accumulated_seconds));
            }
        }
    }
    order
        .into_iter()
        .filter_map(|company| {
            best.remove(&company).map(|(email, seconds)| CompanyLeader {
                company,
                email,
                seconds,
            })
        })
        .collect()
}

/// Every user's cleaned navigation history, tagged with the owner's email
fn flattened_history(users: &[User], range: Option<&DateRange>) -> Vec<(String, NavigationEntry)> {
    users
        .iter()
        .flat_map(|user| {
            let email = user.identity().email;
            analytics::clean_entries(&user.history, range)
                .into_iter()
                .map(move |entry| (email.clone(), entry))
        })
        .collect()
}

#[function_component(Overview)]
pub fn overview() -> Html {
    let users = use_state(Vec::<User>::new);
    let companies = use_state(Vec::<CompanyTime>::new);
    let error = use_state(|| Option::<String>::None);
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let show_activity = use_state(|| false);
    let search = use_state(String::new);

    // The company aggregate is range-scoped server-side, so a date change
    // means a refetch, not just a refilter.
    {
        let users = users.clone();
        let companies = companies.clone();
        let error = error.clone();
        use_effect_with(
            ((*start_date).clone(), (*end_date).clone()),
            move |(start, end)| {
                let range = DateRange::from_inputs(start, end).ok().flatten();
                spawn_local(async move {
                    match fetch_users().await {
                        Ok(list) => users.set(list),
                        Err(message) => {
                            error.set(Some(message));
                            companies.set(Vec::new());
                            return;
                        }
                    }
                    match fetch_company_times(range.as_ref()).await {
                        Ok(list) => {
                            companies.set(list);
                            error.set(None);
                        }
                        Err(message) => {
                            error.set(Some(message));
                            companies.set(Vec::new());
                        }
                    }
                });
                || ()
            },
        );
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

    let on_toggle_activity = {
        let show_activity = show_activity.clone();
        Callback::from(move |_: MouseEvent| show_activity.set(!*show_activity))
    };

    let on_search_change = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let (range, range_error) = match DateRange::from_inputs(&start_date, &end_date) {
        Ok(range) => (range, None),
        Err(e) => (None, Some(e.to_string())),
    };
    let history = flattened_history(&users, range.as_ref());
    let entries: Vec<NavigationEntry> = history.iter().map(|(_, entry)| entry.clone()).collect();
    let page_ranking = analytics::top_pages(&analytics::page_stats(&entries), 10);
    let ranked_users = top_users(&users, 10);
    let leaders = top_user_per_company(&users);
    let top_companies: Vec<&CompanyTime> = companies.iter().take(10).collect();

    let needle = search.trim().to_lowercase();
    let table_rows: Vec<&(String, NavigationEntry)> = history
        .iter()
        .filter(|(email, entry)| {
            needle.is_empty()
                || email.to_lowercase().contains(&needle)
                || entry.page.to_lowercase().contains(&needle)
        })
        .collect();

    html! {
        <div class="min-h-screen bg-gray-800 p-6 text-white">
            <h1 class="text-4xl font-bold mb-6 text-center tracking-wide">
                {"Company Analytic - Company Performance Overview"}
            </h1>

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
                <div class="text-center text-red-400 mb-4">{message}</div>
            }
            if let Some(message) = (*error).clone() {
                <div class="text-center text-red-400 mb-4">{message}</div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Top Users by Time Spent"}</h2>
                    if ranked_users.is_empty() {
                        <p class="text-gray-400">{"No data available"}</p>
                    } else {
                        { for ranked_users.iter().enumerate().map(|(index, (email, seconds))| html! {
                            <div
                                key={email.clone()}
                                class={if index == 0 {
                                    "flex justify-between py-2 px-4 rounded-md mb-2 bg-indigo-500/20"
                                } else {
                                    "flex justify-between py-2 px-4 rounded-md mb-2 bg-gray-500/20"
                                }}
                            >
                                <span>{email.clone()}</span>
                                <span>{hours_label(*seconds)}</span>
                            </div>
                        }) }
                    }
                </div>

                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Top Companies by Time"}</h2>
                    if top_companies.is_empty() {
                        <p class="text-gray-400">
                            {if error.is_some() { "Error loading data" } else { "No data available" }}
                        </p>
                    } else {
                        { for top_companies.iter().enumerate().map(|(index, company)| html! {
                            <div
                                key={company.company.clone()}
                                class={if index == 0 {
                                    "flex justify-between py-2 px-4 rounded-md mb-2 bg-indigo-500/20"
                                } else {
                                    "flex justify-between py-2 px-4 rounded-md mb-2 bg-gray-500/20"
                                }}
                            >
                                <span class="capitalize">{company.company.clone()}</span>
                                <span>{format!("{} ({} users)", hours_label(company.total_time), company.user_count)}</span>
                            </div>
                        }) }
                    }
                </div>

                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Top User per Company"}</h2>
                    if leaders.is_empty() {
                        <p class="text-gray-400">{"No data available"}</p>
                    } else {
                        { for leaders.iter().take(10).map(|leader| html! {
                            <div
                                key={leader.company.clone()}
                                class="flex justify-between py-2 px-4 rounded-md mb-2 bg-gray-500/20"
                            >
                                <span class="capitalize">{format!("{}: {}", leader.company, leader.email)}</span>
                                <span>{hours_label(leader.seconds)}</span>
                            </div>
                        }) }
                    }
                </div>

                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <h2 class="text-xl font-semibold text-indigo-300 mb-4">{"Top Pages Visited"}</h2>
                    if page_ranking.is_empty() {
                        <p class="text-gray-400">{"No data available"}</p>
                    } else {
                        { for page_ranking.iter().enumerate().map(|(index, stat)| html! {
                            <div
                                key={stat.page.clone()}
                                class={if index == 0 {
                                    "flex justify-between py-2 px-4 rounded-md mb-2 bg-indigo-500/20"
                                } else {
                                    "flex justify-between py-2 px-4 rounded-md mb-2 bg-gray-500/20"
                                }}
                            >
                                <span class="capitalize">{stat.page.clone()}</span>
                                <span>{format!("{} visits ({})", stat.visits, hours_label(stat.total_time))}</span>
                            </div>
                        }) }
                    }
                </div>
            </div>

            <div class="flex justify-center mb-6">
                <button
                    onclick={on_toggle_activity}
                    class="bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-700 hover:to-purple-700 text-white font-semibold py-2 px-6 rounded-full"
                >
                    {if *show_activity { "Hide User Activity" } else { "View User Activity" }}
                </button>
            </div>

            if *show_activity {
                <div class="bg-white/5 border border-white/10 rounded-lg p-4 shadow-lg">
                    <input
                        placeholder="Search activity..."
                        value={(*search).clone()}
                        oninput={on_search_change}
                        class="mb-4 w-full max-w-sm bg-white/10 text-white border border-white/20 rounded-md p-2"
                    />
                    <div class="overflow-x-auto">
                        <table class="w-full text-left">
                            <thead>
                                <tr class="border-b border-white/10">
                                    <th class="text-indigo-300 py-2 px-4">{"User"}</th>
                                    <th class="text-indigo-300 py-2 px-4">{"Page"}</th>
                                    <th class="text-indigo-300 py-2 px-4">{"Timestamp"}</th>
                                    <th class="text-indigo-300 py-2 px-4">{"Time Spent (h)"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                if table_rows.is_empty() {
                                    <tr>
                                        <td colspan="4" class="text-center py-4 text-gray-400">
                                            {"No activity data available"}
                                        </td>
                                    </tr>
                                } else {
                                    { for table_rows.iter().map(|(email, entry)| html! {
                                        <tr class="hover:bg-white/10 border-b border-white/10">
                                            <td class="py-2 px-4">{email.clone()}</td>
                                            <td class="py-2 px-4">{entry.page.clone()}</td>
                                            <td class="py-2 px-4">{entry.timestamp_label()}</td>
                                            <td class="py-2 px-4">{hours_label(entry.time_spent)}</td>
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn user(email: &str, seconds: f64, pages: &[&str]) -> User {
        User {
            record_id: email.to_string(),
            id: 1,
            name: email.to_string(),
            email: email.to_string(),
            status: "Active".to_string(),
            last_login: None,
            balance: 0.0,
            accumulated_seconds: seconds,
            history: pages
                .iter()
                .map(|page| NavigationEntry {
                    page: page.to_string(),
                    timestamp: DateTime::parse_from_rfc3339("2024-03-05T10:00:00+00:00")
                        .expect("valid timestamp"),
                    time_spent: 60.0,
                })
                .collect(),
        }
    }

    #[test]
    fn top_users_are_ranked_by_accumulated_time() {
        let users = vec![
            user("low@acme.com", 100.0, &[]),
            user("high@acme.com", 900.0, &[]),
            user("mid@acme.com", 500.0, &[]),
        ];
        let ranked = top_users(&users, 2);
        let emails: Vec<&str> = ranked.iter().map(|(email, _)| email.as_str()).collect();
        assert_eq!(emails, vec!["high@acme.com", "mid@acme.com"]);
    }

    #[test]
    fn company_leaders_keep_first_seen_company_order() {
        let users = vec![
            user("a@zeta.com", 100.0, &[]),
            user("b@acme.com", 900.0, &[]),
            user("c@zeta.com", 500.0, &[]),
        ];
        let leaders = top_user_per_company(&users);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].company, "zeta");
        assert_eq!(leaders[0].email, "c@zeta.com");
        assert_eq!(leaders[1].company, "acme");
    }

    #[test]
    fn company_leader_tie_keeps_the_first_user() {
        let users = vec![
            user("first@acme.com", 500.0, &[]),
            user("second@acme.com", 500.0, &[]),
        ];
        let leaders = top_user_per_company(&users);
        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].email, "first@acme.com");
    }

    #[test]
    fn flattened_history_tags_entries_with_the_owner() {
        let users = vec![
            user("a@acme.com", 0.0, &["/pbr/dashboard", "/pbr/home2"]),
            user("b@acme.com", 0.0, &["/pbr/reports"]),
        ];
        let history = flattened_history(&users, None);
        let rows: Vec<(&str, &str)> = history
            .iter()
            .map(|(email, entry)| (email.as_str(), entry.page.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![("a@acme.com", "dashboard"), ("b@acme.com", "reports")]
        );
    }

    #[test]
    fn hours_label_shows_two_decimals() {
        assert_eq!(hours_label(5400.0), "1.50h");
        assert_eq!(hours_label(0.0), "0.00h");
    }
}
