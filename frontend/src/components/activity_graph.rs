use chrono::{Local, NaiveDate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::analytics;
use shared::{ActivityGraph, DateRange, RangePreset};

use crate::api;
use crate::components::chart::{ChartPoint, LineChart};

const PRESET_OPTIONS: &[(&str, &str)] = &[
    ("this-week", "This Week"),
    ("last-week", "Last Week"),
    ("last-month", "Last Month"),
    ("custom", "Custom Range"),
];

#[derive(Properties, Clone, PartialEq)]
pub struct ActivityGraphPanelProps {
    pub email: String,
}

/// Per-day activity chart for one user with quick-pick ranges and an
/// idle-period summary. Fetches its own series whenever `email` changes.
#[function_component(ActivityGraphPanel)]
pub fn activity_graph_panel(props: &ActivityGraphPanelProps) -> Html {
    let graph = use_state(|| None::<Result<ActivityGraph, String>>);
    // Selections can change while a fetch is in flight; the sequence number
    // drops responses that arrive for an earlier selection.
    let request_seq = use_mut_ref(|| 0u64);
    let preset = use_state(|| RangePreset::ThisWeek.key().to_string());
    let custom_start = use_state(String::new);
    let custom_end = use_state(String::new);

    {
        let graph = graph.clone();
        let request_seq = request_seq.clone();
        use_effect_with(props.email.clone(), move |email: &String| {
            let seq = {
                let mut slot = request_seq.borrow_mut();
                *slot += 1;
                *slot
            };
            graph.set(None);
            let email = email.clone();
            spawn_local(async move {
                let result = api::activities::fetch_activity_graph(&email).await;
                if *request_seq.borrow() == seq {
                    graph.set(Some(result));
                }
            });
            || ()
        });
    }

    let on_preset_change = {
        let preset = preset.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            preset.set(select.value());
        })
    };

    let on_start_change = {
        let custom_start = custom_start.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_start.set(input.value());
        })
    };

    let on_end_change = {
        let custom_end = custom_end.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_end.set(input.value());
        })
    };

    // An incomplete custom range means no filter; a reversed one keeps the
    // filter off and surfaces the validation message instead.
    let (range, range_error) = match preset.as_str() {
        "custom" => match DateRange::from_inputs(&custom_start, &custom_end) {
            Ok(range) => (range, None),
            Err(e) => (None, Some(e.to_string())),
        },
        key => (
            RangePreset::from_key(key).map(|p| p.resolve(Local::now().date_naive())),
            None,
        ),
    };

    let controls = html! {
        <div class={classes!("flex", "flex-col", "gap-2", "sm:flex-row", "sm:items-center", "mb-4")}>
            <select
                onchange={on_preset_change}
                class={classes!("border", "border-gray-300", "rounded-md", "p-2", "text-sm", "text-gray-800")}
            >
                { for PRESET_OPTIONS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={preset.as_str() == *value}>{*label}</option>
                }) }
            </select>
            if preset.as_str() == "custom" {
                <input
                    type="date"
                    value={(*custom_start).clone()}
                    onchange={on_start_change}
                    class={classes!("border", "border-gray-300", "rounded-md", "p-2", "text-sm", "text-gray-800")}
                />
                <input
                    type="date"
                    value={(*custom_end).clone()}
                    onchange={on_end_change}
                    class={classes!("border", "border-gray-300", "rounded-md", "p-2", "text-sm", "text-gray-800")}
                />
            }
        </div>
    };

    let body = match &*graph {
        None => html! {
            <div class={classes!("flex", "justify-center", "py-12")}>
                <div class={classes!(
                    "animate-spin", "rounded-full", "h-10", "w-10", "border-4",
                    "border-indigo-500", "border-t-transparent"
                )}></div>
            </div>
        },
        Some(Err(error)) => html! {
            <div class={classes!("text-center", "text-red-500", "py-8")}>
                {error.clone()}
            </div>
        },
        Some(Ok(graph)) => {
            let filtered = analytics::filter_samples(&graph.samples, range.as_ref());
            let points: Vec<ChartPoint> = filtered
                .iter()
                .map(|sample| {
                    ChartPoint::new(sample.date.format("%Y-%m-%d").to_string(), sample.time_spent)
                })
                .collect();
            let dates: Vec<NaiveDate> = filtered.iter().map(|sample| sample.date).collect();
            let idle = analytics::idle_periods(&dates);
            let active_days = filtered.len();

            html! {
                <>
                    <div class={classes!("flex", "items-center", "gap-2", "mb-2", "text-sm", "text-gray-600")}>
                        <span
                            class={classes!("inline-block", "w-3", "h-3", "rounded-sm")}
                            style="background-color: rgb(75, 192, 192)"
                        ></span>
                        {format!("Time Spent by {} (minutes)", props.email)}
                    </div>
                    <div class={classes!("bg-white", "rounded-md")}>
                        <LineChart
                            points={points}
                            stroke="rgb(75, 192, 192)"
                            y_label="Minutes"
                        />
                    </div>
                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-4", "mt-6")}>
                        <div>
                            <h3 class={classes!("text-lg", "font-semibold", "mb-2")}>{"Active Days"}</h3>
                            <p class={classes!("text-3xl", "font-bold", "text-indigo-600")}>{active_days}</p>
                        </div>
                        <div>
                            <h3 class={classes!("text-lg", "font-semibold", "mb-2")}>{"Idle Periods"}</h3>
                            if idle.is_empty() {
                                <p class={classes!("text-gray-500")}>{"No idle periods detected"}</p>
                            } else {
                                <ul class={classes!("space-y-2", "text-sm")}>
                                    { for idle.iter().map(|period| {
                                        let unit = if period.days == 1 { "day" } else { "days" };
                                        html! {
                                            <li class={classes!("border", "rounded", "p-2", "bg-gray-50")}>
                                                <span class={classes!("font-medium")}>
                                                    {format!("{} to {}", period.start, period.end)}
                                                </span>
                                                <span class={classes!("text-gray-500", "ml-2")}>
                                                    {format!("({} {})", period.days, unit)}
                                                </span>
                                            </li>
                                        }
                                    }) }
                                </ul>
                            }
                        </div>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class={classes!("space-y-4", "text-gray-800")}>
            <h2 class={classes!("text-xl", "font-semibold")}>{"User Activity Over Time"}</h2>
            {controls}
            if let Some(message) = range_error {
                <p class={classes!("text-sm", "text-red-500")}>{message}</p>
            }
            {body}
        </div>
    }
}
