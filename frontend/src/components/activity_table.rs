use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::UserActivity;

#[derive(Properties, Clone, PartialEq)]
pub struct ActivityTableProps {
    pub activities: Vec<UserActivity>,
    /// Emits the clicked row's email
    pub on_row_click: Callback<String>,
}

/// Day filter plus date sort. Rows without a parsed date survive only while
/// no filter is set, and group together at the unknown end of the ordering.
fn visible_rows(
    activities: &[UserActivity],
    filter: Option<NaiveDate>,
    newest_first: bool,
) -> Vec<UserActivity> {
    let mut rows: Vec<UserActivity> = activities
        .iter()
        .filter(|activity| match filter {
            Some(day) => activity.date == Some(day),
            None => true,
        })
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        let ordering = a.date.cmp(&b.date);
        if newest_first {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}

#[function_component(ActivityTable)]
pub fn activity_table(props: &ActivityTableProps) -> Html {
    let search_date = use_state(String::new);
    let newest_first = use_state(|| true);

    let on_date_change = {
        let search_date = search_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_date.set(input.value());
        })
    };

    let on_toggle_sort = {
        let newest_first = newest_first.clone();
        Callback::from(move |_: MouseEvent| {
            newest_first.set(!*newest_first);
        })
    };

    let filter = NaiveDate::parse_from_str(search_date.trim(), "%Y-%m-%d").ok();
    let rows = visible_rows(&props.activities, filter, *newest_first);

    html! {
        <div>
            <div class={classes!("flex", "items-center", "mb-4")}>
                <input
                    type="date"
                    value={(*search_date).clone()}
                    onchange={on_date_change}
                    class={classes!("border", "p-2", "rounded", "mr-4", "text-gray-800")}
                />
                <button
                    onclick={on_toggle_sort}
                    class={classes!("bg-blue-500", "hover:bg-blue-600", "text-white", "p-2", "rounded")}
                >
                    {if *newest_first { "Sort: Newest First" } else { "Sort: Oldest First" }}
                </button>
            </div>
            <table class={classes!("w-full", "text-left")}>
                <thead>
                    <tr class={classes!("border-b", "border-gray-300")}>
                        <th class={classes!("py-2", "px-4")}>{"User"}</th>
                        <th class={classes!("py-2", "px-4")}>{"Activity"}</th>
                        <th class={classes!("py-2", "px-4")}>{"Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|activity| {
                        let on_click = {
                            let on_row_click = props.on_row_click.clone();
                            let email = activity.user.email.clone();
                            Callback::from(move |_: MouseEvent| on_row_click.emit(email.clone()))
                        };
                        html! {
                            <tr
                                key={activity.id}
                                onclick={on_click}
                                class={classes!(
                                    "cursor-pointer", "hover:bg-gray-100", "hover:text-gray-800",
                                    "border-b", "border-gray-300"
                                )}
                            >
                                <td class={classes!("py-2", "px-4")}>{activity.user.email.clone()}</td>
                                <td class={classes!("py-2", "px-4")}>{activity.activity.clone()}</td>
                                <td class={classes!("py-2", "px-4")}>{activity.display_date.clone()}</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::UserIdentity;

    fn row(id: i64, email: &str, date: Option<(i32, u32, u32)>) -> UserActivity {
        let date = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        UserActivity {
            id,
            user: UserIdentity::from_raw_email(email),
            activity: "Login".to_string(),
            date,
            display_date: date
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
            time_spent: 60.0,
        }
    }

    #[test]
    fn filter_matches_exact_day_only() {
        let activities = vec![
            row(1, "a@acme.com", Some((2024, 3, 1))),
            row(2, "b@acme.com", Some((2024, 3, 2))),
            row(3, "c@acme.com", None),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 2).expect("valid date");

        let rows = visible_rows(&activities, Some(day), true);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn unfiltered_keeps_rows_without_dates() {
        let activities = vec![
            row(1, "a@acme.com", Some((2024, 3, 1))),
            row(2, "b@acme.com", None),
        ];

        let rows = visible_rows(&activities, None, true);

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn newest_first_puts_latest_date_on_top() {
        let activities = vec![
            row(1, "a@acme.com", Some((2024, 3, 1))),
            row(2, "b@acme.com", Some((2024, 3, 5))),
            row(3, "c@acme.com", Some((2024, 3, 3))),
        ];

        let rows = visible_rows(&activities, None, true);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn oldest_first_reverses_the_order() {
        let activities = vec![
            row(1, "a@acme.com", Some((2024, 3, 1))),
            row(2, "b@acme.com", Some((2024, 3, 5))),
        ];

        let rows = visible_rows(&activities, None, false);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![1, 2]);
    }
}
