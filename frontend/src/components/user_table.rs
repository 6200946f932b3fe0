use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{UpdateUserRequest, User};

use crate::api;
use crate::components::activity_graph::ActivityGraphPanel;
use crate::components::common_modal::Modal;
use crate::components::common_toast::{Toast, ToastContext};

#[derive(Clone, PartialEq)]
enum UserAction {
    Edit(User),
    Reset(User),
    Suspend(User),
    History(User),
}

fn replace_user(users: &[User], updated: &User) -> Vec<User> {
    users
        .iter()
        .map(|user| {
            if user.id == updated.id {
                updated.clone()
            } else {
                user.clone()
            }
        })
        .collect()
}

/// Account management table: edit, password reset, suspend and a per-user
/// activity history dialog.
#[function_component(UsersTable)]
pub fn users_table() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let action = use_state(|| None::<UserAction>);
    let pending = use_state(|| false);

    // Buffered edit fields, applied on Save rather than per keystroke.
    let edit_name = use_state(String::new);
    let edit_email = use_state(String::new);
    let edit_error = use_state(|| None::<String>);

    {
        let users = users.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::users::fetch_users().await {
                    Ok(fetched) => users.set(fetched),
                    Err(e) => load_error.set(Some(e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let close_dialog = {
        let action = action.clone();
        let edit_error = edit_error.clone();
        Callback::from(move |_: ()| {
            action.set(None);
            edit_error.set(None);
        })
    };

    let select_action = {
        let action = action.clone();
        let edit_name = edit_name.clone();
        let edit_email = edit_email.clone();
        let edit_error = edit_error.clone();
        Callback::from(move |selected: UserAction| {
            if let UserAction::Edit(user) = &selected {
                edit_name.set(user.name.clone());
                edit_email.set(user.identity().email);
                edit_error.set(None);
            }
            action.set(Some(selected));
        })
    };

    let on_name_input = {
        let edit_name = edit_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_name.set(input.value());
        })
    };

    let on_email_input = {
        let edit_email = edit_email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_email.set(input.value());
        })
    };

    let on_save_edit = {
        let users = users.clone();
        let action = action.clone();
        let pending = pending.clone();
        let edit_name = edit_name.clone();
        let edit_email = edit_email.clone();
        let edit_error = edit_error.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(UserAction::Edit(user)) = (*action).clone() else {
                return;
            };
            let request = UpdateUserRequest {
                name: edit_name.trim().to_string(),
                email: edit_email.trim().to_string(),
            };
            if let Err(errors) = request.validate() {
                edit_error.set(Some(shared::SharedError::from(errors).to_string()));
                return;
            }
            edit_error.set(None);
            pending.set(true);

            let users = users.clone();
            let action = action.clone();
            let pending = pending.clone();
            let toast_context = toast_context.clone();
            spawn_local(async move {
                match api::users::update_user(&user.record_id, &request).await {
                    Ok(updated) => {
                        users.set(replace_user(&users, &updated));
                        toast_context.add_toast.emit(Toast::success("User updated"));
                        action.set(None);
                    }
                    Err(e) => {
                        toast_context.add_toast.emit(Toast::error(e));
                    }
                }
                pending.set(false);
            });
        })
    };

    let on_confirm_reset = {
        let action = action.clone();
        let pending = pending.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(UserAction::Reset(user)) = (*action).clone() else {
                return;
            };
            pending.set(true);

            let action = action.clone();
            let pending = pending.clone();
            let toast_context = toast_context.clone();
            spawn_local(async move {
                match api::users::reset_password(user.id).await {
                    Ok(response) => {
                        toast_context.add_toast.emit(Toast::success(response.message));
                        action.set(None);
                    }
                    Err(e) => {
                        toast_context.add_toast.emit(Toast::error(e));
                    }
                }
                pending.set(false);
            });
        })
    };

    let on_confirm_suspend = {
        let users = users.clone();
        let action = action.clone();
        let pending = pending.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(UserAction::Suspend(user)) = (*action).clone() else {
                return;
            };
            pending.set(true);

            let users = users.clone();
            let action = action.clone();
            let pending = pending.clone();
            let toast_context = toast_context.clone();
            spawn_local(async move {
                match api::users::suspend_user(user.id).await {
                    Ok(updated) => {
                        users.set(replace_user(&users, &updated));
                        toast_context
                            .add_toast
                            .emit(Toast::success("User status updated"));
                        action.set(None);
                    }
                    Err(e) => {
                        toast_context.add_toast.emit(Toast::error(e));
                    }
                }
                pending.set(false);
            });
        })
    };

    let rows = users.iter().map(|user| {
        let display_email = user.identity().email;
        let last_login = user
            .last_login
            .map(|instant| instant.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let action_button = |label: &'static str, icon: &'static str, color: &'static str, selected: UserAction| {
            let select_action = select_action.clone();
            html! {
                <button
                    title={label}
                    onclick={Callback::from(move |_: MouseEvent| select_action.emit(selected.clone()))}
                    class={classes!(
                        "h-8", "w-8", "inline-flex", "items-center", "justify-center",
                        "border", "border-gray-600", "rounded-md", "hover:bg-gray-700",
                        color
                    )}
                >
                    {icon}
                </button>
            }
        };

        html! {
            <tr key={user.id} class={classes!("border-b", "border-gray-700")}>
                <td class={classes!("py-2", "px-4", "font-medium")}>{display_email}</td>
                <td class={classes!("py-2", "px-4")}>
                    {format!("{:.2} hours", user.accumulated_hours())}
                </td>
                <td class={classes!("py-2", "px-4")}>{last_login}</td>
                <td class={classes!("py-2", "px-4")}>
                    <div class={classes!("flex", "space-x-2")}>
                        {action_button("Edit User", "✏️", "text-blue-400", UserAction::Edit(user.clone()))}
                        {action_button("Reset Password", "🔒", "text-yellow-400", UserAction::Reset(user.clone()))}
                        {action_button("Suspend User", "🚫", "text-red-400", UserAction::Suspend(user.clone()))}
                        {action_button("View Login History", "🕐", "text-gray-400", UserAction::History(user.clone()))}
                    </div>
                </td>
            </tr>
        }
    });

    let dialogs = match &*action {
        Some(UserAction::Edit(_)) => html! {
            <Modal open=true title="Edit User" on_close={close_dialog.clone()}>
                <div class={classes!("space-y-4")}>
                    <input
                        type="text"
                        placeholder="Name"
                        value={(*edit_name).clone()}
                        onchange={on_name_input}
                        class={classes!("w-full", "border", "border-gray-300", "rounded-md", "p-2")}
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*edit_email).clone()}
                        onchange={on_email_input}
                        class={classes!("w-full", "border", "border-gray-300", "rounded-md", "p-2")}
                    />
                    if let Some(message) = &*edit_error {
                        <p class={classes!("text-sm", "text-red-500")}>{message.clone()}</p>
                    }
                    <button
                        onclick={on_save_edit}
                        disabled={*pending}
                        class={classes!(
                            "bg-indigo-600", "hover:bg-indigo-700", "text-white",
                            "py-2", "px-4", "rounded-md", "disabled:opacity-50"
                        )}
                    >
                        {if *pending { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </Modal>
        },
        Some(UserAction::Reset(user)) => html! {
            <Modal open=true title="Reset Password" on_close={close_dialog.clone()}>
                <div class={classes!("space-y-4")}>
                    <p>{format!(
                        "Are you sure you want to reset the password for {}?",
                        user.identity().email
                    )}</p>
                    <button
                        onclick={on_confirm_reset}
                        disabled={*pending}
                        class={classes!(
                            "bg-indigo-600", "hover:bg-indigo-700", "text-white",
                            "py-2", "px-4", "rounded-md", "disabled:opacity-50"
                        )}
                    >
                        {"Confirm"}
                    </button>
                </div>
            </Modal>
        },
        Some(UserAction::Suspend(user)) => {
            let verb = if user.is_active() { "suspend" } else { "activate" };
            html! {
                <Modal open=true title="Suspend User" on_close={close_dialog.clone()}>
                    <div class={classes!("space-y-4")}>
                        <p>{format!(
                            "Are you sure you want to {} {}?",
                            verb,
                            user.identity().email
                        )}</p>
                        <button
                            onclick={on_confirm_suspend}
                            disabled={*pending}
                            class={classes!(
                                "bg-red-600", "hover:bg-red-700", "text-white",
                                "py-2", "px-4", "rounded-md", "disabled:opacity-50"
                            )}
                        >
                            {"Confirm"}
                        </button>
                    </div>
                </Modal>
            }
        }
        Some(UserAction::History(user)) => html! {
            <Modal open=true title={user.identity().email} on_close={close_dialog.clone()} wide=true>
                <ActivityGraphPanel email={user.identity().email} />
            </Modal>
        },
        None => html! {},
    };

    html! {
        <div class={classes!("w-full", "text-white", "overflow-auto")}>
            if *loading {
                <p class={classes!("py-4")}>{"Loading users..."}</p>
            } else if let Some(error) = &*load_error {
                <p class={classes!("py-4", "text-red-400")}>{error.clone()}</p>
            } else {
                <table class={classes!("w-full", "text-left")}>
                    <thead>
                        <tr class={classes!("text-xl", "font-extrabold")}>
                            <th class={classes!("py-2", "px-4")}>{"Name"}</th>
                            <th class={classes!("py-2", "px-4")}>{"Hours"}</th>
                            <th class={classes!("py-2", "px-4")}>{"Last Login"}</th>
                            <th class={classes!("py-2", "px-4")}>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows }
                    </tbody>
                </table>
            }
            {dialogs}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: i64, name: &str) -> User {
        User {
            record_id: format!("doc-{}", id),
            id,
            name: name.to_string(),
            email: format!("{}@acme.com", name),
            status: "Active".to_string(),
            last_login: None,
            balance: 0.0,
            accumulated_seconds: 3600.0,
            history: Vec::new(),
        }
    }

    #[test]
    fn replace_user_swaps_matching_id_only() {
        let users = vec![sample_user(1, "jane"), sample_user(2, "john")];
        let mut updated = sample_user(2, "john");
        updated.status = "Suspended".to_string();

        let replaced = replace_user(&users, &updated);

        assert_eq!(replaced[0].status, "Active");
        assert_eq!(replaced[1].status, "Suspended");
        assert_eq!(replaced.len(), 2);
    }

    #[test]
    fn replace_user_leaves_list_unchanged_for_unknown_id() {
        let users = vec![sample_user(1, "jane")];
        let updated = sample_user(9, "ghost");

        let replaced = replace_user(&users, &updated);

        assert_eq!(replaced, users);
    }
}
