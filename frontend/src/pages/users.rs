use yew::prelude::*;

use crate::components::user_table::UsersTable;

#[function_component(Users)]
pub fn users() -> Html {
    html! {
        <div class="p-6">
            <h1 class="text-3xl font-bold mb-6">{"VERSUS™ Admin Dashboard"}</h1>
            <UsersTable />
        </div>
    }
}
