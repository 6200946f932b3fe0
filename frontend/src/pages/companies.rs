use yew::prelude::*;

use crate::components::company_report::CompanyTimeReport;

#[function_component(Companies)]
pub fn companies() -> Html {
    html! {
        <div class="p-6">
            <CompanyTimeReport />
        </div>
    }
}
