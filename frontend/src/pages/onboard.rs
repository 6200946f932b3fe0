use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;
use validator::Validate;

use crate::api::identity::sign_up;
use crate::components::common_toast::{Toast, ToastContext};
use crate::Route;
use shared::{SharedError, SignupRequest};

/// ATC2 subscription levels offered at onboarding; "*" subscribes to all
const SUBSCRIPTION_MODULES: &[&str] = &[
    "J01 Antibacterials for systemic use",
    "S02 Otologicals",
    "D08 Antiseptics and disinfectants",
    "H03 Thyroid therapy",
    "A07 Antidiarrheals, intestinal antiinflammatory/antiinfective agents",
    "D06 Antibiotics and chemotherapeutics for dermatological use",
    "P02 Anthelmintics",
    "A06 Drugs for constipation",
    "W01 General Herbal",
    "V06 General nutrients",
    "N04 Anti-parkinson drugs",
    "M01 Antiinflammatory and antirheumatic products",
    "D10 Anti-acne preparations",
    "C10 Lipid modifying agents",
    "R02 Throat preparations",
    "L04 Immunosuppressants",
    "A09 Digestives incl. enzymes",
    "A03 Drugs for functional gastrointestinal disorders",
    "C02 Antihypertensives",
    "B02 Antihemorrhagics",
    "R03 Drugs for obstructive airway diseases",
    "G02 Other gynaecologicals",
    "C03 Diuretics",
    "A08 Antiobesity preparations, excluding diet products",
    "G03 Sex hormones and modulators of the genital system",
    "L02 Endocrine therapy",
    "P03 Ectoparasiticides incl. scabicides, insecticides and repellents",
    "B03 Antianemic preparations",
    "J02 Antimytotics for systemic use",
    "N06 Psychoanaleptics",
    "A14 Anabolic agents for systemic use",
    "S01 Ophthalmologicals",
    "A11 Vitamins",
    "N01 Anesthetics",
    "C04 Peripheral Vasodilators",
    "S03 Ophthalmological and Otological Preparations",
    "D05 Antipsoriatics",
    "D07 Corticosteroids, dermatological preparations",
    "M03 Muscle relaxants",
    "B01 Antithrombotic agents",
    "M05 Drugs for treatment of bone diseases",
    "D03 Preparations for treatment of wounds and ulcer",
    "L01 Antineoplastic agents",
    "L03 Immunostimulants",
    "N07 Other nervous system drugs",
    "D01 Antifungals for dermatological use",
    "C05 Vasoprotectives",
    "R05 Cough and cold preparations",
    "D11 Other dermatologicals",
    "N05 Psycholeptics",
    "N02 Analgesics",
    "H02 Corticosteroids for systemic use",
    "D04 Antipruritics, incl. antihistamines, anesthetics, etc.",
    "M09 Other drugs for disorders of the musculo-skeletal system",
    "H01 Pituitary and hypothalamic hormones and analogues",
    "G04 Urologicals",
    "A02 Drugs for acid related disorders",
    "A04 Antiemetics and Antinauseants",
    "J05 Antivirals for systemic use",
    "A10 Drugs used in diabetes",
    "M04 Antigout preparations",
    "R06 Antihistamines for systemic use",
    "N03 Antiepileptics",
    "C01 Cardiac therapy",
    "A05 Bile and Liver Therapy",
    "B05 Blood substitutes and perfusion solutions",
    "V03 All other therapeutic products",
    "V01 Allergens",
    "C09 Agents acting on the renin-angiotensin system",
    "D02 Emollients and Protectives",
    "M02 Topical for Joint, Muscular pain",
    "A12 Mineral supplements",
    "P01 Antiprotozoals",
    "C07 Beta blocking agents",
    "J04 Antimycobacterials",
    "G01 Gynaecological antiinfectives and antiseptics",
    "R01 Nasal preparations",
    "A16 Other Alimentary Tract and Metabolism Products",
    "C08 Calcium channel blockers",
    "*",
];

fn selected_countries(nigeria: bool, ghana: bool) -> Vec<String> {
    let mut countries = Vec::new();
    if nigeria {
        countries.push("nigeria".to_string());
    }
    if ghana {
        countries.push("ghana".to_string());
    }
    countries
}

#[function_component(Onboard)]
pub fn onboard() -> Html {
    let email = use_state(String::new);
    let company = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let nigeria = use_state(|| false);
    let ghana = use_state(|| false);
    let module_search = use_state(String::new);
    let selected_modules = use_state(Vec::<String>::new);
    let submitting = use_state(|| false);

    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().unwrap();

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_company_change = {
        let company = company.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_nigeria_change = {
        let nigeria = nigeria.clone();
        Callback::from(move |_: Event| nigeria.set(!*nigeria))
    };

    let on_ghana_change = {
        let ghana = ghana.clone();
        Callback::from(move |_: Event| ghana.set(!*ghana))
    };

    let on_module_search = {
        let module_search = module_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            module_search.set(input.value());
        })
    };

    let on_toggle_module = {
        let selected_modules = selected_modules.clone();
        Callback::from(move |module: String| {
            let mut current = (*selected_modules).clone();
            match current.iter().position(|m| m == &module) {
                Some(index) => {
                    current.remove(index);
                }
                None => current.push(module),
            }
            selected_modules.set(current);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let company = company.clone();
        let password = password.clone();
        let nigeria = nigeria.clone();
        let ghana = ghana.clone();
        let selected_modules = selected_modules.clone();
        let submitting = submitting.clone();
        let toast_context = toast_context.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = SignupRequest {
                email: email.trim().to_string(),
                company: company.trim().to_string(),
                countries: selected_countries(*nigeria, *ghana),
                modules: (*selected_modules).clone(),
                password: (*password).clone(),
            };
            if let Err(errors) = request.validate() {
                toast_context
                    .add_toast
                    .emit(Toast::error(SharedError::from(errors).to_string()));
                return;
            }

            submitting.set(true);
            let submitting = submitting.clone();
            let toast_context = toast_context.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match sign_up(&request).await {
                    Ok(response) => {
                        toast_context.add_toast.emit(Toast::success(response.message));
                        navigator.push(&Route::Login);
                    }
                    Err(message) => toast_context.add_toast.emit(Toast::error(message)),
                }
                submitting.set(false);
            });
        })
    };

    let needle = module_search.trim().to_lowercase();
    let visible_modules: Vec<&str> = SUBSCRIPTION_MODULES
        .iter()
        .copied()
        .filter(|module| needle.is_empty() || module.to_lowercase().contains(&needle))
        .collect();

    let disabled = *submitting
        || email.is_empty()
        || company.is_empty()
        || password.is_empty()
        || (!*nigeria && !*ghana);

    html! {
        <main class="flex flex-col items-center text-white">
            <div class="w-full flex flex-row">
                <div class="p-20 w-1/2">
                    <div class="flex flex-col gap-5 my-10">
                        <h1 class="text-5xl font-extrabold">{"Welcome To VERSUS™"}</h1>

                        <form class="my-9 flex flex-col gap-5 w-[90%]" onsubmit={onsubmit}>
                            <div class="flex flex-col mb-4">
                                <label for="email" class="font-semibold mb-1">{"Email Address"}</label>
                                <input
                                    id="email"
                                    type="email"
                                    value={(*email).clone()}
                                    onchange={on_email_change}
                                    required=true
                                    class="border border-gray-300 w-full rounded-md py-3 px-3 text-gray-800 focus:outline-none focus:border-blue-500"
                                />
                            </div>

                            <div class="flex flex-col mb-4">
                                <label for="company" class="font-semibold mb-1">{"Company Name"}</label>
                                <input
                                    id="company"
                                    type="text"
                                    value={(*company).clone()}
                                    onchange={on_company_change}
                                    required=true
                                    class="border border-gray-300 w-full rounded-md py-3 px-3 text-gray-800 focus:outline-none focus:border-blue-500"
                                />
                            </div>

                            <div class="flex flex-col mb-4">
                                <label class="font-semibold mb-1">{"Countries"}</label>
                                <div class="flex items-center">
                                    <div class="mr-4">
                                        <input
                                            type="checkbox"
                                            id="nigeria"
                                            checked={*nigeria}
                                            onchange={on_nigeria_change}
                                            class="mr-2"
                                        />
                                        <label for="nigeria">{"nigeria"}</label>
                                    </div>
                                    <div class="mr-4">
                                        <input
                                            type="checkbox"
                                            id="ghana"
                                            checked={*ghana}
                                            onchange={on_ghana_change}
                                            class="mr-2"
                                        />
                                        <label for="ghana">{"ghana"}</label>
                                    </div>
                                </div>
                            </div>

                            <div class="flex flex-col mb-4">
                                <label class="font-semibold mb-1">{"Select a field"}</label>
                                <input
                                    type="text"
                                    placeholder="Pick ATC2 levels to be subscribed to"
                                    value={(*module_search).clone()}
                                    oninput={on_module_search}
                                    class="border border-gray-300 w-full rounded-md py-2 px-3 text-gray-800 focus:outline-none focus:border-blue-500 mb-2"
                                />
                                <div class="max-h-48 overflow-y-auto border border-gray-300 rounded-md p-2 bg-white text-gray-800">
                                    { for visible_modules.iter().map(|module| {
                                        let checked = selected_modules.iter().any(|m| m == module);
                                        let on_change = {
                                            let on_toggle_module = on_toggle_module.clone();
                                            let module = module.to_string();
                                            Callback::from(move |_: Event| on_toggle_module.emit(module.clone()))
                                        };
                                        html! {
                                            <div key={*module} class="flex items-center py-1">
                                                <input
                                                    type="checkbox"
                                                    checked={checked}
                                                    onchange={on_change}
                                                    class="mr-2"
                                                />
                                                <span class="text-sm">{*module}</span>
                                            </div>
                                        }
                                    }) }
                                </div>
                                <p class="text-sm text-gray-400 mt-1">
                                    {format!("{} selected", selected_modules.len())}
                                </p>
                            </div>

                            <div class="flex flex-col mb-4">
                                <label for="password" class="font-semibold mb-1">{"Password"}</label>
                                <div class="flex flex-row border justify-between border-gray-300 rounded-md py-3 px-3 bg-white">
                                    <input
                                        id="password"
                                        type={if *show_password { "text" } else { "password" }}
                                        value={(*password).clone()}
                                        onchange={on_password_change}
                                        required=true
                                        class="w-full outline-none text-gray-800"
                                    />
                                    <button
                                        type="button"
                                        class="focus:outline-none text-gray-800"
                                        onclick={on_toggle_password}
                                    >
                                        {if *show_password { "🙈" } else { "👁" }}
                                    </button>
                                </div>
                            </div>

                            <div class="flex flex-col my-9 w-full">
                                <button
                                    type="submit"
                                    disabled={disabled}
                                    class="bg-indigo-600 hover:bg-indigo-700 py-3 text-white px-3 rounded-md disabled:opacity-50"
                                >
                                    {"Sign Up"}
                                </button>
                                <p class="mt-2">{"Don't have an account yet? Contact us"}</p>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selected_countries_collects_checked_markets() {
        assert_eq!(selected_countries(false, false), Vec::<String>::new());
        assert_eq!(selected_countries(true, false), vec!["nigeria".to_string()]);
        assert_eq!(
            selected_countries(true, true),
            vec!["nigeria".to_string(), "ghana".to_string()]
        );
    }

    #[test]
    fn module_list_offers_the_subscribe_all_marker() {
        assert!(SUBSCRIPTION_MODULES.contains(&"*"));
        assert_eq!(SUBSCRIPTION_MODULES.len(), 80);
    }
}
