//! Search Box Component
//!
//! Text input wired through the debouncer: the search callback fires once per
//! burst of keystrokes, with the latest input value.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::debounce::Debouncer;

#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let debouncer = Debouncer::default();

    view! {
        <div class="search-container">
            <input
                type="text"
                placeholder=placeholder
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    debouncer.schedule(move || on_search.run(value));
                }
            />
        </div>
    }
}
