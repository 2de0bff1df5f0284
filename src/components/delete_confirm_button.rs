//! Delete Confirm Button Component
//!
//! Two-step delete: the button first arms itself, then a confirm/keep pair
//! decides whether the delete callback runs. Local users are the only
//! records with a delete affordance, so this stays deliberately small.

use leptos::either::Either;
use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    move || {
        if armed.get() {
            Either::Left(view! {
                <span class="delete-confirm">
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "Confirm"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "Keep"
                    </button>
                </span>
            })
        } else {
            Either::Right(view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "Delete"
                </button>
            })
        }
    }
}
