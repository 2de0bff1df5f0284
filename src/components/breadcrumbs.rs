//! Breadcrumbs Component
//!
//! Renders the navigation trail derived from the current hash. All but the
//! last crumb are links accumulating the path prefix.

use leptos::either::Either;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::breadcrumb_trail;

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="breadcrumbs">
            {move || {
                breadcrumb_trail(&ctx.hash.get())
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        let separator = (index > 0).then(|| {
                            view! { <span class="separator">" / "</span> }
                        });
                        let item = match crumb.href {
                            Some(href) => Either::Left(view! {
                                <a class="breadcrumb-item" href=href>{crumb.label}</a>
                            }),
                            None => Either::Right(view! {
                                <span class="breadcrumb-item">{crumb.label}</span>
                            }),
                        };
                        view! { {separator} {item} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
