use contracts::shared::lang::Text;
use leptos::prelude::*;

use crate::layout::global_context::use_app;

/// Coloured title strip at the top of inner pages
#[component]
pub fn PageBanner(title: Text, #[prop(optional)] subtitle: Option<Text>) -> impl IntoView {
    let app = use_app();

    view! {
        <section class="page-banner">
            <h1 class="page-banner__title">{move || app.text(title)}</h1>
            {subtitle.map(|sub| view! { <p class="page-banner__subtitle">{move || app.text(sub)}</p> })}
        </section>
    }
}
