use leptos::prelude::*;

/// Font Awesome solid icon, e.g. `icon("fa-ticket")`
pub fn icon(name: &'static str) -> AnyView {
    view! { <i class=format!("fas {}", name) aria-hidden="true"></i> }.into_any()
}

/// Font Awesome brand icon, e.g. `brand_icon("fa-whatsapp")`
pub fn brand_icon(name: &'static str) -> AnyView {
    view! { <i class=format!("fab {}", name) aria-hidden="true"></i> }.into_any()
}
