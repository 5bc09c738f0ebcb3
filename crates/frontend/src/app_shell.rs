//! Root component: header, the screen for the current session state, footer.

use contracts::shared::catalog::WHATSAPP_URL;
use contracts::shared::page::{Page, Screen};
use leptos::prelude::*;

use crate::layout::footer::Footer;
use crate::layout::global_context::use_app;
use crate::layout::header::Header;
use crate::pages::{
    cart::CartPage, contact::ContactPage, gallery::GalleryPage, home::HomePage,
    parties::PartiesPage, plan_visit::PlanVisitPage, school_trips::SchoolTripsPage,
};
use crate::shared::api_utils::current_query_param;
use crate::shared::icons::{brand_icon, icon};
use crate::system::admin::dashboard::AdminDashboard;
use crate::system::pages::login::LoginPage;

/// Mirrors the language on `<html dir lang>`
fn apply_document_language(dir: &str, code: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("dir", dir);
    let _ = root.set_attribute("lang", code);
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let app = use_app();

    // A password reset link lands on the login screen
    if current_query_param("reset").is_some() {
        app.navigate(Page::Admin);
    }

    // Memos keep cart and checkout writes from re-rendering the page
    let screen_state = app.screen_memo();
    let page = app.page_memo();
    let lang = app.lang_memo();

    Effect::new(move |_| {
        let lang = lang.get();
        apply_document_language(lang.direction().as_str(), lang.code());
    });

    Effect::new(move |_| {
        let _ = page.get();
        scroll_to_top();
    });

    let screen = move || match screen_state.get() {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Page(Page::Admin) => view! { <AdminDashboard /> }.into_any(),
        Screen::Page(Page::Home) => view! { <HomePage /> }.into_any(),
        Screen::Page(Page::PlanVisit) => view! { <PlanVisitPage /> }.into_any(),
        Screen::Page(Page::Parties) => view! { <PartiesPage /> }.into_any(),
        Screen::Page(Page::SchoolTrips) => view! { <SchoolTripsPage /> }.into_any(),
        Screen::Page(Page::Gallery) => view! { <GalleryPage /> }.into_any(),
        Screen::Page(Page::Contact) => view! { <ContactPage /> }.into_any(),
        Screen::Page(Page::Cart) => view! { <CartPage /> }.into_any(),
    };

    view! {
        <div class="app-layout" dir=move || lang.get().direction().as_str()>
            <Header />
            <main class="app-main">{screen}</main>
            <Footer />

            <div class="floating-actions">
                <a class="floating-actions__whatsapp" href=WHATSAPP_URL target="_blank" rel="noopener" aria-label="WhatsApp">
                    {brand_icon("fa-whatsapp")}
                </a>
                <Show when=move || !matches!(screen_state.get(), Screen::Login | Screen::Page(Page::Admin))>
                    <button class="floating-actions__book" on:click=move |_| app.navigate(Page::PlanVisit)>
                        {icon("fa-ticket")}
                        {move || app.t("BOOK NOW", "احجز الآن")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
