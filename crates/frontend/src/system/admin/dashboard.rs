use contracts::shared::lang::Text;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::overview::Overview;
use crate::domain::a002_gallery_image::ui::manager::GalleryManager;
use crate::domain::a003_pricing_item::ui::editor::PricingEditor;
use crate::domain::a004_order::ui::list::OrderList;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use crate::system::auth::api;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Orders,
    Gallery,
    Pricing,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Overview, AdminTab::Orders, AdminTab::Gallery, AdminTab::Pricing];

    fn label(self) -> Text {
        match self {
            AdminTab::Overview => Text::new("Overview", "نظرة عامة"),
            AdminTab::Orders => Text::new("Orders", "الطلبات"),
            AdminTab::Gallery => Text::new("Gallery", "المعرض"),
            AdminTab::Pricing => Text::new("Pricing", "الأسعار"),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AdminTab::Overview => "fa-chart-line",
            AdminTab::Orders => "fa-receipt",
            AdminTab::Gallery => "fa-images",
            AdminTab::Pricing => "fa-tags",
        }
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let app = use_app();
    let tab = RwSignal::new(AdminTab::Overview);
    let (admin_name, set_admin_name) = signal::<Option<String>>(None);

    if let Some(token) = app.access_token() {
        spawn_local(async move {
            match api::current_admin(&token).await {
                Ok(info) => set_admin_name.set(Some(info.full_name.unwrap_or(info.email))),
                Err(e) => log::warn!("Failed to load admin profile: {}", e),
            }
        });
    }

    view! {
        <div class="admin">
            <div class="admin__header">
                <div>
                    <h1>{move || app.t("Admin Dashboard", "لوحة تحكم المشرف")}</h1>
                    <p>
                        {move || app.t("Welcome back", "أهلاً بعودتك")}
                        {move || admin_name.get().map(|name| format!(", {}", name))}
                    </p>
                </div>
                <button class="button button--danger" on:click=move |_| app.logout()>
                    {icon("fa-right-from-bracket")}
                    {move || app.t("Logout", "تسجيل الخروج")}
                </button>
            </div>

            <nav class="admin__tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || if tab.get() == t { "admin__tab admin__tab--active" } else { "admin__tab" }
                            on:click=move |_| tab.set(t)
                        >
                            {icon(t.icon())}
                            {move || app.text(t.label())}
                        </button>
                    })
                    .collect_view()}
            </nav>

            <div class="admin__content">
                {move || match tab.get() {
                    AdminTab::Overview => view! { <Overview on_open=Callback::new(move |t| tab.set(t)) /> }.into_any(),
                    AdminTab::Orders => view! { <OrderList /> }.into_any(),
                    AdminTab::Gallery => view! { <GalleryManager /> }.into_any(),
                    AdminTab::Pricing => view! { <PricingEditor /> }.into_any(),
                }}
            </div>
        </div>
    }
}
