use contracts::domain::a001_contact_inquiry::aggregate::ContactInquiry;
use contracts::domain::a004_order::overview::AdminOverview;
use contracts::shared::gateway::GatewayError;
use contracts::shared::listing::Listing;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::dashboard::AdminTab;
use crate::domain::a001_contact_inquiry::api as inquiry_api;
use crate::domain::a001_contact_inquiry::ui::list::InquiryList;
use crate::domain::a004_order::api as order_api;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Inquiries shown under the figures
const LATEST_INQUIRIES: usize = 5;

/// A collection that is not provisioned counts as empty
fn rows_or_empty<T>(result: Result<Listing<T>, GatewayError>) -> Result<Listing<T>, GatewayError> {
    match result {
        Err(GatewayError::NotProvisioned { .. }) => Ok(Listing { items: Vec::new(), total: 0 }),
        other => other,
    }
}

#[component]
pub fn Overview(on_open: Callback<AdminTab>) -> impl IntoView {
    let app = use_app();
    let (overview, set_overview) = signal(AdminOverview::default());
    let (latest, set_latest) = signal(Vec::<ContactInquiry>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    if let Some(token) = app.access_token() {
        spawn_local(async move {
            let orders = rows_or_empty(order_api::fetch_orders(&token).await);
            let inquiries = rows_or_empty(inquiry_api::fetch_inquiries(&token).await);
            match (orders, inquiries) {
                (Ok(orders), Ok(inquiries)) => {
                    set_overview.set(AdminOverview::from_rows(&orders.items, inquiries.total));
                    set_latest.set(inquiries.items.into_iter().take(LATEST_INQUIRIES).collect());
                }
                (Err(e), _) | (_, Err(e)) => set_error.set(Some(e.to_string())),
            }
        });
    }

    let stat = move |label: (&'static str, &'static str), icon_name: &'static str, value: Signal<String>| {
        view! {
            <div class="stat-card">
                <div class="stat-card__icon">{icon(icon_name)}</div>
                <div>
                    <div class="stat-card__label">{move || app.t(label.0, label.1)}</div>
                    <div class="stat-card__value">{move || value.get()}</div>
                </div>
            </div>
        }
    };

    view! {
        <div class="admin-overview">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="stat-grid">
                {stat(("Bookings", "الحجوزات"), "fa-calendar-check",
                    Signal::derive(move || overview.get().orders_total.to_string()))}
                {stat(("Pending", "قيد الانتظار"), "fa-hourglass-half",
                    Signal::derive(move || overview.get().pending.to_string()))}
                {stat(("Completed", "مكتمل"), "fa-circle-check",
                    Signal::derive(move || overview.get().completed.to_string()))}
                {stat(("Cancelled", "ملغي"), "fa-ban",
                    Signal::derive(move || overview.get().cancelled.to_string()))}
                {stat(("Revenue", "الإيرادات"), "fa-money-bill-wave",
                    Signal::derive(move || format!("SR {}", overview.get().revenue)))}
                {stat(("Inquiries", "الاستفسارات"), "fa-envelope",
                    Signal::derive(move || overview.get().inquiries.to_string()))}
            </div>

            <div class="admin-overview__body">
                <div class="admin-overview__inquiries">
                    <h3>{move || app.t("Latest Inquiries", "أحدث الاستفسارات")}</h3>
                    {move || view! { <InquiryList inquiries=latest.get() /> }}
                </div>

                <div class="admin-overview__actions">
                    <h3>{move || app.t("Quick Actions", "إجراءات سريعة")}</h3>
                    <button class="button button--secondary" on:click=move |_| on_open.run(AdminTab::Orders)>
                        {icon("fa-receipt")}
                        {move || app.t("Review Orders", "مراجعة الطلبات")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_open.run(AdminTab::Pricing)>
                        {icon("fa-tags")}
                        {move || app.t("Update Prices", "تحديث الأسعار")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_open.run(AdminTab::Gallery)>
                        {icon("fa-images")}
                        {move || app.t("Add to Gallery", "إضافة للمعرض")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api_error::ApiErrorCode;

    #[test]
    fn missing_collection_reads_as_empty() {
        let missing: Result<Listing<u32>, _> = Err(GatewayError::NotProvisioned { table: "orders".into() });
        let rows = rows_or_empty(missing).unwrap();
        assert!(rows.items.is_empty());
        assert_eq!(rows.total, 0);

        let denied: Result<Listing<u32>, _> = Err(GatewayError::Api {
            code: ApiErrorCode::Unauthorized,
            message: "expired".into(),
        });
        assert!(rows_or_empty(denied).is_err());
    }
}
