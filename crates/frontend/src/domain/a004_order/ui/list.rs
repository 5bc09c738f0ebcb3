use contracts::domain::a004_order::aggregate::{Order, OrderStatus};
use contracts::shared::gateway::GatewayError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_order::api;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Newest order first
fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Completed => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--neutral",
    }
}

/// Admin orders tab
#[component]
pub fn OrderList() -> impl IntoView {
    let app = use_app();
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (not_provisioned, set_not_provisioned) = signal(false);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        let Some(token) = app.access_token() else { return };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_orders(&token).await {
                Ok(listing) => {
                    let mut items = listing.items;
                    sort_newest_first(&mut items);
                    set_orders.set(items);
                    set_error.set(None);
                    set_not_provisioned.set(false);
                }
                Err(GatewayError::NotProvisioned { .. }) => {
                    set_orders.set(Vec::new());
                    set_not_provisioned.set(true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let change = move |id: i64, status: OrderStatus| {
        let Some(token) = app.access_token() else { return };
        spawn_local(async move {
            match api::change_status(id, status, &token).await {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    fetch();

    view! {
        <div class="admin-panel">
            <div class="header">
                <h2 class="header__title">{move || app.t("Orders", "الطلبات")}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                        {icon("fa-rotate")}
                        {move || app.t("Refresh", "تحديث")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || not_provisioned.get()>
                <div class="warning-box">
                    {move || app.t(
                        "The orders table does not exist yet. Checkouts still succeed with local codes.",
                        "جدول الطلبات غير موجود بعد. لا يزال إتمام الطلبات ممكناً برموز محلية.",
                    )}
                </div>
            </Show>

            <Show
                when=move || !orders.with(|o| o.is_empty())
                fallback=move || view! {
                    <p class="empty-state">{move || app.t("No orders yet.", "لا توجد طلبات بعد.")}</p>
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"#"</th>
                                <th class="table__header-cell">{move || app.t("Customer", "العميل")}</th>
                                <th class="table__header-cell">{move || app.t("Items", "العناصر")}</th>
                                <th class="table__header-cell">{move || app.t("Total", "المجموع")}</th>
                                <th class="table__header-cell">{move || app.t("Status", "الحالة")}</th>
                                <th class="table__header-cell">{move || app.t("Date", "التاريخ")}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || orders.get()
                                key=|o| (o.id, o.status)
                                children=move |order| {
                                    let id = order.id;
                                    let status = order.status;
                                    let items = order.items.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{order.confirmation_code()}</td>
                                            <td class="table__cell">
                                                <div>{order.customer_name.clone()}</div>
                                                <div dir="ltr">{order.customer_phone.clone()}</div>
                                                <div>{order.customer_email.clone()}</div>
                                            </td>
                                            <td class="table__cell">
                                                {move || items
                                                    .iter()
                                                    .map(|item| format!("{} × {}", item.name(app.lang()), item.quantity))
                                                    .collect::<Vec<_>>()
                                                    .join(", ")}
                                            </td>
                                            <td class="table__cell">{format!("{} SR", order.total)}</td>
                                            <td class="table__cell">
                                                <span class=status_class(status)>{move || status.label(app.lang())}</span>
                                            </td>
                                            <td class="table__cell">{order.created_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                            <td class="table__cell">
                                                <Show when=move || status == OrderStatus::Pending>
                                                    <button
                                                        class="button button--small button--primary"
                                                        on:click=move |_| change(id, OrderStatus::Completed)
                                                    >
                                                        {icon("fa-check")}
                                                        {move || app.t("Complete", "إكمال")}
                                                    </button>
                                                    <button
                                                        class="button button--small button--danger"
                                                        on:click=move |_| change(id, OrderStatus::Cancelled)
                                                    >
                                                        {icon("fa-xmark")}
                                                        {move || app.t("Cancel", "إلغاء")}
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a004_order::aggregate::PaymentMethod;

    fn order(id: i64, minute: u32) -> Order {
        Order {
            id,
            customer_name: "Sara".into(),
            customer_email: "sara@example.com".into(),
            customer_phone: "0500000000".into(),
            items: Vec::new(),
            total: 99,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap(),
        }
    }

    #[test]
    fn newest_order_comes_first() {
        let mut orders = vec![order(1, 5), order(2, 30), order(3, 30)];
        sort_newest_first(&mut orders);
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
