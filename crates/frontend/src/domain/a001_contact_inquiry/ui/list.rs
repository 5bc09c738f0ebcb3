use contracts::domain::a001_contact_inquiry::aggregate::ContactInquiry;
use leptos::prelude::*;

use crate::layout::global_context::use_app;

/// Read-only table of contact inquiries, newest first as delivered
#[component]
pub fn InquiryList(inquiries: Vec<ContactInquiry>) -> impl IntoView {
    let app = use_app();

    if inquiries.is_empty() {
        return view! {
            <p class="empty-state">{move || app.t("No inquiries yet.", "لا توجد استفسارات بعد.")}</p>
        }
        .into_any();
    }

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{move || app.t("Name", "الاسم")}</th>
                        <th class="table__header-cell">{move || app.t("Contact", "التواصل")}</th>
                        <th class="table__header-cell">{move || app.t("Type", "النوع")}</th>
                        <th class="table__header-cell">{move || app.t("Message", "الرسالة")}</th>
                        <th class="table__header-cell">{move || app.t("Received", "تاريخ الاستلام")}</th>
                    </tr>
                </thead>
                <tbody>
                    {inquiries
                        .into_iter()
                        .map(|row| {
                            let kind = row.inquiry_type;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.full_name}</td>
                                    <td class="table__cell">
                                        <div>{row.email}</div>
                                        <div dir="ltr">{row.phone}</div>
                                    </td>
                                    <td class="table__cell">{move || kind.label(app.lang())}</td>
                                    <td class="table__cell">{row.message}</td>
                                    <td class="table__cell">{row.created_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
