use contracts::domain::a003_pricing_item::aggregate::{PricingItem, PricingUpdateDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_pricing_item::api;
use crate::layout::global_context::use_app;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
enum EditorState {
    Loading,
    Ready(Vec<PricingItem>),
    /// Collection missing: the SQL that creates it
    NotProvisioned(String),
    Failed(String),
}

/// Admin tab: edit the title and price strings of every pricing row
#[component]
pub fn PricingEditor() -> impl IntoView {
    let app = use_app();
    let state = RwSignal::new(EditorState::Loading);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            let next = match api::fetch_pricing(&[]).await {
                Ok(rows) => EditorState::Ready(rows),
                Err(e) if e.is_not_provisioned() => {
                    let sql = match app.access_token() {
                        Some(token) => api::fetch_provisioning_sql(&token)
                            .await
                            .unwrap_or_else(|e| format!("-- {}", e)),
                        None => String::new(),
                    };
                    EditorState::NotProvisioned(sql)
                }
                Err(e) => EditorState::Failed(e.to_string()),
            };
            state.set(next);
        });
    };

    let save = move |id: i64, dto: PricingUpdateDto| {
        if let Err(e) = dto.validate() {
            set_notice.set(Some(e));
            return;
        }
        let Some(token) = app.access_token() else { return };
        spawn_local(async move {
            match api::update_pricing(id, &dto, &token).await {
                Ok(item) => {
                    set_notice.set(Some(format!("{} ✓", item.title_en)));
                    fetch();
                }
                Err(e) => set_notice.set(Some(e.to_string())),
            }
        });
    };

    fetch();

    view! {
        <div class="admin-panel">
            <div class="header">
                <h2 class="header__title">{move || app.t("Pricing", "الأسعار")}</h2>
            </div>

            {move || notice.get().map(|n| view! { <div class="info-message">{n}</div> })}

            {move || match state.get() {
                EditorState::Loading => view! {
                    <p class="loading">{move || app.t("Loading...", "جار التحميل...")}</p>
                }.into_any(),
                EditorState::Failed(e) => view! { <div class="error-message">{e}</div> }.into_any(),
                EditorState::NotProvisioned(sql) => view! { <ProvisioningSql sql=sql /> }.into_any(),
                EditorState::Ready(rows) => rows
                    .into_iter()
                    .map(|row| view! { <PricingRow item=row on_save=Callback::new(move |(id, dto)| save(id, dto)) /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn PricingRow(item: PricingItem, on_save: Callback<(i64, PricingUpdateDto)>) -> impl IntoView {
    let app = use_app();
    let id = item.id;
    let draft = RwSignal::new(PricingUpdateDto::from_item(&item));

    let field = move |label: &'static str, get: fn(&PricingUpdateDto) -> String, set: fn(&mut PricingUpdateDto, String)| {
        view! {
            <label class="pricing-row__field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="pricing-row">
            <div class="pricing-row__key">{item.key.clone()}</div>
            {field("Title (EN)", |d| d.title_en.clone(), |d, v| d.title_en = v)}
            {field("Title (AR)", |d| d.title_ar.clone(), |d, v| d.title_ar = v)}
            {field("Price (EN)", |d| d.price_en.clone(), |d, v| d.price_en = v)}
            {field("Price (AR)", |d| d.price_ar.clone(), |d, v| d.price_ar = v)}
            <button class="button button--primary" on:click=move |_| on_save.run((id, draft.get_untracked()))>
                {icon("fa-floppy-disk")}
                {move || app.t("Save", "حفظ")}
            </button>
        </div>
    }
}

/// Setup screen shown while the pricing collection does not exist
#[component]
fn ProvisioningSql(sql: String) -> impl IntoView {
    let app = use_app();
    let (copied, set_copied) = signal(false);
    let sql_for_copy = sql.clone();

    view! {
        <div class="warning-box">
            <p>{move || app.t(
                "The pricing table does not exist yet. Run this SQL against the database, then reload.",
                "جدول الأسعار غير موجود بعد. نفّذ أوامر SQL التالية على قاعدة البيانات ثم أعد التحميل.",
            )}</p>
            <pre class="sql-viewer"><code>{sql}</code></pre>
            <button
                class="button button--secondary"
                on:click=move |_| copy_to_clipboard_with_callback(&sql_for_copy, move || set_copied.set(true))
            >
                {icon("fa-copy")}
                {move || if copied.get() {
                    app.t("Copied!", "تم النسخ!")
                } else {
                    app.t("Copy SQL", "نسخ SQL")
                }}
            </button>
        </div>
    }
}
