use contracts::domain::a002_gallery_image::aggregate::{GalleryImage, GalleryImageDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_gallery_image::api;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Admin tab: add, edit and delete gallery image URLs
#[component]
pub fn GalleryManager() -> impl IntoView {
    let app = use_app();

    let (items, set_items) = signal::<Vec<GalleryImage>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (not_provisioned, set_not_provisioned) = signal(false);
    let (new_url, set_new_url) = signal(String::new());
    let (editing, set_editing) = signal::<Option<(i64, String)>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_images().await {
                Ok(rows) => {
                    set_items.set(rows);
                    set_not_provisioned.set(false);
                    set_error.set(None);
                }
                Err(e) if e.is_not_provisioned() => set_not_provisioned.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = GalleryImageDto {
            url: new_url.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        let Some(token) = app.access_token() else { return };
        spawn_local(async move {
            match api::create_image(dto.url, &token).await {
                Ok(_) => {
                    set_new_url.set(String::new());
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_save = move |id: i64| {
        let Some((_, url)) = editing.get_untracked() else { return };
        let dto = GalleryImageDto {
            url: url.trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        let Some(token) = app.access_token() else { return };
        spawn_local(async move {
            match api::update_image(id, dto.url, &token).await {
                Ok(_) => {
                    set_editing.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: i64| {
        // Simple confirm dialog via browser
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(app.t(
                    "Delete this image from the gallery?",
                    "هل تريد حذف هذه الصورة من المعرض؟",
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = app.access_token() else { return };
        spawn_local(async move {
            match api::delete_image(id, &token).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    fetch();

    view! {
        <div class="admin-panel">
            <div class="header">
                <h2 class="header__title">{move || app.t("Gallery Images", "صور المعرض")}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("fa-rotate")}
                        {move || app.t("Refresh", "تحديث")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || not_provisioned.get()>
                <div class="warning-box">
                    {move || app.t(
                        "The gallery collection is not set up yet. The public page shows the bundled images.",
                        "لم يتم إعداد مجموعة المعرض بعد. تعرض الصفحة العامة الصور الافتراضية.",
                    )}
                </div>
            </Show>

            <form class="inline-form" on:submit=handle_add>
                <input
                    type="url"
                    placeholder="https://..."
                    prop:value=move || new_url.get()
                    on:input=move |ev| set_new_url.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--primary">
                    {icon("fa-plus")}
                    {move || app.t("Add Image", "إضافة صورة")}
                </button>
            </form>

            <div class="admin-gallery">
                {move || items.get().into_iter().map(|image| {
                    let id = image.id;
                    let url = image.url.clone();
                    let is_editing = move || editing.get().map(|(edit_id, _)| edit_id) == Some(id);
                    view! {
                        <div class="admin-gallery__item">
                            <img src=image.url.clone() alt="" />
                            <Show
                                when=is_editing
                                fallback=move || {
                                    let url = url.clone();
                                    view! {
                                        <div class="admin-gallery__actions">
                                            <button class="button button--ghost" on:click=move |_| set_editing.set(Some((id, url.clone())))>
                                                {icon("fa-pen")}
                                            </button>
                                            <button class="button button--danger" on:click=move |_| handle_delete(id)>
                                                {icon("fa-trash")}
                                            </button>
                                        </div>
                                    }
                                }
                            >
                                <div class="admin-gallery__edit">
                                    <input
                                        type="url"
                                        prop:value=move || editing.get().map(|(_, u)| u).unwrap_or_default()
                                        on:input=move |ev| set_editing.set(Some((id, event_target_value(&ev))))
                                    />
                                    <button class="button button--primary" on:click=move |_| handle_save(id)>
                                        {move || app.t("Save", "حفظ")}
                                    </button>
                                    <button class="button button--ghost" on:click=move |_| set_editing.set(None)>
                                        {move || app.t("Cancel", "إلغاء")}
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
