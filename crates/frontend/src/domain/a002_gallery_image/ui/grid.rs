use contracts::domain::a002_gallery_image::aggregate::resolve_public_gallery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_gallery_image::api;
use crate::shared::icons::icon;

/// Public masonry grid with a lightbox. Falls back to the bundled images
/// while loading, when the collection is empty or unreachable.
#[component]
pub fn GalleryGrid() -> impl IntoView {
    let (images, set_images) = signal(resolve_public_gallery(Ok(Vec::new())));
    let (selected, set_selected) = signal::<Option<String>>(None);

    spawn_local(async move {
        let fetched = api::fetch_images().await;
        if let Err(e) = &fetched {
            log::debug!("Gallery falls back to bundled images: {}", e);
        }
        set_images.set(resolve_public_gallery(fetched));
    });

    view! {
        <div class="gallery-grid">
            {move || {
                images
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, url)| {
                        let open = url.clone();
                        view! {
                            <div class="gallery-grid__item" on:click=move |_| set_selected.set(Some(open.clone()))>
                                <img src=url alt=format!("Gallery {}", idx) loading="lazy" />
                                <div class="gallery-grid__overlay">{icon("fa-expand")}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>

        {move || selected.get().map(|url| view! {
            <div class="lightbox" on:click=move |_| set_selected.set(None)>
                <button class="lightbox__close" aria-label="Close">{icon("fa-times")}</button>
                <img src=url class="lightbox__image" alt="Expanded" />
            </div>
        })}
    }
}
