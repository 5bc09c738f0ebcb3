use contracts::shared::lang::Text;
use leptos::prelude::*;

use crate::domain::a002_gallery_image::ui::grid::GalleryGrid;
use crate::layout::page_banner::PageBanner;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="page page--gallery">
            <PageBanner
                title=Text::new("Gallery", "معرض الصور")
                subtitle=Text::new(
                    "See the energy, the flips, and the smiles. Our park is built for unforgettable moments.",
                    "شاهد الطاقة، الشقلبات، والابتسامات. تم بناء منتزهنا للحظات لا تُنسى.",
                )
            />
            <section class="gallery">
                <GalleryGrid />
            </section>
        </div>
    }
}
