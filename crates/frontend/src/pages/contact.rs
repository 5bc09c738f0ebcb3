use contracts::shared::catalog::{ADDRESS, EMAIL, PHONE, WHATSAPP_URL};
use contracts::shared::lang::Text;
use leptos::prelude::*;

use crate::domain::a001_contact_inquiry::ui::form::ContactForm;
use crate::layout::global_context::use_app;
use crate::layout::page_banner::PageBanner;
use crate::shared::icons::{brand_icon, icon};

#[component]
pub fn ContactPage() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page page--contact">
            <PageBanner title=Text::new("Get In Touch", "تواصل معنا") />

            <section class="contact">
                <ContactForm />

                <div class="contact__info">
                    <h2>{move || app.t("Get Ready To Jump!", "استعد للقفز!")}</h2>
                    <p>{move || app.t(
                        "We are located in the heart of Jeddah, ready to welcome you and your family for a gravity-defying adventure.",
                        "نحن نتواجد في قلب جدة، مستعدون لاستقبالك أنت وعائلتك في مغامرة تتحدى الجاذبية.",
                    )}</p>

                    <div class="contact__row">
                        {icon("fa-map-location-dot")}
                        <div>
                            <h4>{move || app.t("Address", "العنوان")}</h4>
                            <p>{move || app.text(ADDRESS)}</p>
                        </div>
                    </div>
                    <div class="contact__row">
                        {icon("fa-phone-volume")}
                        <div>
                            <h4>{move || app.t("Phone", "الجوال")}</h4>
                            <p dir="ltr">{PHONE}</p>
                        </div>
                    </div>
                    <div class="contact__row">
                        {icon("fa-envelope-open-text")}
                        <div>
                            <h4>{move || app.t("Email", "البريد")}</h4>
                            <p>{EMAIL}</p>
                        </div>
                    </div>

                    <h4>{move || app.t("Follow Our Journey", "تابع رحلتنا")}</h4>
                    <div class="contact__social">
                        <a href="https://instagram.com" target="_blank" rel="noopener">{brand_icon("fa-instagram")}</a>
                        <a href="https://tiktok.com" target="_blank" rel="noopener">{brand_icon("fa-tiktok")}</a>
                        <a href=WHATSAPP_URL target="_blank" rel="noopener">{brand_icon("fa-whatsapp")}</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
