use contracts::shared::catalog::{ADDRESS, EMAIL, OPENING_HOURS, PHONE, WHATSAPP_URL};
use contracts::shared::page::Page;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::icons::{brand_icon, icon};

#[component]
pub fn Footer() -> impl IntoView {
    let app = use_app();
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__brand">
                    <h3>"XTREME PLAY"</h3>
                    <p>{move || app.t(
                        "Jeddah's home of trampolines, ninja courses and soft play for every age.",
                        "وجهة جدة للترامبولين ومسارات النينجا والألعاب الناعمة لجميع الأعمار.",
                    )}</p>
                    <div class="site-footer__social">
                        <a href="https://instagram.com" target="_blank" rel="noopener">{brand_icon("fa-instagram")}</a>
                        <a href="https://tiktok.com" target="_blank" rel="noopener">{brand_icon("fa-tiktok")}</a>
                        <a href="https://snapchat.com" target="_blank" rel="noopener">{brand_icon("fa-snapchat")}</a>
                        <a href=WHATSAPP_URL target="_blank" rel="noopener">{brand_icon("fa-whatsapp")}</a>
                    </div>
                </div>

                <div class="site-footer__contact">
                    <h4>{move || app.t("Contact Us", "تواصل معنا")}</h4>
                    <p>{icon("fa-location-dot")}{move || app.text(ADDRESS)}</p>
                    <p dir="ltr">{icon("fa-phone")}{PHONE}</p>
                    <p>{icon("fa-envelope")}{EMAIL}</p>
                </div>

                <div class="site-footer__hours">
                    <h4>{move || app.t("Opening Hours", "أوقات العمل")}</h4>
                    {OPENING_HOURS
                        .iter()
                        .map(|slot| {
                            let days = slot.days;
                            view! {
                                <p>
                                    <span>{move || app.text(days)}</span>
                                    " "
                                    <span dir="ltr">{slot.hours}</span>
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="site-footer__bottom">
                <span>{format!("© {} Xtreme Play.", year)}" "{move || app.t("All rights reserved.", "جميع الحقوق محفوظة.")}</span>
                <button class="site-footer__admin" on:click=move |_| app.navigate(Page::Admin)>
                    {icon("fa-lock")}
                    {move || app.t("Admin Access", "دخول الإدارة")}
                </button>
            </div>
        </footer>
    }
}
