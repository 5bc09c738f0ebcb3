use contracts::shared::catalog::party_packages;
use contracts::shared::lang::Text;
use leptos::prelude::*;

use crate::domain::a003_pricing_item::ui::cards::{use_pricing_cards, PricingCardView};
use crate::layout::global_context::use_app;
use crate::layout::page_banner::PageBanner;

const BOOKING_STEPS: &[(Text, Text)] = &[
    (
        Text::new("Pick Package", "اختر الباقة"),
        Text::new("Choose the best package for your group size.", "اختر الباقة الأنسب لمجموعتك."),
    ),
    (
        Text::new("Call Us", "اتصل بنا"),
        Text::new("Contact our event specialist to confirm availability.", "تواصل معنا لتأكيد التوفر."),
    ),
    (
        Text::new("Celebrate", "استمتع بالاحتفال"),
        Text::new("Enjoy your gravity-defying special day!", "استمتع بيومك الخاص مع مغامرة مذهلة!"),
    ),
];

#[component]
pub fn PartiesPage() -> impl IntoView {
    let app = use_app();
    let packages = use_pricing_cards(party_packages());

    view! {
        <div class="page page--parties">
            <PageBanner
                title=Text::new("Parties", "الحفلات")
                subtitle=Text::new(
                    "Celebrate your special moments in a high-energy environment. We offer a variety of packages for every need.",
                    "احتفل بلحظاتك الخاصة في بيئة مليئة بالطاقة. نقدم مجموعة متنوعة من الباقات لكل الاحتياجات.",
                )
            />

            <section class="packages">
                {move || packages
                    .get()
                    .into_iter()
                    .map(|card| view! {
                        <PricingCardView
                            card=card
                            action=Text::new("BOOK NOW", "احجز الآن")
                            ribbon=Text::new("Most Popular", "الأكثر طلباً")
                            redirect=true
                        />
                    })
                    .collect_view()}
            </section>

            <section class="steps">
                <h2 class="section__title">{move || app.t("Booking Process", "خطوات الحجز")}</h2>
                <div class="steps__grid">
                    {BOOKING_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, description))| {
                            let (title, description) = (*title, *description);
                            view! {
                                <div class="step">
                                    <div class="step__number">{i + 1}</div>
                                    <h4>{move || app.text(title)}</h4>
                                    <p>{move || app.text(description)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
