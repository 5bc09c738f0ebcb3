use contracts::shared::catalog::school_trip_packages;
use contracts::shared::lang::Text;
use contracts::shared::page::Page;
use leptos::prelude::*;

use crate::domain::a003_pricing_item::ui::cards::{use_pricing_cards, PricingCardView};
use crate::layout::global_context::use_app;
use crate::layout::page_banner::PageBanner;

#[component]
pub fn SchoolTripsPage() -> impl IntoView {
    let app = use_app();
    let packages = use_pricing_cards(school_trip_packages());

    view! {
        <div class="page page--school-trips">
            <PageBanner
                title=Text::new("School Trips", "الرحلات المدرسية")
                subtitle=Text::new(
                    "Educational, active, and fun. Bring your school for a unique experience that builds team spirit.",
                    "تعليمية، نشطة، وممتعة. أحضر مدرستك لتجربة فريدة تبني روح الفريق.",
                )
            />

            <section class="packages packages--single">
                {move || packages
                    .get()
                    .into_iter()
                    .map(|card| view! {
                        <PricingCardView
                            card=card
                            action=Text::new("REQUEST BOOKING", "طلب حجز")
                            ribbon=Text::new("Best Value For Schools", "أفضل قيمة للمدارس")
                            redirect=true
                        />
                    })
                    .collect_view()}
            </section>

            <section class="callout">
                <h3>{move || app.t("Special Needs and Large Groups?", "احتياجات خاصة أو مجموعات كبيرة؟")}</h3>
                <p>{move || app.t(
                    "We accommodate all requirements. Contact our team for customized arrangements.",
                    "نحن نلبي جميع المتطلبات. تواصل مع فريقنا لترتيبات مخصصة.",
                )}</p>
                <button class="button button--primary" on:click=move |_| app.navigate(Page::Contact)>
                    {move || app.t("Contact Coordinator", "تواصل مع المنسق")}
                </button>
            </section>
        </div>
    }
}
