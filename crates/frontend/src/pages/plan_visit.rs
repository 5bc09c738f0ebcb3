use contracts::shared::catalog::{ticket_cards, ADDRESS, MAPS_URL, OPENING_HOURS};
use contracts::shared::lang::Text;
use leptos::prelude::*;

use crate::domain::a003_pricing_item::ui::cards::{use_pricing_cards, PricingCardView};
use crate::layout::global_context::use_app;
use crate::layout::page_banner::PageBanner;
use crate::shared::icons::icon;

#[component]
pub fn PlanVisitPage() -> impl IntoView {
    let app = use_app();
    let tickets = use_pricing_cards(ticket_cards());

    view! {
        <div class="page page--plan-visit">
            <PageBanner
                title=Text::new("Plan Your Visit", "خطط لزيارتك")
                subtitle=Text::new(
                    "Test your jumping skills on various obstacles, shoot hoops, or dive into the largest foam pits in Saudi!",
                    "اختبر مهاراتك في القفز على عوائق متنوعة، سجل الأهداف، أو انطلق في أكبر حفر رغوية في المملكة!",
                )
            />

            <section class="info-grid">
                <div class="info-card">
                    <div class="info-card__icon">{icon("fa-location-dot")}</div>
                    <h3>{move || app.t("Location", "الموقع")}</h3>
                    <p>{move || app.text(ADDRESS)}</p>
                    <a class="button button--secondary" href=MAPS_URL target="_blank" rel="noreferrer">
                        {move || app.t("Get Directions", "احصل على الاتجاهات")}
                    </a>
                </div>
                <div class="info-card">
                    <div class="info-card__icon">{icon("fa-clock")}</div>
                    <h3>{move || app.t("Timings", "الأوقات")}</h3>
                    {OPENING_HOURS
                        .iter()
                        .map(|slot| {
                            let days = slot.days;
                            view! {
                                <div class="info-card__row">
                                    <div>{move || app.text(days)}</div>
                                    <strong dir="ltr">{slot.hours}</strong>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="tickets">
                <h2 class="section__title">{move || app.t("Entry Access", "تذكرة الدخول")}</h2>
                <div class="tickets__grid">
                    {move || tickets
                        .get()
                        .into_iter()
                        .map(|card| view! {
                            <PricingCardView card=card action=Text::new("ADD TO CART", "أضف إلى السلة") />
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="safety-note">
                {icon("fa-shield-halved")}
                <p>{move || app.t(
                    "Safety is our top priority. All visitors must wear Xtreme Play grip socks and follow our safety guidelines. Children under 12 must be supervised by an adult at all times.",
                    "السلامة هي أولويتنا القصوى. يجب على جميع الزوار ارتداء جوارب إكستريم بلاي واتباع إرشادات السلامة الخاصة بنا. يجب أن يشرف شخص بالغ على الأطفال دون سن ١٢ عامًا في جميع الأوقات.",
                )}</p>
            </section>
        </div>
    }
}
