use contracts::shared::lang::Text;
use contracts::shared::page::Page;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

struct Service {
    page: Page,
    icon: &'static str,
    title: Text,
    description: Text,
}

const SERVICES: &[Service] = &[
    Service {
        page: Page::Parties,
        icon: "fa-cake-candles",
        title: Text::new("Parties", "الحفلات"),
        description: Text::new(
            "Looking for a fun loaded and memorable Birthday Party? Elevate the way you celebrate.",
            "تبحث عن حفلة عيد ميلاد مليئة بالمرح ولا تُنسى؟ ارتقِ بطريقة احتفالك معنا.",
        ),
    },
    Service {
        page: Page::SchoolTrips,
        icon: "fa-bus-simple",
        title: Text::new("School Trips", "رحلات مدرسية"),
        description: Text::new(
            "Plan your school trip and join the new fun way of socializing with your classmates!",
            "خطط لرحلتك المدرسية وانضم إلى الطريقة الجديدة والممتعة للتواصل مع زملائك في الفصل!",
        ),
    },
    Service {
        page: Page::Contact,
        icon: "fa-star",
        title: Text::new("Private Booking", "حجز خاص"),
        description: Text::new(
            "Planning a corporate event or a private day out? Xtreme Play is accepting private bookings.",
            "تخطط لفعالية شركات أو يوم خاص؟ إكستريم بلاي يستقبل الحجوزات الخاصة.",
        ),
    },
];

const ATTRACTIONS: &[(&str, Text)] = &[
    ("fa-basketball", Text::new("Basketball", "كرة سلة")),
    ("fa-volleyball", Text::new("Volleyball", "كرة طائرة")),
    ("fa-wind", Text::new("Giant Airbag", "وسادة هوائية")),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page page--home">
            <section class="hero">
                <video class="hero__video" autoplay muted loop playsinline
                    poster="https://images.unsplash.com/photo-1519331379826-f10be5486c6f?q=80&w=2070&auto=format&fit=crop">
                    <source src="https://video.wixstatic.com/video/673ddf_991d5e53948b4078a1dfbfa911252cd0/1080p/mp4/file.mp4" type="video/mp4" />
                </video>
                <div class="hero__content">
                    <span class="hero__badge">{move || app.t("Now Open in Jeddah", "مفتوح الآن في جدة")}</span>
                    <h1 class="hero__title">
                        {move || app.t("GRAVITY DEFYING", "مغامرة تتحدى")}
                        <br />
                        <span class="hero__accent">{move || app.t("ADVENTURE!", "الجاذبية!")}</span>
                    </h1>
                    <p class="hero__lead">{move || app.t(
                        "Saudi Arabia’s leading destination for high-energy family fun and unforgettable birthday celebrations.",
                        "الوجهة الرائدة في المملكة العربية السعودية للمرح العائلي المليء بالطاقة واحتفالات أعياد الميلاد التي لا تُنسى.",
                    )}</p>
                    <div class="hero__actions">
                        <button class="button button--primary button--large" on:click=move |_| app.navigate(Page::Contact)>
                            {move || app.t("BOOK NOW", "احجز الآن")}
                        </button>
                        <button class="button button--glass button--large" on:click=move |_| app.navigate(Page::PlanVisit)>
                            {move || app.t("EXPLORE PARK", "استكشف المنتزه")}
                        </button>
                    </div>
                </div>
            </section>

            <section class="services">
                <h2 class="section__title">{move || app.t("UNLEASH THE FUN!", "أطلق العنان للمرح!")}</h2>
                <p class="section__lead">{move || app.t(
                    "Choose your adventure and experience the most thrilling park in KSA.",
                    "اختر مغامرتك واختبر أكثر المنتزهات إثارة في المملكة.",
                )}</p>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            let page = service.page;
                            let title = service.title;
                            let description = service.description;
                            view! {
                                <div class="service-card">
                                    <div class="service-card__icon">{icon(service.icon)}</div>
                                    <h3>{move || app.text(title)}</h3>
                                    <p>{move || app.text(description)}</p>
                                    <button class="button button--primary" on:click=move |_| app.navigate(page)>
                                        {move || app.t("BOOK NOW", "احجز الآن")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="parks">
                <div class="parks__text">
                    <h2 class="section__title">{move || app.t("Two Fun Parks In One", "منتزهان في مكان واحد")}</h2>
                    <p>{move || app.t(
                        "Situated in Jeddah, Saudi Arabia, we boast a massive 2600 SQM of entertainment space. You can flip, fly, and jump through the air in our amazing arena!",
                        "يقع في جدة، المملكة العربية السعودية، ونفخر بمساحة ترفيهية ضخمة تبلغ ٢٦٠٠ متر مربع. يمكنك الشقلبة والطيران والقفز في الهواء في منطقتنا المذهلة!",
                    )}</p>
                    <p class="parks__highlight">{move || app.t(
                        "Your favorite family indoor trampoline park offers a Trampoline Arena, Basketball Corner, Volleyball Court, Giant Airbag, Mini Airbag, Inflatable Giant Slide, Inflatable Obstacle Course, Giant Spinner, Giant Slide, and much more!",
                        "يوفر منتزه الترامبولين العائلي الداخلي المفضل لديك منطقة ترامبولين، وركن كرة سلة، وملعب كرة طائرة، ووسادة هوائية عملاقة، وزلاقة ضخمة، ومسار عوائق، والمزيد!",
                    )}</p>
                    <div class="parks__attractions">
                        {ATTRACTIONS
                            .iter()
                            .map(|(name, label)| {
                                let label = *label;
                                view! { <div class="chip">{icon(*name)}<span>{move || app.text(label)}</span></div> }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="parks__media">
                    <img src="https://picsum.photos/id/1058/800/1000" alt="Parks" />
                    <div class="parks__stat">
                        <strong>"2600+"</strong>
                        <span>{move || app.t("Square Meters", "متر مربع")}</span>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>{move || app.t("Ready to experience the rush?", "هل أنت مستعد لتجربة الإثارة؟")}</h2>
                <button class="button button--inverse button--large" on:click=move |_| app.navigate(Page::Contact)>
                    {move || app.t("BOOK YOUR JUMP", "احجز قفزتك الآن")}
                </button>
            </section>
        </div>
    }
}
