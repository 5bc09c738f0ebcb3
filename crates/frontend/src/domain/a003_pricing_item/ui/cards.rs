use contracts::domain::a003_pricing_item::overlay::apply_overlay;
use contracts::shared::catalog::PricingCard;
use contracts::shared::lang::Text;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_pricing_item::api;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Bundled cards right away, overridden in place by live pricing rows once
/// they arrive. Failed lookups leave the defaults untouched.
pub fn use_pricing_cards(defaults: Vec<PricingCard>) -> ReadSignal<Vec<PricingCard>> {
    let keys: Vec<&'static str> = defaults.iter().map(|card| card.key).collect();
    let (cards, set_cards) = signal(defaults);

    spawn_local(async move {
        match api::fetch_pricing(&keys).await {
            Ok(rows) => set_cards.update(|cards| apply_overlay(cards, &rows)),
            Err(e) => log::debug!("Pricing overlay skipped: {}", e),
        }
    });

    cards
}

/// One price card with its feature list and an add-to-cart button
#[component]
pub fn PricingCardView(
    card: PricingCard,
    /// Label of the action button
    action: Text,
    /// Ribbon shown on best-value cards
    #[prop(optional)]
    ribbon: Option<Text>,
    /// Jump to the cart after adding
    #[prop(optional)]
    redirect: bool,
) -> impl IntoView {
    let app = use_app();
    let item = card.to_cart_item();
    let highlighted = card.best_value;
    let features = card.features.clone();
    let title_card = card.clone();
    let price_card = card;

    view! {
        <div class=if highlighted { "price-card price-card--highlighted" } else { "price-card" }>
            {ribbon
                .filter(|_| highlighted)
                .map(|r| view! { <div class="price-card__ribbon">{move || app.text(r)}</div> })}
            <h3 class="price-card__title">{move || title_card.title(app.lang()).to_string()}</h3>
            <div class="price-card__price">{move || price_card.price(app.lang()).to_string()}</div>
            <ul class="price-card__features">
                {features
                    .into_iter()
                    .map(|feature| view! {
                        <li>{icon("fa-check")}<span>{move || app.text(feature)}</span></li>
                    })
                    .collect_view()}
            </ul>
            <button
                class="button button--primary price-card__action"
                on:click=move |_| app.add_to_cart(item.clone(), redirect)
            >
                {move || app.text(action)}
            </button>
        </div>
    }
}
