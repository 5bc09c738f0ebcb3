use contracts::shared::cart::ItemKind;
use contracts::shared::page::Page;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use crate::usecases::u501_checkout::CheckoutPanel;

#[component]
pub fn CartPage() -> impl IntoView {
    let app = use_app();
    let (confirmed, set_confirmed) = signal::<Option<String>>(None);
    let empty = Memo::new(move |_| app.cart_count() == 0);

    view! {
        <div class="page page--cart">
            {move || match confirmed.get() {
                Some(code) => view! { <OrderConfirmed code=code /> }.into_any(),
                None if empty.get() => view! { <EmptyCart /> }.into_any(),
                None => view! {
                    <div class="cart">
                        <CartSummary />
                        <CheckoutPanel on_confirmed=Callback::new(move |code: String| set_confirmed.set(Some(code))) />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="cart__summary">
            <h1 class="cart__title">{move || app.t("Order Summary", "ملخص الطلب")}</h1>
            <For
                each=move || app.cart_items()
                key=|item| (item.id.clone(), item.quantity)
                children=move |item| {
                    let id = item.id.clone();
                    let kind_icon = match item.kind {
                        ItemKind::Ticket => "fa-ticket",
                        ItemKind::Package => "fa-box",
                    };
                    let line_total = item.line_total();
                    let unit_line = format!("{} SR × {}", item.price, item.quantity);
                    view! {
                        <div class="cart-line">
                            <div class="cart-line__icon">{icon(kind_icon)}</div>
                            <div class="cart-line__body">
                                <h3>{move || item.name(app.lang()).to_string()}</h3>
                                <span>{unit_line}</span>
                            </div>
                            <strong class="cart-line__total">{format!("{} SR", line_total)}</strong>
                            <button
                                class="button button--ghost cart-line__remove"
                                aria-label="Remove"
                                on:click=move |_| app.remove_from_cart(&id)
                            >
                                {icon("fa-trash")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="cart-empty">
            {icon("fa-cart-shopping")}
            <h2>{move || app.t("Your cart is empty", "سلة التسوق فارغة")}</h2>
            <button class="button button--primary" on:click=move |_| app.navigate(Page::PlanVisit)>
                {move || app.t("BROWSE TICKETS", "تصفح التذاكر")}
            </button>
        </div>
    }
}

#[component]
fn OrderConfirmed(code: String) -> impl IntoView {
    let app = use_app();
    let code_for_text = code.clone();

    view! {
        <div class="order-confirmed">
            <div class="order-confirmed__icon">{icon("fa-check")}</div>
            <h2>{move || app.t("Booking Confirmed!", "تم تأكيد الحجز!")}</h2>
            <p>{move || {
                let code = &code_for_text;
                app.lang().pick(
                    &format!("Your order #{} has been placed. Please show this screen at the branch to pay and collect your tickets.", code),
                    &format!("تم تسجيل طلبك رقم #{}. يرجى إبراز هذه الشاشة في الفرع للدفع واستلام تذاكرك.", code),
                )
                .to_string()
            }}</p>
            <div class="order-confirmed__code">
                <span>{move || app.t("Order Number", "رقم الطلب")}</span>
                <strong>{format!("#{}", code)}</strong>
            </div>
            <button class="button button--dark" on:click=move |_| app.navigate(Page::Home)>
                {move || app.t("BACK TO HOME", "العودة للرئيسية")}
            </button>
        </div>
    }
}
