use contracts::usecases::u501_checkout::{submit_checkout, CheckoutForm, CheckoutOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_order::api::HttpOrderGateway;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Customer details and the cash-on-arrival submit button.
/// `on_confirmed` receives the confirmation code once the cart is cleared.
#[component]
pub fn CheckoutPanel(on_confirmed: Callback<String>) -> impl IntoView {
    let app = use_app();
    let form = RwSignal::new(CheckoutForm::default());
    let (error, set_error) = signal::<Option<&'static str>>(None);
    let pending = move || app.session.with(|s| s.checkout_pending);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending() {
            return;
        }
        let form = form.get_untracked();
        let items = app.session.with_untracked(|s| s.cart().items().to_vec());
        set_error.set(None);
        app.session.update(|s| s.checkout_pending = true);

        spawn_local(async move {
            let outcome = submit_checkout(&HttpOrderGateway, &form, &items).await;
            // Must run before the cart empties and unmounts this panel
            if let CheckoutOutcome::Confirmed { code, stored } = &outcome {
                if !stored {
                    log::warn!("Order store not provisioned, issued local code {}", code);
                }
                on_confirmed.run(code.clone());
            }
            app.session.update(|s| {
                outcome.apply_to(s);
                s.checkout_pending = false;
            });
            match outcome {
                CheckoutOutcome::Confirmed { .. } | CheckoutOutcome::Skipped => {}
                CheckoutOutcome::Failed { reason } => {
                    log::error!("Checkout failed: {}", reason);
                    set_error.set(Some(app.t(
                        "Connection issue. Using cash at branch is always possible!",
                        "مشكلة في الاتصال. يمكنك دائماً الدفع نقداً في الفرع!",
                    )));
                }
                CheckoutOutcome::Incomplete => set_error.set(Some(app.t(
                    "Please fill in your name, phone and email.",
                    "يرجى إدخال الاسم ورقم الجوال والبريد الإلكتروني.",
                ))),
            }
        });
    };

    view! {
        <form class="checkout" on:submit=submit>
            <h3 class="checkout__title">{move || app.t("Your Details", "بياناتك")}</h3>

            <input
                class="checkout__input"
                type="text"
                required
                placeholder=move || app.t("Full Name", "الاسم الكامل")
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                class="checkout__input"
                type="tel"
                dir="ltr"
                required
                placeholder=move || app.t("Phone Number", "رقم الجوال")
                prop:value=move || form.with(|f| f.phone.clone())
                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
            />
            <input
                class="checkout__input"
                type="email"
                required
                placeholder=move || app.t("Email Address", "البريد الإلكتروني")
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />

            <div class="checkout__payment">
                <span>{move || app.t("PAYMENT METHOD", "طريقة الدفع")}</span>
                <strong>
                    {icon("fa-money-bill-wave")}
                    {move || app.t("CASH ON ARRIVAL", "نقداً عند الوصول")}
                </strong>
            </div>

            <div class="checkout__total">
                <span>{move || app.t("TOTAL", "الإجمالي")}</span>
                <strong>{move || format!("{} SR", app.cart_total())}</strong>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <button class="button button--primary checkout__submit" type="submit" disabled=pending>
                {move || if pending() {
                    app.t("Processing...", "جار المعالجة...")
                } else {
                    app.t("CONFIRM ORDER", "تأكيد الطلب")
                }}
            </button>
        </form>
    }
}
