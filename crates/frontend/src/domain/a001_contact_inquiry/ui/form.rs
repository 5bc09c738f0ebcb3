use contracts::domain::a001_contact_inquiry::aggregate::{ContactInquiryDto, InquiryType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_contact_inquiry::api;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// How long the "message sent" panel stays up
const SUBMITTED_PANEL_MS: u32 = 5_000;

#[component]
pub fn ContactForm() -> impl IntoView {
    let app = use_app();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (inquiry_type, set_inquiry_type) = signal(InquiryType::General);
    let (message, set_message) = signal(String::new());

    let (sending, set_sending) = signal(false);
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let reset_fields = move || {
        set_full_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_inquiry_type.set(InquiryType::General);
        set_message.set(String::new());
    };

    let show_submitted = move || {
        reset_fields();
        set_submitted.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUBMITTED_PANEL_MS).await;
            set_submitted.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let dto = ContactInquiryDto {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            inquiry_type: inquiry_type.get_untracked(),
            message: message.get_untracked(),
        };
        if dto.validate().is_err() {
            set_error.set(Some(app.t(
                "Please fill in your name, a valid email and your phone.",
                "يرجى إدخال الاسم وبريد إلكتروني صحيح ورقم الجوال.",
            )));
            return;
        }

        set_error.set(None);
        set_sending.set(true);
        spawn_local(async move {
            match api::create_inquiry(&dto).await {
                Ok(_) => show_submitted(),
                Err(e) if e.is_not_provisioned() => {
                    log::warn!("Contacts collection is not provisioned, inquiry not stored");
                    show_submitted();
                }
                Err(e) => {
                    log::error!("Failed to send inquiry: {}", e);
                    set_error.set(Some(app.t(
                        "We could not send your message. Please call us or reach us on WhatsApp.",
                        "تعذر إرسال رسالتك. يرجى الاتصال بنا أو التواصل عبر واتساب.",
                    )));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="contact-form">
            <Show
                when=move || !submitted.get()
                fallback=move || view! {
                    <div class="contact-form__sent">
                        <div class="contact-form__sent-icon">{icon("fa-check")}</div>
                        <h3>{move || app.t("Message Sent!", "تم إرسال الرسالة!")}</h3>
                        <p>{move || app.t(
                            "Thank you for reaching out. Our team will contact you shortly.",
                            "شكرًا لتواصلك معنا. سيتصل بك فريقنا قريبًا.",
                        )}</p>
                    </div>
                }
            >
                <form on:submit=on_submit>
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                    <div class="form-group">
                        <label for="contact-name">{move || app.t("Full Name", "الاسم الكامل")}</label>
                        <input
                            id="contact-name"
                            type="text"
                            required
                            placeholder=move || app.t("John Doe", "الاسم الكريم")
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="contact-email">{move || app.t("Email", "البريد الإلكتروني")}</label>
                            <input
                                id="contact-email"
                                type="email"
                                required
                                placeholder="example@email.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-phone">{move || app.t("Phone", "رقم الجوال")}</label>
                            <input
                                id="contact-phone"
                                type="tel"
                                required
                                placeholder="05XXXXXXXX"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="contact-type">{move || app.t("Inquiry Type", "نوع الاستفسار")}</label>
                        <select
                            id="contact-type"
                            on:change=move |ev| set_inquiry_type.set(InquiryType::from_str_lossy(&event_target_value(&ev)))
                        >
                            {InquiryType::ALL
                                .into_iter()
                                .map(|kind| view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || inquiry_type.get() == kind
                                    >
                                        {move || kind.label(app.lang())}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="contact-message">{move || app.t("Message", "الرسالة")}</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            placeholder=move || app.t("Tell us more...", "اكتب تفاصيل استفسارك...")
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button type="submit" class="button button--primary" disabled=move || sending.get()>
                        {move || if sending.get() {
                            icon("fa-spinner fa-spin")
                        } else {
                            app.t("SEND MESSAGE", "إرسال الرسالة").into_any()
                        }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
