use contracts::shared::api_error::ApiErrorCode;
use contracts::shared::gateway::GatewayError;
use contracts::shared::lang::Language;
use contracts::system::auth::MIN_PASSWORD_LEN;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_app;
use crate::shared::api_utils::current_query_param;
use crate::shared::icons::icon;
use crate::system::auth::api;

#[derive(Clone, Debug, PartialEq)]
enum LoginMode {
    Login,
    RequestReset,
    /// Opened from a reset link carrying `token`
    ConfirmReset { token: String },
}

/// Localized text for a failed login or reset call
pub fn login_error_message(err: &GatewayError, lang: Language) -> &'static str {
    match err.code() {
        Some(ApiErrorCode::EmailNotFound) => lang.pick(
            "No admin account uses this email.",
            "لا يوجد حساب إداري بهذا البريد الإلكتروني.",
        ),
        Some(ApiErrorCode::PasswordMismatch) => {
            lang.pick("Incorrect password.", "كلمة المرور غير صحيحة.")
        }
        Some(ApiErrorCode::Validation) => lang.pick(
            "The reset link is invalid or expired, or the password is too short.",
            "رابط إعادة التعيين غير صالح أو منتهي الصلاحية، أو كلمة المرور قصيرة جداً.",
        ),
        _ => lang.pick(
            "Something went wrong. Please try again.",
            "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
        ),
    }
}

/// Drops `?reset=` from the address bar once the token has been read
fn clear_reset_param() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();

    let initial_mode = match current_query_param("reset") {
        Some(token) => {
            clear_reset_param();
            LoginMode::ConfirmReset { token }
        }
        None => LoginMode::Login,
    };
    let mode = RwSignal::new(initial_mode);

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal::<Option<&'static str>>(None);
    let (notice, set_notice) = signal::<Option<&'static str>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let switch_mode = move |next: LoginMode| {
        set_error_message.set(None);
        set_notice.set(None);
        set_password.set(String::new());
        mode.set(next);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        let current = mode.get_untracked();

        if let LoginMode::ConfirmReset { .. } = current {
            if password_val.chars().count() < MIN_PASSWORD_LEN {
                set_error_message.set(Some(app.t(
                    "Password must be at least 8 characters.",
                    "يجب أن تتكون كلمة المرور من ٨ أحرف على الأقل.",
                )));
                return;
            }
        }

        set_is_loading.set(true);
        set_error_message.set(None);
        set_notice.set(None);

        spawn_local(async move {
            match current {
                LoginMode::Login => match api::login(email_val, password_val).await {
                    Ok(response) => {
                        log::info!("Admin {} signed in", response.admin.email);
                        app.login_succeeded(response.access_token);
                    }
                    Err(e) => set_error_message.set(Some(login_error_message(&e, app.lang()))),
                },
                LoginMode::RequestReset => match api::request_password_reset(email_val).await {
                    Ok(()) => set_notice.set(Some(app.t(
                        "If this email belongs to an admin, a reset link is on its way.",
                        "إذا كان هذا البريد يخص حساباً إدارياً، فسيصلك رابط إعادة التعيين قريباً.",
                    ))),
                    Err(e) => set_error_message.set(Some(login_error_message(&e, app.lang()))),
                },
                LoginMode::ConfirmReset { token } => {
                    match api::confirm_password_reset(token, password_val).await {
                        Ok(()) => {
                            switch_mode(LoginMode::Login);
                            set_notice.set(Some(app.t(
                                "Password updated. You can sign in now.",
                                "تم تحديث كلمة المرور. يمكنك تسجيل الدخول الآن.",
                            )));
                        }
                        Err(e) => set_error_message.set(Some(login_error_message(&e, app.lang()))),
                    }
                }
            }
            set_is_loading.set(false);
        });
    };

    let title = move || match mode.get() {
        LoginMode::Login => app.t("Admin Login", "دخول الإدارة"),
        LoginMode::RequestReset => app.t("Forgot Password", "نسيت كلمة المرور"),
        LoginMode::ConfirmReset { .. } => app.t("Set New Password", "تعيين كلمة مرور جديدة"),
    };
    let submit_label = move || match (is_loading.get(), mode.get()) {
        (true, _) => app.t("Please wait...", "يرجى الانتظار..."),
        (false, LoginMode::Login) => app.t("LOGIN", "دخول"),
        (false, LoginMode::RequestReset) => app.t("SEND RESET LINK", "إرسال رابط إعادة التعيين"),
        (false, LoginMode::ConfirmReset { .. }) => app.t("SAVE PASSWORD", "حفظ كلمة المرور"),
    };
    let shows_email = move || !matches!(mode.get(), LoginMode::ConfirmReset { .. });
    let shows_password = move || !matches!(mode.get(), LoginMode::RequestReset);

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__icon">{icon("fa-user-shield")}</div>
                <h1>{title}</h1>

                {move || error_message.get().map(|e| view! { <div class="error-message">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="info-message">{n}</div> })}

                <form on:submit=on_submit>
                    <Show when=shows_email>
                        <div class="form-group">
                            <label for="email">{move || app.t("Email", "البريد الإلكتروني")}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="admin@xtremeplay.sa"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <Show when=shows_password>
                        <div class="form-group">
                            <label for="password">
                                {move || if shows_email() {
                                    app.t("Password", "كلمة المرور")
                                } else {
                                    app.t("New Password", "كلمة المرور الجديدة")
                                }}
                            </label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {submit_label}
                    </button>
                </form>

                <div class="login-box__links">
                    {move || match mode.get() {
                        LoginMode::Login => view! {
                            <button class="button button--link" on:click=move |_| switch_mode(LoginMode::RequestReset)>
                                {move || app.t("Forgot password?", "نسيت كلمة المرور؟")}
                            </button>
                        }
                        .into_any(),
                        _ => view! {
                            <button class="button button--link" on:click=move |_| switch_mode(LoginMode::Login)>
                                {move || app.t("Back to login", "العودة لتسجيل الدخول")}
                            </button>
                        }
                        .into_any(),
                    }}
                    <button class="button button--ghost" on:click=move |_| app.cancel_login()>
                        {move || app.t("Cancel", "إلغاء")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api_error::ApiErrorBody;

    fn api_error(code: ApiErrorCode) -> GatewayError {
        GatewayError::from_body(ApiErrorBody::new(code, "x"))
    }

    #[test]
    fn credential_errors_are_told_apart() {
        let unknown = login_error_message(&api_error(ApiErrorCode::EmailNotFound), Language::En);
        let wrong = login_error_message(&api_error(ApiErrorCode::PasswordMismatch), Language::En);
        assert_ne!(unknown, wrong);
        assert_eq!(wrong, "Incorrect password.");
    }

    #[test]
    fn arabic_and_fallback_messages() {
        assert_eq!(
            login_error_message(&api_error(ApiErrorCode::PasswordMismatch), Language::Ar),
            "كلمة المرور غير صحيحة."
        );
        let network = GatewayError::Network("offline".into());
        assert_eq!(
            login_error_message(&network, Language::En),
            "Something went wrong. Please try again."
        );
    }
}
