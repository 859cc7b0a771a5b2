use crate::i18n::{t, use_language, Text};
use crate::routes::{LanguageToggle, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdEye, LdEyeOff, LdKeyRound};
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

/// Authenticator codes are always 6 digits.
const OTP_LEN: usize = 6;

/// How long the success view stays up before returning to sign-in.
const REDIRECT_DELAY_MS: u32 = 3000;

/// Strip non-digit characters and cap at `OTP_LEN` digits.
fn sanitize_otp(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LEN)
        .collect()
}

/// Whether the code is complete enough to submit.
fn otp_complete(otp: &str) -> bool {
    otp.len() == OTP_LEN && otp.chars().all(|c| c.is_ascii_digit())
}

/// Reset password page — the user proves ownership with a 6-digit code
/// from their authenticator app and sets a new password.
#[component]
pub fn ResetPassword() -> Element {
    let language = use_language();
    let mut email = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut otp_code = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut show_confirm_password = use_signal(|| false);

    let lang = (language.current)();

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        success.set(false);

        let lang = (language.current)();

        if new_password() != confirm_password() {
            error_msg.set(Some(t(Text::PasswordMismatch, lang).to_string()));
            return;
        }

        loading.set(true);

        match server::api::reset_password(email(), new_password(), otp_code()).await {
            Ok(_) => {
                success.set(true);
                // One-shot deferred redirect; navigation is global, so the
                // task firing after unmount is harmless.
                spawn(async move {
                    let _ = document::eval(&format!(
                        "return new Promise((resolve) => setTimeout(resolve, {REDIRECT_DELAY_MS}));"
                    ))
                    .await;
                    navigator().push(Route::Login {});
                });
            }
            Err(e) => {
                let message = AppError::from_server_error(&e.to_string())
                    .map(|err| err.message)
                    .unwrap_or_else(|| t(Text::ResetFailed, lang).to_string());
                error_msg.set(Some(message));
            }
        }

        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../routes/login.css") }

        div { class: "auth-page",
            div { class: "auth-toolbar",
                LanguageToggle {}
            }

            div { class: "auth-column",
                Link { to: Route::Login {}, class: "auth-back-link",
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    {t(Text::BackToLogin, lang)}
                }

                Card {
                    class: "auth-card",

                    CardHeader {
                        div { class: "auth-card-icon",
                            Icon::<LdKeyRound> { icon: LdKeyRound, width: 28, height: 28 }
                        }
                        CardTitle { {t(Text::ResetTitle, lang)} }
                        CardDescription { {t(Text::ResetSubtitle, lang)} }
                    }

                    CardContent {
                        if success() {
                            div { class: "auth-success",
                                p { class: "auth-success-title", {t(Text::ResetSuccess, lang)} }
                                p { class: "auth-success-hint", {t(Text::RedirectNotice, lang)} }
                            }
                        } else {
                            if let Some(err) = error_msg() {
                                div { class: "auth-error", "{err}" }
                            }

                            form { onsubmit: handle_submit,
                                div { class: "auth-field",
                                    Label { html_for: "email", {t(Text::Email, lang)} }
                                    Input {
                                        input_type: "email",
                                        id: "email",
                                        placeholder: t(Text::EmailPlaceholder, lang),
                                        value: email(),
                                        on_input: move |e: FormEvent| email.set(e.value()),
                                    }
                                }

                                div { class: "auth-field",
                                    Label { html_for: "new_password", {t(Text::NewPassword, lang)} }
                                    div { class: "auth-password-wrapper",
                                        Input {
                                            input_type: if show_password() { "text" } else { "password" },
                                            id: "new_password",
                                            placeholder: t(Text::NewPasswordPlaceholder, lang),
                                            value: new_password(),
                                            on_input: move |e: FormEvent| new_password.set(e.value()),
                                        }
                                        button {
                                            r#type: "button",
                                            class: "auth-password-toggle",
                                            onclick: move |_| show_password.toggle(),
                                            if show_password() {
                                                Icon::<LdEyeOff> { icon: LdEyeOff, width: 18, height: 18 }
                                            } else {
                                                Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                                            }
                                        }
                                    }
                                }

                                div { class: "auth-field",
                                    Label { html_for: "confirm_password", {t(Text::ConfirmPassword, lang)} }
                                    div { class: "auth-password-wrapper",
                                        Input {
                                            input_type: if show_confirm_password() { "text" } else { "password" },
                                            id: "confirm_password",
                                            placeholder: t(Text::ConfirmPasswordPlaceholder, lang),
                                            value: confirm_password(),
                                            on_input: move |e: FormEvent| confirm_password.set(e.value()),
                                        }
                                        button {
                                            r#type: "button",
                                            class: "auth-password-toggle",
                                            onclick: move |_| show_confirm_password.toggle(),
                                            if show_confirm_password() {
                                                Icon::<LdEyeOff> { icon: LdEyeOff, width: 18, height: 18 }
                                            } else {
                                                Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                                            }
                                        }
                                    }
                                }

                                div { class: "auth-field",
                                    Label { html_for: "otp_code", {t(Text::OtpLabel, lang)} }
                                    p { class: "auth-otp-hint", {t(Text::OtpHint, lang)} }
                                    Input {
                                        id: "otp_code",
                                        placeholder: t(Text::OtpPlaceholder, lang),
                                        value: otp_code(),
                                        maxlength: OTP_LEN as i64,
                                        on_input: move |e: FormEvent| otp_code.set(sanitize_otp(&e.value())),
                                        class: "auth-otp-input",
                                    }
                                }

                                button {
                                    r#type: "submit",
                                    class: "auth-submit button",
                                    disabled: loading() || !otp_complete(&otp_code()),
                                    if loading() { {t(Text::Loading, lang)} } else { {t(Text::ResetButton, lang)} }
                                }
                            }
                        }
                    }

                    CardFooter {
                        p { class: "auth-link",
                            Link { to: Route::Login {}, {t(Text::BackToLogin, lang)} }
                        }
                    }
                }
            }
        }
    }
}
