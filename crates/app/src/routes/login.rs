use crate::auth::use_auth;
use crate::i18n::{t, use_language, Text};
use crate::routes::{LanguageToggle, Route};
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};

/// Login page with email/password sign-in.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let language = use_language();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let lang = (language.current)();

    // Bounce already-authenticated visitors to the landing page
    if auth.is_authenticated() {
        navigator().push(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let lang = (language.current)();

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::Home {});
            }
            Err(e) => {
                let message = AppError::from_server_error(&e.to_string())
                    .map(|err| err.message)
                    .unwrap_or_else(|| t(Text::SignInFailed, lang).to_string());
                error_msg.set(Some(message));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-toolbar",
                LanguageToggle {}
            }

            div { class: "auth-column",
                Card {
                    class: "auth-card",

                    CardHeader {
                        CardTitle { {t(Text::SignInTitle, lang)} }
                        CardDescription { {t(Text::SignInSubtitle, lang)} }
                    }

                    CardContent {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        form { onsubmit: handle_login,
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
                                Label { html_for: "password", {t(Text::Password, lang)} }
                                Input {
                                    input_type: "password",
                                    id: "password",
                                    placeholder: t(Text::PasswordPlaceholder, lang),
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            div { class: "auth-forgot-password",
                                Link { to: Route::ResetPassword {}, {t(Text::ForgotPassword, lang)} }
                            }
                            button {
                                r#type: "submit",
                                class: "auth-submit button",
                                disabled: loading(),
                                if loading() { {t(Text::SigningIn, lang)} } else { {t(Text::SignIn, lang)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
