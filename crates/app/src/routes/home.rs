use crate::auth::use_auth;
use crate::i18n::{t, use_language, Text};
use crate::routes::{LanguageToggle, Route};
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Separator};

/// Signed-in landing page.
#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let language = use_language();

    let lang = (language.current)();

    if !auth.is_authenticated() {
        navigator().push(Route::Login {});
    }

    let account_email = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

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
                        CardTitle { {t(Text::AccountTitle, lang)} }
                    }

                    CardContent {
                        p { class: "account-label", {t(Text::SignedInAs, lang)} }
                        p { class: "account-email", "{account_email}" }

                        Separator {}

                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                auth.clear_auth();
                                navigator().push(Route::Login {});
                            },
                            {t(Text::SignOut, lang)}
                        }
                    }
                }
            }
        }
    }
}
