pub mod home;
pub mod login;
pub mod not_found;
pub mod reset_password;

use dioxus::prelude::*;

use crate::i18n::use_language;

use home::Home;
use login::Login;
use not_found::NotFound;
use reset_password::ResetPassword;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Switches the UI language between English and Chinese.
#[component]
pub fn LanguageToggle() -> Element {
    let mut lang = use_language();
    let current = (lang.current)();

    // Label shows the language you would switch TO
    let label = match current {
        crate::i18n::Language::En => "中文",
        crate::i18n::Language::Zh => "EN",
    };

    rsx! {
        button {
            r#type: "button",
            class: "lang-toggle",
            onclick: move |_| lang.current.set(current.toggled()),
            "{label}"
        }
    }
}
