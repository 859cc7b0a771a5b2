use dioxus::prelude::*;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "zh" => Language::Zh,
            _ => Language::En,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

/// Keys into the localized string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    SignInTitle,
    SignInSubtitle,
    Email,
    EmailPlaceholder,
    Password,
    PasswordPlaceholder,
    SigningIn,
    SignIn,
    SignInFailed,
    ForgotPassword,
    BackToLogin,
    ResetTitle,
    ResetSubtitle,
    NewPassword,
    NewPasswordPlaceholder,
    ConfirmPassword,
    ConfirmPasswordPlaceholder,
    OtpLabel,
    OtpHint,
    OtpPlaceholder,
    PasswordMismatch,
    ResetFailed,
    ResetButton,
    Loading,
    ResetSuccess,
    RedirectNotice,
    AccountTitle,
    SignedInAs,
    SignOut,
}

/// Look up the localized string for a key.
pub fn t(text: Text, lang: Language) -> &'static str {
    let (en, zh) = match text {
        Text::SignInTitle => ("Sign In", "登录"),
        Text::SignInSubtitle => ("Enter your credentials to access your account", "输入邮箱和密码登录账户"),
        Text::Email => ("Email", "邮箱"),
        Text::EmailPlaceholder => ("you@example.com", "you@example.com"),
        Text::Password => ("Password", "密码"),
        Text::PasswordPlaceholder => ("Enter your password", "输入密码"),
        Text::SigningIn => ("Signing in...", "登录中..."),
        Text::SignIn => ("Sign In", "登录"),
        Text::SignInFailed => ("Sign-in failed. Please try again.", "登录失败，请重试"),
        Text::ForgotPassword => ("Forgot password?", "忘记密码？"),
        Text::BackToLogin => ("Back to sign in", "返回登录"),
        Text::ResetTitle => ("Reset Password", "重置密码"),
        Text::ResetSubtitle => (
            "Use your email and authenticator app to reset your password",
            "使用邮箱和验证器应用重置密码",
        ),
        Text::NewPassword => ("New Password", "新密码"),
        Text::NewPasswordPlaceholder => ("Enter a new password", "输入新密码"),
        Text::ConfirmPassword => ("Confirm Password", "确认密码"),
        Text::ConfirmPasswordPlaceholder => ("Re-enter the new password", "再次输入新密码"),
        Text::OtpLabel => ("Authenticator Code", "验证码"),
        Text::OtpHint => (
            "Open your authenticator app for the 6-digit code",
            "打开验证器应用获取6位验证码",
        ),
        Text::OtpPlaceholder => ("000000", "000000"),
        Text::PasswordMismatch => ("Passwords do not match", "两次输入的密码不一致"),
        Text::ResetFailed => ("Password reset failed. Please try again.", "密码重置失败，请重试"),
        Text::ResetButton => ("Reset Password", "重置密码"),
        Text::Loading => ("Please wait...", "请稍候..."),
        Text::ResetSuccess => ("Password reset successful", "密码重置成功"),
        Text::RedirectNotice => (
            "Returning to sign-in in 3 seconds...",
            "3秒后将自动跳转到登录页面...",
        ),
        Text::AccountTitle => ("Account", "账户"),
        Text::SignedInAs => ("Signed in as", "当前登录账户"),
        Text::SignOut => ("Sign Out", "退出登录"),
    };
    match lang {
        Language::En => en,
        Language::Zh => zh,
    }
}

/// Global language state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanguageState {
    pub current: Signal<Language>,
}

impl LanguageState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(Language::default()),
        }
    }
}

/// Hook to access the current language.
pub fn use_language() -> LanguageState {
    use_context::<LanguageState>()
}
