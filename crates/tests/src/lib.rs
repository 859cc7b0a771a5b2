#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod reset_password_tests;

#[cfg(test)]
mod validation_tests;
