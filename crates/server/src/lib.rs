#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod authsvc;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;
