pub mod account;
pub mod api;
pub mod config;
pub mod csrf;
pub mod format;
pub mod history;
pub mod landing;
pub mod notify;
pub mod overlay;
pub mod platform;
pub mod services;
pub mod theme;
pub mod tokens;
pub mod transcript;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
