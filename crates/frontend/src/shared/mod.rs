pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod error;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod number_format;
pub mod pagination;
pub mod print;
pub mod toast;
