pub mod api;
pub mod api_utils;
pub mod catalog;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod notify;
