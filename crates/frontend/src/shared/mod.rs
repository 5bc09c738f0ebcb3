pub mod api_utils;
pub mod clipboard;
pub mod gateway;
pub mod icons;
