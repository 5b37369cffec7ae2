pub mod api;
pub mod date_utils;
pub mod status_filter;
