pub mod use_filter;
pub mod use_market;
