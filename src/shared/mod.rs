pub mod constants;
pub mod content_filter;
pub mod test_helpers;
pub mod timefmt;
pub mod types;
