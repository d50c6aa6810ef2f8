pub mod alert_source;
pub mod quote_source;
