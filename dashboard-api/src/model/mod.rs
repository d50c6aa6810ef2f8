pub mod notification;
pub mod preferences;
pub mod quote;
pub mod watchlist;
