pub mod record;
pub mod query;
pub mod analytics;

// Datasets
pub mod alert;
pub mod budget;
pub mod goal;
pub mod health;
pub mod holding;
pub mod sector;
pub mod transaction;
pub mod watchlist;

pub mod settings;
