// Core modules
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod synthetic;

// Re-export commonly used types
pub use api::{fetch_stock_data, get_prediction_data, MarketDataService};
pub use catalog::{ForecastModel, HorizonCode, RangeCode, Symbol};
pub use config::Settings;
pub use models::*;

// Error handling
pub use error::{Error, Result};
