// Fixed lookup tables: tickers, forecast models and range/horizon codes
// Everything here is compile-time data; nothing is read from the environment

pub mod codes;
pub mod models;
pub mod symbols;

pub use codes::{HorizonCode, RangeCode};
pub use models::{ForecastModel, ModelProfile, ModelScorecard, ModelSentiment, SentimentTrend};
pub use symbols::{Symbol, SymbolProfile};
