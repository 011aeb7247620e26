use serde::{Deserialize, Serialize};
use std::fmt;

/// Tickers with a dedicated price profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Aapl,
    Googl,
    Msft,
    Amzn,
    Baba,
    /// Any ticker without its own profile
    Unknown,
}

/// Seed price and per-step volatility for a ticker's random walk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SymbolProfile {
    pub symbol: Symbol,
    pub ticker: &'static str,
    pub name: &'static str,
    pub base_price: f64,
    pub volatility: f64,
}

/// Profile table. The `Unknown` entry is the fallback and must stay last.
pub static SYMBOL_PROFILES: &[SymbolProfile] = &[
    SymbolProfile {
        symbol: Symbol::Aapl,
        ticker: "AAPL",
        name: "Apple Inc.",
        base_price: 175.50,
        volatility: 3.0,
    },
    SymbolProfile {
        symbol: Symbol::Googl,
        ticker: "GOOGL",
        name: "Alphabet Inc.",
        base_price: 135.20,
        volatility: 4.0,
    },
    SymbolProfile {
        symbol: Symbol::Msft,
        ticker: "MSFT",
        name: "Microsoft Corporation",
        base_price: 330.80,
        volatility: 5.0,
    },
    SymbolProfile {
        symbol: Symbol::Amzn,
        ticker: "AMZN",
        name: "Amazon.com Inc.",
        base_price: 127.90,
        volatility: 3.5,
    },
    SymbolProfile {
        symbol: Symbol::Baba,
        ticker: "BABA",
        name: "Alibaba Group",
        base_price: 85.40,
        volatility: 2.5,
    },
    SymbolProfile {
        symbol: Symbol::Unknown,
        ticker: "",
        name: "Unlisted",
        base_price: 100.0,
        volatility: 2.0,
    },
];

impl Symbol {
    /// Known tickers in display order
    pub const ALL: [Symbol; 5] = [
        Symbol::Aapl,
        Symbol::Googl,
        Symbol::Msft,
        Symbol::Amzn,
        Symbol::Baba,
    ];

    /// Resolve a ticker. Matching is exact and case-sensitive.
    pub fn from_ticker(ticker: &str) -> Self {
        SYMBOL_PROFILES
            .iter()
            .find(|p| p.symbol != Symbol::Unknown && p.ticker == ticker)
            .map(|p| p.symbol)
            .unwrap_or(Symbol::Unknown)
    }

    pub fn profile(self) -> &'static SymbolProfile {
        SYMBOL_PROFILES
            .iter()
            .find(|p| p.symbol == self)
            .unwrap_or(&SYMBOL_PROFILES[SYMBOL_PROFILES.len() - 1])
    }

    pub fn ticker(self) -> &'static str {
        self.profile().ticker
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Unknown => write!(f, "UNKNOWN"),
            other => write!(f, "{}", other.ticker()),
        }
    }
}
