use serde::{Deserialize, Serialize};
use std::fmt;

/// Named forecast bias profile. Not a trained model, just a parameter preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastModel {
    Cnn,
    Lstm,
    Hybrid,
    Transformer,
    /// Unrecognized model name; neutral factors
    Unknown,
}

/// Headline trend a model leans towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentTrend {
    Bullish,
    Neutral,
    Bearish,
}

impl fmt::Display for SentimentTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentTrend::Bullish => "bullish",
            SentimentTrend::Neutral => "neutral",
            SentimentTrend::Bearish => "bearish",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSentiment {
    pub trend: SentimentTrend,
    /// Headline confidence percentage shown next to the forecast
    pub confidence: u8,
}

/// Static evaluation scores (0-100, higher is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelScorecard {
    pub accuracy: u8,
    /// Inverse mean squared error score
    pub error_score: u8,
    pub directional: u8,
    pub efficiency: u8,
    pub generalization: u8,
}

/// Bias factors applied while projecting a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelProfile {
    pub model: ForecastModel,
    pub code: &'static str,
    pub label: &'static str,
    /// Damps every step; also widens the interval as it drops below 1
    pub accuracy_factor: f64,
    /// Multiplies the estimated historical volatility
    pub volatility_factor: f64,
    /// Fractional drift per projected day
    pub trend_per_day: f64,
    pub sentiment: ModelSentiment,
    pub scorecard: Option<ModelScorecard>,
}

/// Profile table. The `Unknown` entry is the fallback and must stay last.
pub static MODEL_PROFILES: &[ModelProfile] = &[
    ModelProfile {
        model: ForecastModel::Cnn,
        code: "cnn",
        label: "CNN",
        accuracy_factor: 0.80,
        volatility_factor: 1.2,
        trend_per_day: 0.0,
        sentiment: ModelSentiment {
            trend: SentimentTrend::Neutral,
            confidence: 65,
        },
        scorecard: Some(ModelScorecard {
            accuracy: 76,
            error_score: 65,
            directional: 82,
            efficiency: 90,
            generalization: 72,
        }),
    },
    ModelProfile {
        model: ForecastModel::Lstm,
        code: "lstm",
        label: "LSTM",
        accuracy_factor: 0.90,
        volatility_factor: 1.0,
        trend_per_day: 0.002,
        sentiment: ModelSentiment {
            trend: SentimentTrend::Bullish,
            confidence: 78,
        },
        scorecard: Some(ModelScorecard {
            accuracy: 82,
            error_score: 78,
            directional: 85,
            efficiency: 75,
            generalization: 80,
        }),
    },
    ModelProfile {
        model: ForecastModel::Hybrid,
        code: "hybrid",
        label: "Hybrid",
        accuracy_factor: 0.95,
        volatility_factor: 0.9,
        trend_per_day: 0.003,
        sentiment: ModelSentiment {
            trend: SentimentTrend::Bullish,
            confidence: 85,
        },
        scorecard: Some(ModelScorecard {
            accuracy: 87,
            error_score: 85,
            directional: 88,
            efficiency: 70,
            generalization: 85,
        }),
    },
    ModelProfile {
        model: ForecastModel::Transformer,
        code: "transformer",
        label: "Transformer",
        accuracy_factor: 0.85,
        volatility_factor: 1.1,
        trend_per_day: -0.001,
        sentiment: ModelSentiment {
            trend: SentimentTrend::Bearish,
            confidence: 72,
        },
        scorecard: Some(ModelScorecard {
            accuracy: 79,
            error_score: 72,
            directional: 80,
            efficiency: 65,
            generalization: 78,
        }),
    },
    ModelProfile {
        model: ForecastModel::Unknown,
        code: "",
        label: "Baseline",
        accuracy_factor: 1.0,
        volatility_factor: 1.0,
        trend_per_day: 0.0,
        sentiment: ModelSentiment {
            trend: SentimentTrend::Neutral,
            confidence: 50,
        },
        scorecard: None,
    },
];

impl ForecastModel {
    pub const ALL: [ForecastModel; 4] = [
        ForecastModel::Cnn,
        ForecastModel::Lstm,
        ForecastModel::Hybrid,
        ForecastModel::Transformer,
    ];

    /// Resolve a model name. Unrecognized names get the neutral profile.
    pub fn from_code(code: &str) -> Self {
        MODEL_PROFILES
            .iter()
            .find(|p| p.model != ForecastModel::Unknown && p.code == code)
            .map(|p| p.model)
            .unwrap_or(ForecastModel::Unknown)
    }

    pub fn profile(self) -> &'static ModelProfile {
        MODEL_PROFILES
            .iter()
            .find(|p| p.model == self)
            .unwrap_or(&MODEL_PROFILES[MODEL_PROFILES.len() - 1])
    }

    pub fn code(self) -> &'static str {
        self.profile().code
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    /// Known models ordered by scorecard accuracy, best first
    pub fn ranked_by_accuracy() -> Vec<ForecastModel> {
        let mut models = Self::ALL.to_vec();
        models.sort_by_key(|m| {
            std::cmp::Reverse(m.profile().scorecard.map(|s| s.accuracy).unwrap_or(0))
        });
        models
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastModel::Unknown => f.write_str("unknown"),
            other => f.write_str(other.code()),
        }
    }
}
