use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for how much history to synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeCode {
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
    OneYear,
    /// Unrecognized code; sized like one month
    Other,
}

impl RangeCode {
    pub const ALL: [RangeCode; 5] = [
        RangeCode::OneDay,
        RangeCode::OneWeek,
        RangeCode::OneMonth,
        RangeCode::ThreeMonths,
        RangeCode::OneYear,
    ];

    /// Parse a range code. Anything unrecognized maps to `Other`, never an error.
    pub fn from_code(code: &str) -> Self {
        match code {
            "1D" => RangeCode::OneDay,
            "1W" => RangeCode::OneWeek,
            "1M" => RangeCode::OneMonth,
            "3M" => RangeCode::ThreeMonths,
            "1Y" => RangeCode::OneYear,
            _ => RangeCode::Other,
        }
    }

    /// Number of points in the series.
    ///
    /// `1D` yields 24 points but each still lands on its own calendar day;
    /// there is no intraday resolution.
    pub fn point_count(self) -> usize {
        match self {
            RangeCode::OneDay => 24,
            RangeCode::OneWeek => 7,
            RangeCode::OneMonth => 30,
            RangeCode::ThreeMonths => 90,
            RangeCode::OneYear => 250,
            RangeCode::Other => 30,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            RangeCode::OneDay => "1D",
            RangeCode::OneWeek => "1W",
            RangeCode::OneMonth => "1M",
            RangeCode::ThreeMonths => "3M",
            RangeCode::OneYear => "1Y",
            RangeCode::Other => "1M",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangeCode::OneDay => "1 day",
            RangeCode::OneWeek => "1 week",
            RangeCode::OneMonth => "1 month",
            RangeCode::ThreeMonths => "3 months",
            RangeCode::OneYear => "1 year",
            RangeCode::Other => "1 month (default)",
        }
    }
}

impl fmt::Display for RangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Selector for how many days to project forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizonCode {
    OneDay,
    ThreeDays,
    SevenDays,
    FourteenDays,
    ThirtyDays,
    /// Unrecognized code; sized like seven days
    Other,
}

impl HorizonCode {
    pub const ALL: [HorizonCode; 5] = [
        HorizonCode::OneDay,
        HorizonCode::ThreeDays,
        HorizonCode::SevenDays,
        HorizonCode::FourteenDays,
        HorizonCode::ThirtyDays,
    ];

    pub fn from_code(code: &str) -> Self {
        match code {
            "1D" => HorizonCode::OneDay,
            "3D" => HorizonCode::ThreeDays,
            "7D" => HorizonCode::SevenDays,
            "14D" => HorizonCode::FourteenDays,
            "30D" => HorizonCode::ThirtyDays,
            _ => HorizonCode::Other,
        }
    }

    pub fn days(self) -> usize {
        match self {
            HorizonCode::OneDay => 1,
            HorizonCode::ThreeDays => 3,
            HorizonCode::SevenDays => 7,
            HorizonCode::FourteenDays => 14,
            HorizonCode::ThirtyDays => 30,
            HorizonCode::Other => 7,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            HorizonCode::OneDay => "1D",
            HorizonCode::ThreeDays => "3D",
            HorizonCode::SevenDays => "7D",
            HorizonCode::FourteenDays => "14D",
            HorizonCode::ThirtyDays => "30D",
            HorizonCode::Other => "7D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HorizonCode::OneDay => "1 day",
            HorizonCode::ThreeDays => "3 days",
            HorizonCode::SevenDays => "7 days",
            HorizonCode::FourteenDays => "14 days",
            HorizonCode::ThirtyDays => "30 days",
            HorizonCode::Other => "7 days (default)",
        }
    }
}

impl fmt::Display for HorizonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_point_counts() {
        let expected = [("1D", 24), ("1W", 7), ("1M", 30), ("3M", 90), ("1Y", 250)];
        for (code, count) in expected {
            assert_eq!(RangeCode::from_code(code).point_count(), count, "{}", code);
        }
    }

    #[test]
    fn test_unrecognized_range_defaults_to_month() {
        assert_eq!(RangeCode::from_code("5Y"), RangeCode::Other);
        assert_eq!(RangeCode::from_code("1w").point_count(), 30);
        assert_eq!(RangeCode::Other.code(), "1M");
    }

    #[test]
    fn test_horizon_days() {
        let expected = [("1D", 1), ("3D", 3), ("7D", 7), ("14D", 14), ("30D", 30)];
        for (code, days) in expected {
            assert_eq!(HorizonCode::from_code(code).days(), days, "{}", code);
        }
        assert_eq!(HorizonCode::from_code("90D").days(), 7);
    }

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for range in RangeCode::ALL {
            assert_eq!(RangeCode::from_code(range.code()), range);
        }
        for horizon in HorizonCode::ALL {
            assert_eq!(HorizonCode::from_code(horizon.code()), horizon);
        }
    }
}
