//! Status classifications shared by the estimators.

use serde::{Deserialize, Serialize};

/// Three-level capacity status used to color table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStatus {
    /// Comfortably within limits.
    Ok,
    /// Approaching limits.
    Warning,
    /// At or beyond limits.
    Bad,
}

impl CapacityStatus {
    /// Classifies `value` against two ascending breakpoints.
    ///
    /// `value < warning` is [`Ok`](Self::Ok), `value < bad` is
    /// [`Warning`](Self::Warning), anything else is [`Bad`](Self::Bad).
    #[must_use]
    pub fn from_breakpoints(value: f64, warning: f64, bad: f64) -> Self {
        if value < warning {
            Self::Ok
        } else if value < bad {
            Self::Warning
        } else {
            Self::Bad
        }
    }

    /// Returns [`Ok`](Self::Ok) when `within` holds, [`Bad`](Self::Bad) otherwise.
    #[must_use]
    pub const fn within(within: bool) -> Self {
        if within { Self::Ok } else { Self::Bad }
    }

    /// Returns true for [`Ok`](Self::Ok).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns the status as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Bad => "bad",
        }
    }
}

impl std::fmt::Display for CapacityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Four-level rating of a single metric against three ascending breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisLevel {
    /// Below the first breakpoint.
    Good,
    /// Below the second breakpoint.
    Moderate,
    /// Below the third breakpoint.
    High,
    /// At or above the third breakpoint.
    Critical,
}

impl AxisLevel {
    /// Classifies `value` against `[moderate, high, critical]` breakpoints.
    #[must_use]
    pub fn from_breakpoints(value: f64, breakpoints: [f64; 3]) -> Self {
        let [moderate, high, critical] = breakpoints;
        if value < moderate {
            Self::Good
        } else if value < high {
            Self::Moderate
        } else if value < critical {
            Self::High
        } else {
            Self::Critical
        }
    }

    /// Collapses the level onto the three-level capacity scale.
    #[must_use]
    pub const fn capacity_status(&self) -> CapacityStatus {
        match self {
            Self::Good => CapacityStatus::Ok,
            Self::Moderate | Self::High => CapacityStatus::Warning,
            Self::Critical => CapacityStatus::Bad,
        }
    }

    /// Returns the level as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AxisLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall performance rating of a projected month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceStatus {
    /// Every metric is in its best band.
    Excellent,
    /// Every metric is at most moderate.
    Good,
    /// Every metric is at most high.
    Acceptable,
    /// At least one metric is critical.
    Poor,
}

impl PerformanceStatus {
    /// Maps the rating onto the three-level capacity scale.
    #[must_use]
    pub const fn capacity_status(&self) -> CapacityStatus {
        match self {
            Self::Excellent | Self::Good => CapacityStatus::Ok,
            Self::Acceptable => CapacityStatus::Warning,
            Self::Poor => CapacityStatus::Bad,
        }
    }

    /// Returns the rating as a display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
