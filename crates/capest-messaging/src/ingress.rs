//! Ingress rates in the two accepted units.

use std::str::FromStr;

use capest_types::{InputError, input};
use serde::{Deserialize, Serialize};

/// Bytes per GiB.
pub const BYTES_PER_GIB: f64 = 1_073_741_824.0;

/// Bytes per decimal terabyte.
pub const BYTES_PER_TB: f64 = 1e12;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Unit an ingress value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngressUnit {
    /// Sustained throughput in GiB per second.
    #[default]
    GibPerSec,
    /// Daily volume in decimal terabytes per day.
    TbPerDay,
}

impl IngressUnit {
    /// Returns the unit as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GibPerSec => "gib-per-sec",
            Self::TbPerDay => "tb-per-day",
        }
    }

    pub(crate) const fn field(&self) -> &'static str {
        match self {
            Self::GibPerSec => "number greater than 0 for GiB/sec ingress",
            Self::TbPerDay => "number greater than 0 for TB/day ingress",
        }
    }
}

impl std::fmt::Display for IngressUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IngressUnit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gib-per-sec" | "gib" | "gibps" => Ok(Self::GibPerSec),
            "tb-per-day" | "tb" | "tbpd" => Ok(Self::TbPerDay),
            _ => Err(InputError::UnknownChoice {
                field: "ingress unit",
                value: s.to_string(),
                expected: "gib-per-sec, tb-per-day",
            }),
        }
    }
}

/// A validated, strictly positive ingress rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ingress {
    value: f64,
    unit: IngressUnit,
}

impl Ingress {
    /// Creates an ingress rate.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotPositive`] if `value` is not strictly positive
    /// and [`InputError::TooLarge`] if its rate in bytes/sec overflows.
    pub fn new(value: f64, unit: IngressUnit) -> Result<Self, InputError> {
        Self {
            value: input::positive(unit.field(), value)?,
            unit,
        }
        .checked()
    }

    /// Creates a throughput-based ingress rate in GiB/sec.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotPositive`] if `gib` is not strictly positive.
    pub fn gib_per_sec(gib: f64) -> Result<Self, InputError> {
        Self::new(gib, IngressUnit::GibPerSec)
    }

    /// Creates a volume-based ingress rate in TB/day.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotPositive`] if `tb` is not strictly positive.
    pub fn tb_per_day(tb: f64) -> Result<Self, InputError> {
        Self::new(tb, IngressUnit::TbPerDay)
    }

    /// Parses an ingress value from a raw text field.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the text is non-numeric, not strictly
    /// positive or too large to convert to bytes/sec.
    pub fn parse(raw: &str, unit: IngressUnit) -> Result<Self, InputError> {
        Self {
            value: input::parse_positive(unit.field(), raw)?,
            unit,
        }
        .checked()
    }

    fn checked(self) -> Result<Self, InputError> {
        input::finite_derived(self.unit.field(), self.value, self.bytes_per_sec())?;
        Ok(self)
    }

    /// Returns the value in its own unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> IngressUnit {
        self.unit
    }

    /// Returns the sustained rate in bytes per second.
    #[must_use]
    pub fn bytes_per_sec(&self) -> f64 {
        match self.unit {
            IngressUnit::GibPerSec => self.value * BYTES_PER_GIB,
            IngressUnit::TbPerDay => self.value * BYTES_PER_TB / SECONDS_PER_DAY,
        }
    }
}

impl std::fmt::Display for Ingress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            IngressUnit::GibPerSec => write!(f, "{} GiB/sec", self.value),
            IngressUnit::TbPerDay => write!(f, "{} TB/day", self.value),
        }
    }
}
