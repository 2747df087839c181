//! Cluster tiers and their limits.

use std::str::FromStr;

use capest_types::InputError;
use serde::{Deserialize, Serialize};

/// Named cluster configuration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Dedicated tier.
    #[default]
    Dedicated,
    /// Custom (self-sized) tier.
    Custom,
}

impl Tier {
    /// Returns the tier as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dedicated => "dedicated",
            Self::Custom => "custom",
        }
    }

    /// Returns all tiers.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dedicated, Self::Custom]
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dedicated" => Ok(Self::Dedicated),
            "custom" | "standard" => Ok(Self::Custom),
            _ => Err(InputError::UnknownChoice {
                field: "tier",
                value: s.to_string(),
                expected: "dedicated, custom",
            }),
        }
    }
}

/// Ceilings fixed by a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// Maximum partitions per topic in one cluster.
    pub max_partitions_per_topic: u32,
    /// Maximum capacity units in one cluster.
    pub max_capacity_units_per_cluster: u32,
}

/// Throughput constants and tier ceilings of the messaging service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessagingLimits {
    /// Throughput one partition sustains, in bytes/sec.
    pub partition_throughput_bytes_per_sec: f64,
    /// Partitions served by one capacity unit.
    pub partitions_per_capacity_unit: u32,
    /// Ceilings of the dedicated tier.
    pub dedicated: TierLimits,
    /// Ceilings of the custom tier.
    pub custom: TierLimits,
}

impl MessagingLimits {
    /// Default limits: 60 MB/sec per partition, 150 partitions per capacity
    /// unit, 1024/10 for dedicated and 1008/36 for custom clusters.
    pub const DEFAULT: Self = Self {
        partition_throughput_bytes_per_sec: 60_000_000.0,
        partitions_per_capacity_unit: 150,
        dedicated: TierLimits {
            max_partitions_per_topic: 1024,
            max_capacity_units_per_cluster: 10,
        },
        custom: TierLimits {
            max_partitions_per_topic: 1008,
            max_capacity_units_per_cluster: 36,
        },
    };

    /// Returns the ceilings of `tier`.
    #[must_use]
    pub const fn tier(&self, tier: Tier) -> TierLimits {
        match tier {
            Tier::Dedicated => self.dedicated,
            Tier::Custom => self.custom,
        }
    }

    /// Returns the capacity units needed to serve `total_partitions`.
    #[must_use]
    pub fn capacity_units_for(&self, total_partitions: u64) -> u64 {
        total_partitions.div_ceil(u64::from(self.partitions_per_capacity_unit))
    }
}

impl Default for MessagingLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse() {
        assert_eq!("dedicated".parse::<Tier>().unwrap(), Tier::Dedicated);
        assert_eq!("Custom".parse::<Tier>().unwrap(), Tier::Custom);
        assert_eq!("standard".parse::<Tier>().unwrap(), Tier::Custom);
        assert!("premium".parse::<Tier>().is_err());
        assert_eq!(Tier::Custom.to_string(), "custom");
    }

    #[test]
    fn test_tier_limits() {
        let limits = MessagingLimits::default();
        assert_eq!(limits.tier(Tier::Dedicated).max_partitions_per_topic, 1024);
        assert_eq!(limits.tier(Tier::Dedicated).max_capacity_units_per_cluster, 10);
        assert_eq!(limits.tier(Tier::Custom).max_partitions_per_topic, 1008);
        assert_eq!(limits.tier(Tier::Custom).max_capacity_units_per_cluster, 36);
    }

    #[test]
    fn test_capacity_units_round_up() {
        let limits = MessagingLimits::default();
        assert_eq!(limits.capacity_units_for(1), 1);
        assert_eq!(limits.capacity_units_for(150), 1);
        assert_eq!(limits.capacity_units_for(151), 2);
        assert_eq!(limits.capacity_units_for(0), 0);
    }
}
