//! Maturity tier table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named maturity level, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum MaturityLevel {
    /// Fail: 0-50.99
    Insufficient,
    /// 51-60.99
    Initial,
    /// 61-70.99
    Developing,
    /// 71-80.99
    Defined,
    /// 81-90.99
    Managed,
    /// 91-100
    Optimized,
}

impl MaturityLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Insufficient => "Insufficient",
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Insufficient => "Fail: controls are largely absent or undocumented",
            Self::Initial => "Controls exist on an ad hoc basis with little consistency",
            Self::Developing => "Controls are defined but inconsistently applied",
            Self::Defined => "Controls are documented and applied across the organization",
            Self::Managed => "Controls are measured, monitored and regularly reviewed",
            Self::Optimized => "Controls are continuously improved and embedded in operations",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One inclusive score band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MaturityTier {
    pub level: MaturityLevel,
    pub min: f64,
    pub max: f64,
}

impl MaturityTier {
    const fn new(level: MaturityLevel, min: f64, max: f64) -> Self {
        Self { level, min, max }
    }

    /// Whether `score` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }
}

const STANDARD_TIERS: [MaturityTier; 6] = [
    MaturityTier::new(MaturityLevel::Insufficient, 0.0, 50.99),
    MaturityTier::new(MaturityLevel::Initial, 51.0, 60.99),
    MaturityTier::new(MaturityLevel::Developing, 61.0, 70.99),
    MaturityTier::new(MaturityLevel::Defined, 71.0, 80.99),
    MaturityTier::new(MaturityLevel::Managed, 81.0, 90.99),
    MaturityTier::new(MaturityLevel::Optimized, 91.0, 100.0),
];

/// Ordered, non-overlapping maturity tiers covering 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityTable {
    tiers: Vec<MaturityTier>,
}

impl Default for MaturityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl MaturityTable {
    /// The six-tier table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiers: STANDARD_TIERS.to_vec(),
        }
    }

    #[must_use]
    pub fn tiers(&self) -> &[MaturityTier] {
        &self.tiers
    }

    /// Find the tier for a total score.
    ///
    /// The score is rounded to hundredths first so values between a `.99`
    /// boundary and the next integer land in a tier. Scores outside every
    /// range (negative, above 100, NaN) fall back to the lowest tier.
    #[must_use]
    pub fn lookup(&self, score: f64) -> MaturityTier {
        let rounded = (score * 100.0).round() / 100.0;
        self.tiers
            .iter()
            .find(|tier| tier.contains(rounded))
            .or_else(|| self.tiers.first())
            .copied()
            .unwrap_or(STANDARD_TIERS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tier_boundaries() {
        let table = MaturityTable::standard();
        assert_eq!(table.lookup(0.0).level, MaturityLevel::Insufficient);
        assert_eq!(table.lookup(50.99).level, MaturityLevel::Insufficient);
        assert_eq!(table.lookup(51.0).level, MaturityLevel::Initial);
        assert_eq!(table.lookup(61.0).level, MaturityLevel::Developing);
        assert_eq!(table.lookup(70.99).level, MaturityLevel::Developing);
        assert_eq!(table.lookup(71.0).level, MaturityLevel::Defined);
        assert_eq!(table.lookup(85.5).level, MaturityLevel::Managed);
        assert_eq!(table.lookup(91.0).level, MaturityLevel::Optimized);
        assert_eq!(table.lookup(100.0).level, MaturityLevel::Optimized);
    }

    #[test]
    fn test_lookup_between_boundaries() {
        let table = MaturityTable::standard();
        // 60.996 rounds to 61.00
        assert_eq!(table.lookup(60.996).level, MaturityLevel::Developing);
        assert_eq!(table.lookup(60.991).level, MaturityLevel::Initial);
        assert_eq!(table.lookup(70.999).level, MaturityLevel::Defined);
    }

    #[test]
    fn test_lookup_out_of_range_falls_back_to_lowest() {
        let table = MaturityTable::standard();
        assert_eq!(table.lookup(-5.0).level, MaturityLevel::Insufficient);
        assert_eq!(table.lookup(120.0).level, MaturityLevel::Insufficient);
        assert_eq!(table.lookup(f64::NAN).level, MaturityLevel::Insufficient);
    }

    #[test]
    fn test_tiers_partition_without_overlap() {
        let tiers = MaturityTable::standard().tiers().to_vec();
        assert_eq!(tiers.len(), 6);
        assert_eq!(tiers[0].min, 0.0);
        assert_eq!(tiers[5].max, 100.0);
        for pair in tiers.windows(2) {
            assert!(pair[0].max < pair[1].min);
            assert!((pair[1].min - pair[0].max - 0.01).abs() < 1e-9);
            assert!(pair[0].level < pair[1].level);
        }
    }

    #[test]
    fn test_lookup_monotonic() {
        let table = MaturityTable::standard();
        let mut previous = MaturityLevel::Insufficient;
        for step in 0..=100_000_u32 {
            let score = f64::from(step) / 1000.0;
            let level = table.lookup(score).level;
            assert!(level >= previous, "tier decreased at {score}");
            previous = level;
        }
    }
}
