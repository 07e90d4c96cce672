//! Quality-control tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quality-control service level with a fixed fee.
///
/// Fees are in PKR and folded into the line-item total at quote time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QcTier {
    /// Basic quality check, free of charge.
    Standard,
    /// Comprehensive check with detailed photos.
    Detailed,
    /// Premium service including video inspection.
    Premium,
}

impl QcTier {
    /// All tiers, in display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Detailed, Self::Premium];

    /// The fixed fee for this tier, in PKR.
    pub fn fee(self) -> Decimal {
        match self {
            Self::Standard => Decimal::ZERO,
            Self::Detailed => Decimal::from(500),
            Self::Premium => Decimal::from(1000),
        }
    }

    /// Customer-facing description of what the tier includes.
    pub fn description(self) -> &'static str {
        match self {
            Self::Standard => "Basic quality check with 2-3 photos",
            Self::Detailed => "Comprehensive check with 5-8 detailed photos",
            Self::Premium => "Premium service with 10+ photos and video inspection",
        }
    }
}
