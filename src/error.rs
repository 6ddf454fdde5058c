use std::fmt;
use thiserror::Error;

/// Which lookup key was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Tier,
    Country,
    GridLocation,
}

impl KeyKind {
    /// Human readable list of accepted values, used in error messages
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Tier => "an integer from 1 to 14",
            Self::Country => "one of south-africa, zimbabwe, botswana",
            Self::GridLocation => "one of coastal, inland",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tier => write!(f, "tier"),
            Self::Country => write!(f, "country"),
            Self::GridLocation => write!(f, "grid location"),
        }
    }
}

/// Pricing error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A tier, country or grid location outside the supported set.
    /// Never substituted with a default.
    #[error("invalid {kind}: '{value}' (expected {})", .kind.expected())]
    InvalidKey { kind: KeyKind, value: String },
}

impl PricingError {
    pub fn invalid_key(kind: KeyKind, value: impl Into<String>) -> Self {
        Self::InvalidKey {
            kind,
            value: value.into(),
        }
    }
}
