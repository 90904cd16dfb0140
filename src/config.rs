//! Pricing configuration loaded from environment variables.

use std::str::FromStr;
use thiserror::Error;

/// 在庫に存在しないISBNを受け取った場合の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownIsbnPolicy {
    /// 注文全体をエラーにする
    #[default]
    Reject,
    /// 在庫0として扱い、要求数を `PurchaseSummary::unresolved` に記録する
    TreatAsOutOfStock,
}

impl UnknownIsbnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownIsbnPolicy::Reject => "reject",
            UnknownIsbnPolicy::TreatAsOutOfStock => "out_of_stock",
        }
    }
}

impl FromStr for UnknownIsbnPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(UnknownIsbnPolicy::Reject),
            "out_of_stock" => Ok(UnknownIsbnPolicy::TreatAsOutOfStock),
            _ => Err(ConfigError::InvalidUnknownIsbnPolicy(s.to_string())),
        }
    }
}

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid UNKNOWN_ISBN_POLICY: {0} (expected \"reject\" or \"out_of_stock\")")]
    InvalidUnknownIsbnPolicy(String),
}

/// Pricing configuration.
///
/// Reads from environment variables:
/// - `UNKNOWN_ISBN_POLICY`: `reject` or `out_of_stock` (default: `reject`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingConfig {
    pub unknown_isbn_policy: UnknownIsbnPolicy,
}

impl PricingConfig {
    pub const UNKNOWN_ISBN_POLICY_VAR: &'static str = "UNKNOWN_ISBN_POLICY";

    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let unknown_isbn_policy = match lookup(Self::UNKNOWN_ISBN_POLICY_VAR) {
            Some(value) => value.trim().parse()?,
            None => UnknownIsbnPolicy::default(),
        };

        Ok(Self {
            unknown_isbn_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = PricingConfig::default();
        assert_eq!(config.unknown_isbn_policy, UnknownIsbnPolicy::Reject);
    }

    #[test]
    fn test_from_source_missing_variable_uses_default() {
        let config = PricingConfig::from_source(|_| None).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_from_source_out_of_stock() {
        let config = PricingConfig::from_source(|key| {
            (key == "UNKNOWN_ISBN_POLICY").then(|| " out_of_stock ".to_string())
        })
        .unwrap();
        assert_eq!(
            config.unknown_isbn_policy,
            UnknownIsbnPolicy::TreatAsOutOfStock
        );
    }

    #[test]
    fn test_from_source_invalid_value() {
        let result = PricingConfig::from_source(|_| Some("ignore".to_string()));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidUnknownIsbnPolicy("ignore".to_string())
        );
    }

    #[test]
    fn test_policy_round_trips_through_str() {
        for policy in [UnknownIsbnPolicy::Reject, UnknownIsbnPolicy::TreatAsOutOfStock] {
            assert_eq!(policy.as_str().parse::<UnknownIsbnPolicy>(), Ok(policy));
        }
    }
}
