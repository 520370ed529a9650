use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_JWT_SECRET: &str = "dev_secret";
pub const DEFAULT_STRIPE_KEY: &str = "sk_test_default";

/// Runtime settings, read from the environment (after `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Token lifetime; `None` issues tokens that never expire.
    pub token_ttl_hours: Option<u64>,
    pub stripe_secret_key: String,
    pub stripe_api_base: String,
    pub stripe_timeout: Duration,
    pub currency: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.into());

        let port = match get("KINDRED_PORT") {
            Some(v) => v.parse().with_context(|| format!("KINDRED_PORT={v} is not a port"))?,
            None => 5000,
        };
        let token_ttl_hours = get("KINDRED_TOKEN_TTL_HOURS")
            .map(|v| {
                v.parse::<u64>()
                    .with_context(|| format!("KINDRED_TOKEN_TTL_HOURS={v} is not a number of hours"))
            })
            .transpose()?;
        let stripe_timeout_secs = match get("KINDRED_STRIPE_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("KINDRED_STRIPE_TIMEOUT_SECS={v} is not a number of seconds"))?,
            None => 10,
        };

        Ok(Self {
            host: or("KINDRED_HOST", "0.0.0.0"),
            port,
            jwt_secret: or("JWT_SECRET", DEFAULT_JWT_SECRET),
            token_ttl_hours,
            stripe_secret_key: or("STRIPE_SECRET_KEY", DEFAULT_STRIPE_KEY),
            stripe_api_base: or("KINDRED_STRIPE_API_BASE", kindred_payments::stripe::DEFAULT_API_BASE),
            stripe_timeout: Duration::from_secs(stripe_timeout_secs),
            currency: or("KINDRED_CURRENCY", "usd"),
        })
    }

    /// Names of secrets still set to their built-in development values.
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            names.push("JWT_SECRET");
        }
        if self.stripe_secret_key == DEFAULT_STRIPE_KEY {
            names.push("STRIPE_SECRET_KEY");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.port, 5000);
        assert_eq!(c.jwt_secret, "dev_secret");
        assert_eq!(c.token_ttl_hours, None);
        assert_eq!(c.stripe_secret_key, "sk_test_default");
        assert_eq!(c.stripe_api_base, "https://api.stripe.com");
        assert_eq!(c.stripe_timeout, Duration::from_secs(10));
        assert_eq!(c.currency, "usd");
        assert_eq!(c.insecure_defaults(), ["JWT_SECRET", "STRIPE_SECRET_KEY"]);
    }

    #[test]
    fn overrides() {
        let c = config(&[
            ("KINDRED_PORT", "8080"),
            ("JWT_SECRET", "a-real-secret"),
            ("KINDRED_TOKEN_TTL_HOURS", "12"),
            ("STRIPE_SECRET_KEY", "sk_live_abc"),
        ])
        .unwrap();
        assert_eq!(c.port, 8080);
        assert_eq!(c.token_ttl_hours, Some(12));
        assert!(c.insecure_defaults().is_empty());
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let c = config(&[("JWT_SECRET", "")]).unwrap();
        assert_eq!(c.jwt_secret, DEFAULT_JWT_SECRET);
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(config(&[("KINDRED_PORT", "eighty")]).is_err());
        assert!(config(&[("KINDRED_PORT", "70000")]).is_err());
        assert!(config(&[("KINDRED_TOKEN_TTL_HOURS", "-1")]).is_err());
    }
}
