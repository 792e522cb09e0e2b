//! Environment-driven configuration.
//!
//! Invalid values are logged and replaced by their defaults; configuration
//! never stops the program from starting.

use stockroom_index::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, TableConfig};

pub const INITIAL_CAPACITY_ENV: &str = "STOCKROOM_INITIAL_CAPACITY";
pub const LOAD_FACTOR_ENV: &str = "STOCKROOM_LOAD_FACTOR";
pub const SEED_DEMO_ENV: &str = "STOCKROOM_SEED_DEMO";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub table: TableConfig,
    /// Preload the demo items before the menu starts.
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            seed_demo: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let initial_capacity = parse_or(
            INITIAL_CAPACITY_ENV,
            lookup(INITIAL_CAPACITY_ENV),
            DEFAULT_INITIAL_CAPACITY,
        );
        let load_factor = parse_or(LOAD_FACTOR_ENV, lookup(LOAD_FACTOR_ENV), DEFAULT_LOAD_FACTOR);

        let mut table = TableConfig::new(initial_capacity, load_factor);
        if let Err(err) = table.validate() {
            tracing::warn!(error = %err, "falling back to default index configuration");
            table = TableConfig::default();
        }

        let seed_demo = lookup(SEED_DEMO_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self { table, seed_demo }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: core::str::FromStr + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting");
            default
        }
    }
}
