use std::path::PathBuf;

use tracing::warn;

pub const PORT_ENV_VAR: &str = "PORT";
pub const DATA_DIR_ENV_VAR: &str = "ABYSS_DATA_DIR";
pub const STATIC_DIR_ENV_VAR: &str = "ABYSS_STATIC_DIR";
pub const TERRAIN_SEED_ENV_VAR: &str = "ABYSS_TERRAIN_SEED";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_TERRAIN_SEED: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Seeds depth/pressure for cells that have no terrain record.
    pub terrain_seed: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            terrain_seed: DEFAULT_TERRAIN_SEED,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable values fall
    /// back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = parse_or_default(PORT_ENV_VAR, lookup(PORT_ENV_VAR).as_deref(), defaults.port);
        let terrain_seed = parse_or_default(
            TERRAIN_SEED_ENV_VAR,
            lookup(TERRAIN_SEED_ENV_VAR).as_deref(),
            defaults.terrain_seed,
        );
        let data_dir = lookup(DATA_DIR_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let static_dir = lookup(STATIC_DIR_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        Self {
            port,
            data_dir,
            static_dir,
            terrain_seed,
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<&str>, fallback: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match raw {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(key, value, %fallback, "invalid_config_value_using_default");
                fallback
            }
        },
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("ABYSS_DATA_DIR", "/srv/abyss"),
            ("ABYSS_STATIC_DIR", "site"),
            ("ABYSS_TERRAIN_SEED", "99"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/srv/abyss"));
        assert_eq!(config.static_dir, PathBuf::from("site"));
        assert_eq!(config.terrain_seed, 99);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("ABYSS_TERRAIN_SEED", "-4"),
            ("ABYSS_DATA_DIR", "  "),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.terrain_seed, DEFAULT_TERRAIN_SEED);
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
