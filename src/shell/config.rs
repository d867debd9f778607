// Runtime configuration, read from the environment (optionally seeded from a .env file).
//
// Variables
// - SCHEDULER_DATA_DIR: root directory of the partition files (default ".data").
// - SCHEDULER_BIND_ADDR: address of the command endpoint (default "0.0.0.0:8080").
// - SCHEDULER_COMMAND_PREFIX: how users invoke the bot, shown in the help text (default "!sched").

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = ".data";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_COMMAND_PREFIX: &str = "!sched";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub command_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = value("SCHEDULER_BIND_ADDR", DEFAULT_BIND_ADDR);
        Ok(Self {
            data_dir: PathBuf::from(value("SCHEDULER_DATA_DIR", DEFAULT_DATA_DIR)),
            bind_addr: bind_addr
                .parse()
                .with_context(|| format!("SCHEDULER_BIND_ADDR is not a socket address: {bind_addr}"))?,
            command_prefix: value("SCHEDULER_COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
        })
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_the_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".data"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.command_prefix, "!sched");
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCHEDULER_DATA_DIR", "/var/lib/scheduler"),
            ("SCHEDULER_BIND_ADDR", "127.0.0.1:9000"),
            ("SCHEDULER_COMMAND_PREFIX", "/events"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/scheduler"));
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.command_prefix, "/events");
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("SCHEDULER_COMMAND_PREFIX", "  ")])).unwrap();
        assert_eq!(config.command_prefix, "!sched");
    }

    #[rstest]
    fn it_should_fail_on_an_invalid_bind_address() {
        let result = AppConfig::from_lookup(lookup(&[("SCHEDULER_BIND_ADDR", "localhost")]));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("SCHEDULER_BIND_ADDR is not a socket address")
        );
    }
}
