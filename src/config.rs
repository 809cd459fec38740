//! Configuration management for stakesim

use crate::error::{Result, SimError};
use crate::network::Network;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub networks: NetworksConfig,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    /// Artificial delay applied to every action, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct NetworksConfig {
    #[serde(default)]
    pub evm: NetworkSeedConfig,
    #[serde(default)]
    pub solana: NetworkSeedConfig,
}

/// Seed settings for one network. `seed_balance` stays unset until
/// resolved through [`NetworksConfig::seed_balance`], so each network
/// falls back to its own default whether its table is missing or merely
/// empty.
#[derive(Debug, Default, Deserialize)]
pub struct NetworkSeedConfig {
    #[serde(default)]
    pub seed_balance: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            latency_ms: default_latency_ms(),
        }
    }
}

impl NetworksConfig {
    /// Seed balance for `network`, falling back to that network's
    /// built-in default.
    pub fn seed_balance(&self, network: Network) -> f64 {
        match network {
            Network::Evm => self.evm.seed_balance.unwrap_or_else(default_evm_balance),
            Network::Solana => self
                .solana
                .seed_balance
                .unwrap_or_else(default_solana_balance),
        }
    }
}

fn default_latency_ms() -> u64 {
    500
}

fn default_evm_balance() -> f64 {
    1000.0
}

fn default_solana_balance() -> f64 {
    500.0
}

/// Load `config.toml` from the working directory, falling back to the
/// built-in defaults when the file is absent or empty.
pub fn load_config() -> Result<Config> {
    load_config_from("config.toml")
}

pub fn load_config_from(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let config: Config = if config_str.is_empty() {
        Config {
            simulation: SimulationConfig::default(),
            networks: NetworksConfig::default(),
        }
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    for network in [Network::Evm, Network::Solana] {
        if config.networks.seed_balance(network) < 0.0 {
            return Err(SimError::ConfigError(
                "seed_balance must be non-negative".to_string(),
            ));
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_config_missing() {
        let config = load_config_from("definitely-not-a-config.toml").unwrap();
        assert_eq!(config.simulation.latency_ms, 500);
        assert_eq!(config.networks.seed_balance(Network::Evm), 1000.0);
        assert_eq!(config.networks.seed_balance(Network::Solana), 500.0);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [simulation]
            latency_ms = 20

            [networks.evm]
            seed_balance = 2500.0
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.latency_ms, 20);
        assert_eq!(config.networks.seed_balance(Network::Evm), 2500.0);
        assert_eq!(config.networks.seed_balance(Network::Solana), 500.0);
    }

    #[test]
    fn test_empty_network_table_keeps_network_default() {
        // A present-but-empty table must resolve to that network's own
        // default, not the other network's.
        let config: Config = toml::from_str("[networks.solana]\n").unwrap();
        assert_eq!(config.networks.seed_balance(Network::Solana), 500.0);
        assert_eq!(config.networks.seed_balance(Network::Evm), 1000.0);

        let config: Config = toml::from_str("[networks.evm]\n").unwrap();
        assert_eq!(config.networks.seed_balance(Network::Evm), 1000.0);
    }
}
