//! Session bootstrap: owns both network handlers and primes the initial
//! display values exactly once at startup.

use crate::config::Config;
use crate::display;
use crate::error::{Result, SimError};
use crate::handler::StakingHandler;
use crate::network::Network;
use crate::token::Amount;
use std::time::Duration;
use tracing::info;

/// Initial display values for one network, produced by [`Sandbox::bootstrap`].
#[derive(Debug, Clone)]
pub struct NetworkBootstrap {
    pub network: Network,
    pub balance_line: String,
    pub staked_line: String,
    /// Placeholder hint for the node lookup input, naming the seeded
    /// validator key.
    pub lookup_placeholder: String,
}

/// One sandbox session: two independent mock networks sharing nothing.
pub struct Sandbox {
    evm: StakingHandler,
    solana: StakingHandler,
}

impl Sandbox {
    pub fn new(config: &Config) -> Self {
        let latency = Duration::from_millis(config.simulation.latency_ms);
        Sandbox {
            evm: StakingHandler::new(
                Network::Evm,
                Amount::from_num(config.networks.seed_balance(Network::Evm)),
                latency,
            ),
            solana: StakingHandler::new(
                Network::Solana,
                Amount::from_num(config.networks.seed_balance(Network::Solana)),
                latency,
            ),
        }
    }

    pub fn handler(&self, network: Network) -> &StakingHandler {
        match network {
            Network::Evm => &self.evm,
            Network::Solana => &self.solana,
        }
    }

    /// Prime the initial display values from seeded state and announce
    /// the session identities. Called once per session.
    pub async fn bootstrap(&self) -> Vec<NetworkBootstrap> {
        let mut reports = Vec::new();
        for network in [Network::Evm, Network::Solana] {
            let state = self.handler(network).snapshot().await;
            reports.push(NetworkBootstrap {
                network,
                balance_line: display::format_balance(state.balance),
                staked_line: display::format_staked(state.staked),
                lookup_placeholder: display::format_placeholder(network.seed_validator()),
            });
        }

        info!("dApp interface initialized in mock mode");
        info!("Your mock EVM address: {}", Network::Evm.current_user());
        info!(
            "Your mock Solana address: {}",
            Network::Solana.current_user()
        );

        reports
    }

    /// JSON dump of both account states, for the console `snapshot`
    /// command.
    pub async fn snapshot_json(&self) -> Result<String> {
        let evm = self.evm.snapshot().await;
        let solana = self.solana.snapshot().await;
        serde_json::to_string_pretty(&serde_json::json!({
            "evm": evm,
            "solana": solana,
        }))
        .map_err(|e| SimError::IoError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        crate::config::load_config_from("no-such-config.toml").unwrap()
    }

    #[tokio::test]
    async fn test_bootstrap_reports_seeded_values() {
        let sandbox = Sandbox::new(&test_config());
        let reports = sandbox.bootstrap().await;
        assert_eq!(reports.len(), 2);

        let evm = &reports[0];
        assert_eq!(evm.network, Network::Evm);
        assert_eq!(evm.balance_line, "Balance: 1000.00 Tokens");
        assert_eq!(evm.staked_line, "Staked: 0.00 Tokens");
        assert!(evm.lookup_placeholder.starts_with("e.g., 0x"));

        let solana = &reports[1];
        assert_eq!(solana.balance_line, "Balance: 500.00 Tokens");
        assert!(solana
            .lookup_placeholder
            .contains(Network::Solana.seed_validator()));
    }

    #[tokio::test]
    async fn test_snapshot_json_contains_both_networks() {
        let sandbox = Sandbox::new(&test_config());
        let json = sandbox.snapshot_json().await.unwrap();
        assert!(json.contains("\"evm\""));
        assert!(json.contains("\"solana\""));
        assert!(json.contains("validator"));
    }
}
