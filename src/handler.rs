//! Async action handlers: the layer between user input and the account
//! state.
//!
//! Each operation validates against the current state at dispatch time,
//! awaits the simulated network latency, then applies the mutation and
//! returns a receipt with the updated figures. No lock is held across the
//! delay, so two in-flight operations on the same field interleave and a
//! dispatch validated before an earlier one applied is not re-checked.
//! That matches the mock-network contract this sandbox simulates; it is
//! not a race to fix.

use crate::error::Result;
use crate::network::Network;
use crate::state::{AccountState, NodeRecord};
use crate::token::Amount;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Outcome of a stake or unstake, carrying both updated figures so the
/// caller can refresh its display without re-locking the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeReceipt {
    pub network: Network,
    pub balance: Amount,
    pub staked: Amount,
}

/// Outcome of a reward claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardReceipt {
    pub network: Network,
    pub balance: Amount,
}

/// Outcome of a node registration: the identity the record was written
/// under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReceipt {
    pub network: Network,
    pub owner: String,
}

/// Handler for one network's account state.
#[derive(Clone)]
pub struct StakingHandler {
    network: Network,
    state: Arc<RwLock<AccountState>>,
    latency: Duration,
}

impl StakingHandler {
    pub fn new(network: Network, seed_balance: Amount, latency: Duration) -> Self {
        StakingHandler {
            network,
            state: Arc::new(RwLock::new(AccountState::seeded(network, seed_balance))),
            latency,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Stake tokens for the session user.
    pub async fn stake(&self, amount: Amount) -> Result<StakeReceipt> {
        self.state.read().await.check_stake(amount)?;

        info!(
            "(Mock {}) Staking {} tokens for {}",
            self.network,
            amount,
            self.network.current_user()
        );
        tokio::time::sleep(self.latency).await;

        let mut state = self.state.write().await;
        state.apply_stake(amount);
        Ok(StakeReceipt {
            network: self.network,
            balance: state.balance,
            staked: state.staked,
        })
    }

    /// Unstake tokens back into the spendable balance.
    pub async fn unstake(&self, amount: Amount) -> Result<StakeReceipt> {
        self.state.read().await.check_unstake(amount)?;

        info!(
            "(Mock {}) Unstaking {} tokens for {}",
            self.network,
            amount,
            self.network.current_user()
        );
        tokio::time::sleep(self.latency).await;

        let mut state = self.state.write().await;
        state.apply_unstake(amount);
        Ok(StakeReceipt {
            network: self.network,
            balance: state.balance,
            staked: state.staked,
        })
    }

    /// Claim a simulated minted reward.
    pub async fn earn_reward(&self, amount: Amount) -> Result<RewardReceipt> {
        // The only guard is on the amount itself; check before the delay
        // to match the dispatch-time validation of the other actions.
        if amount <= crate::token::ZERO {
            return Err(crate::error::SimError::InvalidAmount);
        }

        info!(
            "(Mock {}) Earning reward of {} for {}",
            self.network,
            amount,
            self.network.current_user()
        );
        tokio::time::sleep(self.latency).await;

        let mut state = self.state.write().await;
        state.earn_reward(amount)?;
        Ok(RewardReceipt {
            network: self.network,
            balance: state.balance,
        })
    }

    /// Register a node for the session user. Overwrites any existing
    /// record and always starts inactive.
    pub async fn register_node(&self, node_type: &str) -> Result<NodeReceipt> {
        let node_type = node_type.trim().to_string();
        if node_type.is_empty() {
            return Err(crate::error::SimError::MissingInput("node type"));
        }

        let owner = self.network.current_user().to_string();
        info!(
            "(Mock {}) Registering node for {} with type {}",
            self.network, owner, node_type
        );
        tokio::time::sleep(self.latency).await;

        let mut state = self.state.write().await;
        state.register_node(&owner, &node_type)?;
        Ok(NodeReceipt {
            network: self.network,
            owner,
        })
    }

    /// Activate or deactivate the session user's node.
    pub async fn set_node_active(&self, active: bool) -> Result<NodeReceipt> {
        let owner = self.network.current_user().to_string();
        // Presence is checked at dispatch; nothing in this sandbox removes
        // a node between dispatch and apply.
        if !self.state.read().await.nodes.contains_key(&owner) {
            return Err(crate::error::SimError::NodeNotFound(
                crate::state::verb_for(active),
            ));
        }

        info!(
            "(Mock {}) {} node for {}",
            self.network,
            if active { "Activating" } else { "Deactivating" },
            owner
        );
        tokio::time::sleep(self.latency).await;

        let mut state = self.state.write().await;
        state.set_node_active(&owner, active)?;
        Ok(NodeReceipt {
            network: self.network,
            owner,
        })
    }

    /// Look up a node record by owner key. Absence is reported as `None`,
    /// not as an error.
    pub async fn node_info(&self, owner: &str) -> Result<Option<NodeRecord>> {
        let owner = owner.trim().to_string();
        // Input check happens before the delay; the lookup itself after,
        // mirroring the "Processing..." phase of the original surface.
        self.state.read().await.node_info(&owner)?;

        tokio::time::sleep(self.latency).await;

        let state = self.state.read().await;
        Ok(state.nodes.get(&owner).cloned())
    }

    /// Snapshot of the current account state.
    pub async fn snapshot(&self) -> AccountState {
        self.state.read().await.clone()
    }
}
