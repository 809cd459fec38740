//! Per-network account state: spendable balance, staked pool, and the
//! node registry.
//!
//! Every mutation here is a synchronous guarded transition: validate,
//! then apply, or reject with no state change. The simulated network
//! latency lives one layer up in [`crate::handler`]; this module knows
//! nothing about time.

use crate::error::{Result, SimError};
use crate::network::Network;
use crate::token::{Amount, ZERO};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered node: a role label plus an activation flag, with an
/// audit trail of when the record was created and last touched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeRecord {
    pub node_type: String,
    pub active: bool,
    pub registered_at: String,
    pub updated_at: String,
}

impl NodeRecord {
    fn new(node_type: String, active: bool) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        NodeRecord {
            node_type,
            active,
            registered_at: now.clone(),
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Account state for one mock network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountState {
    pub network: Network,
    pub balance: Amount,
    pub staked: Amount,
    pub nodes: HashMap<String, NodeRecord>,
}

impl AccountState {
    /// Create a state with the given seed balance, no stake, and the
    /// network's validator node pre-registered and active.
    pub fn seeded(network: Network, balance: Amount) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            network.seed_validator().to_string(),
            NodeRecord::new("validator".to_string(), true),
        );
        AccountState {
            network,
            balance,
            staked: ZERO,
            nodes,
        }
    }

    /// Guard for a stake: the amount must be positive and covered by the
    /// spendable balance at the time of the check.
    pub fn check_stake(&self, amount: Amount) -> Result<()> {
        if amount <= ZERO {
            return Err(SimError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(SimError::InsufficientBalance);
        }
        Ok(())
    }

    /// Apply a stake that already passed [`Self::check_stake`]. The
    /// handler layer checks at dispatch and applies after the simulated
    /// latency, so the two halves are deliberately separate.
    pub fn apply_stake(&mut self, amount: Amount) {
        self.balance -= amount;
        self.staked += amount;
    }

    /// Move `amount` from the spendable balance into the staked pool.
    pub fn stake(&mut self, amount: Amount) -> Result<()> {
        self.check_stake(amount)?;
        self.apply_stake(amount);
        Ok(())
    }

    /// Guard for an unstake against the staked pool.
    pub fn check_unstake(&self, amount: Amount) -> Result<()> {
        if amount <= ZERO {
            return Err(SimError::InvalidAmount);
        }
        if amount > self.staked {
            return Err(SimError::InsufficientStake);
        }
        Ok(())
    }

    /// Apply an unstake that already passed [`Self::check_unstake`].
    pub fn apply_unstake(&mut self, amount: Amount) {
        self.staked -= amount;
        self.balance += amount;
    }

    /// Move `amount` from the staked pool back into the spendable balance.
    pub fn unstake(&mut self, amount: Amount) -> Result<()> {
        self.check_unstake(amount)?;
        self.apply_unstake(amount);
        Ok(())
    }

    /// Credit a minted reward to the spendable balance. Unlike
    /// stake/unstake this creates value rather than conserving it.
    pub fn earn_reward(&mut self, amount: Amount) -> Result<()> {
        if amount <= ZERO {
            return Err(SimError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Register (or overwrite) `owner`'s node with the given role label.
    /// New registrations always start inactive.
    pub fn register_node(&mut self, owner: &str, node_type: &str) -> Result<()> {
        let node_type = node_type.trim();
        if node_type.is_empty() {
            return Err(SimError::MissingInput("node type"));
        }
        self.nodes.insert(
            owner.to_string(),
            NodeRecord::new(node_type.to_string(), false),
        );
        Ok(())
    }

    /// Flip the activation flag on `owner`'s node.
    pub fn set_node_active(&mut self, owner: &str, active: bool) -> Result<()> {
        let record = self
            .nodes
            .get_mut(owner)
            .ok_or(SimError::NodeNotFound(verb_for(active)))?;
        record.active = active;
        record.touch();
        Ok(())
    }

    /// Look up `owner`'s node record. Absence is not an error, only a
    /// blank owner key is.
    pub fn node_info(&self, owner: &str) -> Result<Option<&NodeRecord>> {
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(SimError::MissingInput(match self.network {
                Network::Evm => "node owner address",
                Network::Solana => "node owner public key",
            }));
        }
        Ok(self.nodes.get(owner))
    }

    /// Spendable plus staked value.
    pub fn total_value(&self) -> Amount {
        self.balance + self.staked
    }
}

/// Wording for the activation toggle in user-facing messages.
pub fn verb_for(active: bool) -> &'static str {
    if active {
        "activate"
    } else {
        "deactivate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evm_state() -> AccountState {
        AccountState::seeded(Network::Evm, Amount::from_num(1000))
    }

    #[test]
    fn test_seeded_state() {
        let state = evm_state();
        assert_eq!(state.balance, Amount::from_num(1000));
        assert_eq!(state.staked, ZERO);
        let validator = state.nodes.get(Network::Evm.seed_validator()).unwrap();
        assert_eq!(validator.node_type, "validator");
        assert!(validator.active);
    }

    #[test]
    fn test_stake_moves_value() {
        let mut state = evm_state();
        state.stake(Amount::from_num(200)).unwrap();
        assert_eq!(state.balance, Amount::from_num(800));
        assert_eq!(state.staked, Amount::from_num(200));
    }

    #[test]
    fn test_stake_rejects_non_positive() {
        let mut state = evm_state();
        assert_eq!(state.stake(ZERO).unwrap_err(), SimError::InvalidAmount);
        assert_eq!(
            state.stake(Amount::from_num(-10)).unwrap_err(),
            SimError::InvalidAmount
        );
        assert_eq!(state.balance, Amount::from_num(1000));
        assert_eq!(state.staked, ZERO);
    }

    #[test]
    fn test_stake_rejects_overdraw() {
        let mut state = evm_state();
        assert_eq!(
            state.stake(Amount::from_num(1001)).unwrap_err(),
            SimError::InsufficientBalance
        );
        assert_eq!(state.balance, Amount::from_num(1000));
    }

    #[test]
    fn test_unstake_rejects_over_staked() {
        let mut state = evm_state();
        state.stake(Amount::from_num(100)).unwrap();
        assert_eq!(
            state.unstake(Amount::from_num(150)).unwrap_err(),
            SimError::InsufficientStake
        );
        assert_eq!(state.staked, Amount::from_num(100));
        assert_eq!(state.balance, Amount::from_num(900));
    }

    #[test]
    fn test_stake_then_unstake_round_trip() {
        let mut state = evm_state();
        state.stake(Amount::from_num(250)).unwrap();
        state.unstake(Amount::from_num(250)).unwrap();
        assert_eq!(state.balance, Amount::from_num(1000));
        assert_eq!(state.staked, ZERO);
    }

    #[test]
    fn test_stake_conserves_total_value() {
        let mut state = evm_state();
        let before = state.total_value();
        state.stake(Amount::from_num(333)).unwrap();
        assert_eq!(state.total_value(), before);
        state.unstake(Amount::from_num(33)).unwrap();
        assert_eq!(state.total_value(), before);
    }

    #[test]
    fn test_reward_mints_value() {
        let mut state = evm_state();
        state.earn_reward(Amount::from_num(12.5)).unwrap();
        assert_eq!(state.balance, Amount::from_num(1012.5));
        assert_eq!(state.staked, ZERO);
    }

    #[test]
    fn test_reward_rejects_non_positive() {
        let mut state = evm_state();
        assert_eq!(state.earn_reward(ZERO).unwrap_err(), SimError::InvalidAmount);
        assert_eq!(state.balance, Amount::from_num(1000));
    }

    #[test]
    fn test_register_node_starts_inactive() {
        let mut state = evm_state();
        state.register_node("0xabc", "archive").unwrap();
        let record = state.nodes.get("0xabc").unwrap();
        assert_eq!(record.node_type, "archive");
        assert!(!record.active);
    }

    #[test]
    fn test_register_node_rejects_blank_type() {
        let mut state = evm_state();
        assert_eq!(
            state.register_node("0xabc", "   ").unwrap_err(),
            SimError::MissingInput("node type")
        );
        assert!(!state.nodes.contains_key("0xabc"));
    }

    #[test]
    fn test_register_node_overwrites_and_resets_flag() {
        let mut state = evm_state();
        state.register_node("0xabc", "archive").unwrap();
        state.set_node_active("0xabc", true).unwrap();
        state.register_node("0xabc", "light").unwrap();
        let record = state.nodes.get("0xabc").unwrap();
        assert_eq!(record.node_type, "light");
        assert!(!record.active);
    }

    #[test]
    fn test_set_node_active_requires_record() {
        let mut state = evm_state();
        let err = state.set_node_active("0xmissing", true).unwrap_err();
        assert_eq!(err, SimError::NodeNotFound("activate"));
        assert_eq!(
            err.to_string(),
            "You don't have a registered node to activate."
        );
        assert_eq!(
            state
                .set_node_active("0xmissing", false)
                .unwrap_err()
                .to_string(),
            "You don't have a registered node to deactivate."
        );
    }

    #[test]
    fn test_node_info_lookup() {
        let state = evm_state();
        let info = state.node_info(Network::Evm.seed_validator()).unwrap();
        assert_eq!(info.unwrap().node_type, "validator");
        assert!(state.node_info("0xnobody").unwrap().is_none());
        assert!(state.node_info("  ").is_err());
    }
}
