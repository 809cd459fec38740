//! Display formatting for balances and node records.
//!
//! Pure functions of state. The console layer decides where the text
//! goes; nothing here has side effects.

use crate::state::NodeRecord;
use crate::token::Amount;

/// Render a spendable balance as fixed two-decimal token text.
pub fn format_balance(balance: Amount) -> String {
    format!("Balance: {:.2} Tokens", balance)
}

/// Render a staked amount as fixed two-decimal token text.
pub fn format_staked(staked: Amount) -> String {
    format!("Staked: {:.2} Tokens", staked)
}

/// Render the outcome of a node lookup. `key_noun` is the network's
/// wording for owner keys ("address" or "public key").
pub fn format_node_info(record: Option<&NodeRecord>, key_noun: &str) -> String {
    match record {
        Some(info) => format!("Node Type: {}, Active: {}", info.node_type, info.active),
        None => format!("No node info found for {}.", key_noun),
    }
}

/// Placeholder hint shown next to the node lookup input.
pub fn format_placeholder(example_key: &str) -> String {
    format!("e.g., {}", example_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use crate::state::AccountState;

    #[test]
    fn test_format_balance_two_decimals() {
        assert_eq!(format_balance(Amount::from_num(1000)), "Balance: 1000.00 Tokens");
        assert_eq!(format_balance(Amount::from_num(850.5)), "Balance: 850.50 Tokens");
    }

    #[test]
    fn test_format_staked_two_decimals() {
        assert_eq!(format_staked(Amount::from_num(0)), "Staked: 0.00 Tokens");
        assert_eq!(format_staked(Amount::from_num(150)), "Staked: 150.00 Tokens");
    }

    #[test]
    fn test_format_node_info_found() {
        let state = AccountState::seeded(Network::Evm, Amount::from_num(1000));
        let record = state.nodes.get(Network::Evm.seed_validator());
        assert_eq!(
            format_node_info(record, "address"),
            "Node Type: validator, Active: true"
        );
    }

    #[test]
    fn test_format_node_info_missing() {
        assert_eq!(
            format_node_info(None, "public key"),
            "No node info found for public key."
        );
    }
}
