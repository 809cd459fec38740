//! The two mock networks and their fixed session identities.
//!
//! Each network carries the constants the original dApp surface hard-codes:
//! the mock current-user identity that register/activate/deactivate act
//! under, the pre-seeded validator key, and the noun used in user-facing
//! text ("address" on the EVM side, "public key" on the Solana side).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mock EVM identity of the session user.
pub const MOCK_CURRENT_USER_EVM: &str = "0xCurrentUserAddress12345678901234567890";
/// Mock Solana identity of the session user.
pub const MOCK_CURRENT_USER_SOLANA: &str = "SolCurrentUserAddressRULzE1234567890123";

/// Pre-registered validator on the EVM network.
pub const SEED_VALIDATOR_EVM: &str = "0x1234567890123456789012345678901234567890";
/// Pre-registered validator on the Solana network.
pub const SEED_VALIDATOR_SOLANA: &str = "SoL4NaRULzE12345678901234567890123456789012";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Evm,
    Solana,
}

impl Network {
    /// Human-readable network label.
    pub fn label(&self) -> &'static str {
        match self {
            Network::Evm => "EVM",
            Network::Solana => "Solana",
        }
    }

    /// Identity under which this session registers and toggles nodes.
    pub fn current_user(&self) -> &'static str {
        match self {
            Network::Evm => MOCK_CURRENT_USER_EVM,
            Network::Solana => MOCK_CURRENT_USER_SOLANA,
        }
    }

    /// Key of the validator node seeded into the registry at startup.
    pub fn seed_validator(&self) -> &'static str {
        match self {
            Network::Evm => SEED_VALIDATOR_EVM,
            Network::Solana => SEED_VALIDATOR_SOLANA,
        }
    }

    /// Noun used when talking about owner keys on this network.
    pub fn key_noun(&self) -> &'static str {
        match self {
            Network::Evm => "address",
            Network::Solana => "public key",
        }
    }

    pub fn parse(input: &str) -> Option<Network> {
        match input.trim().to_lowercase().as_str() {
            "evm" | "eth" | "ethereum" => Some(Network::Evm),
            "solana" | "sol" => Some(Network::Solana),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
