//! Error types for stakesim

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    InvalidAmount,
    InsufficientBalance,
    InsufficientStake,
    MissingInput(&'static str),
    NodeNotFound(&'static str),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidAmount => write!(f, "Please enter a valid amount."),
            SimError::InsufficientBalance => write!(f, "Insufficient balance."),
            SimError::InsufficientStake => write!(f, "Insufficient staked amount."),
            SimError::MissingInput(what) => write!(f, "Please enter a {}.", what),
            SimError::NodeNotFound(action) => {
                write!(f, "You don't have a registered node to {}.", action)
            }
            SimError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            SimError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::ConfigError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, SimError>;
