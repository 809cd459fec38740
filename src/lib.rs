//! stakesim - A mock Web3 staking and node-registration sandbox
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core State
//! - [`state`] - Per-network account state and guarded mutations
//! - [`token`] - Token amount type and input parsing
//! - [`network`] - The two mock networks and their session identities
//!
//! ## Action Layer
//! - [`handler`] - Async handlers applying mutations after simulated latency
//! - [`sandbox`] - Session bootstrap owning both network handlers
//!
//! ## Presentation
//! - [`display`] - Balance and node-record formatting
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core State
// ============================================================================
pub mod network;
pub mod state;
pub mod token;

// ============================================================================
// Action Layer
// ============================================================================
pub mod handler;
pub mod sandbox;

// ============================================================================
// Presentation
// ============================================================================
pub mod display;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
