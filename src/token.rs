//! Token amounts and input parsing.

use crate::error::SimError;
use fixed::types::I64F64;

/// Amount type for deterministic token arithmetic.
pub type Amount = I64F64;

/// Zero tokens.
pub const ZERO: Amount = I64F64::ZERO;

/// Parse a user-supplied amount string.
///
/// Rejects missing input and values that are not strictly positive, the
/// same way the action handlers would reject them, so callers can surface
/// one uniform message.
pub fn parse_amount(input: &str) -> Result<Amount, SimError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SimError::InvalidAmount);
    }

    let amount: Amount = trimmed.parse().map_err(|_| SimError::InvalidAmount)?;
    if amount <= ZERO {
        return Err(SimError::InvalidAmount);
    }

    Ok(amount)
}
