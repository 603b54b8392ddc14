//! Fixed-price conversion between sale tokens and payment units.
//!
//! `price` is payment units per one whole sale token, scaled by `precision`
//! (10^decimals of the sale mint). Both directions truncate toward zero.

use crate::error::PresaleError;

/// `token_amount * price / precision`.
pub fn to_payment(price: u64, token_amount: u64, precision: u64) -> Result<u64, PresaleError> {
    if precision == 0 {
        return Err(PresaleError::MathOverflow);
    }
    let v = (token_amount as u128)
        .checked_mul(price as u128)
        .ok_or(PresaleError::MathOverflow)?
        / (precision as u128);
    u64::try_from(v).map_err(|_| PresaleError::MathOverflow)
}

/// `payment_amount * precision / price`.
pub fn to_tokens(price: u64, payment_amount: u64, precision: u64) -> Result<u64, PresaleError> {
    if price == 0 {
        return Err(PresaleError::InvalidPrice);
    }
    let v = (payment_amount as u128)
        .checked_mul(precision as u128)
        .ok_or(PresaleError::MathOverflow)?
        / (price as u128);
    u64::try_from(v).map_err(|_| PresaleError::MathOverflow)
}

/// 10^decimals.
pub fn precision_for(decimals: u8) -> Result<u64, PresaleError> {
    10u64
        .checked_pow(decimals as u32)
        .ok_or(PresaleError::MathOverflow)
}
