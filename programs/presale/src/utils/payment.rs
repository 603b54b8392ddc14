//! How a quoted payment is collected from the buyer.

use crate::error::PresaleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentRoute {
    /// Wrap all `supplied` lamports into the treasury, then send `refund`
    /// wrapped back to the buyer.
    Native { supplied: u64, refund: u64 },
    /// Pull the exact payment from the buyer's token account.
    Token,
}

pub fn route_payment(
    is_native: bool,
    native_supplied: u64,
    payment_amount: u64,
) -> Result<PaymentRoute, PresaleError> {
    if is_native {
        if native_supplied < payment_amount {
            return Err(PresaleError::InsufficientNativeSent);
        }
        Ok(PaymentRoute::Native {
            supplied: native_supplied,
            refund: native_supplied - payment_amount,
        })
    } else {
        if native_supplied != 0 {
            return Err(PresaleError::NativeNotAllowedForTokenPurchase);
        }
        Ok(PaymentRoute::Token)
    }
}
