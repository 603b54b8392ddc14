use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint};

use crate::constants::wrapped_sol;

/// True for an initialized SPL Token mint.
pub fn is_valid_mint(info: &AccountInfo) -> bool {
    if *info.owner != token::ID {
        return false;
    }
    let Ok(data) = info.try_borrow_data() else {
        return false;
    };
    Mint::try_deserialize(&mut &data[..]).is_ok()
}

pub fn is_wrapped_sol(mint: &Pubkey) -> bool {
    *mint == wrapped_sol::ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_sol_is_the_native_mint() {
        assert_eq!(
            wrapped_sol::ID.to_string(),
            "So11111111111111111111111111111111111111112"
        );
        assert!(is_wrapped_sol(&wrapped_sol::ID));
        assert!(!is_wrapped_sol(&Pubkey::new_unique()));
    }
}
