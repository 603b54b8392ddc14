//! Program-wide constants.

/// Seed of the config PDA. The config PDA owns every presale token account
/// and signs `create_vesting` CPIs, so the vesting program derives the same
/// address from this seed.
pub const CONFIG_SEED: &[u8] = b"presale_config";

/// Seed of the round registry PDA.
pub const ROUNDS_SEED: &[u8] = b"rounds";

/// Seed of the sale-token inventory account.
pub const SALE_VAULT_SEED: &[u8] = b"sale_vault";

/// Seed (with the payment mint) of a payment treasury account.
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Seed (with the buyer key) of a buyer's purchase log.
pub const PURCHASES_SEED: &[u8] = b"purchases";

/// Max rounds held by the registry.
pub const MAX_ROUNDS: usize = 32;

/// Max purchases logged per buyer. Bounded so `get_user_purchases` fits in
/// a single return-data buffer (1024 bytes).
pub const MAX_PURCHASES_PER_BUYER: usize = 32;

/// Wrapped SOL mint; rounds priced in it accept native lamports.
pub mod wrapped_sol {
    use anchor_lang::prelude::*;

    declare_id!("So11111111111111111111111111111111111111112");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_seed_matches_vesting_delegate_seed() {
        assert_eq!(CONFIG_SEED, vesting::constants::PRESALE_CONFIG_SEED);
    }
}
