//! Program-wide constants.

/// Seed of the config PDA; the config PDA is also the vault authority.
pub const CONFIG_SEED: &[u8] = b"vesting_config";

/// Seed (with the config key) of the token vault holding all locked tokens.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed (with the recipient key) of a recipient's schedule list.
pub const VESTINGS_SEED: &[u8] = b"vestings";

/// Seed under which the sale program derives its signing config PDA.
pub const PRESALE_CONFIG_SEED: &[u8] = b"presale_config";

/// Max schedules stored per recipient. Bounded so `get_vestings` fits in
/// a single return-data buffer (1024 bytes).
pub const MAX_VESTINGS_PER_RECIPIENT: usize = 20;
