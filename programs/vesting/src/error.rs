use anchor_lang::prelude::*;

/// Custom error codes for the vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: caller is neither the owner nor the presale contract")]
    UnauthorizedCaller,

    #[msg("New owner must not be the default public key")]
    InvalidOwner,

    #[msg("Recipient is the zero address")]
    RecipientIsZeroAddress,

    #[msg("Slice period is zero")]
    SlicePeriodIsZero,

    #[msg("Start time is zero")]
    StartTimeIsZero,

    #[msg("No tokens to vest")]
    NoTokensToVesting,

    #[msg("End time is in the past")]
    EndTimeInPast,

    #[msg("End time is before start time")]
    EndTimeBeforeStartTime,

    #[msg("Cliff and slice period exceed the vesting duration")]
    CliffAndSlicePeriodTooLong,

    #[msg("Schedule has no whole slice between cliff and end")]
    ZeroSliceCount,

    #[msg("No tokens to claim")]
    NoTokensToClaim,

    #[msg("Presale contract is already set")]
    PresaleAlreadySet,

    #[msg("Presale is not an executable program")]
    PresaleIsNotContract,

    #[msg("Recipient schedule list is full")]
    VestingLimitReached,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Claim exceeds locked total")]
    LockedTotalUnderflow,

    #[msg("Math overflow")]
    MathOverflow,
}
