use anchor_lang::prelude::*;

/// Custom error codes for the presale program.
#[error_code]
pub enum PresaleError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("New owner must not be the default public key")]
    InvalidOwner,

    #[msg("Vesting contract is not configured")]
    VestingNotConfigured,

    #[msg("Vesting contract is already set")]
    VestingAlreadySet,

    #[msg("Vesting is not an executable program")]
    VestingIsNotContract,

    #[msg("Start time is in the past")]
    StartTimeInPast,

    #[msg("End time is before start time")]
    EndTimeBeforeStartTime,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    #[msg("No tokens offered in round")]
    NoTokensToRound,

    #[msg("Payment token is not a valid mint")]
    InvalidPaymentToken,

    #[msg("Vesting start time is before round end time")]
    EndTimeBeforeVestingStartTime,

    #[msg("Slice period is zero")]
    SlicePeriodIsZero,

    #[msg("Vesting end time is before vesting start time")]
    VestingEndTimeBeforeVestingStartTime,

    #[msg("Cliff and slice period exceed the vesting duration")]
    CliffAndSlicePeriodTooLong,

    #[msg("Round registry is full")]
    RoundLimitReached,

    #[msg("Presale is paused")]
    PresaleIsPaused,

    #[msg("Presale is not paused")]
    PresaleNotPaused,

    #[msg("Invalid round id")]
    InvalidRoundId,

    #[msg("No tokens to buy")]
    NoTokensToBuy,

    #[msg("Round is not active")]
    RoundNotActive,

    #[msg("Insufficient tokens left in round")]
    InsufficientTokensInRound,

    #[msg("Payment amount rounds to zero")]
    PaymentAmountIsZero,

    #[msg("Insufficient native SOL sent")]
    InsufficientNativeSent,

    #[msg("Native SOL is not accepted for token-priced rounds")]
    NativeNotAllowedForTokenPurchase,

    #[msg("Buyer purchase log is full")]
    PurchaseLimitReached,

    #[msg("No tokens to withdraw")]
    NoTokensToWithdraw,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
