use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, SyncNative, Token, TokenAccount, Transfer};
use vesting::program::Vesting;
use vesting::VestingParams;

use crate::constants::{CONFIG_SEED, PURCHASES_SEED, ROUNDS_SEED, SALE_VAULT_SEED, TREASURY_SEED};
use crate::error::PresaleError;
use crate::state::{PresaleConfig, Purchase, RoundRegistry, RoundType, UserPurchases};
use crate::utils::payment::{self, PaymentRoute};
use crate::utils::token as token_utils;

/// `native_amount` is the lamports the buyer offers for wrapped-SOL rounds;
/// it must be zero for token-priced rounds. Returns the payment charged.
pub fn buy_tokens(
    ctx: Context<BuyTokens>,
    round_id: u64,
    token_amount: u64,
    native_amount: u64,
) -> Result<u64> {
    require!(!ctx.accounts.config.paused, PresaleError::PresaleIsPaused);

    let now = Clock::get()?.unix_timestamp;
    let precision = ctx.accounts.config.precision;
    let payment_amount = ctx
        .accounts
        .rounds
        .quote_purchase(round_id, token_amount, now, precision)?;
    let round = *ctx.accounts.rounds.round(round_id)?;

    require_keys_eq!(
        ctx.accounts.payment_mint.key(),
        round.payment_mint,
        PresaleError::InvalidTokenMint
    );
    require!(
        ctx.accounts.purchases.has_capacity(),
        PresaleError::PurchaseLimitReached
    );

    let route = payment::route_payment(
        token_utils::is_wrapped_sol(&round.payment_mint),
        native_amount,
        payment_amount,
    )?;

    let bump = ctx.accounts.config.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[bump]]];

    match route {
        PaymentRoute::Native { supplied, refund } => {
            // Wrap everything the buyer sent into the treasury...
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    system_program::Transfer {
                        from: ctx.accounts.buyer.to_account_info(),
                        to: ctx.accounts.treasury.to_account_info(),
                    },
                ),
                supplied,
            )?;
            token::sync_native(CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                SyncNative {
                    account: ctx.accounts.treasury.to_account_info(),
                },
            ))?;

            // ...and hand the excess back as wrapped SOL.
            if refund > 0 {
                token::transfer(
                    CpiContext::new_with_signer(
                        ctx.accounts.token_program.to_account_info(),
                        Transfer {
                            from: ctx.accounts.treasury.to_account_info(),
                            to: ctx.accounts.buyer_payment_account.to_account_info(),
                            authority: ctx.accounts.config.to_account_info(),
                        },
                        signer_seeds,
                    ),
                    refund,
                )?;
            }
        }
        PaymentRoute::Token => {
            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.buyer_payment_account.to_account_info(),
                        to: ctx.accounts.treasury.to_account_info(),
                        authority: ctx.accounts.buyer.to_account_info(),
                    },
                ),
                payment_amount,
            )?;
        }
    }

    let buyer = ctx.accounts.buyer.key();
    vesting::cpi::create_vesting(
        CpiContext::new_with_signer(
            ctx.accounts.vesting_program.to_account_info(),
            vesting::cpi::accounts::CreateVesting {
                config: ctx.accounts.vesting_config.to_account_info(),
                recipient_vestings: ctx.accounts.recipient_vestings.to_account_info(),
                vault: ctx.accounts.vesting_vault.to_account_info(),
                source: ctx.accounts.sale_vault.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
                payer: ctx.accounts.buyer.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            signer_seeds,
        ),
        VestingParams {
            recipient: buyer,
            start_time: round.vesting_start_time,
            end_time: round.vesting_end_time,
            cliff_period: round.vesting_cliff_period,
            slice_period: round.vesting_slice_period,
            amount: token_amount,
            vesting_type: round.round_type.into(),
        },
    )?;

    let purchases = &mut ctx.accounts.purchases;
    if purchases.buyer == Pubkey::default() {
        purchases.buyer = buyer;
        purchases.bump = ctx.bumps.purchases;
    }
    purchases.record(Purchase {
        round_id,
        token_amount,
    })?;

    let rounds = &mut ctx.accounts.rounds;
    rounds.record_sale(round_id, token_amount)?;
    let sold_amount = rounds.round(round_id)?.sold_amount;

    emit!(TokensPurchased {
        buyer,
        round_id,
        round_type: round.round_type,
        token_amount,
        payment_mint: round.payment_mint,
        payment_amount,
        sold_amount,
    });

    Ok(payment_amount)
}

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.vesting_configured() @ PresaleError::VestingNotConfigured,
    )]
    pub config: Box<Account<'info, PresaleConfig>>,

    #[account(mut, seeds = [ROUNDS_SEED], bump = rounds.bump)]
    pub rounds: Box<Account<'info, RoundRegistry>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = UserPurchases::space(),
        seeds = [PURCHASES_SEED, buyer.key().as_ref()],
        bump
    )]
    pub purchases: Box<Account<'info, UserPurchases>>,

    pub payment_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = buyer,
        token::mint = payment_mint,
        token::authority = config,
        seeds = [TREASURY_SEED, payment_mint.key().as_ref()],
        bump
    )]
    pub treasury: Box<Account<'info, TokenAccount>>,

    /// Source of token payments; receives the refund for wrapped-SOL rounds.
    #[account(
        mut,
        constraint = buyer_payment_account.mint == payment_mint.key() @ PresaleError::InvalidTokenMint,
        constraint = buyer_payment_account.owner == buyer.key() @ PresaleError::InvalidTokenAccount,
    )]
    pub buyer_payment_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [SALE_VAULT_SEED],
        bump,
        constraint = sale_vault.mint == config.sale_mint @ PresaleError::InvalidTokenMint,
    )]
    pub sale_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        constraint = vesting_program.key() == config.vesting_program @ PresaleError::VestingNotConfigured,
    )]
    pub vesting_program: Program<'info, Vesting>,

    /// CHECK: Validated by the vesting program.
    #[account(mut)]
    pub vesting_config: UncheckedAccount<'info>,

    /// CHECK: Created or validated by the vesting program.
    #[account(mut)]
    pub recipient_vestings: UncheckedAccount<'info>,

    /// CHECK: Validated by the vesting program.
    #[account(mut)]
    pub vesting_vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub round_id: u64,
    pub round_type: RoundType,
    pub token_amount: u64,
    pub payment_mint: Pubkey,
    pub payment_amount: u64,
    pub sold_amount: u64,
}
