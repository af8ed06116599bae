use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::events::CollateralDeposited;
use crate::state::CollateralVault;

/// Move `amount` from the owner's token account into the vault.
///
/// Every guard runs before the transfer. The counter is committed only after
/// the transfer succeeds, and a failure anywhere reverts both.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    msg!("Depositing {} into vault of {}", amount, owner);

    ctx.accounts.vault.authorize(&owner)?;
    let total_deposited = ctx.accounts.vault.checked_deposit(amount)?;
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        VaultError::InsufficientFunds
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.token_vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?;

    ctx.accounts.vault.total_deposited = total_deposited;

    ctx.accounts.token_vault.reload()?;
    ctx.accounts
        .vault
        .ensure_reconciled(ctx.accounts.token_vault.amount)?;

    msg!("Deposit successful, total deposited: {}", total_deposited);

    emit!(CollateralDeposited {
        vault: ctx.accounts.vault.key(),
        owner,
        amount,
        total_deposited,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    pub owner: Signer<'info>,

    /// Seeds come from the stored owner, so a foreign signer reaches `has_one`
    /// and fails as `Unauthorized`.
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, CollateralVault>,

    #[account(
        mut,
        address = vault.token_account @ VaultError::AddressMismatch
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Source of the deposit
    #[account(
        mut,
        constraint = user_token_account.mint == vault.accepted_mint @ VaultError::InvalidMint,
        constraint = user_token_account.owner == owner.key() @ VaultError::InvalidTokenAccountOwner
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
