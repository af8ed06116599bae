use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED};
use crate::events::VaultInitialized;
use crate::state::CollateralVault;

/// Create the owner's vault record and the token account it controls.
///
/// `init` refuses an address that is already in use, so a second call for the
/// same owner fails before this handler runs and the existing vault is untouched.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    let created_at = Clock::get()?.unix_timestamp;

    let vault = &mut ctx.accounts.vault;
    vault.owner = owner;
    vault.accepted_mint = ctx.accounts.accepted_mint.key();
    vault.token_account = ctx.accounts.token_vault.key();
    vault.total_deposited = 0;
    vault.total_withdrawn = 0;
    vault.created_at = created_at;
    vault.bump = ctx.bumps.vault;
    vault.token_account_bump = ctx.bumps.token_vault;

    msg!("Vault initialized for owner: {}", vault.owner);
    msg!("Accepted mint: {}", vault.accepted_mint);
    msg!("Token vault: {}", vault.token_account);

    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        accepted_mint: vault.accepted_mint,
        token_account: vault.token_account,
        timestamp: created_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub accepted_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = CollateralVault::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, CollateralVault>,

    /// Held by the vault PDA, not by the owner
    #[account(
        init,
        payer = owner,
        seeds = [TOKEN_VAULT_SEED, owner.key().as_ref()],
        bump,
        token::mint = accepted_mint,
        token::authority = vault
    )]
    pub token_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
