use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::events::CollateralWithdrawn;
use crate::state::CollateralVault;

/// Return `amount` of collateral to the owner.
///
/// The vault PDA signs the transfer out of the token vault. The withdrawal is
/// bounded by `total_deposited` even when the token account holds more.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    msg!("Withdrawing {} from vault of {}", amount, owner);

    ctx.accounts.vault.authorize(&owner)?;
    let (total_deposited, total_withdrawn) = ctx.accounts.vault.checked_withdraw(amount)?;

    {
        let vault = &ctx.accounts.vault;
        let seeds = vault.signer_seeds();
        let signer = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.token_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: vault.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token::transfer(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, signer),
            amount,
        )?;
    }

    let vault = &mut ctx.accounts.vault;
    vault.total_deposited = total_deposited;
    vault.total_withdrawn = total_withdrawn;

    ctx.accounts.token_vault.reload()?;
    ctx.accounts
        .vault
        .ensure_reconciled(ctx.accounts.token_vault.amount)?;

    msg!("Withdrawal successful, total deposited: {}", total_deposited);

    emit!(CollateralWithdrawn {
        vault: ctx.accounts.vault.key(),
        owner,
        amount,
        total_deposited,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub owner: Signer<'info>,

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

    /// Destination of the withdrawal
    #[account(
        mut,
        constraint = user_token_account.mint == vault.accepted_mint @ VaultError::InvalidMint,
        constraint = user_token_account.owner == owner.key() @ VaultError::InvalidTokenAccountOwner
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
