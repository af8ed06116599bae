use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED};
use crate::error::VaultError;
use crate::events::LedgerReconciled;
use crate::pda::verify_address;
use crate::state::CollateralVault;

/// Compare the vault's tracked collateral against its token balance.
///
/// Read-only and permissionless. Fails when tracked collateral is not fully backed,
/// or when the stored token account no longer re-derives from its stored bump.
pub fn reconcile(ctx: Context<Reconcile>) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let token_balance = ctx.accounts.token_vault.amount;

    require!(
        verify_address(
            TOKEN_VAULT_SEED,
            &vault.owner,
            vault.token_account_bump,
            &vault.token_account,
            ctx.program_id,
        ),
        VaultError::AddressMismatch
    );

    if vault.total_deposited > token_balance {
        msg!(
            "Discrepancy: vault tracks {}, token account holds {}",
            vault.total_deposited,
            token_balance
        );
    }
    vault.ensure_reconciled(token_balance)?;

    let surplus = token_balance
        .checked_sub(vault.total_deposited)
        .ok_or(VaultError::Underflow)?;

    emit!(LedgerReconciled {
        vault: vault.key(),
        total_deposited: vault.total_deposited,
        token_balance,
        surplus,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Reconcile<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, CollateralVault>,

    #[account(
        address = vault.token_account @ VaultError::AddressMismatch
    )]
    pub token_vault: Account<'info, TokenAccount>,
}
