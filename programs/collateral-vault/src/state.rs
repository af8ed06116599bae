use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::VaultError;

/// Per-owner custody record.
///
/// The vault PDA `[b"vault", owner]` is the authority of `token_account`,
/// so tokens only leave through this program's `withdraw`.
///
/// `total_deposited` is the program's own ledger of net collateral. It must
/// never exceed the amount held by `token_account`.
#[account]
pub struct CollateralVault {
    /// Depositor who owns this vault, fixed at initialization
    pub owner: Pubkey,

    /// The single mint this vault accepts
    pub accepted_mint: Pubkey,

    /// Vault-controlled token account at `[b"token_vault", owner]`
    pub token_account: Pubkey,

    /// Net collateral attributed to this vault
    pub total_deposited: u64,

    /// Lifetime withdrawn amount
    pub total_withdrawn: u64,

    pub created_at: i64,

    /// Canonical bump of the vault PDA
    pub bump: u8,

    /// Canonical bump of the token vault PDA
    pub token_account_bump: u8,
}

impl CollateralVault {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // accepted_mint
        32 + // token_account
        8 + // total_deposited
        8 + // total_withdrawn
        8 + // created_at
        1 + // bump
        1; // token_account_bump

    /// Defense in depth on top of `has_one = owner`.
    pub fn authorize(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, VaultError::Unauthorized);
        Ok(())
    }

    /// Next `total_deposited` after depositing `amount`. Does not mutate.
    pub fn checked_deposit(&self, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::InvalidAmount);

        let total = self
            .total_deposited
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        Ok(total)
    }

    /// Next `(total_deposited, total_withdrawn)` after withdrawing `amount`.
    ///
    /// The bound is the tracked collateral, never the external token balance.
    pub fn checked_withdraw(&self, amount: u64) -> Result<(u64, u64)> {
        require!(amount > 0, VaultError::InvalidAmount);
        require!(
            amount <= self.total_deposited,
            VaultError::InsufficientCollateral
        );

        let total = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(VaultError::Underflow)?;
        let withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        Ok((total, withdrawn))
    }

    /// Tracked collateral must be backed by the token balance.
    pub fn ensure_reconciled(&self, token_balance: u64) -> Result<()> {
        require!(
            self.total_deposited <= token_balance,
            VaultError::LedgerMismatch
        );
        Ok(())
    }

    /// Seeds the vault PDA signs transfers out of `token_account` with.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            VAULT_SEED,
            self.owner.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}
