use anchor_lang::prelude::*;

declare_id!("FBN2vp46nz2C3PFcfDLr5uaZPUCi4eiFGJxSEBovQRMV");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;

#[program]
pub mod collateral_vault {
    use super::*;

    /// Create the owner's vault and the token account it controls.
    /// Both live at PDAs seeded by the owner, so only one vault per owner exists.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Deposit collateral from the owner's token account
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Withdraw collateral, bounded by the vault's own accounting.
    /// The vault PDA signs the token transfer.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Check that tracked collateral is backed by the vault's token balance.
    /// Anyone may call it; nothing is written.
    pub fn reconcile(ctx: Context<Reconcile>) -> Result<()> {
        instructions::reconcile(ctx)
    }
}
