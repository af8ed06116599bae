use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub accepted_mint: Pubkey,
    pub token_account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CollateralDeposited {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
    pub timestamp: i64,
}

#[event]
pub struct CollateralWithdrawn {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
    pub timestamp: i64,
}

/// Snapshot of both ledgers. `surplus` is token balance held beyond tracked collateral.
#[event]
pub struct LedgerReconciled {
    pub vault: Pubkey,
    pub total_deposited: u64,
    pub token_balance: u64,
    pub surplus: u64,
}
