use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Signer is not the vault owner")]
    Unauthorized,

    #[msg("No valid bump exists for this owner's vault address")]
    DerivationFailure,

    #[msg("Supplied account does not match the derived vault address")]
    AddressMismatch,

    #[msg("Token account mint must match the vault's accepted mint")]
    InvalidMint,

    #[msg("Token account must be owned by the vault owner")]
    InvalidTokenAccountOwner,

    #[msg("Source token account balance is too low")]
    InsufficientFunds,

    #[msg("Withdrawal exceeds the vault's deposited collateral")]
    InsufficientCollateral,

    #[msg("Integer overflow detected")]
    Overflow,

    #[msg("Integer underflow detected")]
    Underflow,

    #[msg("Tracked collateral exceeds the vault token balance")]
    LedgerMismatch,
}
