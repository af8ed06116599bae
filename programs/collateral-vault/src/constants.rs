/// Domain tag for the per-owner vault state PDA: `[VAULT_SEED, owner]`
pub const VAULT_SEED: &[u8] = b"vault";

/// Domain tag for the vault-held token account PDA: `[TOKEN_VAULT_SEED, owner]`
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";
