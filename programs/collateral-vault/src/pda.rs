use anchor_lang::prelude::*;

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED};
use crate::error::VaultError;

/// Derive the canonical `(address, bump)` for `[domain_tag, owner]` under `program_id`.
///
/// Fails with `DerivationFailure` when no bump in `0..=255` yields an
/// off-curve address. That outcome is fatal for this owner only.
pub fn derive_address(
    domain_tag: &[u8],
    owner: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[domain_tag, owner.as_ref()], program_id)
        .ok_or_else(|| error!(VaultError::DerivationFailure))
}

/// Rebuild the address from a stored bump and compare it against `expected`.
pub fn verify_address(
    domain_tag: &[u8],
    owner: &Pubkey,
    bump: u8,
    expected: &Pubkey,
    program_id: &Pubkey,
) -> bool {
    Pubkey::create_program_address(&[domain_tag, owner.as_ref(), &[bump]], program_id)
        .map(|address| address == *expected)
        .unwrap_or(false)
}

/// Both control addresses for one owner's vault
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultAddresses {
    pub vault: Pubkey,
    pub vault_bump: u8,
    pub token_vault: Pubkey,
    pub token_vault_bump: u8,
}

impl VaultAddresses {
    pub fn derive(owner: &Pubkey, program_id: &Pubkey) -> Result<Self> {
        let (vault, vault_bump) = derive_address(VAULT_SEED, owner, program_id)?;
        let (token_vault, token_vault_bump) = derive_address(TOKEN_VAULT_SEED, owner, program_id)?;

        Ok(Self {
            vault,
            vault_bump,
            token_vault,
            token_vault_bump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = VaultAddresses::derive(&owner(1), &crate::ID).unwrap();
        let second = VaultAddresses::derive(&owner(1), &crate::ID).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn derivation_matches_runtime_find_program_address() {
        let alice = owner(2);
        let addresses = VaultAddresses::derive(&alice, &crate::ID).unwrap();

        let (vault, vault_bump) =
            Pubkey::find_program_address(&[b"vault", alice.as_ref()], &crate::ID);
        let (token_vault, token_vault_bump) =
            Pubkey::find_program_address(&[b"token_vault", alice.as_ref()], &crate::ID);

        assert_eq!(addresses.vault, vault);
        assert_eq!(addresses.vault_bump, vault_bump);
        assert_eq!(addresses.token_vault, token_vault);
        assert_eq!(addresses.token_vault_bump, token_vault_bump);
    }

    #[test]
    fn domain_tags_and_owners_never_collide() {
        let alice = VaultAddresses::derive(&owner(3), &crate::ID).unwrap();
        let bob = VaultAddresses::derive(&owner(4), &crate::ID).unwrap();

        assert_ne!(alice.vault, alice.token_vault);
        assert_ne!(alice.vault, bob.vault);
        assert_ne!(alice.token_vault, bob.token_vault);
        assert_ne!(alice.vault, bob.token_vault);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let addresses = VaultAddresses::derive(&owner(5), &crate::ID).unwrap();

        assert!(!addresses.vault.is_on_curve());
        assert!(!addresses.token_vault.is_on_curve());
    }

    #[test]
    fn stored_bump_verifies_only_its_own_address() {
        let alice = owner(6);
        let addresses = VaultAddresses::derive(&alice, &crate::ID).unwrap();

        assert!(verify_address(
            VAULT_SEED,
            &alice,
            addresses.vault_bump,
            &addresses.vault,
            &crate::ID,
        ));
        assert!(!verify_address(
            TOKEN_VAULT_SEED,
            &alice,
            addresses.vault_bump,
            &addresses.vault,
            &crate::ID,
        ));
        assert!(!verify_address(
            VAULT_SEED,
            &owner(7),
            addresses.vault_bump,
            &addresses.vault,
            &crate::ID,
        ));
    }

    #[test]
    fn another_program_derives_different_addresses() {
        let other_program = Pubkey::new_from_array([9; 32]);
        let ours = VaultAddresses::derive(&owner(8), &crate::ID).unwrap();
        let theirs = VaultAddresses::derive(&owner(8), &other_program).unwrap();

        assert_ne!(ours.vault, theirs.vault);
    }
}
