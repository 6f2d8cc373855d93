use crate::error::Result;
use crate::types::{SignatureScheme, SigningIdentity};
use std::str::FromStr;
use subxt_signer::{sr25519::Keypair, SecretUri};

/// Derives the signing keypair for `seed` (eg. `//Alice`) under the given scheme.
///
/// Development seeds such as `//Alice` are public knowledge and must only sign on test networks.
pub fn derive_identity(seed: &str, scheme: SignatureScheme) -> Result<SigningIdentity> {
    match scheme {
        SignatureScheme::Sr25519 => {
            let uri = SecretUri::from_str(seed.trim())?;
            let keypair = Keypair::from_uri(&uri)?;

            Ok(SigningIdentity(keypair))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subxt_signer::sr25519::dev;

    #[test]
    fn test_alice_identity() {
        let identity = derive_identity("//Alice", SignatureScheme::Sr25519).unwrap();

        assert_eq!(identity.account_id(), dev::alice().public_key().to_account_id());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_identity("//Bob", SignatureScheme::Sr25519).unwrap();
        let second = derive_identity(" //Bob ", SignatureScheme::Sr25519).unwrap();
        let alice = derive_identity("//Alice", SignatureScheme::Sr25519).unwrap();

        assert_eq!(first.account_id(), second.account_id());
        assert_ne!(first.account_id(), alice.account_id());
    }

    #[test]
    fn test_invalid_phrase() {
        assert!(derive_identity("definitely not a mnemonic", SignatureScheme::Sr25519).is_err());
    }
}
