//! ICP ledger account identifiers.
//!
//! `crc32(h) ++ h` where `h = sha224("\x0Aaccount-id" ++ principal ++ subaccount)`,
//! rendered as lowercase hex.

use candid::Principal;
use icrc_ledger_types::icrc1::account::Subaccount;
use sha2::{Digest, Sha224};

const DOMAIN_SEPARATOR: &[u8] = b"\x0Aaccount-id";
const DEFAULT_SUBACCOUNT: &Subaccount = &[0; 32];

#[must_use]
pub fn principal_to_account_identifier(
    principal: &Principal,
    subaccount: Option<&Subaccount>,
) -> String {
    let mut hasher = Sha224::new();
    hasher.update(DOMAIN_SEPARATOR);
    hasher.update(principal.as_slice());
    hasher.update(subaccount.unwrap_or(DEFAULT_SUBACCOUNT));
    let hash = hasher.finalize();

    let mut crc32hasher = crc32fast::Hasher::new();
    crc32hasher.update(&hash);
    let checksum = crc32hasher.finalize().to_be_bytes();

    let mut bytes = Vec::with_capacity(checksum.len() + hash.len());
    bytes.extend_from_slice(&checksum);
    bytes.extend_from_slice(&hash);

    hex::encode(bytes)
}

/// Whether `identifier` is a well-formed account identifier (checksum included).
#[must_use]
pub fn is_valid_account_identifier(identifier: &str) -> bool {
    let Ok(bytes) = hex::decode(identifier) else {
        return false;
    };
    if bytes.len() != 32 {
        return false;
    }

    let (checksum, hash) = bytes.split_at(4);
    let mut crc32hasher = crc32fast::Hasher::new();
    crc32hasher.update(hash);

    crc32hasher.finalize().to_be_bytes() == checksum
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_default_account() {
        let id = principal_to_account_identifier(&Principal::anonymous(), None);

        assert_eq!(
            id,
            "1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79"
        );
        assert!(is_valid_account_identifier(&id));
    }

    #[test]
    fn subaccount_changes_identifier() {
        let mut sub = [0u8; 32];
        sub[31] = 1;

        let id = principal_to_account_identifier(&Principal::anonymous(), Some(&sub));
        assert_eq!(
            id,
            "b8fab0be4ad596a3739ab93e7316a8647ee72e167709441da49ce9171828629d"
        );
    }

    #[test]
    fn rejects_bad_checksum() {
        let id = "0c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79";
        assert!(!is_valid_account_identifier(id));
        assert!(!is_valid_account_identifier("test"));
    }
}
