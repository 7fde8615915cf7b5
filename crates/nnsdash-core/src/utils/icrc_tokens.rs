use crate::{
    wire::icrc::{IcrcMetadataKey, IcrcTokenMetadataResponse, MetadataValue},
    types::{DEFAULT_DECIMALS, IcrcTokenMetadata},
};
use candid::Nat;

/// Token metadata is given only if the properties the dashboard needs
/// (name, symbol and fee) are defined. Decimals fall back to 8.
#[must_use]
pub fn map_optional_token(response: &IcrcTokenMetadataResponse) -> Option<IcrcTokenMetadata> {
    let mut name = None;
    let mut symbol = None;
    let mut fee = None;
    let mut decimals = None;

    for (key, value) in response {
        match (key.as_str(), value) {
            (IcrcMetadataKey::NAME, MetadataValue::Text(text)) => name = Some(text.clone()),
            (IcrcMetadataKey::SYMBOL, MetadataValue::Text(text)) => symbol = Some(text.clone()),
            (IcrcMetadataKey::FEE, MetadataValue::Nat(nat)) => fee = nat_to_u64(nat),
            (IcrcMetadataKey::DECIMALS, MetadataValue::Nat(nat)) => {
                decimals = nat_to_u64(nat).and_then(|d| u8::try_from(d).ok());
            }
            _ => {}
        }
    }

    Some(IcrcTokenMetadata {
        name: name?,
        symbol: symbol?,
        fee: fee?,
        decimals: decimals.unwrap_or(DEFAULT_DECIMALS),
    })
}

fn nat_to_u64(nat: &Nat) -> Option<u64> {
    match nat.0.to_u64_digits().as_slice() {
        [] => Some(0),
        [value] => Some(*value),
        _ => None,
    }
}

///
/// TESTS
///
