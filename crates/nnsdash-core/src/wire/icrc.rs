pub use icrc_ledger_types::icrc::generic_metadata_value::MetadataValue;

///
/// IcrcTokenMetadataResponse
/// `icrc1_metadata` result: a list of `(key, value)` entries.
///

pub type IcrcTokenMetadataResponse = Vec<(String, MetadataValue)>;

///
/// IcrcMetadataKey
/// Metadata entries the dashboard reads.
///

pub struct IcrcMetadataKey;

impl IcrcMetadataKey {
    pub const DECIMALS: &str = "icrc1:decimals";
    pub const FEE: &str = "icrc1:fee";
    pub const NAME: &str = "icrc1:name";
    pub const SYMBOL: &str = "icrc1:symbol";
}
