use super::*;

/// Tag for the Initialize event.
pub const INITIALIZE_TAG: u8 = u8::MAX - 5;

/// Tag for the CreateType event.
pub const CREATE_TYPE_TAG: u8 = u8::MAX - 6;

/// Tag for the SetTypeMintable event.
pub const SET_TYPE_MINTABLE_TAG: u8 = u8::MAX - 7;

/// Between token type and edition number e.g. `dog:2` where `dog` is the type
/// and 2 is the edition.
pub const TOKEN_DELIMETER: char = ':';

/// Appended to the type title for an individual token e.g. "Dog #2".
pub const TITLE_DELIMETER: &str = " #";

/// Between edition number and copies when both are shown e.g. `2/10`.
pub const EDITION_DELIMETER: &str = "/";

/// Metadata standard version accepted for the contract metadata.
pub const NFT_METADATA_SPEC: &str = "nft-1.0.0";

pub const DEFAULT_CONTRACT_NAME: &str = "Comic by Paras";
pub const DEFAULT_CONTRACT_SYMBOL: &str = "COMIC";
pub const DEFAULT_BASE_URI: &str = "https://ipfs.fleek.co/ipfs";

/// Storage deposit required by `set_type` unless configured otherwise.
pub const DEFAULT_SET_TYPE_DEPOSIT: Amount = Amount::from_micro_ccd(8_540);

/// Storage deposit required by `nft_mint_type` unless configured otherwise.
pub const DEFAULT_MINT_DEPOSIT: Amount = Amount::from_micro_ccd(11_280);

/// Upper bound on the number of entries returned by a paginated view.
pub const MAX_PAGE_LIMIT: u64 = 100;
