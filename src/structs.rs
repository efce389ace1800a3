use super::*;

/// Storage deposits charged by the state-changing functions.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct DepositSchedule {
    /// Deposit required to register a token type.
    pub set_type: Amount,
    /// Deposit required to mint a token.
    pub mint: Amount,
}

impl Default for DepositSchedule {
    fn default() -> Self {
        Self {
            set_type: DEFAULT_SET_TYPE_DEPOSIT,
            mint: DEFAULT_MINT_DEPOSIT,
        }
    }
}

/// Parameter of the contract instance initialization.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    pub storage_deposit: DepositSchedule,
}

/// Metadata describing the contract as a whole.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ContractMetadata {
    /// Metadata standard version, must be `nft-1.0.0`.
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    /// Prepended to relative media and reference links.
    pub base_uri: Option<String>,
    pub reference: Option<String>,
}

/// Metadata attached to a token type and inherited by its tokens.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Link to the associated media.
    pub media: String,
    /// Maximum number of tokens that can be minted of this type.
    pub copies: u64,
    /// Anything extra to store on-chain, e.g. stringified JSON.
    pub extra: Option<String>,
    /// Link to an off-chain JSON file with more info.
    pub reference: Option<String>,
}

/// Stored record of a token type.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TokenTypeRecord {
    /// Address allowed to mint tokens of this type.
    pub owner_id: Address,
    pub metadata: TypeMetadata,
    /// Number of tokens minted so far, never above `metadata.copies`.
    pub issued: u64,
    pub is_mintable: bool,
}

/// Key of the per-type token balance of a holder.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TypeOwnerKey {
    pub token_type: TokenType,
    pub owner: Address,
}

/// Contract owner and metadata recorded at initialization.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    pub owner_id: Address,
    pub metadata: ContractMetadata,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct InitializeParams {
    pub owner_id: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct NewParams {
    pub owner_id: Address,
    pub metadata: ContractMetadata,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct SetTypeParams {
    pub token_type: TokenType,
    pub token_metadata: TypeMetadata,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TypeParams {
    pub token_type: TokenType,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct MintTypeParams {
    pub token_type: TokenType,
    pub receiver_id: Address,
}

/// Offset and size of a requested page, both optional.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, Default)]
pub struct PageParams {
    pub from_index: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TokensByTypeParams {
    pub token_type: TokenType,
    pub from_index: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct OwnerParams {
    pub account_id: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TokensForOwnerParams {
    pub account_id: Address,
    pub from_index: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TokenParams {
    pub token_id: String,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct NftTransferParams {
    pub token_id: String,
    pub receiver_id: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct SetTypeMintableParams {
    pub token_type: TokenType,
    pub is_mintable: bool,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TypeBalanceParams {
    pub account_id: Address,
    pub token_type: TokenType,
}

/// A minted token as seen by callers.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenView {
    pub token_id: String,
    pub owner_id: Address,
    /// Type metadata with the edition appended to the title.
    pub metadata: TypeMetadata,
}

/// Delimiters used to build token ids and token titles.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct TypeFormat {
    pub token_delimiter: String,
    pub title_delimiter: String,
    pub edition_delimiter: String,
}

/// A registered token type as seen by callers.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TypeView {
    pub token_type: TokenType,
    pub owner_id: Address,
    pub metadata: TypeMetadata,
    pub issued: u64,
    pub is_mintable: bool,
}
