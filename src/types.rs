use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Holds the UTF-8 bytes of the `<type>:<edition>` token id.
pub type ContractTokenId = TokenIdVec;

/// Contract token amount type.
pub type ContractTokenAmount = TokenAmountU64;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Identifier of a token type, chosen by its creator.
pub type TokenType = String;

/// Owner of a type together with the type metadata, as returned by `get_type`.
pub type TypeOwnership = (Address, TypeMetadata);
