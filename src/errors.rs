use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Contract was already initialized (Error code: -4)
    AlreadyInitialized,
    /// Attempt to call function on an uninitialized contract (Error code: -5)
    NotInitialized,
    /// A type with this identifier is already registered (Error code: -6).
    DuplicateType,
    /// Copies of a type must be at least one (Error code: -7).
    InvalidCopies,
    /// Type identifier is empty or contains the token delimiter (Error code: -8).
    InvalidTokenType,
    /// Type or contract metadata is incomplete (Error code: -9).
    InvalidMetadata,
    /// Unknown token type (Error code: -10).
    TypeNotFound,
    /// Only the type owner can mint tokens of the type (Error code: -11).
    NotTypeOwner,
    /// All copies of the type have been minted (Error code: -12).
    SupplyExhausted,
    /// Minting of the type is paused (Error code: -13).
    TypeNotMintable,
    /// Attached amount does not cover the storage deposit (Error code: -14).
    InsufficientDeposit,
    /// Only the contract owner has access (Error code: -15).
    OnlyContractOwner,
    /// Page limit of zero was requested (Error code: -16).
    InvalidPagination,
    /// Failed to invoke a transfer (Error code: -17).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
