use super::*;

/// Build the token id of the given edition of a type, e.g. `dog:2`.
pub fn build_token_id(token_type: &str, edition: u64) -> String {
    let mut token_id = String::from(token_type);
    token_id.push(TOKEN_DELIMETER);
    push_decimal(&mut token_id, edition);
    token_id
}

/// The CIS2 token id carrying the UTF-8 bytes of the given token id.
pub fn contract_token_id(token_id: &str) -> ContractTokenId {
    TokenIdVec(token_id.as_bytes().to_vec())
}

/// Split a token id into its type and edition parts.
/// The type never contains the delimiter, so the last one separates them.
pub fn split_token_id(token_id: &str) -> Option<(&str, &str)> {
    token_id.rsplit_once(TOKEN_DELIMETER)
}

/// Render an integer in decimal, the way supplies are returned to callers.
pub fn to_decimal(value: u64) -> String {
    let mut string = String::new();
    push_decimal(&mut string, value);
    string
}

pub fn push_decimal(string: &mut String, mut value: u64) {
    // u64::MAX has 20 digits
    let mut digits = [0u8; 20];
    let mut len = 0;
    loop {
        digits[len] = b'0' + (value % 10) as u8;
        len += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    for digit in digits[..len].iter().rev() {
        string.push(*digit as char);
    }
}

/// Convert a wire index to an iterator bound. Values beyond the platform
/// index range saturate instead of wrapping.
pub fn saturating_usize(value: u64) -> usize {
    if value > usize::MAX as u64 {
        usize::MAX
    } else {
        value as usize
    }
}

/// Type metadata as presented for a single token: the title gets the edition
/// appended, e.g. "Dog #2".
pub fn token_metadata(type_metadata: &TypeMetadata, edition: &str) -> TypeMetadata {
    let mut metadata = type_metadata.clone();
    if let Some(title) = metadata.title.as_mut() {
        title.push_str(TITLE_DELIMETER);
        title.push_str(edition);
    }
    metadata
}

/// The delimiters token ids and titles are built with.
pub fn type_format() -> TypeFormat {
    let mut token_delimiter = String::new();
    token_delimiter.push(TOKEN_DELIMETER);
    TypeFormat {
        token_delimiter,
        title_delimiter: String::from(TITLE_DELIMETER),
        edition_delimiter: String::from(EDITION_DELIMETER),
    }
}

pub fn token_metadata_event(
    token_id: ContractTokenId,
    metadata: &TypeMetadata,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: metadata.media.clone(),
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    fn dog_metadata(title: Option<&str>) -> TypeMetadata {
        TypeMetadata {
            title: title.map(String::from),
            description: None,
            media: String::from("https://placedog.net/500"),
            copies: 10,
            extra: None,
            reference: None,
        }
    }

    #[concordium_test]
    fn decimal_formatting() {
        claim_eq!(to_decimal(0), "0");
        claim_eq!(to_decimal(7), "7");
        claim_eq!(to_decimal(10), "10");
        claim_eq!(to_decimal(1_000_001), "1000001");
        claim_eq!(to_decimal(u64::MAX), "18446744073709551615");
    }

    #[concordium_test]
    fn token_id_formatting() {
        claim_eq!(build_token_id("dog", 1), "dog:1");
        claim_eq!(build_token_id("dog-1650000000000", 42), "dog-1650000000000:42");
        claim_eq!(
            contract_token_id("dog:1"),
            TokenIdVec(vec![b'd', b'o', b'g', b':', b'1'])
        );
    }

    #[concordium_test]
    fn token_id_splitting() {
        claim_eq!(split_token_id("dog:12"), Some(("dog", "12")));
        claim_eq!(split_token_id("dog.near:3"), Some(("dog.near", "3")));
        claim_eq!(split_token_id("dog"), None);
    }

    #[concordium_test]
    fn index_conversion() {
        claim_eq!(saturating_usize(0), 0);
        claim_eq!(saturating_usize(100), 100);
        claim_eq!(saturating_usize(u64::MAX), usize::MAX);
        claim_eq!(
            saturating_usize(1 << 32) as u64,
            (1u64 << 32).min(usize::MAX as u64)
        );
    }

    #[concordium_test]
    fn token_title() {
        let metadata = token_metadata(&dog_metadata(Some("Dog")), "2");
        claim_eq!(metadata.title, Some(String::from("Dog #2")));
        claim_eq!(metadata.copies, 10);

        let metadata = token_metadata(&dog_metadata(None), "2");
        claim_eq!(metadata.title, None);
    }
}
