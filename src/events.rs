use super::*;

/// An untagged event of a token type being registered.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct CreateTypeEvent {
    pub token_type: TokenType,
    /// The address allowed to mint tokens of the type.
    pub owner: Address,
    pub copies: u64,
}

/// An untagged event of minting being paused or resumed for a type.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct SetTypeMintableEvent {
    pub token_type: TokenType,
    pub is_mintable: bool,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum SeriesEvent {
    /// Contract owner recorded on initialization
    Initialize { owner: Address },
    /// New token type registered
    CreateType(CreateTypeEvent),
    /// Minting paused or resumed by the contract owner
    SetTypeMintable(SetTypeMintableEvent),
}

impl Serial for SeriesEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            SeriesEvent::Initialize { owner } => {
                out.write_u8(INITIALIZE_TAG)?;
                owner.serial(out)
            }
            SeriesEvent::CreateType(event) => {
                out.write_u8(CREATE_TYPE_TAG)?;
                event.serial(out)
            }
            SeriesEvent::SetTypeMintable(event) => {
                out.write_u8(SET_TYPE_MINTABLE_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for SeriesEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            INITIALIZE_TAG => {
                Address::deserial(source).map(|owner| SeriesEvent::Initialize { owner })
            }
            CREATE_TYPE_TAG => CreateTypeEvent::deserial(source).map(SeriesEvent::CreateType),
            SET_TYPE_MINTABLE_TAG => {
                SetTypeMintableEvent::deserial(source).map(SeriesEvent::SetTypeMintable)
            }
            _ => Err(ParseError::default()),
        }
    }
}
