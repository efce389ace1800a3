use super::*;

/// Deploy the contract instance uninitialized, with the storage deposits
/// given in the parameter.
#[init(contract = "NftSeries", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Parse the parameter.
    let params: InitParams = ctx.parameter_cursor().get()?;

    // Construct the initial contract state.
    Ok(State::empty(state_builder, params.storage_deposit))
}

/// Check the attached amount against the required deposit and return the
/// excess to be refunded.
fn ensure_deposit(amount: Amount, required: Amount) -> ContractResult<Amount> {
    ensure!(
        amount > Amount::zero() && amount >= required,
        CustomContractError::InsufficientDeposit.into()
    );
    Ok(amount - required)
}

fn refund_excess<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    excess: Amount,
) -> ContractResult<()> {
    if excess != Amount::zero() {
        host.invoke_transfer(&ctx.invoker(), excess)
            .map_err(CustomContractError::from)?;
    }
    Ok(())
}

fn initialize<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    owner_id: Address,
    metadata: ContractMetadata,
) -> ContractResult<()> {
    host.state_mut().initialize(owner_id, metadata)?;
    logger.log(&SeriesEvent::Initialize { owner: owner_id })?;
    Ok(())
}

/// Initialize the registry with the given owner and the default contract
/// metadata. Logs an `Initialize` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is already initialized.
#[receive(
    contract = "NftSeries",
    name = "new_default_meta",
    parameter = "InitializeParams",
    mutable,
    enable_logger
)]
fn new_default_meta<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: InitializeParams = ctx.parameter_cursor().get()?;
    initialize(
        host,
        logger,
        params.owner_id,
        ContractMetadata::default_meta(),
    )
}

/// Initialize the registry with the given owner and contract metadata.
/// Logs an `Initialize` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is already initialized.
/// - The metadata spec is not `nft-1.0.0` or the name or symbol is empty.
#[receive(
    contract = "NftSeries",
    name = "new",
    parameter = "NewParams",
    mutable,
    enable_logger
)]
fn new<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: NewParams = ctx.parameter_cursor().get()?;
    initialize(host, logger, params.owner_id, params.metadata)
}

/// Register a new token type. The sender becomes the type owner, the only
/// address allowed to mint tokens of it. Logs a `CreateType` event.
/// Any amount above the storage deposit is refunded to the invoker. When the
/// sender is a contract, the type belongs to that contract while the change
/// goes to the account that started the transaction.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is not initialized.
/// - The type identifier is empty, contains `:` or is already registered.
/// - The media is empty or copies is zero.
/// - The attached amount does not cover the deposit.
#[receive(
    contract = "NftSeries",
    name = "set_type",
    parameter = "SetTypeParams",
    mutable,
    payable,
    enable_logger
)]
fn set_type<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: SetTypeParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state();
    state.check_create_type(&params.token_type, &params.token_metadata)?;
    let excess = ensure_deposit(amount, state.storage_deposit.set_type)?;

    let copies = params.token_metadata.copies;
    host.state_mut()
        .create_type(sender, params.token_type.clone(), params.token_metadata)?;

    logger.log(&SeriesEvent::CreateType(CreateTypeEvent {
        token_type: params.token_type,
        owner: sender,
        copies,
    }))?;

    refund_excess(ctx, host, excess)
}

/// Get the owner and metadata of a token type.
#[receive(
    contract = "NftSeries",
    name = "get_type",
    parameter = "TypeParams",
    return_value = "TypeOwnership"
)]
fn get_type<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TypeOwnership> {
    let params: TypeParams = ctx.parameter_cursor().get()?;
    host.state().get_type(&params.token_type)
}

/// Mint the next token of a type to the receiver and return it.
/// Logs a `Mint` and a `TokenMetadata` event, the metadata url being the
/// type media. Any amount above the storage deposit is refunded to the
/// invoker, which is an account even when the sender is a contract.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is not initialized.
/// - The type does not exist.
/// - The sender is not the type owner.
/// - Minting of the type is paused.
/// - All copies of the type are minted.
/// - The attached amount does not cover the deposit.
/// - Fails to log the events.
#[receive(
    contract = "NftSeries",
    name = "nft_mint_type",
    parameter = "MintTypeParams",
    return_value = "TokenView",
    mutable,
    payable,
    enable_logger
)]
fn nft_mint_type<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<TokenView> {
    // Parse the parameter.
    let params: MintTypeParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state();
    state.check_mint(&sender, &params.token_type)?;
    let excess = ensure_deposit(amount, state.storage_deposit.mint)?;

    let (state, state_builder) = host.state_and_builder();
    let token = state.mint(
        &sender,
        &params.token_type,
        params.receiver_id,
        state_builder,
    )?;
    let token_id = contract_token_id(&token.token_id);

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id: token_id.clone(),
        amount: ContractTokenAmount::from(1),
        owner: token.owner_id,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id, &token.metadata))?;

    refund_excess(ctx, host, excess)?;
    Ok(token)
}

/// Number of tokens minted of a type, as a decimal string.
#[receive(
    contract = "NftSeries",
    name = "nft_supply_for_type",
    parameter = "TypeParams",
    return_value = "String"
)]
fn nft_supply_for_type<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let params: TypeParams = ctx.parameter_cursor().get()?;
    let supply = host.state().supply_for_type(&params.token_type)?;
    Ok(to_decimal(supply))
}

/// Page through the tokens of a type in mint order.
#[receive(
    contract = "NftSeries",
    name = "nft_tokens_by_type",
    parameter = "TokensByTypeParams",
    return_value = "Vec<TokenView>"
)]
fn nft_tokens_by_type<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<TokenView>> {
    let params: TokensByTypeParams = ctx.parameter_cursor().get()?;
    host.state()
        .tokens_by_type(&params.token_type, params.page())
}

#[receive(
    contract = "NftSeries",
    name = "nft_token",
    parameter = "TokenParams",
    return_value = "Option<TokenView>"
)]
fn nft_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<TokenView>> {
    let params: TokenParams = ctx.parameter_cursor().get()?;
    Ok(host.state().token(&params.token_id))
}

/// Transfer a token to a new holder. Logs a `Transfer` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
/// - The sender is not the holder of the token.
/// - Fails to log event.
#[receive(
    contract = "NftSeries",
    name = "nft_transfer",
    parameter = "NftTransferParams",
    mutable,
    enable_logger
)]
fn nft_transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: NftTransferParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    state.transfer(&sender, &params.token_id, params.receiver_id, state_builder)?;

    // Log transfer event
    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id: contract_token_id(&params.token_id),
        amount: ContractTokenAmount::from(1),
        from: sender,
        to: params.receiver_id,
    }))?;

    Ok(())
}

/// Pause or resume minting of a type. Logs a `SetTypeMintable` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not the contract owner.
/// - The type does not exist.
#[receive(
    contract = "NftSeries",
    name = "nft_set_type_mintable",
    parameter = "SetTypeMintableParams",
    mutable,
    enable_logger
)]
fn nft_set_type_mintable<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: SetTypeMintableParams = ctx.parameter_cursor().get()?;

    host.state_mut()
        .set_type_mintable(&ctx.sender(), &params.token_type, params.is_mintable)?;

    logger.log(&SeriesEvent::SetTypeMintable(SetTypeMintableEvent {
        token_type: params.token_type,
        is_mintable: params.is_mintable,
    }))?;

    Ok(())
}

/// Page through all registered types.
#[receive(
    contract = "NftSeries",
    name = "nft_get_types",
    parameter = "PageParams",
    return_value = "Vec<TypeView>"
)]
fn nft_get_types<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<TypeView>> {
    let params: PageParams = ctx.parameter_cursor().get()?;
    host.state().types(params)
}

/// Number of tokens of a type held by an address, as a decimal string.
#[receive(
    contract = "NftSeries",
    name = "nft_type_balance",
    parameter = "TypeBalanceParams",
    return_value = "String"
)]
fn nft_type_balance<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let params: TypeBalanceParams = ctx.parameter_cursor().get()?;
    let balance = host
        .state()
        .type_balance(&params.account_id, &params.token_type);
    Ok(to_decimal(balance))
}

/// Page through every minted token.
#[receive(
    contract = "NftSeries",
    name = "nft_tokens",
    parameter = "PageParams",
    return_value = "Vec<TokenView>"
)]
fn nft_tokens<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<TokenView>> {
    let params: PageParams = ctx.parameter_cursor().get()?;
    host.state().all_tokens(params)
}

/// Number of tokens held by an address, as a decimal string.
#[receive(
    contract = "NftSeries",
    name = "nft_supply_for_owner",
    parameter = "OwnerParams",
    return_value = "String"
)]
fn nft_supply_for_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let params: OwnerParams = ctx.parameter_cursor().get()?;
    Ok(to_decimal(host.state().supply_for_owner(&params.account_id)))
}

/// Page through the tokens held by an address.
#[receive(
    contract = "NftSeries",
    name = "nft_tokens_for_owner",
    parameter = "TokensForOwnerParams",
    return_value = "Vec<TokenView>"
)]
fn nft_tokens_for_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<TokenView>> {
    let params: TokensForOwnerParams = ctx.parameter_cursor().get()?;
    host.state()
        .tokens_for_owner(&params.account_id, params.page())
}

#[receive(contract = "NftSeries", name = "nft_get_type_format", return_value = "TypeFormat")]
fn nft_get_type_format<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TypeFormat> {
    Ok(type_format())
}

#[receive(contract = "NftSeries", name = "nft_total_supply", return_value = "String")]
fn nft_total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(to_decimal(host.state().total_supply))
}

#[receive(contract = "NftSeries", name = "get_owner", return_value = "Option<Address>")]
fn get_owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    Ok(host.state().info.as_ref().map(|info| info.owner_id))
}

#[receive(
    contract = "NftSeries",
    name = "nft_metadata",
    return_value = "Option<ContractMetadata>"
)]
fn nft_metadata<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<ContractMetadata>> {
    Ok(host.state().info.as_ref().map(|info| info.metadata.clone()))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1u8; 32]);
    const OWNER_ADDRESS: Address = Address::Account(OWNER);
    const ALICE: AccountAddress = AccountAddress([2u8; 32]);
    const ALICE_ADDRESS: Address = Address::Account(ALICE);
    const BOB: AccountAddress = AccountAddress([3u8; 32]);
    const BOB_ADDRESS: Address = Address::Account(BOB);

    const SET_TYPE_DEPOSIT: Amount = Amount::from_micro_ccd(1_000);
    const MINT_DEPOSIT: Amount = Amount::from_micro_ccd(2_000);

    fn dog() -> TokenType {
        String::from("dog-1650000000000")
    }

    fn dog_metadata(copies: u64) -> TypeMetadata {
        TypeMetadata {
            title: Some(String::from("Dog")),
            description: None,
            media: String::from("https://placedog.net/500"),
            copies,
            extra: None,
            reference: None,
        }
    }

    /// Deploy the contract through `init`, without initializing it.
    fn deployed_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            storage_deposit: DepositSchedule {
                set_type: SET_TYPE_DEPOSIT,
                mint: MINT_DEPOSIT,
            },
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        // Call the init method.
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_NftSeries");

        TestHost::new(state, state_builder)
    }

    /// Deployed and initialized with `OWNER` as the contract owner.
    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut host = deployed_host();
        let mut ctx = TestReceiveContext::empty();
        let params = InitializeParams {
            owner_id: OWNER_ADDRESS,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(OWNER_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        new_default_meta(&ctx, &mut host, &mut logger).expect_report("Failed to initialize");
        host
    }

    fn call_set_type(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        token_type: TokenType,
        token_metadata: TypeMetadata,
        amount: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let params = SetTypeParams {
            token_type,
            token_metadata,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(sender))
            .set_invoker(sender)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        host.set_self_balance(amount);

        set_type(&ctx, host, amount, &mut logger)
    }

    fn call_mint(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        token_type: TokenType,
        receiver_id: Address,
        amount: Amount,
    ) -> ContractResult<TokenView> {
        let mut ctx = TestReceiveContext::empty();
        let params = MintTypeParams {
            token_type,
            receiver_id,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(sender))
            .set_invoker(sender)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        host.set_self_balance(amount);

        nft_mint_type(&ctx, host, amount, &mut logger)
    }

    fn supply_for_type(host: &TestHost<State<TestStateApi>>, token_type: TokenType) -> ContractResult<String> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TypeParams { token_type });
        ctx.set_parameter(&bytes);

        nft_supply_for_type(&ctx, host)
    }

    fn tokens_by_type(
        host: &TestHost<State<TestStateApi>>,
        token_type: TokenType,
    ) -> ContractResult<Vec<TokenView>> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokensByTypeParams {
            token_type,
            from_index: None,
            limit: None,
        });
        ctx.set_parameter(&bytes);

        nft_tokens_by_type(&ctx, host)
    }

    #[concordium_test]
    fn test_init() {
        let host = deployed_host();
        let state = host.state();

        claim!(state.info.is_none(), "Contract should not be initialized");
        claim_eq!(state.storage_deposit.set_type, SET_TYPE_DEPOSIT);
        claim_eq!(state.storage_deposit.mint, MINT_DEPOSIT);
        claim_eq!(state.total_supply, 0);
    }

    #[concordium_test]
    fn test_new_default_meta() {
        let mut host = deployed_host();
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&InitializeParams {
            owner_id: OWNER_ADDRESS,
        });
        ctx.set_sender(ALICE_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = new_default_meta(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let ctx = TestReceiveContext::empty();
        claim_eq!(get_owner(&ctx, &host), Ok(Some(OWNER_ADDRESS)));
        claim_eq!(
            nft_metadata(&ctx, &host),
            Ok(Some(ContractMetadata::default_meta()))
        );
        claim_eq!(
            logger.logs,
            vec![to_bytes(&SeriesEvent::Initialize {
                owner: OWNER_ADDRESS
            })]
        );
    }

    #[concordium_test]
    fn test_new_with_metadata() {
        let mut host = deployed_host();
        let mut metadata = ContractMetadata::default_meta();
        metadata.name = String::from("Dogs");
        metadata.symbol = String::from("DOG");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&NewParams {
            owner_id: OWNER_ADDRESS,
            metadata: metadata.clone(),
        });
        ctx.set_sender(OWNER_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        claim_eq!(new(&ctx, &mut host, &mut logger), Ok(()));
        let ctx = TestReceiveContext::empty();
        claim_eq!(nft_metadata(&ctx, &host), Ok(Some(metadata)));
    }

    #[concordium_test]
    fn test_reinitialize() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(1), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&InitializeParams {
            owner_id: ALICE_ADDRESS,
        });
        ctx.set_sender(ALICE_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = new_default_meta(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::AlreadyInitialized))
        );
        claim!(logger.logs.is_empty(), "No event should be logged");

        // Owner and types are intact
        let ctx = TestReceiveContext::empty();
        claim_eq!(get_owner(&ctx, &host), Ok(Some(OWNER_ADDRESS)));
        claim_eq!(supply_for_type(&host, dog()), Ok(String::from("0")));
    }

    #[concordium_test]
    fn test_set_type_uninitialized() {
        let mut host = deployed_host();

        let result = call_set_type(&mut host, OWNER, dog(), dog_metadata(1), SET_TYPE_DEPOSIT);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::NotInitialized))
        );
    }

    #[concordium_test]
    fn test_set_type() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&SetTypeParams {
            token_type: dog(),
            token_metadata: dog_metadata(1),
        });
        ctx.set_sender(ALICE_ADDRESS)
            .set_invoker(ALICE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        host.set_self_balance(SET_TYPE_DEPOSIT);

        let result = set_type(&ctx, &mut host, SET_TYPE_DEPOSIT, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&SeriesEvent::CreateType(CreateTypeEvent {
                token_type: dog(),
                owner: ALICE_ADDRESS,
                copies: 1,
            }))]
        );

        // Round trip through get_type
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TypeParams { token_type: dog() });
        ctx.set_parameter(&bytes);
        let (owner_id, metadata) = get_type(&ctx, &host).expect_report("Type should exist");
        claim_eq!(owner_id, ALICE_ADDRESS);
        claim_eq!(metadata, dog_metadata(1));
    }

    #[concordium_test]
    fn test_set_type_rejections() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(1), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        claim_eq!(
            call_set_type(&mut host, ALICE, dog(), dog_metadata(3), SET_TYPE_DEPOSIT),
            Err(ContractError::Custom(CustomContractError::DuplicateType))
        );
        claim_eq!(
            call_set_type(
                &mut host,
                ALICE,
                String::from("cat"),
                dog_metadata(0),
                SET_TYPE_DEPOSIT
            ),
            Err(ContractError::Custom(CustomContractError::InvalidCopies))
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TypeParams { token_type: dog() });
        ctx.set_parameter(&bytes);
        let (owner_id, metadata) = get_type(&ctx, &host).expect_report("Type should exist");
        claim_eq!(owner_id, OWNER_ADDRESS);
        claim_eq!(metadata.copies, 1);
    }

    #[concordium_test]
    fn test_set_type_insufficient_deposit() {
        let mut host = default_host();

        for amount in [Amount::zero(), Amount::from_micro_ccd(999)].iter() {
            let result = call_set_type(&mut host, OWNER, dog(), dog_metadata(1), *amount);
            claim_eq!(
                result,
                Err(ContractError::Custom(CustomContractError::InsufficientDeposit))
            );
        }

        claim_eq!(
            supply_for_type(&host, dog()),
            Err(ContractError::Custom(CustomContractError::TypeNotFound))
        );
    }

    #[concordium_test]
    fn test_set_type_refund() {
        let mut host = default_host();
        let amount = SET_TYPE_DEPOSIT + Amount::from_micro_ccd(500);

        let result = call_set_type(&mut host, ALICE, dog(), dog_metadata(1), amount);
        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&ALICE, Amount::from_micro_ccd(500)));
    }

    #[concordium_test]
    fn test_set_type_from_contract() {
        let mut host = default_host();
        let proxy = Address::Contract(ContractAddress {
            index: 42,
            subindex: 0,
        });

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&SetTypeParams {
            token_type: dog(),
            token_metadata: dog_metadata(1),
        });
        ctx.set_sender(proxy).set_invoker(ALICE).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let amount = SET_TYPE_DEPOSIT + Amount::from_micro_ccd(300);
        host.set_self_balance(amount);

        claim_eq!(set_type(&ctx, &mut host, amount, &mut logger), Ok(()));

        // The calling contract owns the type, the invoking account gets the change
        claim_eq!(
            host.state().get_type(&dog()).map(|(owner_id, _)| owner_id),
            Ok(proxy)
        );
        claim!(host.transfer_occurred(&ALICE, Amount::from_micro_ccd(300)));
    }

    #[concordium_test]
    fn test_mint_type() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(2), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintTypeParams {
            token_type: dog(),
            receiver_id: ALICE_ADDRESS,
        });
        ctx.set_sender(OWNER_ADDRESS)
            .set_invoker(OWNER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let amount = MINT_DEPOSIT + Amount::from_micro_ccd(10);
        host.set_self_balance(amount);

        let token = nft_mint_type(&ctx, &mut host, amount, &mut logger)
            .expect_report("Mint should succeed");

        let token_id = build_token_id(&dog(), 1);
        claim_eq!(token.token_id, token_id);
        claim_eq!(token.owner_id, ALICE_ADDRESS);
        claim_eq!(token.metadata.title, Some(String::from("Dog #1")));

        claim_eq!(logger.logs.len(), 2, "Exactly two events should be logged");
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                owner: ALICE_ADDRESS,
                token_id: contract_token_id(&token_id),
                amount: ContractTokenAmount::from(1),
            }))),
            "Expected an event for minting the token"
        );
        claim!(
            logger.logs.contains(&to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                    TokenMetadataEvent {
                        token_id: contract_token_id(&token_id),
                        metadata_url: MetadataUrl {
                            url: String::from("https://placedog.net/500"),
                            hash: None,
                        },
                    }
                )
            )),
            "Expected an event for token metadata"
        );
        claim!(host.transfer_occurred(&OWNER, Amount::from_micro_ccd(10)));

        // Views
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenParams {
            token_id: token_id.clone(),
        });
        ctx.set_parameter(&bytes);
        claim_eq!(nft_token(&ctx, &host), Ok(Some(token)));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TypeBalanceParams {
            account_id: ALICE_ADDRESS,
            token_type: dog(),
        });
        ctx.set_parameter(&bytes);
        claim_eq!(nft_type_balance(&ctx, &host), Ok(String::from("1")));

        let ctx = TestReceiveContext::empty();
        claim_eq!(nft_total_supply(&ctx, &host), Ok(String::from("1")));
    }

    /// Create a single-copy type, fail to mint as someone else, mint as the
    /// type owner, then run into the cap twice.
    #[concordium_test]
    fn test_single_copy_series() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(1), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        let result = call_mint(&mut host, ALICE, dog(), ALICE_ADDRESS, MINT_DEPOSIT);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::NotTypeOwner))
        );
        claim_eq!(supply_for_type(&host, dog()), Ok(String::from("0")));

        call_mint(&mut host, OWNER, dog(), OWNER_ADDRESS, MINT_DEPOSIT)
            .expect_report("Mint should succeed");
        claim_eq!(supply_for_type(&host, dog()), Ok(String::from("1")));
        let tokens = tokens_by_type(&host, dog()).expect_report("Type should exist");
        claim_eq!(tokens.len(), 1);
        claim_eq!(tokens[0].owner_id, OWNER_ADDRESS);

        for _ in 0..2 {
            let result = call_mint(&mut host, OWNER, dog(), OWNER_ADDRESS, MINT_DEPOSIT);
            claim_eq!(
                result,
                Err(ContractError::Custom(CustomContractError::SupplyExhausted))
            );
            claim_eq!(supply_for_type(&host, dog()), Ok(String::from("1")));
        }
        claim_eq!(
            tokens_by_type(&host, dog()).map(|tokens| tokens.len()),
            Ok(1)
        );
    }

    #[concordium_test]
    fn test_mint_uninitialized() {
        let mut host = deployed_host();

        let result = call_mint(&mut host, OWNER, dog(), OWNER_ADDRESS, MINT_DEPOSIT);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::NotInitialized))
        );
        claim_eq!(host.state().total_supply, 0);
    }

    #[concordium_test]
    fn test_mint_refund_fails() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(2), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintTypeParams {
            token_type: dog(),
            receiver_id: ALICE_ADDRESS,
        });
        ctx.set_sender(OWNER_ADDRESS)
            .set_invoker(OWNER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let amount = MINT_DEPOSIT + Amount::from_micro_ccd(10);
        // The contract cannot cover the change
        host.set_self_balance(Amount::from_micro_ccd(5));

        let result = nft_mint_type(&ctx, &mut host, amount, &mut logger);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::InvokeTransferError))
        );
        claim!(!host.transfer_occurred(&OWNER, Amount::from_micro_ccd(10)));
    }

    #[concordium_test]
    fn test_tokens_by_type_unknown_type() {
        let host = default_host();

        claim_eq!(
            tokens_by_type(&host, dog()),
            Err(ContractError::Custom(CustomContractError::TypeNotFound))
        );
    }

    #[concordium_test]
    fn test_owner_views() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(3), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");
        call_set_type(
            &mut host,
            ALICE,
            String::from("cat"),
            dog_metadata(2),
            SET_TYPE_DEPOSIT,
        )
        .expect_report("Failed to set type");
        call_mint(&mut host, OWNER, dog(), BOB_ADDRESS, MINT_DEPOSIT)
            .expect_report("Mint should succeed");
        call_mint(&mut host, OWNER, dog(), ALICE_ADDRESS, MINT_DEPOSIT)
            .expect_report("Mint should succeed");
        call_mint(&mut host, ALICE, String::from("cat"), BOB_ADDRESS, MINT_DEPOSIT)
            .expect_report("Mint should succeed");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OwnerParams {
            account_id: BOB_ADDRESS,
        });
        ctx.set_parameter(&bytes);
        claim_eq!(nft_supply_for_owner(&ctx, &host), Ok(String::from("2")));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokensForOwnerParams {
            account_id: BOB_ADDRESS,
            from_index: None,
            limit: None,
        });
        ctx.set_parameter(&bytes);
        let mut ids: Vec<String> = nft_tokens_for_owner(&ctx, &host)
            .expect_report("Listing should succeed")
            .into_iter()
            .map(|token| token.token_id)
            .collect();
        ids.sort();
        claim_eq!(
            ids,
            vec![String::from("cat:1"), build_token_id(&dog(), 1)]
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&PageParams::default());
        ctx.set_parameter(&bytes);
        let all = nft_tokens(&ctx, &host).expect_report("Listing should succeed");
        claim_eq!(all.len(), 3);

        // Total supply is the sum over all types
        let ctx = TestReceiveContext::empty();
        claim_eq!(nft_total_supply(&ctx, &host), Ok(String::from("3")));
        let issued: u64 = host
            .state()
            .types(PageParams::default())
            .expect_report("Listing should succeed")
            .iter()
            .map(|view| view.issued)
            .sum();
        claim_eq!(issued, 3);
    }

    #[concordium_test]
    fn test_get_type_format() {
        let host = default_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(
            nft_get_type_format(&ctx, &host),
            Ok(TypeFormat {
                token_delimiter: String::from(":"),
                title_delimiter: String::from(" #"),
                edition_delimiter: String::from("/"),
            })
        );
    }

    #[concordium_test]
    fn test_mint_insufficient_deposit() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(5), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        let result = call_mint(
            &mut host,
            OWNER,
            dog(),
            ALICE_ADDRESS,
            Amount::from_micro_ccd(1_999),
        );
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::InsufficientDeposit))
        );

        // Nothing was minted
        claim_eq!(supply_for_type(&host, dog()), Ok(String::from("0")));
        claim_eq!(host.state().total_supply, 0);
        claim!(host.state().token(&build_token_id(&dog(), 1)).is_none());
    }

    #[concordium_test]
    fn test_mint_paused_type() {
        let mut host = default_host();
        call_set_type(&mut host, ALICE, dog(), dog_metadata(5), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");

        // Only the contract owner can pause
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&SetTypeMintableParams {
            token_type: dog(),
            is_mintable: false,
        });
        ctx.set_sender(ALICE_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            nft_set_type_mintable(&ctx, &mut host, &mut logger),
            Err(ContractError::Custom(CustomContractError::OnlyContractOwner))
        );

        ctx.set_sender(OWNER_ADDRESS);
        claim_eq!(nft_set_type_mintable(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&SeriesEvent::SetTypeMintable(
                SetTypeMintableEvent {
                    token_type: dog(),
                    is_mintable: false,
                }
            ))]
        );

        let result = call_mint(&mut host, ALICE, dog(), ALICE_ADDRESS, MINT_DEPOSIT);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::TypeNotMintable))
        );
        claim_eq!(supply_for_type(&host, dog()), Ok(String::from("0")));
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(2), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");
        call_mint(&mut host, OWNER, dog(), ALICE_ADDRESS, MINT_DEPOSIT)
            .expect_report("Mint should succeed");
        let token_id = build_token_id(&dog(), 1);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&NftTransferParams {
            token_id: token_id.clone(),
            receiver_id: BOB_ADDRESS,
        });
        ctx.set_sender(ALICE_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        claim_eq!(nft_transfer(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ALICE_ADDRESS,
                to: BOB_ADDRESS,
                token_id: contract_token_id(&token_id),
                amount: ContractTokenAmount::from(1),
            })),
            "Incorrect event emitted"
        );

        let state = host.state();
        claim_eq!(
            state.token(&token_id).map(|token| token.owner_id),
            Some(BOB_ADDRESS)
        );
        claim_eq!(state.type_balance(&ALICE_ADDRESS, &dog()), 0);
        claim_eq!(state.type_balance(&BOB_ADDRESS, &dog()), 1);
    }

    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(2), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");
        call_mint(&mut host, OWNER, dog(), ALICE_ADDRESS, MINT_DEPOSIT)
            .expect_report("Mint should succeed");
        let token_id = build_token_id(&dog(), 1);

        // The type owner does not hold the token
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&NftTransferParams {
            token_id: token_id.clone(),
            receiver_id: BOB_ADDRESS,
        });
        ctx.set_sender(OWNER_ADDRESS).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = nft_transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim!(logger.logs.is_empty(), "No event should be logged");
        claim_eq!(
            host.state().token(&token_id).map(|token| token.owner_id),
            Some(ALICE_ADDRESS)
        );
    }

    #[concordium_test]
    fn test_get_types() {
        let mut host = default_host();
        call_set_type(&mut host, OWNER, dog(), dog_metadata(2), SET_TYPE_DEPOSIT)
            .expect_report("Failed to set type");
        call_set_type(
            &mut host,
            ALICE,
            String::from("cat"),
            dog_metadata(4),
            SET_TYPE_DEPOSIT,
        )
        .expect_report("Failed to set type");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&PageParams::default());
        ctx.set_parameter(&bytes);
        let types = nft_get_types(&ctx, &host).expect_report("Listing should succeed");
        claim_eq!(types.len(), 2);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&PageParams {
            from_index: None,
            limit: Some(0),
        });
        ctx.set_parameter(&bytes);
        claim_eq!(
            nft_get_types(&ctx, &host),
            Err(ContractError::Custom(CustomContractError::InvalidPagination))
        );
    }
}
