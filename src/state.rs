use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Contract owner and metadata, `None` until initialized.
    pub info: Option<ContractInfo>,
    /// Storage deposits charged by `set_type` and `nft_mint_type`.
    pub storage_deposit: DepositSchedule,
    /// Registered token types.
    pub token_types: StateMap<TokenType, TokenTypeRecord, S>,
    /// Current holder of every minted token, by token id.
    pub tokens: StateMap<String, Address, S>,
    /// Number of tokens of a type held by an address.
    pub type_balances: StateMap<TypeOwnerKey, u64, S>,
    /// Token ids held by each address.
    pub owned_tokens: StateMap<Address, StateSet<String, S>, S>,
    /// Number of tokens minted across all types.
    pub total_supply: u64,
}

impl TypeMetadata {
    fn validate(&self) -> ContractResult<()> {
        ensure!(
            !self.media.is_empty(),
            CustomContractError::InvalidMetadata.into()
        );
        ensure!(self.copies >= 1, CustomContractError::InvalidCopies.into());
        Ok(())
    }
}

impl ContractMetadata {
    /// Metadata recorded by `new_default_meta`.
    pub fn default_meta() -> Self {
        Self {
            spec: String::from(NFT_METADATA_SPEC),
            name: String::from(DEFAULT_CONTRACT_NAME),
            symbol: String::from(DEFAULT_CONTRACT_SYMBOL),
            icon: None,
            base_uri: Some(String::from(DEFAULT_BASE_URI)),
            reference: None,
        }
    }

    fn validate(&self) -> ContractResult<()> {
        ensure!(
            self.spec == NFT_METADATA_SPEC && !self.name.is_empty() && !self.symbol.is_empty(),
            CustomContractError::InvalidMetadata.into()
        );
        Ok(())
    }
}

impl TokenTypeRecord {
    /// The single place where minting rights are checked.
    #[inline(always)]
    pub fn ensure_owner(&self, caller: &Address) -> ContractResult<()> {
        ensure_eq!(
            &self.owner_id,
            caller,
            CustomContractError::NotTypeOwner.into()
        );
        Ok(())
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.issued >= self.metadata.copies
    }

    fn as_view(&self, token_type: &str) -> TypeView {
        TypeView {
            token_type: String::from(token_type),
            owner_id: self.owner_id,
            metadata: self.metadata.clone(),
            issued: self.issued,
            is_mintable: self.is_mintable,
        }
    }
}

impl PageParams {
    /// Resolve the page into an offset and a bounded number of entries.
    pub fn bounds(&self) -> ContractResult<(u64, u64)> {
        let limit = match self.limit {
            Some(0) => return Err(CustomContractError::InvalidPagination.into()),
            Some(limit) => limit.min(MAX_PAGE_LIMIT),
            None => MAX_PAGE_LIMIT,
        };
        Ok((self.from_index.unwrap_or(0), limit))
    }

    /// Same as `bounds`, as iterator arguments. An offset beyond the platform
    /// index range still yields an empty page.
    pub fn iter_bounds(&self) -> ContractResult<(usize, usize)> {
        let (from_index, limit) = self.bounds()?;
        Ok((saturating_usize(from_index), saturating_usize(limit)))
    }
}

impl TokensByTypeParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            from_index: self.from_index,
            limit: self.limit,
        }
    }
}

impl TokensForOwnerParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            from_index: self.from_index,
            limit: self.limit,
        }
    }
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an uninitialized state with no types and no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>, storage_deposit: DepositSchedule) -> Self {
        State {
            info: None,
            storage_deposit,
            token_types: state_builder.new_map(),
            tokens: state_builder.new_map(),
            type_balances: state_builder.new_map(),
            owned_tokens: state_builder.new_map(),
            total_supply: 0,
        }
    }

    /// Record the contract owner. Succeeds only once.
    pub fn initialize(&mut self, owner_id: Address, metadata: ContractMetadata) -> ContractResult<()> {
        ensure!(
            self.info.is_none(),
            CustomContractError::AlreadyInitialized.into()
        );
        metadata.validate()?;

        self.info = Some(ContractInfo { owner_id, metadata });
        Ok(())
    }

    pub fn ensure_initialized(&self) -> ContractResult<&ContractInfo> {
        self.info
            .as_ref()
            .ok_or_else(|| CustomContractError::NotInitialized.into())
    }

    /// Check that `address` is the contract owner.
    pub fn ensure_contract_owner(&self, address: &Address) -> ContractResult<()> {
        let info = self.ensure_initialized()?;
        ensure_eq!(
            &info.owner_id,
            address,
            CustomContractError::OnlyContractOwner.into()
        );
        Ok(())
    }

    /// Check every precondition of registering a type without touching the
    /// state.
    pub fn check_create_type(
        &self,
        token_type: &TokenType,
        metadata: &TypeMetadata,
    ) -> ContractResult<()> {
        self.ensure_initialized()?;
        ensure!(
            !token_type.is_empty() && !token_type.contains(TOKEN_DELIMETER),
            CustomContractError::InvalidTokenType.into()
        );
        metadata.validate()?;
        ensure!(
            self.token_types.get(token_type).is_none(),
            CustomContractError::DuplicateType.into()
        );
        Ok(())
    }

    /// Register a new token type owned by `caller`.
    pub fn create_type(
        &mut self,
        caller: Address,
        token_type: TokenType,
        metadata: TypeMetadata,
    ) -> ContractResult<()> {
        self.check_create_type(&token_type, &metadata)?;

        self.token_types.insert(
            token_type,
            TokenTypeRecord {
                owner_id: caller,
                metadata,
                issued: 0,
                is_mintable: true,
            },
        );
        Ok(())
    }

    /// Get a copy of the record of a token type.
    pub fn token_type(&self, token_type: &TokenType) -> ContractResult<TokenTypeRecord> {
        self.token_types
            .get(token_type)
            .map(|record| (*record).clone())
            .ok_or_else(|| CustomContractError::TypeNotFound.into())
    }

    pub fn get_type(&self, token_type: &TokenType) -> ContractResult<TypeOwnership> {
        let record = self.token_type(token_type)?;
        Ok((record.owner_id, record.metadata))
    }

    /// Check every precondition of a mint without touching the state.
    /// Returns the type record the mint would update.
    pub fn check_mint(
        &self,
        caller: &Address,
        token_type: &TokenType,
    ) -> ContractResult<TokenTypeRecord> {
        self.ensure_initialized()?;
        let record = self.token_type(token_type)?;
        record.ensure_owner(caller)?;
        ensure!(
            record.is_mintable,
            CustomContractError::TypeNotMintable.into()
        );
        ensure!(
            !record.is_exhausted(),
            CustomContractError::SupplyExhausted.into()
        );
        Ok(record)
    }

    /// Mint the next edition of `token_type` to `receiver_id`.
    ///
    /// Nothing is written unless all checks pass.
    pub fn mint(
        &mut self,
        caller: &Address,
        token_type: &TokenType,
        receiver_id: Address,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<TokenView> {
        let mut record = self.check_mint(caller, token_type)?;

        let edition = record.issued + 1;
        let token_id = build_token_id(token_type, edition);

        self.tokens.insert(token_id.clone(), receiver_id);
        self.add_owned_token(&receiver_id, &token_id, state_builder);
        self.add_type_balance(token_type, &receiver_id);
        self.total_supply += 1;

        record.issued = edition;
        let metadata = token_metadata(&record.metadata, &to_decimal(edition));
        self.token_types.insert(token_type.clone(), record);

        Ok(TokenView {
            token_id,
            owner_id: receiver_id,
            metadata,
        })
    }

    pub fn supply_for_type(&self, token_type: &TokenType) -> ContractResult<u64> {
        Ok(self.token_type(token_type)?.issued)
    }

    /// Tokens of a type in edition order, starting after `from_index` editions.
    pub fn tokens_by_type(
        &self,
        token_type: &TokenType,
        page: PageParams,
    ) -> ContractResult<Vec<TokenView>> {
        let record = self.token_type(token_type)?;
        let (from_index, limit) = page.bounds()?;

        let first = from_index.saturating_add(1);
        let last = record.issued.min(from_index.saturating_add(limit));

        let mut tokens = Vec::new();
        for edition in first..=last {
            let token_id = build_token_id(token_type, edition);
            let owner_id = *self
                .tokens
                .get(&token_id)
                .ok_or(ContractError::InvalidTokenId)?;
            let metadata = token_metadata(&record.metadata, &to_decimal(edition));
            tokens.push(TokenView {
                token_id,
                owner_id,
                metadata,
            });
        }
        Ok(tokens)
    }

    /// Look up a single token by its exact id.
    pub fn token(&self, token_id: &str) -> Option<TokenView> {
        let owner_id = *self.tokens.get(&String::from(token_id))?;
        let (token_type, edition) = split_token_id(token_id)?;
        let record = self.token_types.get(&String::from(token_type))?;
        Some(TokenView {
            token_id: String::from(token_id),
            owner_id,
            metadata: token_metadata(&record.metadata, edition),
        })
    }

    /// Move a token to `to`. Only the current holder may do so.
    pub fn transfer(
        &mut self,
        sender: &Address,
        token_id: &str,
        to: Address,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<()> {
        let key = String::from(token_id);
        let owner_id = *self
            .tokens
            .get(&key)
            .ok_or(ContractError::InvalidTokenId)?;
        ensure_eq!(&owner_id, sender, ContractError::Unauthorized);
        let (token_type, _) = split_token_id(token_id).ok_or(ContractError::InvalidTokenId)?;
        let token_type = String::from(token_type);

        self.owned_tokens.entry(owner_id).and_modify(|owned| {
            owned.remove(&key);
        });
        self.add_owned_token(&to, &key, state_builder);
        self.tokens.insert(key, to);
        self.remove_type_balance(&token_type, &owner_id);
        self.add_type_balance(&token_type, &to);
        Ok(())
    }

    /// Pause or resume minting for a type. Does not change its capacity.
    pub fn set_type_mintable(
        &mut self,
        sender: &Address,
        token_type: &TokenType,
        is_mintable: bool,
    ) -> ContractResult<()> {
        self.ensure_contract_owner(sender)?;
        let mut record = self.token_type(token_type)?;
        record.is_mintable = is_mintable;
        self.token_types.insert(token_type.clone(), record);
        Ok(())
    }

    /// Registered types in key order.
    pub fn types(&self, page: PageParams) -> ContractResult<Vec<TypeView>> {
        let (skip, take) = page.iter_bounds()?;
        Ok(self
            .token_types
            .iter()
            .skip(skip)
            .take(take)
            .map(|(token_type, record)| record.as_view(&token_type))
            .collect())
    }

    /// Every minted token in store order.
    pub fn all_tokens(&self, page: PageParams) -> ContractResult<Vec<TokenView>> {
        let (skip, take) = page.iter_bounds()?;
        Ok(self
            .tokens
            .iter()
            .skip(skip)
            .take(take)
            .filter_map(|(token_id, _)| self.token(&token_id))
            .collect())
    }

    /// Number of tokens of any type held by `owner`.
    pub fn supply_for_owner(&self, owner: &Address) -> u64 {
        self.owned_tokens
            .get(owner)
            .map(|owned| owned.iter().count() as u64)
            .unwrap_or(0)
    }

    /// Tokens held by `owner` in store order.
    pub fn tokens_for_owner(
        &self,
        owner: &Address,
        page: PageParams,
    ) -> ContractResult<Vec<TokenView>> {
        let (skip, take) = page.iter_bounds()?;
        let owned = match self.owned_tokens.get(owner) {
            Some(owned) => owned,
            None => return Ok(Vec::new()),
        };
        let tokens = owned
            .iter()
            .skip(skip)
            .take(take)
            .filter_map(|token_id| self.token(&token_id))
            .collect();
        Ok(tokens)
    }

    pub fn type_balance(&self, owner: &Address, token_type: &TokenType) -> u64 {
        self.type_balances
            .get(&TypeOwnerKey {
                token_type: token_type.clone(),
                owner: *owner,
            })
            .map(|balance| *balance)
            .unwrap_or(0)
    }

    fn add_owned_token(
        &mut self,
        owner: &Address,
        token_id: &str,
        state_builder: &mut StateBuilder<S>,
    ) {
        let mut owned = self
            .owned_tokens
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set());
        owned.insert(String::from(token_id));
    }

    fn add_type_balance(&mut self, token_type: &TokenType, owner: &Address) {
        let balance = self.type_balance(owner, token_type);
        self.type_balances.insert(
            TypeOwnerKey {
                token_type: token_type.clone(),
                owner: *owner,
            },
            balance + 1,
        );
    }

    fn remove_type_balance(&mut self, token_type: &TokenType, owner: &Address) {
        let key = TypeOwnerKey {
            token_type: token_type.clone(),
            owner: *owner,
        };
        match self.type_balance(owner, token_type) {
            0 | 1 => {
                self.type_balances.remove(&key);
            }
            balance => {
                self.type_balances.insert(key, balance - 1);
            }
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const CONTRACT_0: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const ADDRESS_2: Address = Address::Contract(CONTRACT_0);

    fn dog() -> TokenType {
        String::from("dog-1650000000000")
    }

    fn type_metadata(copies: u64) -> TypeMetadata {
        TypeMetadata {
            title: Some(String::from("Dog")),
            description: None,
            media: String::from("https://placedog.net/500"),
            copies,
            extra: None,
            reference: None,
        }
    }

    /// Test helper function which creates an initialized state owned by
    /// `ADDRESS_0` with the type `dog` of the given copies owned by `ADDRESS_0`.
    fn initial_state<S: HasStateApi>(state_builder: &mut StateBuilder<S>, copies: u64) -> State<S> {
        let mut state = State::empty(state_builder, DepositSchedule::default());
        state
            .initialize(ADDRESS_0, ContractMetadata::default_meta())
            .expect_report("Failed to initialize");
        state
            .create_type(ADDRESS_0, dog(), type_metadata(copies))
            .expect_report("Failed to create type");
        state
    }

    #[concordium_test]
    fn test_initialize_once() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 2);

        let result = state.initialize(ADDRESS_1, ContractMetadata::default_meta());
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::AlreadyInitialized))
        );

        // Owner and types are untouched
        claim_eq!(
            state.info.as_ref().map(|info| info.owner_id),
            Some(ADDRESS_0)
        );
        claim_eq!(state.supply_for_type(&dog()), Ok(0));
    }

    #[concordium_test]
    fn test_initialize_rejects_invalid_metadata() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, DepositSchedule::default());

        let mut metadata = ContractMetadata::default_meta();
        metadata.spec = String::from("nft-2.0.0");
        claim_eq!(
            state.initialize(ADDRESS_0, metadata),
            Err(ContractError::Custom(CustomContractError::InvalidMetadata))
        );
        claim!(state.info.is_none());
    }

    #[concordium_test]
    fn test_create_type_requires_initialization() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, DepositSchedule::default());

        let result = state.create_type(ADDRESS_0, dog(), type_metadata(1));
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::NotInitialized))
        );
        claim!(state.token_types.iter().next().is_none());
    }

    #[concordium_test]
    fn test_create_type_validation() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1);

        claim_eq!(
            state.create_type(ADDRESS_1, dog(), type_metadata(5)),
            Err(ContractError::Custom(CustomContractError::DuplicateType))
        );
        claim_eq!(
            state.create_type(ADDRESS_1, String::from("cat"), type_metadata(0)),
            Err(ContractError::Custom(CustomContractError::InvalidCopies))
        );
        claim_eq!(
            state.create_type(ADDRESS_1, String::from("cat:1"), type_metadata(1)),
            Err(ContractError::Custom(CustomContractError::InvalidTokenType))
        );
        claim_eq!(
            state.create_type(ADDRESS_1, String::new(), type_metadata(1)),
            Err(ContractError::Custom(CustomContractError::InvalidTokenType))
        );

        let mut metadata = type_metadata(1);
        metadata.media = String::new();
        claim_eq!(
            state.create_type(ADDRESS_1, String::from("cat"), metadata),
            Err(ContractError::Custom(CustomContractError::InvalidMetadata))
        );

        // The first registration wins
        let (owner_id, metadata) = state.get_type(&dog()).expect_report("Type should exist");
        claim_eq!(owner_id, ADDRESS_0);
        claim_eq!(metadata.copies, 1);
        claim_eq!(
            state.get_type(&String::from("cat")),
            Err(ContractError::Custom(CustomContractError::TypeNotFound))
        );
    }

    #[concordium_test]
    fn test_mint_until_exhausted() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 3);

        for edition in 1..=3u64 {
            let token = state
                .mint(&ADDRESS_0, &dog(), ADDRESS_1, &mut state_builder)
                .expect_report("Mint should succeed");
            claim_eq!(token.token_id, build_token_id(&dog(), edition));
            claim_eq!(token.owner_id, ADDRESS_1);
            claim_eq!(state.supply_for_type(&dog()), Ok(edition));
        }

        for _ in 0..2 {
            claim_eq!(
                state.mint(&ADDRESS_0, &dog(), ADDRESS_1, &mut state_builder),
                Err(ContractError::Custom(CustomContractError::SupplyExhausted))
            );
        }

        claim_eq!(state.supply_for_type(&dog()), Ok(3));
        claim_eq!(state.total_supply, 3);
        claim_eq!(state.type_balance(&ADDRESS_1, &dog()), 3);
        claim_eq!(state.tokens.iter().count(), 3);
    }

    #[concordium_test]
    fn test_mint_not_type_owner() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1);

        let result = state.mint(&ADDRESS_1, &dog(), ADDRESS_1, &mut state_builder);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::NotTypeOwner))
        );

        // Nothing was written
        claim_eq!(state.supply_for_type(&dog()), Ok(0));
        claim!(state.tokens.iter().next().is_none());
        claim!(state.type_balances.iter().next().is_none());
        claim_eq!(state.total_supply, 0);
    }

    #[concordium_test]
    fn test_mint_unknown_type() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1);

        claim_eq!(
            state.mint(&ADDRESS_0, &String::from("cat"), ADDRESS_0, &mut state_builder),
            Err(ContractError::Custom(CustomContractError::TypeNotFound))
        );
        claim_eq!(
            state.supply_for_type(&String::from("cat")),
            Err(ContractError::Custom(CustomContractError::TypeNotFound))
        );
    }

    #[concordium_test]
    fn test_contract_owner_can_mint_only_own_types() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1);
        state
            .create_type(ADDRESS_2, String::from("cat"), type_metadata(1))
            .expect_report("Failed to create type");

        claim_eq!(
            state.mint(&ADDRESS_0, &String::from("cat"), ADDRESS_0, &mut state_builder),
            Err(ContractError::Custom(CustomContractError::NotTypeOwner))
        );
        claim!(state.mint(&ADDRESS_2, &String::from("cat"), ADDRESS_1, &mut state_builder).is_ok());
    }

    #[concordium_test]
    fn test_tokens_by_type_pages() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 5);
        for receiver in [ADDRESS_0, ADDRESS_1, ADDRESS_2, ADDRESS_0].iter() {
            state
                .mint(&ADDRESS_0, &dog(), *receiver, &mut state_builder)
                .expect_report("Mint should succeed");
        }

        let all = state
            .tokens_by_type(&dog(), PageParams::default())
            .expect_report("Type should exist");
        claim_eq!(all.len() as u64, state.supply_for_type(&dog()).unwrap_or(0));
        let owners: Vec<Address> = all.iter().map(|token| token.owner_id).collect();
        claim_eq!(owners, vec![ADDRESS_0, ADDRESS_1, ADDRESS_2, ADDRESS_0]);
        claim_eq!(all[1].metadata.title, Some(String::from("Dog #2")));

        let page = state
            .tokens_by_type(
                &dog(),
                PageParams {
                    from_index: Some(1),
                    limit: Some(2),
                },
            )
            .expect_report("Type should exist");
        let ids: Vec<String> = page.into_iter().map(|token| token.token_id).collect();
        claim_eq!(
            ids,
            vec![build_token_id(&dog(), 2), build_token_id(&dog(), 3)]
        );

        let past_end = state
            .tokens_by_type(
                &dog(),
                PageParams {
                    from_index: Some(10),
                    limit: None,
                },
            )
            .expect_report("Type should exist");
        claim!(past_end.is_empty());

        claim_eq!(
            state.tokens_by_type(
                &dog(),
                PageParams {
                    from_index: None,
                    limit: Some(0),
                },
            ),
            Err(ContractError::Custom(CustomContractError::InvalidPagination))
        );
    }

    #[concordium_test]
    fn test_token_lookup() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 2);
        state
            .mint(&ADDRESS_0, &dog(), ADDRESS_1, &mut state_builder)
            .expect_report("Mint should succeed");

        let token_id = build_token_id(&dog(), 1);
        let token = state.token(&token_id).expect_report("Token should exist");
        claim_eq!(token.owner_id, ADDRESS_1);
        claim_eq!(token.metadata.title, Some(String::from("Dog #1")));

        claim!(state.token(&build_token_id(&dog(), 2)).is_none());
        claim!(state.token("dog-1650000000000:01").is_none());
    }

    #[concordium_test]
    fn test_transfer() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 2);
        state
            .mint(&ADDRESS_0, &dog(), ADDRESS_1, &mut state_builder)
            .expect_report("Mint should succeed");
        let token_id = build_token_id(&dog(), 1);

        claim_eq!(
            state.transfer(&ADDRESS_0, &token_id, ADDRESS_2, &mut state_builder),
            Err(ContractError::Unauthorized)
        );
        claim_eq!(
            state.transfer(&ADDRESS_1, "dog-1650000000000:9", ADDRESS_2, &mut state_builder),
            Err(ContractError::InvalidTokenId)
        );

        claim_eq!(state.transfer(&ADDRESS_1, &token_id, ADDRESS_2, &mut state_builder), Ok(()));
        claim_eq!(
            state.token(&token_id).map(|token| token.owner_id),
            Some(ADDRESS_2)
        );
        claim_eq!(state.type_balance(&ADDRESS_1, &dog()), 0);
        claim_eq!(state.type_balance(&ADDRESS_2, &dog()), 1);
        claim_eq!(state.supply_for_owner(&ADDRESS_1), 0);
        claim_eq!(state.supply_for_owner(&ADDRESS_2), 1);
        // Supply is unaffected by transfers
        claim_eq!(state.supply_for_type(&dog()), Ok(1));
    }

    #[concordium_test]
    fn test_set_type_mintable() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1);

        claim_eq!(
            state.set_type_mintable(&ADDRESS_1, &dog(), false),
            Err(ContractError::Custom(CustomContractError::OnlyContractOwner))
        );
        claim_eq!(state.set_type_mintable(&ADDRESS_0, &dog(), false), Ok(()));
        claim_eq!(
            state.mint(&ADDRESS_0, &dog(), ADDRESS_0, &mut state_builder),
            Err(ContractError::Custom(CustomContractError::TypeNotMintable))
        );

        claim_eq!(state.set_type_mintable(&ADDRESS_0, &dog(), true), Ok(()));
        claim!(state.mint(&ADDRESS_0, &dog(), ADDRESS_0, &mut state_builder).is_ok());

        // Resuming never reopens an exhausted type
        claim_eq!(state.set_type_mintable(&ADDRESS_0, &dog(), true), Ok(()));
        claim_eq!(
            state.mint(&ADDRESS_0, &dog(), ADDRESS_0, &mut state_builder),
            Err(ContractError::Custom(CustomContractError::SupplyExhausted))
        );
    }

    #[concordium_test]
    fn test_types_listing() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1);
        state
            .create_type(ADDRESS_1, String::from("cat"), type_metadata(4))
            .expect_report("Failed to create type");

        let types = state
            .types(PageParams::default())
            .expect_report("Listing should succeed");
        claim_eq!(types.len(), 2);
        claim!(types
            .iter()
            .any(|view| view.token_type == "cat" && view.owner_id == ADDRESS_1));

        let page = state
            .types(PageParams {
                from_index: Some(1),
                limit: Some(1),
            })
            .expect_report("Listing should succeed");
        claim_eq!(page.len(), 1);
    }

    #[concordium_test]
    fn test_tokens_by_type_unknown_type() {
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, 1);

        claim_eq!(
            state.tokens_by_type(&String::from("cat"), PageParams::default()),
            Err(ContractError::Custom(CustomContractError::TypeNotFound))
        );
    }

    #[concordium_test]
    fn test_total_supply_across_types() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 3);
        state
            .create_type(ADDRESS_1, String::from("cat"), type_metadata(2))
            .expect_report("Failed to create type");

        for _ in 0..3 {
            state
                .mint(&ADDRESS_0, &dog(), ADDRESS_2, &mut state_builder)
                .expect_report("Mint should succeed");
        }
        for _ in 0..2 {
            state
                .mint(&ADDRESS_1, &String::from("cat"), ADDRESS_2, &mut state_builder)
                .expect_report("Mint should succeed");
        }
        // Rejected mints do not count
        claim!(state
            .mint(&ADDRESS_1, &String::from("cat"), ADDRESS_2, &mut state_builder)
            .is_err());

        let issued: u64 = state
            .types(PageParams::default())
            .expect_report("Listing should succeed")
            .iter()
            .map(|view| view.issued)
            .sum();
        claim_eq!(issued, 5);
        claim_eq!(state.total_supply, issued);
        claim_eq!(state.supply_for_owner(&ADDRESS_2), 5);
        claim_eq!(state.type_balance(&ADDRESS_2, &dog()), 3);
        claim_eq!(state.type_balance(&ADDRESS_2, &String::from("cat")), 2);
    }

    #[concordium_test]
    fn test_tokens_for_owner() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 4);
        for receiver in [ADDRESS_1, ADDRESS_2, ADDRESS_1, ADDRESS_1].iter() {
            state
                .mint(&ADDRESS_0, &dog(), *receiver, &mut state_builder)
                .expect_report("Mint should succeed");
        }
        state
            .transfer(&ADDRESS_1, &build_token_id(&dog(), 3), ADDRESS_2, &mut state_builder)
            .expect_report("Transfer should succeed");

        let held = state
            .tokens_for_owner(&ADDRESS_1, PageParams::default())
            .expect_report("Listing should succeed");
        let mut ids: Vec<String> = held.into_iter().map(|token| token.token_id).collect();
        ids.sort();
        claim_eq!(
            ids,
            vec![build_token_id(&dog(), 1), build_token_id(&dog(), 4)]
        );
        claim_eq!(state.supply_for_owner(&ADDRESS_1), 2);
        claim_eq!(state.supply_for_owner(&ADDRESS_2), 2);

        let page = state
            .tokens_for_owner(
                &ADDRESS_2,
                PageParams {
                    from_index: Some(1),
                    limit: Some(5),
                },
            )
            .expect_report("Listing should succeed");
        claim_eq!(page.len(), 1);
        claim!(page.iter().all(|token| token.owner_id == ADDRESS_2));

        // Unknown holders have nothing
        claim_eq!(state.supply_for_owner(&ADDRESS_0), 0);
        claim_eq!(
            state.tokens_for_owner(&ADDRESS_0, PageParams::default()),
            Ok(Vec::new())
        );
        claim_eq!(
            state.tokens_for_owner(
                &ADDRESS_1,
                PageParams {
                    from_index: None,
                    limit: Some(0),
                },
            ),
            Err(ContractError::Custom(CustomContractError::InvalidPagination))
        );
    }

    #[concordium_test]
    fn test_all_tokens() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 3);
        for _ in 0..3 {
            state
                .mint(&ADDRESS_0, &dog(), ADDRESS_1, &mut state_builder)
                .expect_report("Mint should succeed");
        }

        let all = state
            .all_tokens(PageParams::default())
            .expect_report("Listing should succeed");
        claim_eq!(all.len() as u64, state.total_supply);

        let page = state
            .all_tokens(PageParams {
                from_index: Some(2),
                limit: Some(2),
            })
            .expect_report("Listing should succeed");
        claim_eq!(page.len(), 1);
    }

    #[concordium_test]
    fn test_offset_beyond_index_range() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 2);
        state
            .mint(&ADDRESS_0, &dog(), ADDRESS_1, &mut state_builder)
            .expect_report("Mint should succeed");

        let page = PageParams {
            from_index: Some(1 << 32),
            limit: None,
        };
        claim_eq!(page.iter_bounds(), Ok((saturating_usize(1 << 32), 100)));
        claim_eq!(state.types(page), Ok(Vec::new()));
        claim_eq!(state.all_tokens(page), Ok(Vec::new()));
        claim_eq!(state.tokens_for_owner(&ADDRESS_1, page), Ok(Vec::new()));
        claim_eq!(state.tokens_by_type(&dog(), page), Ok(Vec::new()));

        let page = PageParams {
            from_index: Some(u64::MAX),
            limit: Some(u64::MAX),
        };
        claim_eq!(page.iter_bounds(), Ok((usize::MAX, 100)));
        claim_eq!(state.types(page), Ok(Vec::new()));
    }
}
