use crate::constants::*;

use common_proxies::proxy_market;
use common_structs::{AmountSpec, InterestRateModel, MarketState, SubAccount};

use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedDecimal, NumDecimals,
        ReturnsNewManagedAddress, ReturnsResult,
    },
};
use feed_mock::FeedMock;
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(MARKET_LEDGER_PATH, market_ledger::ContractBuilder);
    blockchain.register_contract(FEED_MOCK_PATH, feed_mock::ContractBuilder);

    blockchain
}

pub fn usdc() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier())
}

/// `amount` whole USDC in native units.
pub fn usdc_units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(USDC_DECIMALS as u32)
}

pub fn sub_account(owner: TestAddress, index: u8) -> SubAccount<StaticApi> {
    SubAccount::new(owner.to_managed_address(), index)
}

pub fn ray_decimal(raw: u128) -> ManagedDecimal<StaticApi, NumDecimals> {
    ManagedDecimal::from_raw_units(BigUint::from(raw), 27)
}

pub fn fixed_rate_model() -> InterestRateModel<StaticApi> {
    InterestRateModel::Fixed {
        annual_rate: ray_decimal(ANNUAL_RATE),
    }
}

pub fn class_index_model() -> InterestRateModel<StaticApi> {
    InterestRateModel::ClassIndex {
        source: INDEX_SOURCE_ADDRESS.to_managed_address(),
        spread_rate: ray_decimal(0),
        max_rate: ray_decimal(RAY),
    }
}

pub struct LedgerTestState {
    pub world: ScenarioWorld,
    pub ledger: ManagedAddress<StaticApi>,
}

impl LedgerTestState {
    pub fn new() -> Self {
        Self::with_model(fixed_rate_model(), RESERVE_FEE)
    }

    pub fn with_model(model: InterestRateModel<StaticApi>, reserve_fee: u64) -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0);

        world
            .account(CONTROLLER_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, usdc_units(10_000_000))
            .esdt_balance(OTHER_TOKEN, usdc_units(1_000));
        world.account(ALICE_ADDRESS).nonce(1);
        world.account(BOB_ADDRESS).nonce(1);
        world.account(INTRUDER_ADDRESS).nonce(1).esdt_balance(USDC_TOKEN, usdc_units(1_000));

        // class models read this index when the ledger is deployed
        world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .raw_deploy()
            .code(FEED_MOCK_PATH)
            .new_address(INDEX_SOURCE_ADDRESS)
            .whitebox(feed_mock::contract_obj, |sc| {
                sc.init();
                sc.set_exchange_rate(BigUint::from(RAY));
            });

        let ledger = world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .typed(proxy_market::MarketLedgerProxy)
            .init(usdc(), USDC_DECIMALS, BigUint::from(reserve_fee), model)
            .code(MARKET_LEDGER_PATH)
            .new_address(LEDGER_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self { world, ledger }
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_index(&mut self, index: u128) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(INDEX_SOURCE_ADDRESS)
            .whitebox(feed_mock::contract_obj, |sc| {
                sc.set_exchange_rate(BigUint::from(index));
            });
    }

    pub fn deposit(
        &mut self,
        account: &SubAccount<StaticApi>,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .deposit(account)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_from_error(
        &mut self,
        from: &TestAddress,
        account: &SubAccount<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .deposit(account)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        account: &SubAccount<StaticApi>,
        to: &TestAddress,
        amount: AmountSpec<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .withdraw(account, to.to_managed_address(), amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(
        &mut self,
        account: &SubAccount<StaticApi>,
        to: &TestAddress,
        amount: AmountSpec<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .withdraw(account, to.to_managed_address(), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(
        &mut self,
        account: &SubAccount<StaticApi>,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .borrow(account, to.to_managed_address(), amount)
            .run();
    }

    pub fn borrow_error(
        &mut self,
        account: &SubAccount<StaticApi>,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .borrow(account, to.to_managed_address(), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        account: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .repay(account, amount, CONTROLLER_ADDRESS.to_managed_address())
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        account: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .repay(account, amount, CONTROLLER_ADDRESS.to_managed_address())
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn mint(&mut self, account: &SubAccount<StaticApi>, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .mint(account, amount)
            .run();
    }

    pub fn burn(
        &mut self,
        account: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .burn(account, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn transfer_balance(
        &mut self,
        from: &SubAccount<StaticApi>,
        to: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        spender: Option<&SubAccount<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .transfer_balance(from, to, amount, OptionalValue::from(spender.cloned()))
            .run();
    }

    pub fn transfer_balance_error(
        &mut self,
        from: &SubAccount<StaticApi>,
        to: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        spender: Option<&SubAccount<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .transfer_balance(from, to, amount, OptionalValue::from(spender.cloned()))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn transfer_debt(
        &mut self,
        from: &SubAccount<StaticApi>,
        to: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        spender: Option<&SubAccount<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .transfer_debt(from, to, amount, OptionalValue::from(spender.cloned()))
            .run();
    }

    pub fn transfer_debt_error(
        &mut self,
        from: &SubAccount<StaticApi>,
        to: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        spender: Option<&SubAccount<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .transfer_debt(from, to, amount, OptionalValue::from(spender.cloned()))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn approve(
        &mut self,
        owner: &SubAccount<StaticApi>,
        spender: &SubAccount<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .approve(owner, spender, amount)
            .run();
    }

    pub fn approve_debt(
        &mut self,
        owner: &SubAccount<StaticApi>,
        spender: &SubAccount<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .approve_debt(owner, spender, amount)
            .run();
    }

    pub fn convert_reserves(
        &mut self,
        recipient: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .convert_reserves(recipient, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn convert_reserves_error(
        &mut self,
        recipient: &SubAccount<StaticApi>,
        amount: AmountSpec<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .convert_reserves(recipient, amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_reserve_fee_error(&mut self, fee: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .set_reserve_fee(BigUint::from(fee))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_interest_rate_model(&mut self, model: InterestRateModel<StaticApi>) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .set_interest_rate_model(model)
            .run();
    }

    pub fn set_interest_rate_model_error(
        &mut self,
        model: InterestRateModel<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .set_interest_rate_model(model)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn touch(&mut self) -> MarketState<StaticApi> {
        self.world
            .tx()
            .from(CONTROLLER_ADDRESS)
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .touch()
            .returns(ReturnsResult)
            .run()
    }

    pub fn touch_from_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .touch()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Views
    pub fn balance_of(&mut self, account: &SubAccount<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .run()
    }

    pub fn debt_of(&mut self, account: &SubAccount<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .debt_of(account)
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_state(&mut self) -> MarketState<StaticApi> {
        self.world
            .query()
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .market_state()
            .returns(ReturnsResult)
            .run()
    }

    pub fn exchange_rate(&mut self) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(&self.ledger)
            .typed(proxy_market::MarketLedgerProxy)
            .exchange_rate()
            .returns(ReturnsResult)
            .run()
    }
}

/// `|a - b| <= tolerance`
pub fn assert_close(a: &BigUint<StaticApi>, b: &BigUint<StaticApi>, tolerance: u64) {
    let diff = if a > b { a - b } else { b - a };
    assert!(
        diff <= BigUint::from(tolerance),
        "{:?} and {:?} differ by more than {}",
        a,
        b,
        tolerance
    );
}
