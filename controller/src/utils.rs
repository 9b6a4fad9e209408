multiversx_sc::imports!();

use common_proxies::proxy_market;
use common_structs::{AmountSpec, InterestRateModel, MarketState, SubAccount};

use crate::{cache::Cache, storage};

/// Reads of sub-account positions straight from ledger storage, and the
/// synchronous calls that change them.
///
/// Every call wrapper refreshes the cached market state of the ledger it
/// touched, so that the health check that follows sees the new totals.
#[multiversx_sc::module]
pub trait LendingUtilsModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Scaled balance of `account` in `market`, WAD.
    fn scaled_balance(
        &self,
        market: &ManagedAddress,
        account: &SubAccount<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.ledger_balance(market.clone(), account.clone());
        if mapper.is_empty() {
            return self.wad_zero();
        }

        mapper.get()
    }

    /// Underlying owned by `account` in the market of `asset`, internal units.
    fn account_balance(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = cache.get_cached_market(asset);
        let state = cache.get_cached_market_state(asset);
        let scaled = self.scaled_balance(&market, account);

        self.balance_to_underlying(&state, &scaled)
    }

    /// Debt of `account` in the market of `asset`, internal units rounded up.
    fn account_debt(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = cache.get_cached_market(asset);
        let mapper = self.ledger_debt(market, account.clone());
        if mapper.is_empty() {
            return self.wad_zero();
        }

        let state = cache.get_cached_market_state(asset);
        let owed = self.current_debt(&mapper.get(), &state.interest_accumulator);

        self.debt_to_internal(&owed)
    }

    fn has_debt(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> bool {
        self.account_debt(asset, account, cache) > self.wad_zero()
    }

    fn ledger_touch(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> MarketState<Self::Api> {
        let market = cache.get_cached_market(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .touch()
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset)
    }

    fn ledger_deposit(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = cache.get_cached_market(asset);
        let scaled = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .deposit(account)
            .egld_or_single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        scaled
    }

    /// Returns the native amount sent to `to`.
    fn ledger_withdraw(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        to: &ManagedAddress,
        amount: AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let market = cache.get_cached_market(asset);
        let sent = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .withdraw(account, to, amount)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        sent
    }

    fn ledger_borrow(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        to: &ManagedAddress,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        let market = cache.get_cached_market(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .borrow(account, to, amount)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);
    }

    /// Forwards `paid` to the ledger, which refunds any excess to `refund_to`.
    /// Returns the native amount repaid.
    fn ledger_repay(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        paid: &BigUint,
        refund_to: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let market = cache.get_cached_market(asset);
        let repaid = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .repay(account, amount, refund_to)
            .egld_or_single_esdt(asset, 0, paid)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        repaid
    }

    fn ledger_mint(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        let market = cache.get_cached_market(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .mint(account, amount)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);
    }

    fn ledger_burn(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let market = cache.get_cached_market(asset);
        let burnt = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .burn(account, amount)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        burnt
    }

    fn ledger_transfer_balance(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &SubAccount<Self::Api>,
        to: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        spender: &SubAccount<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = cache.get_cached_market(asset);
        let scaled = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .transfer_balance(from, to, amount, OptionalValue::Some(spender.clone()))
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        scaled
    }

    fn ledger_transfer_debt(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &SubAccount<Self::Api>,
        to: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        spender: &SubAccount<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = cache.get_cached_market(asset);
        let moved = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .transfer_debt(from, to, amount, OptionalValue::Some(spender.clone()))
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        moved
    }

    fn ledger_approve(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &SubAccount<Self::Api>,
        spender: &SubAccount<Self::Api>,
        amount: &BigUint,
        is_debt: bool,
        cache: &mut Cache<Self>,
    ) {
        let market = cache.get_cached_market(asset);
        let call = self.tx().to(market).typed(proxy_market::MarketLedgerProxy);
        if is_debt {
            call.approve_debt(owner, spender, amount).sync_call();
        } else {
            call.approve(owner, spender, amount).sync_call();
        }
    }

    fn ledger_convert_reserves(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        recipient: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = cache.get_cached_market(asset);
        let scaled = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .convert_reserves(recipient, amount)
            .returns(ReturnsResult)
            .sync_call();

        cache.refresh_market_state(asset);

        scaled
    }

    fn ledger_set_reserve_fee(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        fee: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        let market = cache.get_cached_market(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .set_reserve_fee(fee)
            .sync_call();

        cache.refresh_market_state(asset);
    }

    fn ledger_set_interest_rate_model(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        model: &InterestRateModel<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        let market = cache.get_cached_market(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .set_interest_rate_model(model)
            .sync_call();

        cache.refresh_market_state(asset);
    }
}
