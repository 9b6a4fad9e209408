multiversx_sc::imports!();

use common_structs::{AccountLiquidity, LiquidationOpportunity, MarketState, PriceQuote, SubAccount};

use crate::{
    cache::Cache,
    oracle,
    positions::{account, liquidation},
    risk, storage, utils, validation,
};

/// Read-only endpoints. Market figures are simulated up to the current
/// block, so they match what the next state changing call would see.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + common_events::EventsModule
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + risk::RiskModule
    + account::PositionAccountModule
    + liquidation::PositionLiquidationModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    #[view(getPrice)]
    fn get_price_view(&self, asset: EgldOrEsdtTokenIdentifier) -> PriceQuote<Self::Api> {
        let mut cache = Cache::new(self);
        self.get_price(&asset, &mut cache)
    }

    #[view(getAccountLiquidity)]
    fn get_account_liquidity(&self, account: SubAccount<Self::Api>) -> AccountLiquidity<Self::Api> {
        let mut cache = Cache::new(self);
        self.compute_liquidity(&account, &mut cache)
    }

    /// Health factor, WAD. Without liabilities the `MAX_HEALTH` raw units,
    /// which callers must not read as a scaled ratio.
    #[view(getHealth)]
    fn get_health(&self, account: SubAccount<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        let liquidity = self.compute_liquidity(&account, &mut cache);

        self.health_factor(&liquidity)
    }

    #[view(getLiquidationOpportunity)]
    fn get_liquidation_opportunity(
        &self,
        violator: SubAccount<Self::Api>,
        liquidator: SubAccount<Self::Api>,
        underlying: EgldOrEsdtTokenIdentifier,
        collateral: EgldOrEsdtTokenIdentifier,
    ) -> LiquidationOpportunity<Self::Api> {
        let mut cache = Cache::new(self);
        self.liquidation_opportunity(&violator, &liquidator, &underlying, &collateral, &mut cache)
    }

    #[view(getEnteredMarkets)]
    fn get_entered_markets(
        &self,
        account: SubAccount<Self::Api>,
    ) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut markets = MultiValueEncoded::new();
        for asset in self.entered_markets(&account).iter() {
            markets.push(asset);
        }

        markets
    }

    /// Underlying owned by `account`, native units rounded down.
    #[view(getBalance)]
    fn get_balance(&self, asset: EgldOrEsdtTokenIdentifier, account: SubAccount<Self::Api>) -> BigUint {
        let mut cache = Cache::new(self);
        let balance = self.account_balance(&asset, &account, &mut cache);
        let decimals = cache.get_cached_market_state(&asset).decimals;

        self.decode_amount(&balance, decimals)
    }

    /// Debt of `account`, native units rounded up.
    #[view(getDebt)]
    fn get_debt(&self, asset: EgldOrEsdtTokenIdentifier, account: SubAccount<Self::Api>) -> BigUint {
        let mut cache = Cache::new(self);
        let debt = self.account_debt(&asset, &account, &mut cache);
        let decimals = cache.get_cached_market_state(&asset).decimals;

        self.decode_amount_up(&debt, decimals)
    }

    #[view(getExchangeRate)]
    fn get_exchange_rate(&self, asset: EgldOrEsdtTokenIdentifier) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        let state = cache.get_cached_market_state(&asset);

        self.exchange_rate(&state)
    }

    #[view(getMarketState)]
    fn get_market_state(&self, asset: EgldOrEsdtTokenIdentifier) -> MarketState<Self::Api> {
        let mut cache = Cache::new(self);
        cache.get_cached_market_state(&asset)
    }

    /// Borrow rate per second, RAY.
    #[view(getInterestRate)]
    fn get_interest_rate(&self, asset: EgldOrEsdtTokenIdentifier) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        cache.get_cached_market_state(&asset).interest_rate
    }
}
