multiversx_sc::imports!();

use common_structs::{MarketState, SubAccount};

use crate::storage;

/// Read-only endpoints. Every view replays accrual up to the current block
/// without writing it back.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
{
    #[view(getMarketState)]
    fn get_market_state(&self) -> MarketState<Self::Api> {
        let mut state = self.market_state().get();
        self.accrue_market_state(&mut state, self.blockchain().get_block_timestamp());
        state
    }

    /// Underlying owned by `account`, native decimals, rounded down.
    #[view(getBalance)]
    fn get_balance(&self, account: &SubAccount<Self::Api>) -> BigUint {
        let mapper = self.balance(account);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        let state = self.get_market_state();
        let underlying = self.balance_to_underlying(&state, &mapper.get());
        self.decode_amount(&underlying, state.decimals)
    }

    /// Debt of `account`, native decimals, rounded up.
    #[view(getDebt)]
    fn get_debt(&self, account: &SubAccount<Self::Api>) -> BigUint {
        let mapper = self.debt(account);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        let state = self.get_market_state();
        let owed = self.current_debt(&mapper.get(), &state.interest_accumulator);
        self.decode_amount_up(&self.debt_to_internal(&owed), state.decimals)
    }

    /// Underlying per unit of scaled balance, WAD.
    #[view(getExchangeRate)]
    fn get_exchange_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.exchange_rate(&self.get_market_state())
    }

    /// Rate applied on the next accrual, per second, RAY.
    #[view(getInterestRate)]
    fn get_interest_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.market_state().get().interest_rate
    }

    #[view(getUtilization)]
    fn get_utilization(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let state = self.get_market_state();
        self.utilization(&state.pool_size, &state.total_borrows)
    }

    /// Cash held by the market, native decimals.
    #[view(getPoolSize)]
    fn get_pool_size(&self) -> BigUint {
        let state = self.market_state().get();
        self.decode_amount(&state.pool_size, state.decimals)
    }

    #[view(getTotalBorrows)]
    fn get_total_borrows(&self) -> BigUint {
        let state = self.get_market_state();
        self.decode_amount_up(&self.debt_to_internal(&state.total_borrows), state.decimals)
    }
}
