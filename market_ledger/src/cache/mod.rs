use common_structs::{InterestRateModel, MarketState, SubAccount, UserDebt};

multiversx_sc::imports!();

/// In-memory copy of the market totals for the duration of one call.
///
/// Every endpoint builds one, accrues it, mutates it and lets it go out of
/// scope: the state is written back to storage on drop.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub state: MarketState<C::Api>,
    pub asset: EgldOrEsdtTokenIdentifier<C::Api>,
    pub model: InterestRateModel<C::Api>,
    /// Block timestamp, seconds
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            state: sc_ref.market_state().get(),
            asset: sc_ref.asset().get(),
            model: sc_ref.interest_rate_model().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        &self.asset == asset
    }

    pub fn decimals(&self) -> usize {
        self.state.decimals
    }

    pub fn scaled_balance(
        &self,
        account: &SubAccount<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let mapper = self.sc_ref.balance(account);
        if mapper.is_empty() {
            self.sc_ref.wad_zero()
        } else {
            mapper.get()
        }
    }

    pub fn set_scaled_balance(
        &self,
        account: &SubAccount<C::Api>,
        value: ManagedDecimal<C::Api, NumDecimals>,
    ) {
        if value == self.sc_ref.wad_zero() {
            self.sc_ref.balance(account).clear();
        } else {
            self.sc_ref.balance(account).set(value);
        }
    }

    pub fn user_debt(&self, account: &SubAccount<C::Api>) -> UserDebt<C::Api> {
        let mapper = self.sc_ref.debt(account);
        if mapper.is_empty() {
            UserDebt {
                owed: self.sc_ref.ray_zero(),
                accumulator: self.state.interest_accumulator.clone(),
            }
        } else {
            mapper.get()
        }
    }

    /// Stores `owed` as valid at the current accumulator.
    pub fn set_user_debt(&self, account: &SubAccount<C::Api>, owed: ManagedDecimal<C::Api, NumDecimals>) {
        if owed == self.sc_ref.ray_zero() {
            self.sc_ref.debt(account).clear();
        } else {
            self.sc_ref.debt(account).set(UserDebt {
                owed,
                accumulator: self.state.interest_accumulator.clone(),
            });
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.market_state().set(&self.state);
    }
}
