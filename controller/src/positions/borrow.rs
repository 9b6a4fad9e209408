use common_structs::SubAccount;

use crate::{cache::Cache, oracle, risk, storage, utils, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + common_events::EventsModule
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + risk::RiskModule
    + account::PositionAccountModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Borrows `amount` native units of `asset` for `account` and sends them
    /// to `to`. The borrowed market is entered so that the debt is counted.
    fn process_borrow(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) {
        self.require_amount_greater_than_zero(amount);
        cache.get_cached_market(asset);

        self.enter_market_internal(account, asset);
        self.ledger_borrow(asset, account, to, amount, cache);

        self.check_liquidity(account, cache);
    }
}
