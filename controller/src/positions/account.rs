use common_constants::MAX_ENTERED_MARKETS;
use common_errors::{ERROR_OUTSTANDING_BORROW, ERROR_TOO_MANY_ENTERED_MARKETS};
use common_structs::SubAccount;

use crate::{cache::Cache, oracle, risk, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + common_events::EventsModule
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + risk::RiskModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Counts the balance and debt of `asset` in the liquidity of `account`.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ACTIVATED`
    /// - `ERROR_TOO_MANY_ENTERED_MARKETS`
    fn process_enter_market(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) {
        cache.get_cached_market(asset);
        self.enter_market_internal(account, asset);
    }

    /// Removes `asset` from the liquidity of `account`. A no-op when the
    /// market was never entered.
    ///
    /// # Errors
    /// - `ERROR_OUTSTANDING_BORROW`: the account still owes `asset`.
    /// - `ERROR_COLLATERAL_VIOLATION`: the remaining collateral does not cover the debt.
    fn process_exit_market(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) {
        let mut entered = self.entered_markets(account);
        if !entered.contains(asset) {
            return;
        }

        require!(!self.has_debt(asset, account, cache), ERROR_OUTSTANDING_BORROW);

        entered.swap_remove(asset);
        self.exit_market_event(account, asset);

        self.check_liquidity(account, cache);
    }

    fn enter_market_internal(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) {
        let mut entered = self.entered_markets(account);
        if entered.contains(asset) {
            return;
        }

        require!(
            entered.len() < MAX_ENTERED_MARKETS,
            ERROR_TOO_MANY_ENTERED_MARKETS
        );

        entered.insert(asset.clone());
        self.enter_market_event(account, asset);
    }
}
