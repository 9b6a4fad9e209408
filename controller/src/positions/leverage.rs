use common_structs::{AmountSpec, SubAccount};

use crate::{cache::Cache, oracle, risk, storage, utils, validation};

use super::account;

multiversx_sc::imports!();

/// Self-collateralised positions: `mint` creates an equal balance and debt
/// in one market, `burn` cancels them against each other.
#[multiversx_sc::module]
pub trait PositionLeverageModule:
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
    fn process_mint(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        self.require_amount_greater_than_zero(amount);
        cache.get_cached_market(asset);

        self.enter_market_internal(account, asset);
        self.ledger_mint(asset, account, amount, cache);

        self.check_liquidity(account, cache);
    }

    fn process_burn(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        if let AmountSpec::Exact(value) = &amount {
            self.require_amount_greater_than_zero(value);
        }

        let burnt = self.ledger_burn(asset, account, amount, cache);
        self.check_liquidity(account, cache);

        burnt
    }
}
