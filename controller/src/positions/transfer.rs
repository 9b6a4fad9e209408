use common_structs::{AmountSpec, SubAccount};

use crate::{cache::Cache, oracle, risk, storage, utils, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionTransferModule:
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
    /// Moves a scaled balance from `from` to `to`. A caller that does not own
    /// `from` spends the allowance `from` granted to the caller's primary
    /// sub-account.
    fn process_transfer_balance(
        &self,
        caller: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &SubAccount<Self::Api>,
        to: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        if let AmountSpec::Exact(value) = &amount {
            self.require_amount_greater_than_zero(value);
        }

        let spender = self.spender_for(caller, from);
        self.ledger_transfer_balance(asset, from, to, amount, &spender, cache);

        self.check_liquidity(from, cache);
    }

    /// Moves debt from `from` onto `to`. Taking on debt is what needs
    /// consent, so the debt allowance spent is the one granted by `to`.
    fn process_transfer_debt(
        &self,
        caller: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &SubAccount<Self::Api>,
        to: &SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        if let AmountSpec::Exact(value) = &amount {
            self.require_amount_greater_than_zero(value);
        }
        cache.get_cached_market(asset);

        let spender = self.spender_for(caller, to);
        self.enter_market_internal(to, asset);
        self.ledger_transfer_debt(asset, from, to, amount, &spender, cache);

        self.check_liquidity(to, cache);
    }

    fn process_approve(
        &self,
        owner: &SubAccount<Self::Api>,
        spender: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        is_debt: bool,
        cache: &mut Cache<Self>,
    ) {
        self.ledger_approve(asset, owner, spender, amount, is_debt, cache);
    }
}
