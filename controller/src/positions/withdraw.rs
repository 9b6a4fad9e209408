use common_structs::{AmountSpec, SubAccount};

use crate::{cache::Cache, oracle, risk, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + risk::RiskModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Redeems underlying from `account` to `to`, then checks that the
    /// account stays healthy.
    ///
    /// # Returns
    /// - Native amount sent.
    fn process_withdraw(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: AmountSpec<Self::Api>,
        to: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        if let AmountSpec::Exact(value) = &amount {
            self.require_amount_greater_than_zero(value);
        }

        let sent = self.ledger_withdraw(asset, account, to, amount, cache);
        self.check_liquidity(account, cache);

        sent
    }
}
