use common_structs::{AmountSpec, SubAccount};

use crate::{cache::Cache, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Pays down the debt of `account` with the attached `paid` amount.
    /// Whatever the ledger does not use is refunded to `refund_to`. Repaying
    /// only improves health, so no check follows.
    ///
    /// # Returns
    /// - Native amount repaid.
    fn process_repay(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: AmountSpec<Self::Api>,
        paid: &BigUint,
        refund_to: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        self.require_amount_greater_than_zero(paid);

        self.ledger_repay(asset, account, amount, paid, refund_to, cache)
    }
}
