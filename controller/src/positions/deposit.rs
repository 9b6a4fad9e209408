use common_structs::SubAccount;

use crate::{cache::Cache, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionDepositModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Forwards a payment of `asset` to its ledger, credited to `account`.
    /// Depositing does not enter the market: the balance only counts as
    /// collateral once the account enters it.
    ///
    /// # Returns
    /// - Scaled balance minted, WAD.
    fn process_deposit(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_amount_greater_than_zero(amount);

        self.ledger_deposit(asset, account, amount, cache)
    }
}
