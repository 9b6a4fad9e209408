multiversx_sc::imports!();

use common_constants::BPS;
use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_INVALID_FACTOR, ERROR_INVALID_SUB_ACCOUNT_OWNER,
    ERROR_MARKET_NOT_ACTIVATED, ERROR_PROTOCOL_PAUSED,
};
use common_structs::SubAccount;

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule:
    storage::Storage
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// User operations are rejected while the owner keeps the controller paused.
    ///
    /// # Errors
    /// - `ERROR_PROTOCOL_PAUSED`
    fn require_active(&self) {
        require!(self.not_paused(), ERROR_PROTOCOL_PAUSED);
    }

    /// Ensures `asset` has a ledger and returns it.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ACTIVATED`
    fn require_market_activated(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let mapper = self.markets(asset);
        require!(!mapper.is_empty(), ERROR_MARKET_NOT_ACTIVATED);

        mapper.get()
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_ZERO);
    }

    /// # Errors
    /// - `ERROR_INVALID_SUB_ACCOUNT_OWNER`: `account` belongs to another wallet.
    fn require_sub_account_owner(
        &self,
        caller: &ManagedAddress,
        account: &SubAccount<Self::Api>,
    ) {
        require!(
            account.is_owned_by(caller),
            ERROR_INVALID_SUB_ACCOUNT_OWNER
        );
    }

    /// Sub-account the caller acts as when it moves a position of `account`:
    /// `account` itself when the caller owns it, so no allowance is spent,
    /// otherwise the caller's primary sub-account.
    fn spender_for(
        &self,
        caller: &ManagedAddress,
        account: &SubAccount<Self::Api>,
    ) -> SubAccount<Self::Api> {
        if account.is_owned_by(caller) {
            account.clone()
        } else {
            SubAccount::new(caller.clone(), 0)
        }
    }

    /// Factor in BPS, at most 100%.
    ///
    /// # Errors
    /// - `ERROR_INVALID_FACTOR`: above `BPS`, or zero when `allow_zero` is false.
    fn validate_factor(
        &self,
        factor: &BigUint,
        allow_zero: bool,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(*factor <= BigUint::from(BPS), ERROR_INVALID_FACTOR);
        require!(allow_zero || *factor > BigUint::zero(), ERROR_INVALID_FACTOR);

        self.to_decimal_bps(factor.clone())
    }
}
